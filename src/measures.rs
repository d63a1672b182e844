//! Per-resolution averages and counts.

use crate::constants::{AREAS_KM2, AREAS_M2, EDGE_LENGTHS_KM, EDGE_LENGTHS_M, MAX_H3_RES, NUM_HEXAGONS};
use crate::types::H3Error;

fn by_res<T: Copy>(table: &[T; 16], res: i32) -> Result<T, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  Ok(table[res as usize])
}

/// Average hexagon area at `res`, in square kilometers.
pub fn hex_area_km2(res: i32) -> Result<f64, H3Error> {
  by_res(&AREAS_KM2, res)
}

/// Average hexagon area at `res`, in square meters.
pub fn hex_area_m2(res: i32) -> Result<f64, H3Error> {
  by_res(&AREAS_M2, res)
}

/// Average hexagon edge length at `res`, in kilometers.
pub fn edge_length_km(res: i32) -> Result<f64, H3Error> {
  by_res(&EDGE_LENGTHS_KM, res)
}

/// Average hexagon edge length at `res`, in meters.
pub fn edge_length_m(res: i32) -> Result<f64, H3Error> {
  by_res(&EDGE_LENGTHS_M, res)
}

/// Number of cells at `res`, pentagons included: `2 + 120 * 7^res`.
pub fn num_hexagons(res: i32) -> Result<i64, H3Error> {
  by_res(&NUM_HEXAGONS, res)
}
