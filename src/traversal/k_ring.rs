//! Filled disks of cells around an origin.
//!
//! `k_ring_distances` first tries the spiral walk of `hex_range_distances`,
//! which is exact away from pentagons. When the walk reports a pentagon it
//! falls back to a flood fill that deduplicates through an [`IndexTable`].

use log::debug;

use super::hex_range::{hex_range_distances, DIRECTIONS};
use super::neighbors::h3_neighbor_rotations;
use crate::index_table::{IndexTable, ProbeOverflow};
use crate::types::{H3Error, H3Index, H3_NULL};

impl From<ProbeOverflow> for H3Error {
  fn from(_: ProbeOverflow) -> Self {
    H3Error::Failed
  }
}

/// Cells in a filled disk of radius `k`: `3k(k+1) + 1`, 0 for a negative `k`.
#[must_use]
pub fn max_kring_size(k: i32) -> i64 {
  if k < 0 {
    return 0;
  }
  let k = i64::from(k);
  3 * k * (k + 1) + 1
}

fn checked_size(k: i32, len: usize) -> Result<usize, H3Error> {
  if k < 0 {
    return Err(H3Error::Domain);
  }
  let size = max_kring_size(k) as usize;
  if len < size {
    return Err(H3Error::MemoryBounds);
  }
  Ok(size)
}

/// Writes every cell within `k` steps of `origin`.
///
/// `out` needs `max_kring_size(k)` slots. Near a pentagon the disk holds fewer
/// cells and the unused slots are set to `H3_NULL`; the order of the cells is
/// unspecified.
pub fn k_ring(origin: H3Index, k: i32, out: &mut [H3Index]) -> Result<(), H3Error> {
  let size = checked_size(k, out.len())?;
  let mut distances = vec![0; size];
  k_ring_distances(origin, k, out, &mut distances)
}

/// `k_ring`, also writing each cell's grid distance from `origin` to the
/// matching slot of `distances`.
pub fn k_ring_distances(origin: H3Index, k: i32, out: &mut [H3Index], distances: &mut [i32]) -> Result<(), H3Error> {
  let size = checked_size(k, out.len())?;
  if distances.len() < size {
    return Err(H3Error::MemoryBounds);
  }
  let (out, distances) = (&mut out[..size], &mut distances[..size]);

  let Err(status) = hex_range_distances(origin, k, out, Some(&mut *distances)) else {
    return Ok(());
  };
  debug!("k_ring_distances: spiral walk from {origin} stopped ({status}, code {}), flood filling", status.code());

  let mut seen = IndexTable::with_slots(size);
  _k_ring_internal(origin, k, &mut seen, 0)?;
  for ((cell, dist), slot) in out.iter_mut().zip(distances.iter_mut()).zip(seen.slots()) {
    (*cell, *dist) = slot.unwrap_or((H3_NULL, 0));
  }
  Ok(())
}

/// Flood fill recording the smallest distance at which each cell is reached.
///
/// A cell already seen at a distance no greater than `cur_k` is not revisited.
/// Steps into the deleted pentagon sub-sequence yield `H3_NULL` and end that
/// branch.
pub(crate) fn _k_ring_internal(
  origin: H3Index,
  k: i32,
  seen: &mut IndexTable<i32>,
  cur_k: i32,
) -> Result<(), ProbeOverflow> {
  if origin == H3_NULL {
    return Ok(());
  }
  if seen.get(origin).is_some_and(|dist| dist <= cur_k) {
    return Ok(());
  }
  seen.insert(origin, cur_k)?;
  if cur_k >= k {
    return Ok(());
  }
  for dir in DIRECTIONS {
    let (neighbor, _) = h3_neighbor_rotations(origin, dir, 0);
    _k_ring_internal(neighbor, k, seen, cur_k + 1)?;
  }
  Ok(())
}
