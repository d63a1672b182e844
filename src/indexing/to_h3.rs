use crate::constants::MAX_H3_RES;
use crate::coords::face_ijk::_geo_to_face_ijk;
use crate::h3_index::_face_ijk_to_h3;
use crate::types::{GeoCoord, H3Index, H3_NULL};

/// Cell containing `g` at resolution `res`.
///
/// Returns `H3_NULL` for a resolution outside 0-15 or a non-finite coordinate.
#[must_use]
pub fn geo_to_h3(g: &GeoCoord, res: i32) -> H3Index {
  if !(0..=MAX_H3_RES).contains(&res) {
    return H3_NULL;
  }
  if !g.lat.is_finite() || !g.lon.is_finite() {
    return H3_NULL;
  }
  _face_ijk_to_h3(&_geo_to_face_ijk(g, res), res)
}
