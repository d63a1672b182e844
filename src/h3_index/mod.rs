//! The packed 64-bit cell index: bit fields, digit rotation, and FaceIJK conversion.

pub mod inspection;
pub mod string_conv;

use crate::base_cells::{
  _base_cell_is_cw_offset, _base_cell_to_face_ijk, _face_ijk_to_base_cell, _face_ijk_to_base_cell_ccwrot60,
  _is_base_cell_pentagon, MAX_FACE_COORD,
};
use crate::constants::*;
use crate::coords::face_ijk::{Overage, _adjust_overage_class_ii};
use crate::coords::ijk::{
  _down_ap7, _down_ap7r, _ijk_normalize, _ijk_sub, _neighbor, _rotate60_ccw, _rotate60_cw, _unit_ijk_to_digit, _up_ap7,
  _up_ap7r,
};
use crate::types::{CoordIJK, Direction, FaceIJK, H3Index, H3_NULL};

// bit field accessors

#[inline]
#[must_use]
pub const fn get_high_bit(h: H3Index) -> u8 {
  ((h.0 & H3_HIGH_BIT_MASK) >> H3_MAX_OFFSET) as u8
}

#[inline]
#[must_use]
pub const fn set_high_bit(h: H3Index, v: u8) -> H3Index {
  H3Index((h.0 & H3_HIGH_BIT_MASK_NEGATIVE) | ((v as u64) << H3_MAX_OFFSET))
}

#[inline]
#[must_use]
pub const fn get_mode(h: H3Index) -> u8 {
  ((h.0 & H3_MODE_MASK) >> H3_MODE_OFFSET) as u8
}

#[inline]
#[must_use]
pub const fn set_mode(h: H3Index, mode: u8) -> H3Index {
  H3Index((h.0 & H3_MODE_MASK_NEGATIVE) | ((mode as u64) << H3_MODE_OFFSET))
}

/// Reserved bits; zero for every valid cell.
#[inline]
#[must_use]
pub const fn get_reserved_bits(h: H3Index) -> u8 {
  ((h.0 & H3_RESERVED_MASK) >> H3_RESERVED_OFFSET) as u8
}

#[inline]
#[must_use]
pub const fn set_reserved_bits(h: H3Index, v: u8) -> H3Index {
  H3Index((h.0 & H3_RESERVED_MASK_NEGATIVE) | ((v as u64) << H3_RESERVED_OFFSET))
}

#[inline]
#[must_use]
pub const fn get_resolution(h: H3Index) -> i32 {
  ((h.0 & H3_RES_MASK) >> H3_RES_OFFSET) as i32
}

#[inline]
#[must_use]
pub const fn set_resolution(h: H3Index, res: i32) -> H3Index {
  H3Index((h.0 & H3_RES_MASK_NEGATIVE) | ((res as u64) << H3_RES_OFFSET))
}

#[inline]
#[must_use]
pub const fn get_base_cell(h: H3Index) -> i32 {
  ((h.0 & H3_BC_MASK) >> H3_BC_OFFSET) as i32
}

#[inline]
#[must_use]
pub const fn set_base_cell(h: H3Index, base_cell: i32) -> H3Index {
  H3Index((h.0 & H3_BC_MASK_NEGATIVE) | ((base_cell as u64) << H3_BC_OFFSET))
}

#[inline]
const fn digit_offset(res: i32) -> u32 {
  (MAX_H3_RES - res) as u32 * H3_PER_DIGIT_OFFSET
}

/// Digit at resolution `res` (1-based).
#[inline]
#[must_use]
pub const fn get_index_digit(h: H3Index, res: i32) -> Direction {
  Direction::from_bits(h.0 >> digit_offset(res))
}

/// Replaces the digit at resolution `res` (1-based).
#[inline]
#[must_use]
pub const fn set_index_digit(h: H3Index, res: i32, digit: Direction) -> H3Index {
  let offset = digit_offset(res);
  H3Index((h.0 & !(H3_DIGIT_MASK << offset)) | ((digit as u64) << offset))
}

/// Builds a cell index with every digit from 1 to `res` set to `init_digit`.
#[must_use]
pub fn set_h3_index(res: i32, base_cell: i32, init_digit: Direction) -> H3Index {
  let mut h = H3Index(H3_INIT);
  h = set_mode(h, H3_HEXAGON_MODE);
  h = set_resolution(h, res);
  h = set_base_cell(h, base_cell);
  for r in 1..=res {
    h = set_index_digit(h, r, init_digit);
  }
  h
}

/// Odd resolutions are Class III.
#[inline]
#[must_use]
pub(crate) const fn is_res_class_iii(res: i32) -> bool {
  res % 2 != 0
}

/// Resolution of the index.
#[inline]
#[must_use]
pub const fn h3_get_resolution(h: H3Index) -> i32 {
  get_resolution(h)
}

/// Base cell number of the index.
#[inline]
#[must_use]
pub const fn h3_get_base_cell(h: H3Index) -> i32 {
  get_base_cell(h)
}

/// Whether the index lies on a Class III (odd) resolution.
#[inline]
#[must_use]
pub const fn h3_is_res_class_iii(h: H3Index) -> bool {
  is_res_class_iii(get_resolution(h))
}

/// First non-center digit, or `Center` when every digit is center.
#[must_use]
pub(crate) fn _h3_leading_non_zero_digit(h: H3Index) -> Direction {
  (1..=get_resolution(h))
    .map(|r| get_index_digit(h, r))
    .find(|digit| *digit != Direction::Center)
    .unwrap_or(Direction::Center)
}

fn rotate_digits(h: H3Index, rotate: fn(Direction) -> Direction) -> H3Index {
  (1..=get_resolution(h)).fold(h, |acc, r| set_index_digit(acc, r, rotate(get_index_digit(acc, r))))
}

/// Rotates every digit 60 degrees counter-clockwise.
#[must_use]
pub(crate) fn _h3_rotate60_ccw(h: H3Index) -> H3Index {
  rotate_digits(h, _rotate60_ccw)
}

/// Rotates every digit 60 degrees clockwise.
#[must_use]
pub(crate) fn _h3_rotate60_cw(h: H3Index) -> H3Index {
  rotate_digits(h, _rotate60_cw)
}

// A pentagon has no k-axes sub-sequence. When the rotation lands the leading
// digit on K, the whole index takes one more step in the same direction.
fn rotate_pent(mut h: H3Index, rotate: fn(Direction) -> Direction, whole: fn(H3Index) -> H3Index) -> H3Index {
  let mut found_first_non_zero = false;
  for r in 1..=get_resolution(h) {
    h = set_index_digit(h, r, rotate(get_index_digit(h, r)));
    if !found_first_non_zero && get_index_digit(h, r) != Direction::Center {
      found_first_non_zero = true;
      if _h3_leading_non_zero_digit(h) == Direction::KAxes {
        h = whole(h);
      }
    }
  }
  h
}

/// Rotates a pentagon index 60 degrees counter-clockwise, skipping the deleted sub-sequence.
#[must_use]
pub(crate) fn _h3_rotate_pent60_ccw(h: H3Index) -> H3Index {
  rotate_pent(h, _rotate60_ccw, _h3_rotate60_ccw)
}

/// Rotates a pentagon index 60 degrees clockwise, skipping the deleted sub-sequence.
#[must_use]
pub(crate) fn _h3_rotate_pent60_cw(h: H3Index) -> H3Index {
  rotate_pent(h, _rotate60_cw, _h3_rotate60_cw)
}

#[inline]
fn within_face_coord(c: &CoordIJK) -> bool {
  c.i <= MAX_FACE_COORD && c.j <= MAX_FACE_COORD && c.k <= MAX_FACE_COORD
}

/// Encodes a face-relative lattice position at `res` as a cell index.
///
/// Digits are derived finest first by climbing the aperture 7 hierarchy; the
/// remaining resolution 0 coordinate selects the base cell, and the index is
/// then rotated into that base cell's orientation. Returns `H3_NULL` when the
/// coordinate lies off the face's base cell table.
#[must_use]
pub(crate) fn _face_ijk_to_h3(fijk: &FaceIJK, res: i32) -> H3Index {
  let mut h = set_resolution(set_mode(H3Index(H3_INIT), H3_HEXAGON_MODE), res);

  if res == 0 {
    if !within_face_coord(&fijk.coord) {
      return H3_NULL;
    }
    return set_base_cell(h, _face_ijk_to_base_cell(fijk));
  }

  let mut fijk_bc = *fijk;
  for r in (0..res).rev() {
    let last_ijk = fijk_bc.coord;
    let last_center = if is_res_class_iii(r + 1) {
      fijk_bc.coord = _up_ap7(fijk_bc.coord);
      _down_ap7(fijk_bc.coord)
    } else {
      fijk_bc.coord = _up_ap7r(fijk_bc.coord);
      _down_ap7r(fijk_bc.coord)
    };
    let diff = _ijk_normalize(_ijk_sub(last_ijk, last_center));
    h = set_index_digit(h, r + 1, _unit_ijk_to_digit(&diff));
  }

  if !within_face_coord(&fijk_bc.coord) {
    return H3_NULL;
  }

  let base_cell = _face_ijk_to_base_cell(&fijk_bc);
  h = set_base_cell(h, base_cell);

  let num_rots = _face_ijk_to_base_cell_ccwrot60(&fijk_bc);
  if _is_base_cell_pentagon(base_cell) {
    if _h3_leading_non_zero_digit(h) == Direction::KAxes {
      h = if _base_cell_is_cw_offset(base_cell, fijk_bc.face) {
        _h3_rotate60_cw(h)
      } else {
        _h3_rotate60_ccw(h)
      };
    }
    for _ in 0..num_rots {
      h = _h3_rotate_pent60_ccw(h);
    }
  } else {
    for _ in 0..num_rots {
      h = _h3_rotate60_ccw(h);
    }
  }
  h
}

/// Walks the digits of `h` down from an already positioned `fijk`.
///
/// The flag is false when the cell cannot spill onto a neighboring face: a
/// hexagon base cell that is either resolution 0 or centered on its face.
#[must_use]
pub(crate) fn _h3_to_face_ijk_with_initialized_fijk(h: H3Index, mut fijk: FaceIJK) -> (FaceIJK, bool) {
  let res = get_resolution(h);

  let possible_overage =
    _is_base_cell_pentagon(get_base_cell(h)) || (res != 0 && fijk.coord != CoordIJK::new(0, 0, 0));

  for r in 1..=res {
    fijk.coord = if is_res_class_iii(r) {
      _down_ap7(fijk.coord)
    } else {
      _down_ap7r(fijk.coord)
    };
    fijk.coord = _neighbor(fijk.coord, get_index_digit(h, r));
  }

  (fijk, possible_overage)
}

/// Decodes a cell index into the face and lattice coordinates of its center.
#[must_use]
pub(crate) fn _h3_to_face_ijk(mut h: H3Index) -> FaceIJK {
  let base_cell = get_base_cell(h);
  let is_pentagon = _is_base_cell_pentagon(base_cell);
  // all of sub-sequence 5 of a pentagon is shifted one step clockwise
  if is_pentagon && _h3_leading_non_zero_digit(h) == Direction::IkAxes {
    h = _h3_rotate60_cw(h);
  }

  let (mut fijk, possible_overage) = _h3_to_face_ijk_with_initialized_fijk(h, _base_cell_to_face_ijk(base_cell));
  if !possible_overage {
    return fijk;
  }

  let orig_ijk = fijk.coord;

  // overage is resolved on the Class II grid
  let mut res = get_resolution(h);
  if is_res_class_iii(res) {
    fijk.coord = _down_ap7r(fijk.coord);
    res += 1;
  }

  let pent_leading_4 = is_pentagon && _h3_leading_non_zero_digit(h) == Direction::IAxes;
  if _adjust_overage_class_ii(&mut fijk, res, pent_leading_4, false) == Overage::NoOverage {
    if res != get_resolution(h) {
      fijk.coord = orig_ijk;
    }
  } else {
    // pentagons can spill over more than one face
    if is_pentagon {
      while _adjust_overage_class_ii(&mut fijk, res, false, false) != Overage::NoOverage {}
    }
    if res != get_resolution(h) {
      fijk.coord = _up_ap7r(fijk.coord);
    }
  }
  fijk
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::coords::face_ijk::_geo_to_face_ijk;
  use crate::types::GeoCoord;

  #[test]
  fn test_bit_fields() {
    let h = H3Index::from_raw(0x85283473fffffff);
    assert_eq!(get_mode(h), H3_HEXAGON_MODE, "cell mode");
    assert_eq!(get_resolution(h), 5, "resolution");
    assert_eq!(get_base_cell(h), 20, "base cell");
    assert_eq!(get_reserved_bits(h), 0, "reserved bits");
    assert_eq!(get_high_bit(h), 0, "high bit");
    assert_eq!(get_index_digit(h, 6), Direction::InvalidDigit, "unused digits are 7");

    let h = set_reserved_bits(h, 5);
    assert_eq!(get_reserved_bits(h), 5, "reserved bits round trip");
    let h = set_high_bit(h, 1);
    assert_eq!(get_high_bit(h), 1, "high bit round trip");
    assert_eq!(get_resolution(h), 5, "other fields untouched");
    assert_eq!(get_base_cell(h), 20, "other fields untouched");
  }

  #[test]
  fn test_set_h3_index() {
    let h = set_h3_index(5, 12, Direction::KAxes);
    assert_eq!(get_resolution(h), 5, "resolution");
    assert_eq!(get_base_cell(h), 12, "base cell");
    assert_eq!(get_mode(h), H3_HEXAGON_MODE, "mode");
    for r in 1..=5 {
      assert_eq!(get_index_digit(h, r), Direction::KAxes, "digit {r} initialized");
    }
    for r in 6..=MAX_H3_RES {
      assert_eq!(get_index_digit(h, r), Direction::InvalidDigit, "digit {r} left unused");
    }
    assert_eq!(h.to_raw(), 0x85184927fffffff, "packed value");
  }

  #[test]
  fn test_res0_index() {
    assert_eq!(set_h3_index(0, 4, Direction::Center).to_raw(), 0x8009fffffffffff, "pentagon base cell 4");
  }

  #[test]
  fn test_class_iii() {
    assert!(!is_res_class_iii(0), "res 0 is Class II");
    assert!(is_res_class_iii(1), "res 1 is Class III");
    assert!(!h3_is_res_class_iii(set_h3_index(2, 0, Direction::Center)), "res 2 is Class II");
    assert!(h3_is_res_class_iii(set_h3_index(15, 0, Direction::Center)), "res 15 is Class III");
  }

  #[test]
  fn test_leading_non_zero_digit() {
    let h = set_index_digit(set_h3_index(4, 10, Direction::Center), 3, Direction::JkAxes);
    assert_eq!(_h3_leading_non_zero_digit(h), Direction::JkAxes, "first non-center digit");
    assert_eq!(
      _h3_leading_non_zero_digit(set_h3_index(4, 10, Direction::Center)),
      Direction::Center,
      "all center"
    );
  }

  #[test]
  fn test_rotate60_full_cycle() {
    let h = H3Index::from_raw(0x8928342e20fffff);
    let mut rotated = h;
    for _ in 0..6 {
      rotated = _h3_rotate60_ccw(rotated);
    }
    assert_eq!(rotated, h, "six ccw rotations are the identity");
    assert_eq!(_h3_rotate60_cw(_h3_rotate60_ccw(h)), h, "cw undoes ccw");
  }

  #[test]
  fn test_rotate_pent_skips_k() {
    let h = set_h3_index(1, 4, Direction::JkAxes);
    let rotated = _h3_rotate_pent60_ccw(h);
    assert_eq!(get_index_digit(rotated, 1), Direction::IkAxes, "JK rotates past K to IK");

    let h = set_h3_index(1, 4, Direction::IkAxes);
    let rotated = _h3_rotate_pent60_cw(h);
    assert_eq!(get_index_digit(rotated, 1), Direction::JkAxes, "IK rotates past K to JK");
  }

  #[test]
  fn test_face_ijk_round_trip() {
    for raw in [0x85283473fffffffu64, 0x8928342e20fffff, 0x8a2830828767fff, 0x8009fffffffffff] {
      let h = H3Index::from_raw(raw);
      let fijk = _h3_to_face_ijk(h);
      assert_eq!(_face_ijk_to_h3(&fijk, get_resolution(h)), h, "{raw:x} survives face IJK");
    }
  }

  #[test]
  fn test_face_ijk_to_h3_sf() {
    let sf = GeoCoord::from_degrees(37.779265, -122.419277);
    let fijk = _geo_to_face_ijk(&sf, 5);
    assert_eq!(_face_ijk_to_h3(&fijk, 5).to_raw(), 0x85283083fffffff, "San Francisco at res 5");
  }

  #[test]
  fn test_face_ijk_to_h3_out_of_range() {
    let fijk = FaceIJK::new(0, CoordIJK::new(3, 0, 0));
    assert_eq!(_face_ijk_to_h3(&fijk, 0), H3_NULL, "res 0 coordinate off the table");
  }
}
