//! Validity checks and whole-grid enumeration.

use super::{
  _h3_leading_non_zero_digit, _h3_to_face_ijk, get_base_cell, get_high_bit, get_index_digit, get_mode,
  get_reserved_bits, get_resolution, is_res_class_iii, set_base_cell, set_h3_index, set_mode,
};
use crate::base_cells::_is_base_cell_pentagon;
use crate::constants::*;
use crate::coords::face_ijk::{_adjust_overage_class_ii, _adjust_pent_vert_overage, _face_ijk_pent_to_verts, _face_ijk_to_verts};
use crate::hierarchy::parent_child::make_direct_child;
use crate::types::{Direction, FaceIJK, H3Error, H3Index};

/// Marks an unused slot in the `h3_get_faces` output.
pub const INVALID_FACE: i32 = -1;

/// Whether `h` is a well formed cell index.
///
/// Checks the high bit, mode, reserved bits, base cell and resolution ranges,
/// that every digit up to the resolution is 0-6 with no deleted pentagon
/// sub-sequence, and that every digit past the resolution is 7.
#[must_use]
pub fn h3_is_valid(h: H3Index) -> bool {
  if get_high_bit(h) != 0 || get_mode(h) != H3_HEXAGON_MODE || get_reserved_bits(h) != 0 {
    return false;
  }

  let base_cell = get_base_cell(h);
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return false;
  }

  let res = get_resolution(h);
  if !(0..=MAX_H3_RES).contains(&res) {
    return false;
  }

  let mut found_first_non_zero = false;
  for r in 1..=res {
    let digit = get_index_digit(h, r);
    if !found_first_non_zero && digit != Direction::Center {
      found_first_non_zero = true;
      if _is_base_cell_pentagon(base_cell) && digit == Direction::KAxes {
        return false;
      }
    }
    if digit == Direction::InvalidDigit {
      return false;
    }
  }

  ((res + 1)..=MAX_H3_RES).all(|r| get_index_digit(h, r) == Direction::InvalidDigit)
}

/// Whether `h` is one of the twelve pentagonal cells at its resolution.
#[must_use]
pub fn h3_is_pentagon(h: H3Index) -> bool {
  _is_base_cell_pentagon(get_base_cell(h)) && _h3_leading_non_zero_digit(h) == Direction::Center
}

/// Upper bound on the faces a cell touches: 5 for a pentagon, 2 for a hexagon.
#[must_use]
pub fn max_face_count(h: H3Index) -> usize {
  if h3_is_pentagon(h) {
    5
  } else {
    2
  }
}

fn insert_face(faces: &mut [i32], face: i32) {
  if let Some(slot) = faces.iter_mut().find(|f| **f == INVALID_FACE || **f == face) {
    *slot = face;
  }
}

/// Icosahedron faces intersected by `h`.
///
/// `out` needs `max_face_count(h)` slots; those not filled are left at `INVALID_FACE`.
/// A base cell out of range is `CellInvalid`.
pub fn h3_get_faces(h: H3Index, out: &mut [i32]) -> Result<(), H3Error> {
  if !(0..NUM_BASE_CELLS).contains(&get_base_cell(h)) {
    return Err(H3Error::CellInvalid);
  }
  let face_count = max_face_count(h);
  if out.len() < face_count {
    return Err(H3Error::MemoryBounds);
  }

  let res = get_resolution(h);
  let is_pentagon = h3_is_pentagon(h);

  // Class II pentagon vertices all sit on icosahedron edges; the center child crosses the same faces.
  if is_pentagon && !is_res_class_iii(res) {
    return h3_get_faces(make_direct_child(h, Direction::Center), out);
  }

  let fijk = _h3_to_face_ijk(h);
  let faces = &mut out[..face_count];
  faces.fill(INVALID_FACE);

  if is_pentagon {
    let (adj_res, verts) = _face_ijk_pent_to_verts(&fijk, res);
    for mut vert in verts {
      _adjust_pent_vert_overage(&mut vert, adj_res);
      insert_face(faces, vert.face);
    }
  } else {
    let (adj_res, verts) = _face_ijk_to_verts(&fijk, res);
    for mut vert in verts {
      _adjust_overage_class_ii(&mut vert, adj_res, false, true);
      insert_face(faces, vert.face);
    }
  }
  Ok(())
}

/// Faces of a cell as a vector, without the unused slots.
#[must_use]
pub fn h3_faces(h: H3Index) -> Vec<i32> {
  let mut out = vec![INVALID_FACE; max_face_count(h)];
  if h3_get_faces(h, &mut out).is_err() {
    return Vec::new();
  }
  out.retain(|f| *f != INVALID_FACE);
  out
}

/// Number of resolution 0 cells.
#[must_use]
pub const fn res0_index_count() -> i32 {
  NUM_BASE_CELLS
}

/// Writes all resolution 0 cells, in base cell order.
pub fn get_res0_indexes(out: &mut [H3Index]) -> Result<(), H3Error> {
  if out.len() < NUM_BASE_CELLS as usize {
    return Err(H3Error::MemoryBounds);
  }
  for (base_cell, slot) in (0..NUM_BASE_CELLS).zip(out.iter_mut()) {
    *slot = set_base_cell(set_mode(H3Index(H3_INIT), H3_HEXAGON_MODE), base_cell);
  }
  Ok(())
}

/// Number of pentagons at every resolution.
#[must_use]
pub const fn pentagon_index_count() -> i32 {
  NUM_PENTAGONS
}

/// Writes the twelve pentagons at `res`, in base cell order.
pub fn get_pentagon_indexes(res: i32, out: &mut [H3Index]) -> Result<(), H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::ResDomain);
  }
  if out.len() < NUM_PENTAGONS as usize {
    return Err(H3Error::MemoryBounds);
  }
  let pentagons = (0..NUM_BASE_CELLS)
    .filter(|bc| _is_base_cell_pentagon(*bc))
    .map(|bc| set_h3_index(res, bc, Direction::Center));
  for (slot, pentagon) in out.iter_mut().zip(pentagons) {
    *slot = pentagon;
  }
  Ok(())
}

/// Home face and lattice position of the cell center.
#[must_use]
pub fn h3_to_face_ijk(h: H3Index) -> FaceIJK {
  _h3_to_face_ijk(h)
}
