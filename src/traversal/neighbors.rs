//! Stepping from a cell to one of its neighbors.

use log::trace;

use crate::base_cells::{
  _base_cell_is_cw_offset, _base_cell_to_face_ijk, _get_base_cell_neighbor, _get_base_cell_neighbor_60ccw_rots,
  _is_base_cell_pentagon, _is_base_cell_polar_pentagon, INVALID_BASE_CELL,
};
use crate::constants::NUM_BASE_CELLS;
use crate::coords::ijk::_rotate60_ccw;
use crate::h3_index::{
  _h3_leading_non_zero_digit, _h3_rotate60_ccw, _h3_rotate60_cw, _h3_rotate_pent60_ccw, get_base_cell, get_index_digit,
  get_resolution, is_res_class_iii, set_base_cell, set_index_digit,
};
use crate::types::{Direction, H3Index, H3_NULL};

use Direction::{Center as C0, IAxes as I, IjAxes as IJ, IkAxes as IK, JAxes as J, JkAxes as JK, KAxes as K};

// New digit when adding a unit vector in the column direction to a cell whose
// digit is the row, for the Class II and Class III grids.
#[rustfmt::skip]
const NEW_DIGIT_II: [[Direction; 7]; 7] = [
  [C0, K,  J,  JK, I,  IK, IJ],
  [K,  I,  JK, IJ, IK, J,  C0],
  [J,  JK, K,  I,  IJ, C0, IK],
  [JK, IJ, I,  IK, C0, K,  J ],
  [I,  IK, IJ, C0, J,  JK, K ],
  [IK, J,  C0, K,  JK, IJ, I ],
  [IJ, C0, IK, J,  K,  I,  JK],
];

// Carry into the next coarser resolution for the same addition.
#[rustfmt::skip]
const NEW_ADJUSTMENT_II: [[Direction; 7]; 7] = [
  [C0, C0, C0, C0, C0, C0, C0],
  [C0, K,  C0, K,  C0, IK, C0],
  [C0, C0, J,  JK, C0, C0, J ],
  [C0, K,  JK, JK, C0, C0, C0],
  [C0, C0, C0, C0, I,  I,  IJ],
  [C0, IK, C0, C0, I,  IK, C0],
  [C0, C0, J,  C0, IJ, C0, IJ],
];

#[rustfmt::skip]
const NEW_DIGIT_III: [[Direction; 7]; 7] = [
  [C0, K,  J,  JK, I,  IK, IJ],
  [K,  J,  JK, I,  IK, IJ, C0],
  [J,  JK, I,  IK, IJ, C0, K ],
  [JK, I,  IK, IJ, C0, K,  J ],
  [I,  IK, IJ, C0, K,  J,  JK],
  [IK, IJ, C0, K,  J,  JK, I ],
  [IJ, C0, K,  J,  JK, I,  IK],
];

#[rustfmt::skip]
const NEW_ADJUSTMENT_III: [[Direction; 7]; 7] = [
  [C0, C0, C0, C0, C0, C0, C0],
  [C0, K,  C0, JK, C0, K,  C0],
  [C0, C0, J,  J,  C0, C0, IJ],
  [C0, JK, J,  JK, C0, C0, C0],
  [C0, C0, C0, C0, I,  IK, I ],
  [C0, K,  C0, C0, IK, IK, C0],
  [C0, C0, IJ, C0, I,  C0, IJ],
];

/// Base cells whose edge into a polar pentagon needs no orientation correction.
const POLAR_ALIGNED_BASE_CELLS: [i32; 2] = [118, 8];

/// Neighbor of `origin` in direction `dir`, with the updated rotation count.
///
/// `rotations` is the number of 60 degree ccw rotations between the caller's
/// frame and the origin's; `dir` is rotated by it before stepping. The returned
/// count is the same quantity for the neighbor, in 0-5, and is what the next
/// step in a walk must be given. Returns `H3_NULL` when the step would enter
/// the deleted sub-sequence of a pentagon from its center, or when `origin` or
/// `dir` is malformed.
#[must_use]
pub fn h3_neighbor_rotations(origin: H3Index, dir: Direction, rotations: i32) -> (H3Index, i32) {
  let mut rotations = rotations.rem_euclid(6);
  if dir == Direction::InvalidDigit {
    return (H3_NULL, rotations);
  }
  let old_base_cell = get_base_cell(origin);
  if !(0..NUM_BASE_CELLS).contains(&old_base_cell) {
    return (H3_NULL, rotations);
  }

  let mut dir = (0..rotations).fold(dir, |d, _| _rotate60_ccw(d));
  let mut out = origin;
  let mut new_rotations = 0;
  let old_leading_digit = _h3_leading_non_zero_digit(out);

  // walk the digits finest first, carrying the step upward until it is absorbed
  let mut r = get_resolution(out) - 1;
  loop {
    if r == -1 {
      let mut new_base_cell = _get_base_cell_neighbor(old_base_cell, dir);
      new_rotations = _get_base_cell_neighbor_60ccw_rots(old_base_cell, dir);

      if new_base_cell == INVALID_BASE_CELL {
        // this edge borders the deleted k vertex; it really leads to the ik neighbor
        new_base_cell = _get_base_cell_neighbor(old_base_cell, Direction::IkAxes);
        new_rotations = _get_base_cell_neighbor_60ccw_rots(old_base_cell, Direction::IkAxes);
        out = _h3_rotate60_ccw(out);
        rotations += 1;
      }
      out = set_base_cell(out, new_base_cell);
      break;
    }

    let old_digit = get_index_digit(out, r + 1);
    if old_digit == Direction::InvalidDigit {
      return (H3_NULL, rotations);
    }
    let (digits, adjustments) = if is_res_class_iii(r + 1) {
      (&NEW_DIGIT_II, &NEW_ADJUSTMENT_II)
    } else {
      (&NEW_DIGIT_III, &NEW_ADJUSTMENT_III)
    };
    out = set_index_digit(out, r + 1, digits[old_digit as usize][dir as usize]);
    let next_dir = adjustments[old_digit as usize][dir as usize];
    if next_dir == Direction::Center {
      break;
    }
    dir = next_dir;
    r -= 1;
  }

  let new_base_cell = get_base_cell(out);
  if _is_base_cell_pentagon(new_base_cell) {
    let mut already_adjusted_k_subsequence = false;

    if _h3_leading_non_zero_digit(out) == Direction::KAxes {
      if old_base_cell == new_base_cell {
        // moved into the deleted sub-sequence from inside the same pentagon
        trace!("h3_neighbor_rotations: {origin} stepped into the deleted k sub-sequence from {old_leading_digit:?}");
        match old_leading_digit {
          Direction::JkAxes => {
            out = _h3_rotate60_ccw(out);
            rotations += 1;
          }
          Direction::IkAxes => {
            out = _h3_rotate60_cw(out);
            rotations += 5;
          }
          // from the center the k direction does not exist
          _ => return (H3_NULL, rotations % 6),
        }
      } else {
        // entered the deleted sub-sequence across a base cell edge
        trace!("h3_neighbor_rotations: {origin} crossed into the deleted k sub-sequence of base cell {new_base_cell}");
        let old_face = _base_cell_to_face_ijk(old_base_cell).face;
        out = if _base_cell_is_cw_offset(new_base_cell, old_face) {
          _h3_rotate60_cw(out)
        } else {
          _h3_rotate60_ccw(out)
        };
        already_adjusted_k_subsequence = true;
      }
    }

    for _ in 0..new_rotations {
      out = _h3_rotate_pent60_ccw(out);
    }

    if old_base_cell != new_base_cell {
      if _is_base_cell_polar_pentagon(new_base_cell) {
        // polar pentagons have i neighbors all round
        if !POLAR_ALIGNED_BASE_CELLS.contains(&old_base_cell) && _h3_leading_non_zero_digit(out) != Direction::JkAxes {
          rotations += 1;
        }
      } else if _h3_leading_non_zero_digit(out) == Direction::IkAxes && !already_adjusted_k_subsequence {
        // the deleted sub-sequence distorts the 5 neighbor
        rotations += 1;
      }
    }
  } else {
    for _ in 0..new_rotations {
      out = _h3_rotate60_ccw(out);
    }
  }

  (out, (rotations + new_rotations) % 6)
}

/// Neighbor of `origin` in direction `dir`, starting from an unrotated frame.
#[must_use]
pub fn h3_neighbor(origin: H3Index, dir: Direction) -> H3Index {
  h3_neighbor_rotations(origin, dir, 0).0
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::inspection::{h3_is_pentagon, h3_is_valid};
  use crate::h3_index::set_h3_index;
  use crate::hierarchy::parent_child::{h3_to_children, h3_to_parent, max_h3_to_children_size};

  const SF_CELL: u64 = 0x85283473fffffff;

  // digits are bit-ORs of the axes, so the opposite direction flips every bit
  fn opposite(dir: Direction) -> Direction {
    Direction::from_bits(7 ^ dir as u64)
  }

  #[test]
  fn test_neighbors_of_interior_cell() {
    let origin = H3Index::from_raw(SF_CELL);
    let mut neighbors: Vec<u64> = Direction::ALL[1..].iter().map(|d| h3_neighbor(origin, *d).to_raw()).collect();
    neighbors.sort_unstable();
    let mut expected = vec![
      0x85283447fffffffu64,
      0x8528347bfffffff,
      0x85283463fffffff,
      0x85283477fffffff,
      0x8528340ffffffff,
      0x8528340bfffffff,
    ];
    expected.sort_unstable();
    assert_eq!(neighbors, expected, "six neighbors of the San Francisco cell");
  }

  #[test]
  fn test_center_step_is_identity() {
    let origin = H3Index::from_raw(SF_CELL);
    assert_eq!(h3_neighbor_rotations(origin, Direction::Center, 0), (origin, 0), "no movement");
  }

  // every cell at res 0-2, pentagons included
  fn coarse_cells() -> Vec<H3Index> {
    let mut cells = Vec::new();
    for bc in 0..NUM_BASE_CELLS {
      let base = set_h3_index(0, bc, Direction::Center);
      cells.push(base);
      for res in 1..=2 {
        let mut children = vec![H3_NULL; max_h3_to_children_size(base, res) as usize];
        h3_to_children(base, res, &mut children).unwrap();
        cells.extend(children.into_iter().filter(|c| *c != H3_NULL));
      }
    }
    cells
  }

  #[test]
  fn test_step_back_within_base_cell() {
    let origin = H3Index::from_raw(SF_CELL);
    for dir in &Direction::ALL[1..] {
      let (neighbor, rotations) = h3_neighbor_rotations(origin, *dir, 0);
      assert!(h3_is_valid(neighbor), "neighbor valid for {dir:?}");
      let (back, _) = h3_neighbor_rotations(neighbor, opposite(*dir), rotations);
      assert_eq!(back, origin, "stepping {dir:?} and back returns home");
    }
  }

  #[test]
  fn test_step_back_threads_rotations() {
    let cells = coarse_cells();
    assert_eq!(cells.len(), 6846, "122 + 842 + 5882 cells");
    let mut steps = 0;
    for origin in cells.into_iter().filter(|h| !h3_is_pentagon(*h)) {
      for dir in &Direction::ALL[1..] {
        let (neighbor, rotations) = h3_neighbor_rotations(origin, *dir, 0);
        assert!(h3_is_valid(neighbor), "{origin} has a valid {dir:?} neighbor");
        let (back, _) = h3_neighbor_rotations(neighbor, opposite(*dir), rotations);
        assert_eq!(back, origin, "{origin} stepped {dir:?} to {neighbor} with {rotations} rotations and back");
        steps += 1;
      }
    }
    assert_eq!(steps, 40860, "six steps from each hexagon");
  }

  #[test]
  fn test_rotations_are_normalized() {
    let origin = H3Index::from_raw(SF_CELL);
    for dir in &Direction::ALL[1..] {
      assert_eq!(
        h3_neighbor_rotations(origin, *dir, 6),
        h3_neighbor_rotations(origin, *dir, 0),
        "six rotations are none"
      );
      assert_eq!(
        h3_neighbor_rotations(origin, *dir, -1),
        h3_neighbor_rotations(origin, *dir, 5),
        "negative counts wrap"
      );
    }
  }

  #[test]
  fn test_pentagon_center_has_no_k_neighbor() {
    for res in [1, 2, 5] {
      let pentagon = set_h3_index(res, 14, Direction::Center);
      let (neighbor, _) = h3_neighbor_rotations(pentagon, Direction::KAxes, 0);
      assert_eq!(neighbor, H3_NULL, "no k neighbor from a res {res} pentagon");
      for dir in &Direction::ALL[2..] {
        let neighbor = h3_neighbor(pentagon, *dir);
        assert!(h3_is_valid(neighbor), "pentagon neighbor {dir:?} at res {res} valid");
        assert!(!h3_is_pentagon(neighbor), "pentagons are never adjacent");
      }
    }
  }

  #[test]
  fn test_base_cell_neighbors() {
    for bc in 0..NUM_BASE_CELLS {
      let origin = set_h3_index(0, bc, Direction::Center);
      for dir in &Direction::ALL[1..] {
        let neighbor = h3_neighbor(origin, *dir);
        if h3_is_pentagon(origin) && *dir == Direction::KAxes {
          assert_eq!(neighbor, h3_neighbor(origin, Direction::IkAxes), "deleted direction of {bc} leads to ik");
          continue;
        }
        assert!(h3_is_valid(neighbor), "neighbor of base cell {bc} in {dir:?}");
        assert_ne!(get_base_cell(neighbor), bc, "res 0 steps leave the base cell");
      }
    }
  }

  #[test]
  fn test_neighbor_crossing_base_cells() {
    // digit I plus a step I carries into base cell 20's i neighbor
    let origin = set_h3_index(1, 20, Direction::IAxes);
    let neighbor = h3_neighbor(origin, Direction::IAxes);
    assert!(h3_is_valid(neighbor), "crossing yields a valid cell");
    assert_eq!(get_resolution(neighbor), 1, "resolution kept");
    assert_eq!(get_base_cell(neighbor), 40, "base cell 20's i neighbor");
    assert_eq!(h3_to_parent(neighbor, 0), set_h3_index(0, 40, Direction::Center), "parent is the new base cell");
  }

  #[test]
  fn test_malformed_input() {
    let origin = H3Index::from_raw(SF_CELL);
    assert_eq!(h3_neighbor(origin, Direction::InvalidDigit), H3_NULL, "invalid direction");
    assert_eq!(h3_neighbor(set_base_cell(origin, 127), Direction::JAxes), H3_NULL, "invalid base cell");
  }
}
