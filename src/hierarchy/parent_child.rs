//! Parent and child relationships between resolutions.

use crate::constants::MAX_H3_RES;
use crate::h3_index::inspection::h3_is_pentagon;
use crate::h3_index::{get_resolution, set_index_digit, set_resolution};
use crate::math::extensions::_ipow;
use crate::types::{Direction, H3Error, H3Index, H3_NULL};

/// Whether `child_res` can hold children of a `parent_res` cell.
#[inline]
#[must_use]
pub(crate) fn _is_valid_child_res(parent_res: i32, child_res: i32) -> bool {
  child_res >= parent_res && child_res <= MAX_H3_RES
}

/// Ancestor of `h` at `parent_res`; `h` itself at its own resolution.
///
/// Returns `H3_NULL` when `parent_res` is finer than `h` or out of range.
#[must_use]
pub fn h3_to_parent(h: H3Index, parent_res: i32) -> H3Index {
  let child_res = get_resolution(h);
  if parent_res > child_res {
    return H3_NULL;
  }
  if parent_res == child_res {
    return h;
  }
  if !(0..=MAX_H3_RES).contains(&parent_res) {
    return H3_NULL;
  }
  ((parent_res + 1)..=child_res).fold(set_resolution(h, parent_res), |parent, r| {
    set_index_digit(parent, r, Direction::InvalidDigit)
  })
}

/// Slots needed by `h3_to_children`: 7 to the power of the resolution gap, 0 for an unusable `child_res`.
#[must_use]
pub fn max_h3_to_children_size(h: H3Index, child_res: i32) -> i64 {
  let parent_res = get_resolution(h);
  if !_is_valid_child_res(parent_res, child_res) {
    return 0;
  }
  _ipow(7, (child_res - parent_res) as u32)
}

/// Child of `h` one resolution finer, in position `cell_number`.
#[must_use]
pub fn make_direct_child(h: H3Index, cell_number: Direction) -> H3Index {
  let child_res = get_resolution(h) + 1;
  set_index_digit(set_resolution(h, child_res), child_res, cell_number)
}

// `out` is exactly `7^(child_res - res(h))` long; each digit owns one seventh.
fn fill_children(h: H3Index, child_res: i32, out: &mut [H3Index]) {
  if get_resolution(h) == child_res {
    out[0] = h;
    return;
  }
  let step = out.len() / 7;
  let is_pentagon = h3_is_pentagon(h);
  for (digit, block) in Direction::ALL.into_iter().zip(out.chunks_mut(step)) {
    if is_pentagon && digit == Direction::KAxes {
      block.fill(H3_NULL);
    } else {
      fill_children(make_direct_child(h, digit), child_res, block);
    }
  }
}

/// Writes every descendant of `h` at `child_res`.
///
/// `out` needs `max_h3_to_children_size(h, child_res)` slots. Descendants
/// through the deleted pentagon sub-sequence do not exist; their slots are
/// left as `H3_NULL`.
pub fn h3_to_children(h: H3Index, child_res: i32, out: &mut [H3Index]) -> Result<(), H3Error> {
  if !_is_valid_child_res(get_resolution(h), child_res) {
    return Err(H3Error::ResDomain);
  }
  let size = max_h3_to_children_size(h, child_res) as usize;
  if out.len() < size {
    return Err(H3Error::MemoryBounds);
  }
  fill_children(h, child_res, &mut out[..size]);
  Ok(())
}

/// Center descendant of `h` at `child_res`; `H3_NULL` for an unusable `child_res`.
#[must_use]
pub fn h3_to_center_child(h: H3Index, child_res: i32) -> H3Index {
  let parent_res = get_resolution(h);
  if !_is_valid_child_res(parent_res, child_res) {
    return H3_NULL;
  }
  if child_res == parent_res {
    return h;
  }
  ((parent_res + 1)..=child_res).fold(set_resolution(h, child_res), |child, r| {
    set_index_digit(child, r, Direction::Center)
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::inspection::h3_is_valid;
  use crate::h3_index::set_h3_index;

  #[test]
  fn test_h3_to_parent() {
    let h = H3Index::from_raw(0x8928342e20fffff);
    assert_eq!(h3_to_parent(h, 3), H3Index::from_raw(0x832834fffffffff), "res 3 ancestor");
    assert_eq!(h3_to_parent(h, 9), h, "own resolution");
    assert_eq!(h3_to_parent(h, 10), H3_NULL, "finer than the cell");
    assert_eq!(h3_to_parent(h, -1), H3_NULL, "negative resolution");
    for res in 0..9 {
      let parent = h3_to_parent(h, res);
      assert!(h3_is_valid(parent), "ancestor at res {res} valid");
      assert_eq!(get_resolution(parent), res, "ancestor resolution");
    }
  }

  #[test]
  fn test_max_h3_to_children_size() {
    let h = set_h3_index(7, 0, Direction::Center);
    assert_eq!(max_h3_to_children_size(h, 7), 1, "same resolution");
    assert_eq!(max_h3_to_children_size(h, 8), 7, "one level");
    assert_eq!(max_h3_to_children_size(h, 10), 343, "three levels");
    assert_eq!(max_h3_to_children_size(h, 6), 0, "coarser target");
    assert_eq!(max_h3_to_children_size(h, 16), 0, "past the finest resolution");
  }

  #[test]
  fn test_make_direct_child() {
    let h = H3Index::from_raw(0x85283473fffffff);
    for digit in Direction::ALL {
      let child = make_direct_child(h, digit);
      assert_eq!(get_resolution(child), 6, "one level finer");
      assert_eq!(h3_to_parent(child, 5), h, "parent of direct child");
    }
  }

  #[test]
  fn test_h3_to_children_hexagon() {
    let h = H3Index::from_raw(0x85283473fffffff);
    let mut out = vec![H3_NULL; 49];
    h3_to_children(h, 7, &mut out).expect("sized by max_h3_to_children_size");
    assert!(out.iter().all(|c| h3_is_valid(*c)), "all 49 grandchildren exist");
    assert!(out.iter().all(|c| h3_to_parent(*c, 5) == h), "all descend from h");
    let mut sorted = out.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 49, "no duplicates");
  }

  #[test]
  fn test_h3_to_children_pentagon() {
    let pentagon = set_h3_index(1, 4, Direction::Center);
    let mut out = vec![H3_NULL; 49];
    h3_to_children(pentagon, 3, &mut out).expect("sized by max_h3_to_children_size");
    let children: Vec<H3Index> = out.iter().copied().filter(|c| !c.is_null()).collect();
    assert_eq!(children.len(), 41, "the center pentagon keeps 6 children, the 5 hexagons keep 7");
    assert!(children.iter().all(|c| h3_is_valid(*c)), "no deleted sub-sequence children");
    assert!(out[7..14].iter().all(|c| c.is_null()), "K branch block left empty");
  }

  #[test]
  fn test_h3_to_children_errors() {
    let h = H3Index::from_raw(0x85283473fffffff);
    let mut out = vec![H3_NULL; 6];
    assert_eq!(h3_to_children(h, 6, &mut out), Err(H3Error::MemoryBounds), "short buffer");
    assert_eq!(h3_to_children(h, 4, &mut out), Err(H3Error::ResDomain), "coarser target");
    let mut one = [H3_NULL; 1];
    h3_to_children(h, 5, &mut one).expect("same resolution");
    assert_eq!(one[0], h, "cell is its own child");
  }

  #[test]
  fn test_h3_to_center_child() {
    let h = H3Index::from_raw(0x85283473fffffff);
    assert_eq!(h3_to_center_child(h, 7), H3Index::from_raw(0x872834700ffffff), "res 7 center child");
    assert_eq!(h3_to_center_child(h, 5), h, "same resolution");
    assert_eq!(h3_to_center_child(h, 4), H3_NULL, "coarser target");
    assert_eq!(h3_to_center_child(h, 16), H3_NULL, "past the finest resolution");
    let pentagon = set_h3_index(0, 117, Direction::Center);
    assert!(h3_is_pentagon(h3_to_center_child(pentagon, 12)), "center child of a pentagon is a pentagon");
  }
}
