//! IJK hexagon lattice coordinates.

use crate::constants::{M_SIN60, M_SQRT3_2};
use crate::types::{CoordIJ, CoordIJK, Direction, Vec2d};

/// Unit vectors for the seven digits, indexed by digit value.
#[rustfmt::skip]
pub(crate) const UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK::new(0, 0, 0), // center
  CoordIJK::new(0, 0, 1), // k
  CoordIJK::new(0, 1, 0), // j
  CoordIJK::new(0, 1, 1), // jk
  CoordIJK::new(1, 0, 0), // i
  CoordIJK::new(1, 0, 1), // ik
  CoordIJK::new(1, 1, 0), // ij
];

#[inline]
#[must_use]
pub(crate) fn _ijk_matches(c1: &CoordIJK, c2: &CoordIJK) -> bool {
  c1.i == c2.i && c1.j == c2.j && c1.k == c2.k
}

#[inline]
#[must_use]
pub(crate) fn _ijk_add(h1: CoordIJK, h2: CoordIJK) -> CoordIJK {
  CoordIJK::new(h1.i + h2.i, h1.j + h2.j, h1.k + h2.k)
}

#[inline]
#[must_use]
pub(crate) fn _ijk_sub(h1: CoordIJK, h2: CoordIJK) -> CoordIJK {
  CoordIJK::new(h1.i - h2.i, h1.j - h2.j, h1.k - h2.k)
}

/// Component-wise multiply. The result is not normalized.
#[inline]
#[must_use]
pub(crate) fn _ijk_scale(c: CoordIJK, factor: i32) -> CoordIJK {
  CoordIJK::new(c.i * factor, c.j * factor, c.k * factor)
}

/// Removes negative components, then subtracts the minimum so one component is 0.
#[must_use]
pub(crate) fn _ijk_normalize(mut c: CoordIJK) -> CoordIJK {
  if c.i < 0 {
    c.j -= c.i;
    c.k -= c.i;
    c.i = 0;
  }
  if c.j < 0 {
    c.i -= c.j;
    c.k -= c.j;
    c.j = 0;
  }
  if c.k < 0 {
    c.i -= c.k;
    c.j -= c.k;
    c.k = 0;
  }

  let min = c.i.min(c.j).min(c.k);
  if min > 0 {
    c.i -= min;
    c.j -= min;
    c.k -= min;
  }
  c
}

/// Digit for a unit vector (or the zero vector); `InvalidDigit` for anything else.
#[must_use]
pub(crate) fn _unit_ijk_to_digit(ijk: &CoordIJK) -> Direction {
  let c = _ijk_normalize(*ijk);
  Direction::ALL
    .into_iter()
    .find(|d| _ijk_matches(&c, &UNIT_VECS[*d as usize]))
    .unwrap_or(Direction::InvalidDigit)
}

/// Combines the three basis images `i_vec`, `j_vec`, `k_vec` weighted by the
/// components of `ijk`, then normalizes. Every aperture step and lattice
/// rotation is one of these linear maps.
#[inline]
fn _ijk_transform(ijk: CoordIJK, i_vec: CoordIJK, j_vec: CoordIJK, k_vec: CoordIJK) -> CoordIJK {
  let sum = _ijk_add(_ijk_scale(i_vec, ijk.i), _ijk_scale(j_vec, ijk.j));
  _ijk_normalize(_ijk_add(sum, _ijk_scale(k_vec, ijk.k)))
}

/// Parent cell center containing `ijk`, counter-clockwise aperture 7 grid.
#[must_use]
pub(crate) fn _up_ap7(ijk: CoordIJK) -> CoordIJK {
  let i = f64::from(ijk.i - ijk.k);
  let j = f64::from(ijk.j - ijk.k);
  _ijk_normalize(CoordIJK::new(
    ((3.0 * i - j) / 7.0).round() as i32,
    ((i + 2.0 * j) / 7.0).round() as i32,
    0,
  ))
}

/// Parent cell center containing `ijk`, clockwise aperture 7 grid.
#[must_use]
pub(crate) fn _up_ap7r(ijk: CoordIJK) -> CoordIJK {
  let i = f64::from(ijk.i - ijk.k);
  let j = f64::from(ijk.j - ijk.k);
  _ijk_normalize(CoordIJK::new(
    ((2.0 * i + j) / 7.0).round() as i32,
    ((3.0 * j - i) / 7.0).round() as i32,
    0,
  ))
}

/// Center child of `ijk` one resolution finer, counter-clockwise aperture 7 grid.
#[must_use]
pub(crate) fn _down_ap7(ijk: CoordIJK) -> CoordIJK {
  _ijk_transform(ijk, CoordIJK::new(3, 0, 1), CoordIJK::new(1, 3, 0), CoordIJK::new(0, 1, 3))
}

/// Center child of `ijk` one resolution finer, clockwise aperture 7 grid.
#[must_use]
pub(crate) fn _down_ap7r(ijk: CoordIJK) -> CoordIJK {
  _ijk_transform(ijk, CoordIJK::new(3, 1, 0), CoordIJK::new(0, 3, 1), CoordIJK::new(1, 0, 3))
}

/// Same point on the counter-clockwise aperture 3 substrate grid.
#[must_use]
pub(crate) fn _down_ap3(ijk: CoordIJK) -> CoordIJK {
  _ijk_transform(ijk, CoordIJK::new(2, 0, 1), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 1, 2))
}

/// Same point on the clockwise aperture 3 substrate grid.
#[must_use]
pub(crate) fn _down_ap3r(ijk: CoordIJK) -> CoordIJK {
  _ijk_transform(ijk, CoordIJK::new(2, 1, 0), CoordIJK::new(0, 2, 1), CoordIJK::new(1, 0, 2))
}

/// Adjacent cell in direction `digit`. Center and invalid digits leave `ijk` unchanged.
#[must_use]
pub(crate) fn _neighbor(ijk: CoordIJK, digit: Direction) -> CoordIJK {
  if digit == Direction::Center || digit == Direction::InvalidDigit {
    return ijk;
  }
  _ijk_normalize(_ijk_add(ijk, UNIT_VECS[digit as usize]))
}

#[must_use]
pub(crate) fn _ijk_rotate60_ccw(ijk: CoordIJK) -> CoordIJK {
  _ijk_transform(ijk, CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1), CoordIJK::new(1, 0, 1))
}

#[must_use]
pub(crate) fn _ijk_rotate60_cw(ijk: CoordIJK) -> CoordIJK {
  _ijk_transform(ijk, CoordIJK::new(1, 0, 1), CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1))
}

/// Rotates a digit 60 degrees counter-clockwise.
#[must_use]
pub(crate) const fn _rotate60_ccw(digit: Direction) -> Direction {
  match digit {
    Direction::KAxes => Direction::IkAxes,
    Direction::IkAxes => Direction::IAxes,
    Direction::IAxes => Direction::IjAxes,
    Direction::IjAxes => Direction::JAxes,
    Direction::JAxes => Direction::JkAxes,
    Direction::JkAxes => Direction::KAxes,
    other => other,
  }
}

/// Rotates a digit 60 degrees clockwise.
#[must_use]
pub(crate) const fn _rotate60_cw(digit: Direction) -> Direction {
  match digit {
    Direction::KAxes => Direction::JkAxes,
    Direction::JkAxes => Direction::JAxes,
    Direction::JAxes => Direction::IjAxes,
    Direction::IjAxes => Direction::IAxes,
    Direction::IAxes => Direction::IkAxes,
    Direction::IkAxes => Direction::KAxes,
    other => other,
  }
}

/// Containing cell of a 2D hex coordinate.
///
/// Works on the absolute values first and folds across the axes afterwards.
/// The remainder thresholds (1/3, 1/2, 2/3) decide between the candidate
/// cells around the truncated position.
#[must_use]
pub(crate) fn _hex2d_to_coord_ijk(v: &Vec2d) -> CoordIJK {
  let a1 = v.x.abs();
  let a2 = v.y.abs();

  // reverse conversion into the ij system
  let x2 = a2 / M_SIN60;
  let x1 = a1 + x2 / 2.0;

  // truncation, not rounding
  let m1 = x1 as i32;
  let m2 = x2 as i32;

  let r1 = x1 - f64::from(m1);
  let r2 = x2 - f64::from(m2);

  let (mut i, mut j);
  if r1 < 0.5 {
    if r1 < 1.0 / 3.0 {
      i = m1;
      j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
    } else {
      j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
      i = if (1.0 - r1) <= r2 && r2 < (2.0 * r1) { m1 + 1 } else { m1 };
    }
  } else if r1 < 2.0 / 3.0 {
    j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
    i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
  } else {
    i = m1 + 1;
    j = if r2 < (r1 / 2.0) { m2 } else { m2 + 1 };
  }

  // fold across the axes
  if v.x < 0.0 {
    if j % 2 == 0 {
      let axis_i = j / 2;
      let diff = i - axis_i;
      i -= 2 * diff;
    } else {
      let axis_i = (j + 1) / 2;
      let diff = i - axis_i;
      i -= 2 * diff + 1;
    }
  }

  if v.y < 0.0 {
    i -= (2 * j + 1) / 2;
    j = -j;
  }

  _ijk_normalize(CoordIJK::new(i, j, 0))
}

/// Center of a cell in 2D hex coordinates.
#[must_use]
pub(crate) fn _ijk_to_hex2d(h: &CoordIJK) -> Vec2d {
  let i = f64::from(h.i - h.k);
  let j = f64::from(h.j - h.k);
  Vec2d {
    x: i - 0.5 * j,
    y: j * M_SQRT3_2,
  }
}

/// Grid distance between two IJK coordinates.
#[must_use]
pub fn ijk_distance(c1: &CoordIJK, c2: &CoordIJK) -> i32 {
  let diff = _ijk_normalize(_ijk_sub(*c1, *c2));
  diff.i.abs().max(diff.j.abs()).max(diff.k.abs())
}

/// Drops the redundant k axis.
#[must_use]
pub fn ijk_to_ij(ijk: &CoordIJK) -> CoordIJ {
  CoordIJ {
    i: ijk.i - ijk.k,
    j: ijk.j - ijk.k,
  }
}

/// Normalized IJK for an IJ coordinate.
#[must_use]
pub fn ij_to_ijk(ij: &CoordIJ) -> CoordIJK {
  _ijk_normalize(CoordIJK::new(ij.i, ij.j, 0))
}

/// Cube coordinates, stored as (x, y, z) in the `i`, `j`, `k` fields with x + y + z = 0.
#[must_use]
pub fn ijk_to_cube(ijk: &CoordIJK) -> CoordIJK {
  let x = ijk.k - ijk.i;
  let y = ijk.j - ijk.k;
  CoordIJK::new(x, y, -x - y)
}

/// Normalized IJK for a cube coordinate.
#[must_use]
pub fn cube_to_ijk(cube: &CoordIJK) -> CoordIJK {
  _ijk_normalize(CoordIJK::new(-cube.i, cube.j, 0))
}
