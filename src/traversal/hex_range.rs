//! Spiral walks around an origin: filled disks and hollow rings.
//!
//! The walks step from cell to cell with `h3_neighbor_rotations`, threading
//! the accumulated rotation so the spiral keeps its orientation across
//! icosahedron faces. They are only exact away from pentagons and stop with
//! [`HexRangeError::Pentagon`] as soon as one is visited.

use super::k_ring::max_kring_size;
use super::neighbors::h3_neighbor_rotations;
use crate::h3_index::inspection::h3_is_pentagon;
use crate::types::{Direction, H3Index, HexRangeError, H3_NULL};

/// Sides of a ring, walked counterclockwise starting from the `I` corner.
pub(crate) const DIRECTIONS: [Direction; 6] = [
  Direction::JAxes,
  Direction::JkAxes,
  Direction::KAxes,
  Direction::IkAxes,
  Direction::IAxes,
  Direction::IjAxes,
];

/// Step from ring `r` to the first corner of ring `r + 1`.
const NEXT_RING_DIRECTION: Direction = Direction::IAxes;

/// One step of a walk; `H3_NULL` only comes back from a pentagon origin.
fn step(origin: H3Index, dir: Direction, rotations: &mut i32) -> Result<H3Index, HexRangeError> {
  let (next, rot) = h3_neighbor_rotations(origin, dir, *rotations);
  *rotations = rot;
  if next == H3_NULL {
    return Err(HexRangeError::KSubsequence);
  }
  Ok(next)
}

fn reject_pentagon(h: H3Index) -> Result<(), HexRangeError> {
  if h3_is_pentagon(h) {
    return Err(HexRangeError::Pentagon);
  }
  Ok(())
}

fn range_size(k: i32, len: usize) -> Result<usize, HexRangeError> {
  let size = max_kring_size(k) as usize;
  if k < 0 || len < size {
    return Err(HexRangeError::MemoryBounds);
  }
  Ok(size)
}

/// Filled disk of radius `k`, ordered by ring.
///
/// `out` needs `max_kring_size(k)` slots. Fails when a pentagon is visited, in
/// which case the output is partial and must not be used.
pub fn hex_range(origin: H3Index, k: i32, out: &mut [H3Index]) -> Result<(), HexRangeError> {
  hex_range_distances(origin, k, out, None)
}

/// `hex_range`, optionally writing the ring number of each cell into
/// `distances`.
pub fn hex_range_distances(
  origin: H3Index,
  k: i32,
  out: &mut [H3Index],
  mut distances: Option<&mut [i32]>,
) -> Result<(), HexRangeError> {
  let size = range_size(k, out.len())?;
  if distances.as_deref().is_some_and(|d| d.len() < size) {
    return Err(HexRangeError::MemoryBounds);
  }
  let mut write = |idx: usize, cell: H3Index, ring: i32| {
    out[idx] = cell;
    if let Some(distances) = distances.as_deref_mut() {
      distances[idx] = ring;
    }
  };

  write(0, origin, 0);
  reject_pentagon(origin)?;

  let mut current = origin;
  let mut rotations = 0;
  let mut idx = 1;
  for ring in 1..=k {
    current = step(current, NEXT_RING_DIRECTION, &mut rotations)?;
    reject_pentagon(current)?;
    for dir in DIRECTIONS {
      for _ in 0..ring {
        current = step(current, dir, &mut rotations)?;
        write(idx, current, ring);
        idx += 1;
        reject_pentagon(current)?;
      }
    }
  }
  Ok(())
}

/// `hex_range` for each cell of `h3_set`.
///
/// The disk around `h3_set[i]` goes to the `i`th `max_kring_size(k)` segment of
/// `out`. Stops at the first origin whose walk fails.
pub fn hex_ranges(h3_set: &[H3Index], k: i32, out: &mut [H3Index]) -> Result<(), HexRangeError> {
  if k < 0 {
    return Err(HexRangeError::MemoryBounds);
  }
  let segment = max_kring_size(k) as usize;
  if out.len() < segment * h3_set.len() {
    return Err(HexRangeError::MemoryBounds);
  }
  for (origin, chunk) in h3_set.iter().zip(out.chunks_mut(segment)) {
    hex_range(*origin, k, chunk)?;
  }
  Ok(())
}

/// Hollow ring of cells exactly `k` steps from `origin`.
///
/// `out` needs `6k` slots, or one for `k == 0`. The ring starts at the `I`
/// corner and runs counterclockwise. Fails when a pentagon is visited or when
/// the walk does not close on itself.
pub fn hex_ring(origin: H3Index, k: i32, out: &mut [H3Index]) -> Result<(), HexRangeError> {
  if k < 0 {
    return Err(HexRangeError::MemoryBounds);
  }
  if k == 0 {
    let first = out.first_mut().ok_or(HexRangeError::MemoryBounds)?;
    *first = origin;
    return Ok(());
  }
  if out.len() < 6 * k as usize {
    return Err(HexRangeError::MemoryBounds);
  }
  reject_pentagon(origin)?;

  let mut rotations = 0;
  let mut current = origin;
  for _ in 0..k {
    current = step(current, NEXT_RING_DIRECTION, &mut rotations)?;
    reject_pentagon(current)?;
  }

  let start = current;
  out[0] = start;
  let mut idx = 1;
  for (side, dir) in DIRECTIONS.into_iter().enumerate() {
    for pos in 0..k {
      current = step(current, dir, &mut rotations)?;
      // the closing step lands back on `start`, already written
      if side == 5 && pos == k - 1 {
        continue;
      }
      out[idx] = current;
      idx += 1;
      reject_pentagon(current)?;
    }
  }

  if current != start {
    return Err(HexRangeError::Pentagon);
  }
  Ok(())
}
