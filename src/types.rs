//! Core grid data structures.

use crate::constants::MAX_CELL_BNDRY_VERTS;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A packed 64-bit cell identifier.
///
/// The raw integer is only reachable through [`H3Index::from_raw`] and
/// [`H3Index::to_raw`], so identifiers never take part in arithmetic by accident.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(pub(crate) u64);

impl H3Index {
  /// Wraps a raw 64-bit value. No validation is performed; see `h3_is_valid`.
  #[inline]
  #[must_use]
  pub const fn from_raw(raw: u64) -> Self {
    H3Index(raw)
  }

  /// The raw 64-bit value.
  #[inline]
  #[must_use]
  pub const fn to_raw(self) -> u64 {
    self.0
  }

  /// True for the `H3_NULL` sentinel.
  #[inline]
  #[must_use]
  pub const fn is_null(self) -> bool {
    self.0 == 0
  }
}

/// Invalid index, returned by constructors that fail.
pub const H3_NULL: H3Index = H3Index(0);

/// Latitude/longitude in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoord {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lon: f64,
}

/// Cell boundary in latitude/longitude, counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoBoundary {
  /// Number of vertices in use.
  pub num_verts: usize,
  /// Vertex storage; only the first `num_verts` entries are meaningful.
  pub verts: [GeoCoord; MAX_CELL_BNDRY_VERTS],
}

impl GeoBoundary {
  /// The vertices in use.
  #[must_use]
  pub fn verts(&self) -> &[GeoCoord] {
    &self.verts[..self.num_verts]
  }

  pub(crate) fn push(&mut self, vert: GeoCoord) {
    self.verts[self.num_verts] = vert;
    self.num_verts += 1;
  }
}

impl Default for GeoBoundary {
  fn default() -> Self {
    Self {
      num_verts: 0,
      verts: [GeoCoord::default(); MAX_CELL_BNDRY_VERTS],
    }
  }
}

/// General error codes for argument validation and buffer sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum H3Error {
  /// The operation failed but a more specific error is not available.
  #[error("operation failed")]
  Failed = 1,
  /// Argument was outside of acceptable range.
  #[error("argument out of range")]
  Domain = 2,
  /// Latitude or longitude arguments were outside of acceptable range.
  #[error("latitude or longitude out of range")]
  LatLngDomain = 3,
  /// Resolution argument was outside of acceptable range.
  #[error("resolution out of range")]
  ResDomain = 4,
  /// Cell argument was not valid.
  #[error("cell index is not valid")]
  CellInvalid = 5,
  /// Pentagon distortion was encountered.
  #[error("pentagon distortion encountered")]
  Pentagon = 9,
  /// Duplicate input was encountered.
  #[error("duplicate input")]
  DuplicateInput = 10,
  /// The provided output buffer is too small.
  #[error("output buffer too small")]
  MemoryBounds = 14,
}

/// Failure of `compact`. Success corresponds to code 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(i32)]
pub enum CompactError {
  /// A probe sequence ran past the table size.
  #[error("hash probe loop exceeded")]
  LoopExceeded = -1,
  /// More children of one parent than the parent has.
  #[error("duplicate input cells")]
  Duplicate = -2,
  /// The output slice cannot hold the compacted set.
  #[error("output buffer too small")]
  OutputTooSmall = -3,
  /// Input cells do not share one resolution.
  #[error("input cells have mixed resolutions")]
  ResolutionMismatch = -4,
}

impl CompactError {
  /// Integer status code.
  #[must_use]
  pub const fn code(self) -> i32 {
    self as i32
  }
}

/// Failure of `uncompact` and `max_uncompact_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(i32)]
pub enum UncompactError {
  /// The output slice cannot hold the expanded set.
  #[error("output buffer too small")]
  OutputTooSmall = -1,
  /// A cell is finer than the target resolution, or the target is past 15.
  #[error("cell resolution incompatible with target resolution")]
  ResolutionMismatch = -2,
}

impl UncompactError {
  /// Integer status code.
  #[must_use]
  pub const fn code(self) -> i32 {
    self as i32
  }
}

/// Failure of the spiral walks (`hex_range`, `hex_ring` and friends). Success corresponds to code 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(i32)]
pub enum HexRangeError {
  /// The walk met a pentagon, so the output would be distorted.
  #[error("pentagon encountered")]
  Pentagon = 1,
  /// The walk stepped into a deleted pentagon sub-sequence.
  #[error("deleted k sub-sequence encountered")]
  KSubsequence = 2,
  /// The output slice is shorter than the walk.
  #[error("output buffer too small")]
  MemoryBounds = 3,
}

impl HexRangeError {
  /// Integer status code.
  #[must_use]
  pub const fn code(self) -> i32 {
    self as i32
  }
}

/// Hexagon IJ coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJ {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
}

/// IJK hexagon coordinates; the three axes are 120 degrees apart.
///
/// Normalized coordinates are non-negative with a zero minimum component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}

impl CoordIJK {
  #[inline]
  #[must_use]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }
}

/// Face number and IJK coordinates on that face-centered coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Icosahedron face number (0-19).
  pub face: i32,
  /// IJK coordinates on that face.
  pub coord: CoordIJK,
}

impl FaceIJK {
  #[inline]
  #[must_use]
  pub const fn new(face: i32, coord: CoordIJK) -> Self {
    Self { face, coord }
  }
}

/// How to re-express a coordinate in a neighboring face's system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FaceOrientIJK {
  /// Neighboring face.
  pub face: i32,
  /// Resolution 0 translation relative to the primary face.
  pub translate: CoordIJK,
  /// Number of 60 degree ccw rotations relative to the primary face.
  pub ccw_rot60: i32,
}

/// 2D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// Index digit: one of the seven positions relative to the parent cell.
///
/// The values are bit-ORs of the axes I=4, J=2, K=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Center digit.
  #[default]
  Center = 0,
  /// k-axes direction.
  KAxes = 1,
  /// j-axes direction.
  JAxes = 2,
  /// j == k direction.
  JkAxes = 3,
  /// i-axes direction.
  IAxes = 4,
  /// i == k direction.
  IkAxes = 5,
  /// i == j direction.
  IjAxes = 6,
  /// Invalid digit, also the filler for unused resolutions.
  InvalidDigit = 7,
}

impl Direction {
  /// All valid digits, center first.
  pub const ALL: [Direction; 7] = [
    Direction::Center,
    Direction::KAxes,
    Direction::JAxes,
    Direction::JkAxes,
    Direction::IAxes,
    Direction::IkAxes,
    Direction::IjAxes,
  ];

  /// Maps the low three bits of `value` to a digit.
  #[inline]
  #[must_use]
  pub const fn from_bits(value: u64) -> Direction {
    match value & 7 {
      0 => Direction::Center,
      1 => Direction::KAxes,
      2 => Direction::JAxes,
      3 => Direction::JkAxes,
      4 => Direction::IAxes,
      5 => Direction::IkAxes,
      6 => Direction::IjAxes,
      _ => Direction::InvalidDigit,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = H3Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > 7 {
      return Err(H3Error::Domain);
    }
    Ok(Direction::from_bits(u64::from(value)))
  }
}
