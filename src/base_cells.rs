//! Resolution 0 base cell topology.

use crate::constants::{NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::types::{CoordIJK, Direction, FaceIJK};

const BASE_CELLS: usize = NUM_BASE_CELLS as usize;
const FACES: usize = NUM_ICOSA_FACES as usize;

/// Placeholder for the missing neighbor of a pentagon.
pub(crate) const INVALID_BASE_CELL: i32 = 127;
/// Rotation count stored alongside `INVALID_BASE_CELL`.
pub(crate) const INVALID_ROTATIONS: i32 = -1;
/// Largest IJK component of a resolution 0 face lookup.
pub(crate) const MAX_FACE_COORD: i32 = 2;

const INV: i32 = INVALID_BASE_CELL;

/// Static description of a base cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BaseCellData {
  /// Home face and normalized IJK coordinates on that face.
  pub home_fijk: FaceIJK,
  pub is_pentagon: bool,
  /// For pentagons, the two faces handled with clockwise offsets; `-1` otherwise.
  pub cw_offset_pent: [i32; 2],
}

/// Base cell at a resolution 0 face position and its rotation relative to that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BaseCellOrient {
  base_cell: i32,
  ccw_rot60: i32,
}

const fn o(base_cell: i32, ccw_rot60: i32) -> BaseCellOrient {
  BaseCellOrient { base_cell, ccw_rot60 }
}

const fn hex(face: i32, i: i32, j: i32, k: i32) -> BaseCellData {
  BaseCellData {
    home_fijk: FaceIJK::new(face, CoordIJK::new(i, j, k)),
    is_pentagon: false,
    cw_offset_pent: [-1, -1],
  }
}

const fn pent(face: i32, i: i32, j: i32, k: i32, cw_offset_pent: [i32; 2]) -> BaseCellData {
  BaseCellData {
    home_fijk: FaceIJK::new(face, CoordIJK::new(i, j, k)),
    is_pentagon: true,
    cw_offset_pent,
  }
}

/// Neighboring base cell in each direction, `INVALID_BASE_CELL` for the deleted pentagon direction.
#[rustfmt::skip]
const BASE_CELL_NEIGHBORS: [[i32; 7]; BASE_CELLS] = [
  [  0,   1,   5,   2,   4,   3,   8], // 0
  [  1,   7,   6,   9,   0,   3,   2], // 1
  [  2,   6,  10,  11,   0,   1,   5], // 2
  [  3,  13,   1,   7,   4,  12,   0], // 3
  [  4, INV,  15,   8,   3,   0,  12], // 4
  [  5,   2,  18,  10,   8,   0,  16], // 5
  [  6,  14,  11,  17,   1,   9,   2], // 6
  [  7,  21,   9,  19,   3,  13,   1], // 7
  [  8,   5,  22,  16,   4,   0,  15], // 8
  [  9,  19,  14,  20,   1,   7,   6], // 9
  [ 10,  11,  24,  23,   5,   2,  18], // 10
  [ 11,  17,  23,  25,   2,   6,  10], // 11
  [ 12,  28,  13,  26,   4,  15,   3], // 12
  [ 13,  26,  21,  29,   3,  12,   7], // 13
  [ 14, INV,  17,  27,   9,  20,   6], // 14
  [ 15,  22,  28,  31,   4,   8,  12], // 15
  [ 16,  18,  33,  30,   8,   5,  22], // 16
  [ 17,  11,  14,   6,  35,  25,  27], // 17
  [ 18,  24,  30,  32,   5,  10,  16], // 18
  [ 19,  34,  20,  36,   7,  21,   9], // 19
  [ 20,  14,  19,   9,  40,  27,  36], // 20
  [ 21,  38,  19,  34,  13,  29,   7], // 21
  [ 22,  16,  41,  33,  15,   8,  31], // 22
  [ 23,  24,  11,  10,  39,  37,  25], // 23
  [ 24, INV,  32,  37,  10,  23,  18], // 24
  [ 25,  23,  17,  11,  45,  39,  35], // 25
  [ 26,  42,  29,  43,  12,  28,  13], // 26
  [ 27,  40,  35,  46,  14,  20,  17], // 27
  [ 28,  31,  42,  44,  12,  15,  26], // 28
  [ 29,  43,  38,  47,  13,  26,  21], // 29
  [ 30,  32,  48,  50,  16,  18,  33], // 30
  [ 31,  41,  44,  53,  15,  22,  28], // 31
  [ 32,  30,  24,  18,  52,  50,  37], // 32
  [ 33,  30,  49,  48,  22,  16,  41], // 33
  [ 34,  19,  38,  21,  54,  36,  51], // 34
  [ 35,  46,  45,  56,  17,  27,  25], // 35
  [ 36,  20,  34,  19,  55,  40,  54], // 36
  [ 37,  39,  52,  57,  24,  23,  32], // 37
  [ 38, INV,  34,  51,  29,  47,  21], // 38
  [ 39,  37,  25,  23,  59,  57,  45], // 39
  [ 40,  27,  36,  20,  60,  46,  55], // 40
  [ 41,  49,  53,  61,  22,  33,  31], // 41
  [ 42,  58,  43,  62,  28,  44,  26], // 42
  [ 43,  62,  47,  64,  26,  42,  29], // 43
  [ 44,  53,  58,  65,  28,  31,  42], // 44
  [ 45,  39,  35,  25,  63,  59,  56], // 45
  [ 46,  60,  56,  68,  27,  40,  35], // 46
  [ 47,  38,  43,  29,  69,  51,  64], // 47
  [ 48,  49,  30,  33,  67,  66,  50], // 48
  [ 49, INV,  61,  66,  33,  48,  41], // 49
  [ 50,  48,  32,  30,  70,  67,  52], // 50
  [ 51,  69,  54,  71,  38,  47,  34], // 51
  [ 52,  57,  70,  74,  32,  37,  50], // 52
  [ 53,  61,  65,  75,  31,  41,  44], // 53
  [ 54,  71,  55,  73,  34,  51,  36], // 54
  [ 55,  40,  54,  36,  72,  60,  73], // 55
  [ 56,  68,  63,  77,  35,  46,  45], // 56
  [ 57,  59,  74,  78,  37,  39,  52], // 57
  [ 58, INV,  62,  76,  44,  65,  42], // 58
  [ 59,  63,  78,  79,  39,  45,  57], // 59
  [ 60,  72,  68,  80,  40,  55,  46], // 60
  [ 61,  53,  49,  41,  81,  75,  66], // 61
  [ 62,  43,  58,  42,  82,  64,  76], // 62
  [ 63, INV,  56,  45,  79,  59,  77], // 63
  [ 64,  47,  62,  43,  84,  69,  82], // 64
  [ 65,  58,  53,  44,  86,  76,  75], // 65
  [ 66,  67,  81,  85,  49,  48,  61], // 66
  [ 67,  66,  50,  48,  87,  85,  70], // 67
  [ 68,  56,  60,  46,  90,  77,  80], // 68
  [ 69,  51,  64,  47,  89,  71,  84], // 69
  [ 70,  67,  52,  50,  83,  87,  74], // 70
  [ 71,  89,  73,  91,  51,  69,  54], // 71
  [ 72, INV,  73,  55,  80,  60,  88], // 72
  [ 73,  91,  72,  88,  54,  71,  55], // 73
  [ 74,  78,  83,  92,  52,  57,  70], // 74
  [ 75,  65,  61,  53,  94,  86,  81], // 75
  [ 76,  86,  82,  96,  58,  65,  62], // 76
  [ 77,  63,  68,  56,  93,  79,  90], // 77
  [ 78,  74,  59,  57,  95,  92,  79], // 78
  [ 79,  78,  63,  59,  93,  95,  77], // 79
  [ 80,  68,  72,  60,  99,  90,  88], // 80
  [ 81,  85,  94, 101,  61,  66,  75], // 81
  [ 82,  96,  84,  98,  62,  76,  64], // 82
  [ 83, INV,  74,  70, 100,  87,  92], // 83
  [ 84,  69,  82,  64,  97,  89,  98], // 84
  [ 85,  87, 101, 102,  66,  67,  81], // 85
  [ 86,  76,  75,  65, 104,  96,  94], // 86
  [ 87,  83, 102, 100,  67,  70,  85], // 87
  [ 88,  72,  91,  73,  99,  80, 105], // 88
  [ 89,  97,  91, 103,  69,  84,  71], // 89
  [ 90,  77,  80,  68, 106,  93,  99], // 90
  [ 91,  73,  89,  71, 105,  88, 103], // 91
  [ 92,  83,  78,  74, 108, 100,  95], // 92
  [ 93,  79,  90,  77, 109,  95, 106], // 93
  [ 94,  86,  81,  75, 107, 104, 101], // 94
  [ 95,  92,  79,  78, 109, 108,  93], // 95
  [ 96, 104,  98, 110,  76,  86,  82], // 96
  [ 97, INV,  98,  84, 103,  89, 111], // 97
  [ 98, 110,  97, 111,  82,  96,  84], // 98
  [ 99,  80, 105,  88, 106,  90, 113], // 99
  [100, 102,  83,  87, 108, 114,  92], // 100
  [101, 102, 107, 112,  81,  85,  94], // 101
  [102, 101,  87,  85, 114, 112, 100], // 102
  [103,  91,  97,  89, 116, 105, 111], // 103
  [104, 107, 110, 115,  86,  94,  96], // 104
  [105,  88, 103,  91, 113,  99, 116], // 105
  [106,  93,  99,  90, 117, 109, 113], // 106
  [107, INV, 101,  94, 115, 104, 112], // 107
  [108, 100,  95,  92, 118, 114, 109], // 108
  [109, 108,  93,  95, 117, 118, 106], // 109
  [110,  98, 104,  96, 119, 111, 115], // 110
  [111,  97, 110,  98, 116, 103, 119], // 111
  [112, 107, 102, 101, 120, 115, 114], // 112
  [113,  99, 116, 105, 117, 106, 121], // 113
  [114, 112, 100, 102, 118, 120, 108], // 114
  [115, 110, 107, 104, 120, 119, 112], // 115
  [116, 103, 119, 111, 113, 105, 121], // 116
  [117, INV, 109, 118, 113, 121, 106], // 117
  [118, 120, 108, 114, 117, 121, 109], // 118
  [119, 111, 115, 110, 121, 116, 120], // 119
  [120, 115, 114, 112, 121, 119, 118], // 120
  [121, 116, 120, 119, 117, 113, 118], // 121
];

/// Counter-clockwise 60 degree rotations into each neighboring base cell's system.
#[rustfmt::skip]
const BASE_CELL_NEIGHBOR_60CCW_ROTS: [[i32; 7]; BASE_CELLS] = [
  [ 0,  5,  0,  0,  1,  5,  1], // 0
  [ 0,  0,  1,  0,  1,  0,  1], // 1
  [ 0,  0,  0,  0,  0,  5,  0], // 2
  [ 0,  5,  0,  0,  2,  5,  1], // 3
  [ 0, -1,  1,  0,  3,  4,  2], // 4
  [ 0,  0,  1,  0,  1,  0,  1], // 5
  [ 0,  0,  0,  3,  5,  5,  0], // 6
  [ 0,  0,  0,  0,  0,  5,  0], // 7
  [ 0,  5,  0,  0,  0,  5,  1], // 8
  [ 0,  0,  1,  3,  0,  0,  1], // 9
  [ 0,  0,  1,  3,  0,  0,  1], // 10
  [ 0,  3,  3,  3,  0,  0,  0], // 11
  [ 0,  5,  0,  0,  3,  5,  1], // 12
  [ 0,  0,  1,  0,  1,  0,  1], // 13
  [ 0, -1,  3,  0,  5,  2,  0], // 14
  [ 0,  5,  0,  0,  4,  5,  1], // 15
  [ 0,  0,  0,  0,  0,  5,  0], // 16
  [ 0,  3,  3,  3,  3,  0,  3], // 17
  [ 0,  0,  0,  3,  5,  5,  0], // 18
  [ 0,  3,  3,  3,  0,  0,  0], // 19
  [ 0,  3,  3,  3,  0,  3,  0], // 20
  [ 0,  0,  0,  3,  5,  5,  0], // 21
  [ 0,  0,  1,  0,  1,  0,  1], // 22
  [ 0,  3,  3,  3,  0,  3,  0], // 23
  [ 0, -1,  3,  0,  5,  2,  0], // 24
  [ 0,  0,  0,  3,  0,  0,  3], // 25
  [ 0,  0,  0,  0,  0,  5,  0], // 26
  [ 0,  3,  0,  0,  0,  3,  3], // 27
  [ 0,  0,  1,  0,  1,  0,  1], // 28
  [ 0,  0,  1,  3,  0,  0,  1], // 29
  [ 0,  3,  3,  3,  0,  0,  0], // 30
  [ 0,  0,  0,  0,  0,  5,  0], // 31
  [ 0,  3,  3,  3,  3,  0,  3], // 32
  [ 0,  0,  1,  3,  0,  0,  1], // 33
  [ 0,  3,  3,  3,  3,  0,  3], // 34
  [ 0,  0,  3,  0,  3,  0,  3], // 35
  [ 0,  0,  0,  3,  0,  0,  3], // 36
  [ 0,  3,  0,  0,  0,  3,  3], // 37
  [ 0, -1,  3,  0,  5,  2,  0], // 38
  [ 0,  3,  0,  0,  3,  3,  0], // 39
  [ 0,  3,  0,  0,  3,  3,  0], // 40
  [ 0,  0,  0,  3,  5,  5,  0], // 41
  [ 0,  0,  0,  3,  5,  5,  0], // 42
  [ 0,  3,  3,  3,  0,  0,  0], // 43
  [ 0,  0,  1,  3,  0,  0,  1], // 44
  [ 0,  0,  3,  0,  0,  3,  3], // 45
  [ 0,  0,  0,  3,  0,  3,  0], // 46
  [ 0,  3,  3,  3,  0,  3,  0], // 47
  [ 0,  3,  3,  3,  0,  3,  0], // 48
  [ 0, -1,  3,  0,  5,  2,  0], // 49
  [ 0,  0,  0,  3,  0,  0,  3], // 50
  [ 0,  3,  0,  0,  0,  3,  3], // 51
  [ 0,  0,  3,  0,  3,  0,  3], // 52
  [ 0,  3,  3,  3,  0,  0,  0], // 53
  [ 0,  0,  3,  0,  3,  0,  3], // 54
  [ 0,  0,  3,  0,  0,  3,  3], // 55
  [ 0,  3,  3,  3,  0,  0,  3], // 56
  [ 0,  0,  0,  3,  0,  3,  0], // 57
  [ 0, -1,  3,  0,  5,  2,  0], // 58
  [ 0,  3,  3,  3,  3,  3,  0], // 59
  [ 0,  3,  3,  3,  3,  3,  0], // 60
  [ 0,  3,  3,  3,  3,  0,  3], // 61
  [ 0,  3,  3,  3,  3,  0,  3], // 62
  [ 0, -1,  3,  0,  5,  2,  0], // 63
  [ 0,  0,  0,  3,  0,  0,  3], // 64
  [ 0,  3,  3,  3,  0,  3,  0], // 65
  [ 0,  3,  0,  0,  0,  3,  3], // 66
  [ 0,  3,  0,  0,  3,  3,  0], // 67
  [ 0,  3,  3,  3,  0,  0,  0], // 68
  [ 0,  3,  0,  0,  3,  3,  0], // 69
  [ 0,  0,  3,  0,  0,  3,  3], // 70
  [ 0,  0,  0,  3,  0,  3,  0], // 71
  [ 0, -1,  3,  0,  5,  2,  0], // 72
  [ 0,  3,  3,  3,  0,  0,  3], // 73
  [ 0,  3,  3,  3,  0,  0,  3], // 74
  [ 0,  0,  0,  3,  0,  0,  3], // 75
  [ 0,  3,  0,  0,  0,  3,  3], // 76
  [ 0,  0,  0,  3,  0,  5,  0], // 77
  [ 0,  3,  3,  3,  0,  0,  0], // 78
  [ 0,  0,  1,  3,  1,  0,  1], // 79
  [ 0,  0,  1,  3,  1,  0,  1], // 80
  [ 0,  0,  3,  0,  3,  0,  3], // 81
  [ 0,  0,  3,  0,  3,  0,  3], // 82
  [ 0, -1,  3,  0,  5,  2,  0], // 83
  [ 0,  0,  3,  0,  0,  3,  3], // 84
  [ 0,  0,  0,  3,  0,  3,  0], // 85
  [ 0,  3,  0,  0,  3,  3,  0], // 86
  [ 0,  3,  3,  3,  3,  3,  0], // 87
  [ 0,  0,  0,  3,  0,  5,  0], // 88
  [ 0,  3,  3,  3,  3,  3,  0], // 89
  [ 0,  0,  0,  0,  0,  0,  1], // 90
  [ 0,  3,  3,  3,  0,  0,  0], // 91
  [ 0,  0,  0,  3,  0,  5,  0], // 92
  [ 0,  5,  0,  0,  5,  5,  0], // 93
  [ 0,  0,  3,  0,  0,  3,  3], // 94
  [ 0,  0,  0,  0,  0,  0,  1], // 95
  [ 0,  0,  0,  3,  0,  3,  0], // 96
  [ 0, -1,  3,  0,  5,  2,  0], // 97
  [ 0,  3,  3,  3,  0,  0,  3], // 98
  [ 0,  5,  0,  0,  5,  5,  0], // 99
  [ 0,  0,  1,  3,  1,  0,  1], // 100
  [ 0,  3,  3,  3,  0,  0,  3], // 101
  [ 0,  3,  3,  3,  0,  0,  0], // 102
  [ 0,  0,  1,  3,  1,  0,  1], // 103
  [ 0,  3,  3,  3,  3,  3,  0], // 104
  [ 0,  0,  0,  0,  0,  0,  1], // 105
  [ 0,  0,  1,  0,  3,  5,  1], // 106
  [ 0, -1,  3,  0,  5,  2,  0], // 107
  [ 0,  5,  0,  0,  5,  5,  0], // 108
  [ 0,  0,  1,  0,  4,  5,  1], // 109
  [ 0,  3,  3,  3,  0,  0,  0], // 110
  [ 0,  0,  0,  3,  0,  5,  0], // 111
  [ 0,  0,  0,  3,  0,  5,  0], // 112
  [ 0,  0,  1,  0,  2,  5,  1], // 113
  [ 0,  0,  0,  0,  0,  0,  1], // 114
  [ 0,  0,  1,  3,  1,  0,  1], // 115
  [ 0,  5,  0,  0,  5,  5,  0], // 116
  [ 0, -1,  1,  0,  3,  4,  2], // 117
  [ 0,  0,  1,  0,  0,  5,  1], // 118
  [ 0,  0,  0,  0,  0,  0,  1], // 119
  [ 0,  5,  0,  0,  5,  5,  0], // 120
  [ 0,  0,  1,  0,  1,  5,  1], // 121
];

/// Base cell and rotation for each resolution 0 face IJK position, indexed `[face][i][j][k]`.
#[rustfmt::skip]
const FACE_IJK_BASE_CELLS: [[[[BaseCellOrient; 3]; 3]; 3]; FACES] = [
  // face 0
  [
    [[o(16, 0), o(18, 0), o(24, 0)], [o(33, 0), o(30, 0), o(32, 3)], [o(49, 1), o(48, 3), o(50, 3)]],
    [[o(8, 0), o(5, 5), o(10, 5)], [o(22, 0), o(16, 0), o(18, 0)], [o(41, 1), o(33, 0), o(30, 0)]],
    [[o(4, 0), o(0, 5), o(2, 5)], [o(15, 1), o(8, 0), o(5, 5)], [o(31, 1), o(22, 0), o(16, 0)]],
  ],
  // face 1
  [
    [[o(2, 0), o(6, 0), o(14, 0)], [o(10, 0), o(11, 0), o(17, 3)], [o(24, 1), o(23, 3), o(25, 3)]],
    [[o(0, 0), o(1, 5), o(9, 5)], [o(5, 0), o(2, 0), o(6, 0)], [o(18, 1), o(10, 0), o(11, 0)]],
    [[o(4, 1), o(3, 5), o(7, 5)], [o(8, 1), o(0, 0), o(1, 5)], [o(16, 1), o(5, 0), o(2, 0)]],
  ],
  // face 2
  [
    [[o(7, 0), o(21, 0), o(38, 0)], [o(9, 0), o(19, 0), o(34, 3)], [o(14, 1), o(20, 3), o(36, 3)]],
    [[o(3, 0), o(13, 5), o(29, 5)], [o(1, 0), o(7, 0), o(21, 0)], [o(6, 1), o(9, 0), o(19, 0)]],
    [[o(4, 2), o(12, 5), o(26, 5)], [o(0, 1), o(3, 0), o(13, 5)], [o(2, 1), o(1, 0), o(7, 0)]],
  ],
  // face 3
  [
    [[o(26, 0), o(42, 0), o(58, 0)], [o(29, 0), o(43, 0), o(62, 3)], [o(38, 1), o(47, 3), o(64, 3)]],
    [[o(12, 0), o(28, 5), o(44, 5)], [o(13, 0), o(26, 0), o(42, 0)], [o(21, 1), o(29, 0), o(43, 0)]],
    [[o(4, 3), o(15, 5), o(31, 5)], [o(3, 1), o(12, 0), o(28, 5)], [o(7, 1), o(13, 0), o(26, 0)]],
  ],
  // face 4
  [
    [[o(31, 0), o(41, 0), o(49, 0)], [o(44, 0), o(53, 0), o(61, 3)], [o(58, 1), o(65, 3), o(75, 3)]],
    [[o(15, 0), o(22, 5), o(33, 5)], [o(28, 0), o(31, 0), o(41, 0)], [o(42, 1), o(44, 0), o(53, 0)]],
    [[o(4, 4), o(8, 5), o(16, 5)], [o(12, 1), o(15, 0), o(22, 5)], [o(26, 1), o(28, 0), o(31, 0)]],
  ],
  // face 5
  [
    [[o(50, 0), o(48, 0), o(49, 3)], [o(32, 0), o(30, 3), o(33, 3)], [o(24, 3), o(18, 3), o(16, 3)]],
    [[o(70, 0), o(67, 0), o(66, 3)], [o(52, 3), o(50, 0), o(48, 0)], [o(37, 3), o(32, 0), o(30, 3)]],
    [[o(83, 0), o(87, 3), o(85, 3)], [o(74, 3), o(70, 0), o(67, 0)], [o(57, 1), o(52, 3), o(50, 0)]],
  ],
  // face 6
  [
    [[o(25, 0), o(23, 0), o(24, 3)], [o(17, 0), o(11, 3), o(10, 3)], [o(14, 3), o(6, 3), o(2, 3)]],
    [[o(45, 0), o(39, 0), o(37, 3)], [o(35, 3), o(25, 0), o(23, 0)], [o(27, 3), o(17, 0), o(11, 3)]],
    [[o(63, 0), o(59, 3), o(57, 3)], [o(56, 3), o(45, 0), o(39, 0)], [o(46, 3), o(35, 3), o(25, 0)]],
  ],
  // face 7
  [
    [[o(36, 0), o(20, 0), o(14, 3)], [o(34, 0), o(19, 3), o(9, 3)], [o(38, 3), o(21, 3), o(7, 3)]],
    [[o(55, 0), o(40, 0), o(27, 3)], [o(54, 3), o(36, 0), o(20, 0)], [o(51, 3), o(34, 0), o(19, 3)]],
    [[o(72, 0), o(60, 3), o(46, 3)], [o(73, 3), o(55, 0), o(40, 0)], [o(71, 3), o(54, 3), o(36, 0)]],
  ],
  // face 8
  [
    [[o(64, 0), o(47, 0), o(38, 3)], [o(62, 0), o(43, 3), o(29, 3)], [o(58, 3), o(42, 3), o(26, 3)]],
    [[o(84, 0), o(69, 0), o(51, 3)], [o(82, 3), o(64, 0), o(47, 0)], [o(76, 3), o(62, 0), o(43, 3)]],
    [[o(97, 0), o(89, 3), o(71, 3)], [o(98, 3), o(84, 0), o(69, 0)], [o(96, 3), o(82, 3), o(64, 0)]],
  ],
  // face 9
  [
    [[o(75, 0), o(65, 0), o(58, 3)], [o(61, 0), o(53, 3), o(44, 3)], [o(49, 3), o(41, 3), o(31, 3)]],
    [[o(94, 0), o(86, 0), o(76, 3)], [o(81, 3), o(75, 0), o(65, 0)], [o(66, 3), o(61, 0), o(53, 3)]],
    [[o(107, 0), o(104, 3), o(96, 3)], [o(101, 3), o(94, 0), o(86, 0)], [o(85, 3), o(81, 3), o(75, 0)]],
  ],
  // face 10
  [
    [[o(57, 0), o(59, 0), o(63, 3)], [o(74, 0), o(78, 3), o(79, 3)], [o(83, 3), o(92, 3), o(95, 3)]],
    [[o(37, 0), o(39, 3), o(45, 3)], [o(52, 0), o(57, 0), o(59, 0)], [o(70, 3), o(74, 0), o(78, 3)]],
    [[o(24, 0), o(23, 3), o(25, 3)], [o(32, 3), o(37, 0), o(39, 3)], [o(50, 3), o(52, 0), o(57, 0)]],
  ],
  // face 11
  [
    [[o(46, 0), o(60, 0), o(72, 3)], [o(56, 0), o(68, 3), o(80, 3)], [o(63, 3), o(77, 3), o(90, 3)]],
    [[o(27, 0), o(40, 3), o(55, 3)], [o(35, 0), o(46, 0), o(60, 0)], [o(45, 3), o(56, 0), o(68, 3)]],
    [[o(14, 0), o(20, 3), o(36, 3)], [o(17, 3), o(27, 0), o(40, 3)], [o(25, 3), o(35, 0), o(46, 0)]],
  ],
  // face 12
  [
    [[o(71, 0), o(89, 0), o(97, 3)], [o(73, 0), o(91, 3), o(103, 3)], [o(72, 3), o(88, 3), o(105, 3)]],
    [[o(51, 0), o(69, 3), o(84, 3)], [o(54, 0), o(71, 0), o(89, 0)], [o(55, 3), o(73, 0), o(91, 3)]],
    [[o(38, 0), o(47, 3), o(64, 3)], [o(34, 3), o(51, 0), o(69, 3)], [o(36, 3), o(54, 0), o(71, 0)]],
  ],
  // face 13
  [
    [[o(96, 0), o(104, 0), o(107, 3)], [o(98, 0), o(110, 3), o(115, 3)], [o(97, 3), o(111, 3), o(119, 3)]],
    [[o(76, 0), o(86, 3), o(94, 3)], [o(82, 0), o(96, 0), o(104, 0)], [o(84, 3), o(98, 0), o(110, 3)]],
    [[o(58, 0), o(65, 3), o(75, 3)], [o(62, 3), o(76, 0), o(86, 3)], [o(64, 3), o(82, 0), o(96, 0)]],
  ],
  // face 14
  [
    [[o(85, 0), o(87, 0), o(83, 3)], [o(101, 0), o(102, 3), o(100, 3)], [o(107, 3), o(112, 3), o(114, 3)]],
    [[o(66, 0), o(67, 3), o(70, 3)], [o(81, 0), o(85, 0), o(87, 0)], [o(94, 3), o(101, 0), o(102, 3)]],
    [[o(49, 0), o(48, 3), o(50, 3)], [o(61, 3), o(66, 0), o(67, 3)], [o(75, 3), o(81, 0), o(85, 0)]],
  ],
  // face 15
  [
    [[o(95, 0), o(92, 0), o(83, 0)], [o(79, 0), o(78, 0), o(74, 3)], [o(63, 1), o(59, 3), o(57, 3)]],
    [[o(109, 0), o(108, 0), o(100, 5)], [o(93, 1), o(95, 0), o(92, 0)], [o(77, 1), o(79, 0), o(78, 0)]],
    [[o(117, 4), o(118, 5), o(114, 5)], [o(106, 1), o(109, 0), o(108, 0)], [o(90, 1), o(93, 1), o(95, 0)]],
  ],
  // face 16
  [
    [[o(90, 0), o(77, 0), o(63, 0)], [o(80, 0), o(68, 0), o(56, 3)], [o(72, 1), o(60, 3), o(46, 3)]],
    [[o(106, 0), o(93, 0), o(79, 5)], [o(99, 1), o(90, 0), o(77, 0)], [o(88, 1), o(80, 0), o(68, 0)]],
    [[o(117, 3), o(109, 5), o(95, 5)], [o(113, 1), o(106, 0), o(93, 0)], [o(105, 1), o(99, 1), o(90, 0)]],
  ],
  // face 17
  [
    [[o(105, 0), o(88, 0), o(72, 0)], [o(103, 0), o(91, 0), o(73, 3)], [o(97, 1), o(89, 3), o(71, 3)]],
    [[o(113, 0), o(99, 0), o(80, 5)], [o(116, 1), o(105, 0), o(88, 0)], [o(111, 1), o(103, 0), o(91, 0)]],
    [[o(117, 2), o(106, 5), o(90, 5)], [o(121, 1), o(113, 0), o(99, 0)], [o(119, 1), o(116, 1), o(105, 0)]],
  ],
  // face 18
  [
    [[o(119, 0), o(111, 0), o(97, 0)], [o(115, 0), o(110, 0), o(98, 3)], [o(107, 1), o(104, 3), o(96, 3)]],
    [[o(121, 0), o(116, 0), o(103, 5)], [o(120, 1), o(119, 0), o(111, 0)], [o(112, 1), o(115, 0), o(110, 0)]],
    [[o(117, 1), o(113, 5), o(105, 5)], [o(118, 1), o(121, 0), o(116, 0)], [o(114, 1), o(120, 1), o(119, 0)]],
  ],
  // face 19
  [
    [[o(114, 0), o(112, 0), o(107, 0)], [o(100, 0), o(102, 0), o(101, 3)], [o(83, 1), o(87, 3), o(85, 3)]],
    [[o(118, 0), o(120, 0), o(115, 5)], [o(108, 1), o(114, 0), o(112, 0)], [o(92, 1), o(100, 0), o(102, 0)]],
    [[o(117, 0), o(121, 5), o(119, 5)], [o(109, 1), o(118, 0), o(120, 0)], [o(95, 1), o(108, 1), o(114, 0)]],
  ],
];

/// Home face IJK, pentagon flag and clockwise offset faces of every base cell.
#[rustfmt::skip]
const BASE_CELL_DATA: [BaseCellData; BASE_CELLS] = [
  hex(1, 1, 0, 0), // 0
  hex(2, 1, 1, 0), // 1
  hex(1, 0, 0, 0), // 2
  hex(2, 1, 0, 0), // 3
  pent(0, 2, 0, 0, [-1, -1]), // 4
  hex(1, 1, 1, 0), // 5
  hex(1, 0, 0, 1), // 6
  hex(2, 0, 0, 0), // 7
  hex(0, 1, 0, 0), // 8
  hex(2, 0, 1, 0), // 9
  hex(1, 0, 1, 0), // 10
  hex(1, 0, 1, 1), // 11
  hex(3, 1, 0, 0), // 12
  hex(3, 1, 1, 0), // 13
  pent(11, 2, 0, 0, [2, 6]), // 14
  hex(4, 1, 0, 0), // 15
  hex(0, 0, 0, 0), // 16
  hex(6, 0, 1, 0), // 17
  hex(0, 0, 0, 1), // 18
  hex(2, 0, 1, 1), // 19
  hex(7, 0, 0, 1), // 20
  hex(2, 0, 0, 1), // 21
  hex(0, 1, 1, 0), // 22
  hex(6, 0, 0, 1), // 23
  pent(10, 2, 0, 0, [1, 5]), // 24
  hex(6, 0, 0, 0), // 25
  hex(3, 0, 0, 0), // 26
  hex(11, 1, 0, 0), // 27
  hex(4, 1, 1, 0), // 28
  hex(3, 0, 1, 0), // 29
  hex(0, 0, 1, 1), // 30
  hex(4, 0, 0, 0), // 31
  hex(5, 0, 1, 0), // 32
  hex(0, 0, 1, 0), // 33
  hex(7, 0, 1, 0), // 34
  hex(11, 1, 1, 0), // 35
  hex(7, 0, 0, 0), // 36
  hex(10, 1, 0, 0), // 37
  pent(12, 2, 0, 0, [3, 7]), // 38
  hex(6, 1, 0, 1), // 39
  hex(7, 1, 0, 1), // 40
  hex(4, 0, 0, 1), // 41
  hex(3, 0, 0, 1), // 42
  hex(3, 0, 1, 1), // 43
  hex(4, 0, 1, 0), // 44
  hex(6, 1, 0, 0), // 45
  hex(11, 0, 0, 0), // 46
  hex(8, 0, 0, 1), // 47
  hex(5, 0, 0, 1), // 48
  pent(14, 2, 0, 0, [0, 9]), // 49
  hex(5, 0, 0, 0), // 50
  hex(12, 1, 0, 0), // 51
  hex(10, 1, 1, 0), // 52
  hex(4, 0, 1, 1), // 53
  hex(12, 1, 1, 0), // 54
  hex(7, 1, 0, 0), // 55
  hex(11, 0, 1, 0), // 56
  hex(10, 0, 0, 0), // 57
  pent(13, 2, 0, 0, [4, 8]), // 58
  hex(10, 0, 0, 1), // 59
  hex(11, 0, 0, 1), // 60
  hex(9, 0, 1, 0), // 61
  hex(8, 0, 1, 0), // 62
  pent(6, 2, 0, 0, [11, 15]), // 63
  hex(8, 0, 0, 0), // 64
  hex(9, 0, 0, 1), // 65
  hex(14, 1, 0, 0), // 66
  hex(5, 1, 0, 1), // 67
  hex(16, 0, 1, 1), // 68
  hex(8, 1, 0, 1), // 69
  hex(5, 1, 0, 0), // 70
  hex(12, 0, 0, 0), // 71
  pent(7, 2, 0, 0, [12, 16]), // 72
  hex(12, 0, 1, 0), // 73
  hex(10, 0, 1, 0), // 74
  hex(9, 0, 0, 0), // 75
  hex(13, 1, 0, 0), // 76
  hex(16, 0, 0, 1), // 77
  hex(15, 0, 1, 1), // 78
  hex(15, 0, 1, 0), // 79
  hex(16, 0, 1, 0), // 80
  hex(14, 1, 1, 0), // 81
  hex(13, 1, 1, 0), // 82
  pent(5, 2, 0, 0, [10, 19]), // 83
  hex(8, 1, 0, 0), // 84
  hex(14, 0, 0, 0), // 85
  hex(9, 1, 0, 1), // 86
  hex(14, 0, 0, 1), // 87
  hex(17, 0, 0, 1), // 88
  hex(12, 0, 0, 1), // 89
  hex(16, 0, 0, 0), // 90
  hex(17, 0, 1, 1), // 91
  hex(15, 0, 0, 1), // 92
  hex(16, 1, 0, 1), // 93
  hex(9, 1, 0, 0), // 94
  hex(15, 0, 0, 0), // 95
  hex(13, 0, 0, 0), // 96
  pent(8, 2, 0, 0, [13, 17]), // 97
  hex(13, 0, 1, 0), // 98
  hex(17, 1, 0, 1), // 99
  hex(19, 0, 1, 0), // 100
  hex(14, 0, 1, 0), // 101
  hex(19, 0, 1, 1), // 102
  hex(17, 0, 1, 0), // 103
  hex(13, 0, 0, 1), // 104
  hex(17, 0, 0, 0), // 105
  hex(16, 1, 0, 0), // 106
  pent(9, 2, 0, 0, [14, 18]), // 107
  hex(15, 1, 0, 1), // 108
  hex(15, 1, 0, 0), // 109
  hex(18, 0, 1, 1), // 110
  hex(18, 0, 0, 1), // 111
  hex(19, 0, 0, 1), // 112
  hex(17, 1, 0, 0), // 113
  hex(19, 0, 0, 0), // 114
  hex(18, 0, 1, 0), // 115
  hex(18, 1, 0, 1), // 116
  pent(19, 2, 0, 0, [-1, -1]), // 117
  hex(19, 1, 0, 0), // 118
  hex(18, 0, 0, 0), // 119
  hex(19, 1, 0, 1), // 120
  hex(18, 1, 0, 0), // 121
];

#[inline]
fn in_range(base_cell: i32) -> bool {
  (0..NUM_BASE_CELLS).contains(&base_cell)
}

/// Whether the base cell is one of the twelve pentagons. False for out of range cells.
#[inline]
#[must_use]
pub(crate) fn _is_base_cell_pentagon(base_cell: i32) -> bool {
  in_range(base_cell) && BASE_CELL_DATA[base_cell as usize].is_pentagon
}

/// Base cells 4 and 117 are the polar pentagons, whose neighbors all sit on the i axis.
#[inline]
#[must_use]
pub(crate) const fn _is_base_cell_polar_pentagon(base_cell: i32) -> bool {
  base_cell == 4 || base_cell == 117
}

#[inline]
fn face_lookup(h: &FaceIJK) -> Option<BaseCellOrient> {
  let c = h.coord;
  let coord_ok = |v: i32| (0..=MAX_FACE_COORD).contains(&v);
  if !(0..NUM_ICOSA_FACES).contains(&h.face) || !coord_ok(c.i) || !coord_ok(c.j) || !coord_ok(c.k) {
    return None;
  }
  Some(FACE_IJK_BASE_CELLS[h.face as usize][c.i as usize][c.j as usize][c.k as usize])
}

/// Base cell at a resolution 0 face IJK position; `INVALID_BASE_CELL` outside the table.
#[must_use]
pub(crate) fn _face_ijk_to_base_cell(h: &FaceIJK) -> i32 {
  face_lookup(h).map_or(INVALID_BASE_CELL, |orient| orient.base_cell)
}

/// Rotations from the face's coordinate system into the base cell's.
#[must_use]
pub(crate) fn _face_ijk_to_base_cell_ccwrot60(h: &FaceIJK) -> i32 {
  face_lookup(h).map_or(INVALID_ROTATIONS, |orient| orient.ccw_rot60)
}

/// Home face IJK of a base cell; the face 0 origin for out of range cells.
#[must_use]
pub(crate) fn _base_cell_to_face_ijk(base_cell: i32) -> FaceIJK {
  if !in_range(base_cell) {
    return FaceIJK::default();
  }
  BASE_CELL_DATA[base_cell as usize].home_fijk
}

/// Whether `test_face` is one of the pentagon's clockwise offset faces.
#[must_use]
pub(crate) fn _base_cell_is_cw_offset(base_cell: i32, test_face: i32) -> bool {
  if !in_range(base_cell) {
    return false;
  }
  let offsets = BASE_CELL_DATA[base_cell as usize].cw_offset_pent;
  offsets[0] == test_face || offsets[1] == test_face
}

/// Neighboring base cell in direction `dir`, `INVALID_BASE_CELL` when there is none.
#[must_use]
pub(crate) fn _get_base_cell_neighbor(base_cell: i32, dir: Direction) -> i32 {
  if !in_range(base_cell) || dir == Direction::InvalidDigit {
    return INVALID_BASE_CELL;
  }
  BASE_CELL_NEIGHBORS[base_cell as usize][dir as usize]
}

/// Rotations into the neighboring base cell's system, `INVALID_ROTATIONS` when there is none.
#[must_use]
pub(crate) fn _get_base_cell_neighbor_60ccw_rots(base_cell: i32, dir: Direction) -> i32 {
  if !in_range(base_cell) || dir == Direction::InvalidDigit {
    return INVALID_ROTATIONS;
  }
  BASE_CELL_NEIGHBOR_60CCW_ROTS[base_cell as usize][dir as usize]
}

/// Direction from one base cell to a neighboring one, `InvalidDigit` if not adjacent.
#[must_use]
pub(crate) fn _get_base_cell_direction(origin_base_cell: i32, neighboring_base_cell: i32) -> Direction {
  Direction::ALL
    .into_iter()
    .find(|dir| _get_base_cell_neighbor(origin_base_cell, *dir) == neighboring_base_cell)
    .unwrap_or(Direction::InvalidDigit)
}
