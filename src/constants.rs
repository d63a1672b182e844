//! Grid system constants.

use std::f64::consts;

/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * PI
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// General purpose threshold epsilon.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;
/// Epsilon of ~0.1mm in degrees.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Epsilon of ~0.1mm in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// sqrt(3) / 2.0
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// sin(60 degrees)
pub const M_SIN60: f64 = M_SQRT3_2;
/// 1 / sin(60 degrees)
pub const M_RSIN60: f64 = 1.0 / M_SQRT3_2;
/// sqrt(7)
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// One third
pub const M_ONETHIRD: f64 = 1.0 / 3.0;
/// One seventh
pub const M_ONESEVENTH: f64 = 1.0 / 7.0;

/// Rotation angle between Class II and Class III resolution axes (asin(sqrt(3/28))).
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Earth radius in kilometers using the WGS84 authalic radius.
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Scaling factor from hex2d resolution 0 unit length to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;

/// Maximum resolution; resolutions are numbered 0 through 15.
pub const MAX_H3_RES: i32 = 15;
/// Faces on an icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;
/// Resolution 0 base cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// Vertices in a hexagon.
pub const NUM_HEX_VERTS: usize = 6;
/// Vertices in a pentagon.
pub const NUM_PENT_VERTS: usize = 5;
/// Pentagons per resolution.
pub const NUM_PENTAGONS: i32 = 12;
/// Maximum boundary vertices: 5 pentagon vertices plus 5 edge crossings.
pub const MAX_CELL_BNDRY_VERTS: usize = 10;

/// Mode value for cell indexes.
pub const H3_HEXAGON_MODE: u8 = 1;

// index bit layout

/// Bit offset of the high bit.
pub const H3_MAX_OFFSET: u32 = 63;
/// Bit offset of the mode.
pub const H3_MODE_OFFSET: u32 = 59;
/// Bit offset of the base cell.
pub const H3_BC_OFFSET: u32 = 45;
/// Bit offset of the resolution.
pub const H3_RES_OFFSET: u32 = 52;
/// Bit offset of the reserved bits.
pub const H3_RESERVED_OFFSET: u32 = 56;
/// Bits per resolution digit.
pub const H3_PER_DIGIT_OFFSET: u32 = 3;

/// 1 in the highest bit, 0's everywhere else.
pub const H3_HIGH_BIT_MASK: u64 = 1u64 << H3_MAX_OFFSET;
/// 0 in the highest bit, 1's everywhere else.
pub const H3_HIGH_BIT_MASK_NEGATIVE: u64 = !H3_HIGH_BIT_MASK;
/// 1's in the 4 mode bits.
pub const H3_MODE_MASK: u64 = 0b1111u64 << H3_MODE_OFFSET;
/// 0's in the 4 mode bits.
pub const H3_MODE_MASK_NEGATIVE: u64 = !H3_MODE_MASK;
/// 1's in the 7 base cell bits.
pub const H3_BC_MASK: u64 = 0b111_1111u64 << H3_BC_OFFSET;
/// 0's in the 7 base cell bits.
pub const H3_BC_MASK_NEGATIVE: u64 = !H3_BC_MASK;
/// 1's in the 4 resolution bits.
pub const H3_RES_MASK: u64 = 0b1111u64 << H3_RES_OFFSET;
/// 0's in the 4 resolution bits.
pub const H3_RES_MASK_NEGATIVE: u64 = !H3_RES_MASK;
/// 1's in the 3 reserved bits.
pub const H3_RESERVED_MASK: u64 = 0b111u64 << H3_RESERVED_OFFSET;
/// 0's in the 3 reserved bits.
pub const H3_RESERVED_MASK_NEGATIVE: u64 = !H3_RESERVED_MASK;
/// 1's in the 3 bits of the resolution 15 digit.
pub const H3_DIGIT_MASK: u64 = 0b111u64;

/// Mode 0, resolution 0, base cell 0, and 7 in every digit: (1 << 45) - 1.
pub const H3_INIT: u64 = 35_184_372_088_831;

/// Average hexagon area in square kilometers, by resolution.
#[rustfmt::skip]
pub const AREAS_KM2: [f64; 16] = [
  4_250_546.848, 607_220.978_2, 86_745.854_03, 12_392.264_86,
  1_770.323_552, 252.903_364_5, 36.129_052_1, 5.161_293_2,
  0.737_327_6, 0.105_332_5, 0.015_047_5, 0.002_149_6,
  0.000_307_1, 0.000_043_9, 0.000_006_3, 0.000_000_9,
];

/// Average hexagon area in square meters, by resolution.
#[rustfmt::skip]
pub const AREAS_M2: [f64; 16] = [
  4.25055e12, 6.07221e11, 86_745_854_035.0, 12_392_264_862.0,
  1_770_323_552.0, 252_903_364.5, 36_129_052.1, 5_161_293.2,
  737_327.6, 105_332.5, 15_047.5, 2_149.6,
  307.1, 43.9, 6.3, 0.9,
];

/// Average hexagon edge length in kilometers, by resolution.
#[rustfmt::skip]
pub const EDGE_LENGTHS_KM: [f64; 16] = [
  1_107.712_591, 418.676_005_5, 158.244_655_8, 59.810_857_94,
  22.606_379_4, 8.544_408_276, 3.229_482_772, 1.220_629_759,
  0.461_354_684, 0.174_375_668, 0.065_907_807, 0.024_910_561,
  0.009_415_526, 0.003_559_893, 0.001_348_575, 0.000_509_713,
];

/// Average hexagon edge length in meters, by resolution.
#[rustfmt::skip]
pub const EDGE_LENGTHS_M: [f64; 16] = [
  1_107_712.591, 418_676.005_5, 158_244.655_8, 59_810.857_94,
  22_606.379_4, 8_544.408_276, 3_229.482_772, 1_220.629_759,
  461.354_683_7, 174.375_668_1, 65.907_807_49, 24.910_561_4,
  9.415_526_211, 3.559_893_033, 1.348_574_562, 0.509_713_273,
];

/// Number of unique cells (hexagons plus 12 pentagons), by resolution.
#[rustfmt::skip]
pub const NUM_HEXAGONS: [i64; 16] = [
  122, 842, 5_882, 41_162,
  288_122, 2_016_842, 14_117_882, 98_825_162,
  691_776_122, 4_842_432_842, 33_897_029_882, 237_279_209_162,
  1_660_954_464_122, 11_626_681_248_842, 81_386_768_741_882, 569_707_381_193_162,
];
