//! Icosahedron face projection: geo <-> face IJK, face overage and cell boundaries.

use crate::constants::{
  EPSILON, MAX_H3_RES, M_AP7_ROT_RADS, M_SQRT3_2, M_SQRT7, NUM_HEX_VERTS, NUM_ICOSA_FACES, NUM_PENT_VERTS,
  RES0_U_GNOMONIC,
};
use crate::coords::ijk::{
  _down_ap3, _down_ap3r, _down_ap7r, _hex2d_to_coord_ijk, _ijk_add, _ijk_normalize, _ijk_rotate60_ccw,
  _ijk_rotate60_cw, _ijk_scale, _ijk_sub, _ijk_to_hex2d,
};
use crate::geo_coord::{_geo_az_distance_rads, _geo_azimuth_rads, _pos_angle_rads};
use crate::h3_index::is_res_class_iii;
use crate::math::vec2d::{_v2d_equals, _v2d_intersect, _v2d_mag};
use crate::math::vec3d::{_geo_to_vec3d, _point_square_dist};
use crate::types::{CoordIJK, FaceIJK, FaceOrientIJK, GeoBoundary, GeoCoord, Vec2d, Vec3d};

const FACES: usize = NUM_ICOSA_FACES as usize;

// face neighbor quadrants
const IJ: i32 = 1;
const KI: i32 = 2;
const JK: i32 = 3;

/// Where a coordinate landed relative to its face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// On the original face.
  NoOverage,
  /// On a face edge; only possible on substrate grids.
  FaceEdge,
  /// Moved to a new face.
  NewFace,
}

const fn orient(face: i32, i: i32, j: i32, k: i32, ccw_rot60: i32) -> FaceOrientIJK {
  FaceOrientIJK {
    face,
    translate: CoordIJK::new(i, j, k),
    ccw_rot60,
  }
}

/// Icosahedron face centers in lat/lon radians.
#[rustfmt::skip]
pub(crate) const FACE_CENTER_GEO: [GeoCoord; FACES] = [
  GeoCoord::new(0.803582649718989942, 1.248397419617396099), // 0
  GeoCoord::new(1.307747883455638156, 2.536945009877921159), // 1
  GeoCoord::new(1.054751253523952054, -1.347517358900396623), // 2
  GeoCoord::new(0.600191595538186799, -0.450603909469755746), // 3
  GeoCoord::new(0.491715428198773866, 0.401988202911306943), // 4
  GeoCoord::new(0.172745327415618701, 1.678146885280433686), // 5
  GeoCoord::new(0.605929321571350690, 2.953923329812411617), // 6
  GeoCoord::new(0.427370518328979641, -1.888876200336285401), // 7
  GeoCoord::new(-0.079066118549212831, -0.733429513380867741), // 8
  GeoCoord::new(-0.230961644455383637, 0.506495587332349035), // 9
  GeoCoord::new(0.079066118549212831, 2.408163140208925497), // 10
  GeoCoord::new(0.230961644455383637, -2.635097066257444203), // 11
  GeoCoord::new(-0.172745327415618701, -1.463445768309359553), // 12
  GeoCoord::new(-0.605929321571350690, -0.187669323777381622), // 13
  GeoCoord::new(-0.427370518328979641, 1.252716453253507838), // 14
  GeoCoord::new(-0.600191595538186799, 2.690988744120037492), // 15
  GeoCoord::new(-0.491715428198773866, -2.739604450678486295), // 16
  GeoCoord::new(-0.803582649718989942, -1.893195233972397139), // 17
  GeoCoord::new(-1.307747883455638156, -0.604647643711872080), // 18
  GeoCoord::new(-1.054751253523952054, 1.794075294689396615), // 19
];

/// Icosahedron face centers on the unit sphere.
#[rustfmt::skip]
const FACE_CENTER_POINT: [Vec3d; FACES] = [
  Vec3d { x: 0.2199307791404606, y: 0.6583691780274996, z: 0.7198475378926182 }, // 0
  Vec3d { x: -0.2139234834501421, y: 0.1478171829550703, z: 0.9656017935214205 }, // 1
  Vec3d { x: 0.1092625278784797, y: -0.4811951572873210, z: 0.8697775121287253 }, // 2
  Vec3d { x: 0.7428567301586791, y: -0.3593941678278028, z: 0.5648005936517033 }, // 3
  Vec3d { x: 0.8112534709140969, y: 0.3448953237639384, z: 0.4721387736413930 }, // 4
  Vec3d { x: -0.1055498149613921, y: 0.9794457296411413, z: 0.1718874610009365 }, // 5
  Vec3d { x: -0.8075407579970092, y: 0.1533552485898818, z: 0.5695261994882688 }, // 6
  Vec3d { x: -0.2846148069787907, y: -0.8644080972654206, z: 0.4144792552473539 }, // 7
  Vec3d { x: 0.7405621473854482, y: -0.6673299564565524, z: -0.0789837646326737 }, // 8
  Vec3d { x: 0.8512303986474293, y: 0.4722343788582681, z: -0.2289137388687808 }, // 9
  Vec3d { x: -0.7405621473854481, y: 0.6673299564565524, z: 0.0789837646326737 }, // 10
  Vec3d { x: -0.8512303986474292, y: -0.4722343788582682, z: 0.2289137388687808 }, // 11
  Vec3d { x: 0.1055498149613919, y: -0.9794457296411413, z: -0.1718874610009365 }, // 12
  Vec3d { x: 0.8075407579970092, y: -0.1533552485898819, z: -0.5695261994882688 }, // 13
  Vec3d { x: 0.2846148069787908, y: 0.8644080972654204, z: -0.4144792552473539 }, // 14
  Vec3d { x: -0.7428567301586791, y: 0.3593941678278027, z: -0.5648005936517033 }, // 15
  Vec3d { x: -0.8112534709140971, y: -0.3448953237639382, z: -0.4721387736413930 }, // 16
  Vec3d { x: -0.2199307791404607, y: -0.6583691780274996, z: -0.7198475378926182 }, // 17
  Vec3d { x: 0.2139234834501420, y: -0.1478171829550704, z: -0.9656017935214205 }, // 18
  Vec3d { x: -0.1092625278784796, y: 0.4811951572873210, z: -0.8697775121287253 }, // 19
];

/// Azimuth from each face center to its vertices 0, 1 and 2 (the i, j and k axes).
#[rustfmt::skip]
const FACE_AXES_AZ_RADS_CII: [[f64; 3]; FACES] = [
  [5.619958268523939882, 3.525563166130744542, 1.431168063737548730], // 0
  [5.760339081714187279, 3.665943979320991689, 1.571548876927796127], // 1
  [0.780213654393430055, 4.969003859179821079, 2.874608756786625655], // 2
  [0.430469363979999913, 4.619259568766391033, 2.524864466373195467], // 3
  [6.130269123335111400, 4.035874020941915804, 1.941478918548720291], // 4
  [2.692877706530642877, 0.598482604137447119, 4.787272808923838195], // 5
  [2.982963003477243874, 0.888567901084048369, 5.077358105870439581], // 6
  [3.532912002790141181, 1.438516900396945656, 5.627307105183336758], // 7
  [3.494305004259568154, 1.399909901866372864, 5.588700106652763840], // 8
  [3.003214169499538391, 0.908819067106342928, 5.097609271892733906], // 9
  [5.930472956509811562, 3.836077854116615875, 1.741682751723420374], // 10
  [0.138378484090254847, 4.327168688876645809, 2.232773586483450311], // 11
  [0.448714947059150361, 4.637505151845541521, 2.543110049452346120], // 12
  [0.158629650112549365, 4.347419854898940135, 2.253024752505744869], // 13
  [5.891865957979238535, 3.797470855586042958, 1.703075753192847583], // 14
  [2.711123289609793325, 0.616728187216597771, 4.805518392002988683], // 15
  [3.294508837434268316, 1.200113735041072948, 5.388903939827463911], // 16
  [3.804819692245439833, 1.710424589852244509, 5.899214794638635174], // 17
  [3.664438879055192436, 1.570043776661997111, 5.758833981448388027], // 18
  [2.361378999196363184, 0.266983896803167583, 4.455774101589558636], // 19
];

/// Neighboring face orientation for each face, indexed by quadrant (center, ij, ki, jk).
#[rustfmt::skip]
const FACE_NEIGHBORS: [[FaceOrientIJK; 4]; FACES] = [
  [orient(0, 0, 0, 0, 0), orient(4, 2, 0, 2, 1), orient(1, 2, 2, 0, 5), orient(5, 0, 2, 2, 3)], // 0
  [orient(1, 0, 0, 0, 0), orient(0, 2, 0, 2, 1), orient(2, 2, 2, 0, 5), orient(6, 0, 2, 2, 3)], // 1
  [orient(2, 0, 0, 0, 0), orient(1, 2, 0, 2, 1), orient(3, 2, 2, 0, 5), orient(7, 0, 2, 2, 3)], // 2
  [orient(3, 0, 0, 0, 0), orient(2, 2, 0, 2, 1), orient(4, 2, 2, 0, 5), orient(8, 0, 2, 2, 3)], // 3
  [orient(4, 0, 0, 0, 0), orient(3, 2, 0, 2, 1), orient(0, 2, 2, 0, 5), orient(9, 0, 2, 2, 3)], // 4
  [orient(5, 0, 0, 0, 0), orient(10, 2, 2, 0, 3), orient(14, 2, 0, 2, 3), orient(0, 0, 2, 2, 3)], // 5
  [orient(6, 0, 0, 0, 0), orient(11, 2, 2, 0, 3), orient(10, 2, 0, 2, 3), orient(1, 0, 2, 2, 3)], // 6
  [orient(7, 0, 0, 0, 0), orient(12, 2, 2, 0, 3), orient(11, 2, 0, 2, 3), orient(2, 0, 2, 2, 3)], // 7
  [orient(8, 0, 0, 0, 0), orient(13, 2, 2, 0, 3), orient(12, 2, 0, 2, 3), orient(3, 0, 2, 2, 3)], // 8
  [orient(9, 0, 0, 0, 0), orient(14, 2, 2, 0, 3), orient(13, 2, 0, 2, 3), orient(4, 0, 2, 2, 3)], // 9
  [orient(10, 0, 0, 0, 0), orient(5, 2, 2, 0, 3), orient(6, 2, 0, 2, 3), orient(15, 0, 2, 2, 3)], // 10
  [orient(11, 0, 0, 0, 0), orient(6, 2, 2, 0, 3), orient(7, 2, 0, 2, 3), orient(16, 0, 2, 2, 3)], // 11
  [orient(12, 0, 0, 0, 0), orient(7, 2, 2, 0, 3), orient(8, 2, 0, 2, 3), orient(17, 0, 2, 2, 3)], // 12
  [orient(13, 0, 0, 0, 0), orient(8, 2, 2, 0, 3), orient(9, 2, 0, 2, 3), orient(18, 0, 2, 2, 3)], // 13
  [orient(14, 0, 0, 0, 0), orient(9, 2, 2, 0, 3), orient(5, 2, 0, 2, 3), orient(19, 0, 2, 2, 3)], // 14
  [orient(15, 0, 0, 0, 0), orient(16, 2, 0, 2, 1), orient(19, 2, 2, 0, 5), orient(10, 0, 2, 2, 3)], // 15
  [orient(16, 0, 0, 0, 0), orient(17, 2, 0, 2, 1), orient(15, 2, 2, 0, 5), orient(11, 0, 2, 2, 3)], // 16
  [orient(17, 0, 0, 0, 0), orient(18, 2, 0, 2, 1), orient(16, 2, 2, 0, 5), orient(12, 0, 2, 2, 3)], // 17
  [orient(18, 0, 0, 0, 0), orient(19, 2, 0, 2, 1), orient(17, 2, 2, 0, 5), orient(13, 0, 2, 2, 3)], // 18
  [orient(19, 0, 0, 0, 0), orient(15, 2, 0, 2, 1), orient(18, 2, 2, 0, 5), orient(14, 0, 2, 2, 3)], // 19
];

/// Quadrant of the destination face as seen from the origin face, `-1` when not adjacent.
#[rustfmt::skip]
const ADJACENT_FACE_DIR: [[i32; FACES]; FACES] = [
  [ 0, KI, -1, -1, IJ, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 0
  [IJ,  0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 1
  [-1, IJ,  0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 2
  [-1, -1, IJ,  0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 3
  [KI, -1, -1, IJ,  0, -1, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 4
  [JK, -1, -1, -1, -1,  0, -1, -1, -1, -1, IJ, -1, -1, -1, KI, -1, -1, -1, -1, -1], // 5
  [-1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1, -1, -1], // 6
  [-1, -1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1, -1], // 7
  [-1, -1, -1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1], // 8
  [-1, -1, -1, -1, JK, -1, -1, -1, -1,  0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1], // 9
  [-1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1, -1, -1, -1], // 10
  [-1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1, -1, -1], // 11
  [-1, -1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1, -1], // 12
  [-1, -1, -1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1,  0, -1, -1, -1, -1, JK, -1], // 13
  [-1, -1, -1, -1, -1, KI, -1, -1, -1, IJ, -1, -1, -1, -1,  0, -1, -1, -1, -1, JK], // 14
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, -1,  0, IJ, -1, -1, KI], // 15
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI,  0, IJ, -1, -1], // 16
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI,  0, IJ, -1], // 17
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI,  0, IJ], // 18
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, IJ, -1, -1, KI,  0], // 19
];

/// Face extent along the sum of the IJK components, by Class II resolution.
/// Odd entries are unused; Class III lookups go through the next finer resolution.
#[rustfmt::skip]
const MAX_DIM_BY_CII_RES: [i32; (MAX_H3_RES + 2) as usize] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4_802, -1, 33_614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Unit translation length between faces, by Class II resolution.
#[rustfmt::skip]
const UNIT_SCALE_BY_CII_RES: [i32; (MAX_H3_RES + 2) as usize] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2_401, -1, 16_807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

/// Closest face to a point and the squared euclidean distance to its center.
fn _geo_to_closest_face(g: &GeoCoord) -> (i32, f64) {
  let v3d = _geo_to_vec3d(g);

  let mut face = 0;
  let mut sqd = _point_square_dist(&FACE_CENTER_POINT[0], &v3d);
  for (f, center) in FACE_CENTER_POINT.iter().enumerate().skip(1) {
    let sqd_t = _point_square_dist(center, &v3d);
    if sqd_t < sqd {
      face = f as i32;
      sqd = sqd_t;
    }
  }
  (face, sqd)
}

/// Face and 2D hex coordinates of a point at resolution `res`.
#[must_use]
pub(crate) fn _geo_to_hex2d(g: &GeoCoord, res: i32) -> (i32, Vec2d) {
  let (face, sqd) = _geo_to_closest_face(g);

  // cos(r) = 1 - 2 * sin^2(r/2) = 1 - sqd/2
  let mut r = (1.0 - sqd / 2.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  // ccw theta from the Class II i-axis
  let f = face as usize;
  let az = _pos_angle_rads(_geo_azimuth_rads(&FACE_CENTER_GEO[f], g));
  let mut theta = _pos_angle_rads(FACE_AXES_AZ_RADS_CII[f][0] - az);
  if is_res_class_iii(res) {
    theta = _pos_angle_rads(theta - M_AP7_ROT_RADS);
  }

  // gnomonic scaling, then scale to the resolution's unit length
  r = r.tan() / RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= M_SQRT7;
  }

  (
    face,
    Vec2d {
      x: r * theta.cos(),
      y: r * theta.sin(),
    },
  )
}

/// Point on the sphere for 2D hex coordinates on `face`.
///
/// `substrate` marks coordinates on an aperture 3 substrate grid, which are
/// already Class III adjusted.
#[must_use]
pub(crate) fn _hex2d_to_geo(v: &Vec2d, face: i32, res: i32, substrate: bool) -> GeoCoord {
  let f = face as usize;
  let mut r = _v2d_mag(v);
  if r < EPSILON {
    return FACE_CENTER_GEO[f];
  }

  let mut theta = v.y.atan2(v.x);

  for _ in 0..res {
    r /= M_SQRT7;
  }

  if substrate {
    r /= 3.0;
    if is_res_class_iii(res) {
      r /= M_SQRT7;
    }
  }

  r = (r * RES0_U_GNOMONIC).atan();

  if !substrate && is_res_class_iii(res) {
    theta = _pos_angle_rads(theta + M_AP7_ROT_RADS);
  }

  // theta as an azimuth from the face center
  theta = _pos_angle_rads(FACE_AXES_AZ_RADS_CII[f][0] - theta);

  _geo_az_distance_rads(&FACE_CENTER_GEO[f], theta, r)
}

/// Face IJK of the cell containing `g` at resolution `res`.
#[must_use]
pub(crate) fn _geo_to_face_ijk(g: &GeoCoord, res: i32) -> FaceIJK {
  let (face, v) = _geo_to_hex2d(g, res);
  FaceIJK::new(face, _hex2d_to_coord_ijk(&v))
}

/// Center point of a face IJK cell.
#[must_use]
pub(crate) fn _face_ijk_to_geo(h: &FaceIJK, res: i32) -> GeoCoord {
  _hex2d_to_geo(&_ijk_to_hex2d(&h.coord), h.face, res, false)
}

/// Moves `fijk` onto the neighboring face when it lies past its face's extent.
///
/// `res` must be a Class II resolution. `pent_leading_4` rotates out the
/// missing pentagon sub-sequence when the cell is a pentagon with leading digit 4.
pub(crate) fn _adjust_overage_class_ii(fijk: &mut FaceIJK, res: i32, pent_leading_4: bool, substrate: bool) -> Overage {
  let mut max_dim = MAX_DIM_BY_CII_RES[res as usize];
  if substrate {
    max_dim *= 3;
  }

  let ijk = fijk.coord;
  let sum = ijk.i + ijk.j + ijk.k;

  if substrate && sum == max_dim {
    return Overage::FaceEdge;
  }
  if sum <= max_dim {
    return Overage::NoOverage;
  }

  let mut coord = ijk;
  let orient = if ijk.k > 0 {
    if ijk.j > 0 {
      FACE_NEIGHBORS[fijk.face as usize][JK as usize]
    } else {
      if pent_leading_4 {
        // rotate about the pentagon center to skip the missing sequence
        let origin = CoordIJK::new(max_dim, 0, 0);
        coord = _ijk_add(_ijk_rotate60_cw(_ijk_sub(coord, origin)), origin);
      }
      FACE_NEIGHBORS[fijk.face as usize][KI as usize]
    }
  } else {
    FACE_NEIGHBORS[fijk.face as usize][IJ as usize]
  };

  for _ in 0..orient.ccw_rot60 {
    coord = _ijk_rotate60_ccw(coord);
  }

  let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
  if substrate {
    unit_scale *= 3;
  }
  coord = _ijk_normalize(_ijk_add(coord, _ijk_scale(orient.translate, unit_scale)));

  fijk.face = orient.face;
  fijk.coord = coord;

  // pentagon boundary points can end up on an edge
  if substrate && coord.i + coord.j + coord.k == max_dim {
    Overage::FaceEdge
  } else {
    Overage::NewFace
  }
}

/// Repeats the substrate overage adjustment until a pentagon vertex settles on a face.
pub(crate) fn _adjust_pent_vert_overage(fijk: &mut FaceIJK, res: i32) -> Overage {
  loop {
    let overage = _adjust_overage_class_ii(fijk, res, false, true);
    if overage != Overage::NewFace {
      return overage;
    }
  }
}

// vertices of an origin-centered cell, ccw from the i-axis, on the aperture
// 33r substrate (Class II) or the 33r7r substrate (Class III)
#[rustfmt::skip]
const VERTS_CII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(2, 1, 0), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 2, 1),
  CoordIJK::new(0, 1, 2), CoordIJK::new(1, 0, 2), CoordIJK::new(2, 0, 1),
];
#[rustfmt::skip]
const VERTS_CIII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(5, 4, 0), CoordIJK::new(1, 5, 0), CoordIJK::new(0, 5, 4),
  CoordIJK::new(0, 1, 5), CoordIJK::new(4, 0, 5), CoordIJK::new(5, 0, 1),
];

/// Substrate grid vertices of a cell. Returns the substrate resolution with
/// the vertices; pentagons use the first five.
fn _substrate_verts<const N: usize>(fijk: &FaceIJK, res: i32) -> (i32, [FaceIJK; N]) {
  let offsets = if is_res_class_iii(res) { &VERTS_CIII } else { &VERTS_CII };

  let mut center = _down_ap3r(_down_ap3(fijk.coord));
  let mut adj_res = res;
  // Class III needs an extra cw aperture 7 to land on a Class II grid
  if is_res_class_iii(res) {
    center = _down_ap7r(center);
    adj_res += 1;
  }

  let mut verts = [FaceIJK::default(); N];
  for (vert, offset) in verts.iter_mut().zip(offsets.iter()) {
    *vert = FaceIJK::new(fijk.face, _ijk_normalize(_ijk_add(center, *offset)));
  }
  (adj_res, verts)
}

/// Substrate vertices of a hexagonal cell and the substrate resolution.
#[must_use]
pub(crate) fn _face_ijk_to_verts(fijk: &FaceIJK, res: i32) -> (i32, [FaceIJK; NUM_HEX_VERTS]) {
  _substrate_verts(fijk, res)
}

/// Substrate vertices of a pentagonal cell and the substrate resolution.
#[must_use]
pub(crate) fn _face_ijk_pent_to_verts(fijk: &FaceIJK, res: i32) -> (i32, [FaceIJK; NUM_PENT_VERTS]) {
  _substrate_verts(fijk, res)
}

/// Endpoints of the icosahedron edge in direction `quadrant` on a substrate grid.
fn _icosa_edge(adj_res: i32, quadrant: i32) -> (Vec2d, Vec2d) {
  let max_dim = f64::from(MAX_DIM_BY_CII_RES[adj_res as usize]);
  let v0 = Vec2d { x: 3.0 * max_dim, y: 0.0 };
  let v1 = Vec2d {
    x: -1.5 * max_dim,
    y: 3.0 * M_SQRT3_2 * max_dim,
  };
  let v2 = Vec2d {
    x: -1.5 * max_dim,
    y: -3.0 * M_SQRT3_2 * max_dim,
  };

  match quadrant {
    IJ => (v0, v1),
    JK => (v1, v2),
    _ => (v2, v0),
  }
}

/// Boundary of a cell given its center face IJK.
///
/// Class III edges that cross an icosahedron edge get an extra vertex at the
/// crossing when `add_edge_verts` is set.
#[must_use]
pub(crate) fn _face_ijk_to_geo_boundary(h: &FaceIJK, res: i32, is_pentagon: bool, add_edge_verts: bool) -> GeoBoundary {
  if is_pentagon {
    return _face_ijk_pent_to_geo_boundary(h, res, add_edge_verts);
  }

  let (adj_res, fijk_verts) = _face_ijk_to_verts(h, res);

  let mut g = GeoBoundary::default();
  let mut last_face = -1;
  let mut last_overage = Overage::NoOverage;
  // the extra iteration only checks the closing edge for a crossing
  for vert in 0..=NUM_HEX_VERTS {
    let v = vert % NUM_HEX_VERTS;

    let mut fijk = fijk_verts[v];
    let overage = _adjust_overage_class_ii(&mut fijk, adj_res, false, true);

    if is_res_class_iii(res)
      && vert > 0
      && fijk.face != last_face
      && last_overage != Overage::FaceEdge
      && add_edge_verts
    {
      let last_v = (v + 5) % NUM_HEX_VERTS;
      let orig2d0 = _ijk_to_hex2d(&fijk_verts[last_v].coord);
      let orig2d1 = _ijk_to_hex2d(&fijk_verts[v].coord);

      let face2 = if last_face == h.face { fijk.face } else { last_face };
      let (edge0, edge1) = _icosa_edge(adj_res, ADJACENT_FACE_DIR[h.face as usize][face2 as usize]);

      let inter = _v2d_intersect(&orig2d0, &orig2d1, &edge0, &edge1);
      // a crossing at a cell vertex leaves both edges on one face
      if !_v2d_equals(&orig2d0, &inter) && !_v2d_equals(&orig2d1, &inter) {
        g.push(_hex2d_to_geo(&inter, h.face, adj_res, true));
      }
    }

    if vert < NUM_HEX_VERTS {
      g.push(_hex2d_to_geo(&_ijk_to_hex2d(&fijk.coord), fijk.face, adj_res, true));
    }

    last_face = fijk.face;
    last_overage = overage;
  }
  g
}

/// Boundary of a pentagonal cell. Every Class III pentagon edge crosses an
/// icosahedron edge.
#[must_use]
pub(crate) fn _face_ijk_pent_to_geo_boundary(h: &FaceIJK, res: i32, add_edge_verts: bool) -> GeoBoundary {
  let (adj_res, fijk_verts) = _face_ijk_pent_to_verts(h, res);

  let mut g = GeoBoundary::default();
  let mut last_fijk = FaceIJK::default();
  for vert in 0..=NUM_PENT_VERTS {
    let v = vert % NUM_PENT_VERTS;

    let mut fijk = fijk_verts[v];
    _adjust_pent_vert_overage(&mut fijk, adj_res);

    if is_res_class_iii(res) && vert > 0 && add_edge_verts {
      let orig2d0 = _ijk_to_hex2d(&last_fijk.coord);

      // express this vertex on the last vertex's face
      let current_to_last_dir = ADJACENT_FACE_DIR[fijk.face as usize][last_fijk.face as usize];
      let orient = FACE_NEIGHBORS[fijk.face as usize][current_to_last_dir as usize];
      let mut ijk = fijk.coord;
      for _ in 0..orient.ccw_rot60 {
        ijk = _ijk_rotate60_ccw(ijk);
      }
      let trans = _ijk_scale(orient.translate, UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3);
      let orig2d1 = _ijk_to_hex2d(&_ijk_normalize(_ijk_add(ijk, trans)));

      let (edge0, edge1) = _icosa_edge(adj_res, ADJACENT_FACE_DIR[orient.face as usize][fijk.face as usize]);
      let inter = _v2d_intersect(&orig2d0, &orig2d1, &edge0, &edge1);
      g.push(_hex2d_to_geo(&inter, orient.face, adj_res, true));
    }

    if vert < NUM_PENT_VERTS {
      g.push(_hex2d_to_geo(&_ijk_to_hex2d(&fijk.coord), fijk.face, adj_res, true));
    }

    last_fijk = fijk;
  }
  g
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::EPSILON_RAD;
  use crate::geo_coord::{geo_almost_equal, geo_almost_equal_threshold, point_dist_rads};

  #[test]
  fn test_geo_to_hex2d_face_centers() {
    for (face, center) in FACE_CENTER_GEO.iter().enumerate() {
      let (f, v) = _geo_to_hex2d(center, 0);
      assert_eq!(f, face as i32, "face center picks its own face");
      assert!(_v2d_mag(&v) < 1e-9, "face center is the hex2d origin");
    }
  }

  #[test]
  fn test_hex2d_to_geo_origin() {
    for face in 0..NUM_ICOSA_FACES {
      let g = _hex2d_to_geo(&Vec2d::default(), face, 3, false);
      assert!(geo_almost_equal(&g, &FACE_CENTER_GEO[face as usize]), "origin maps to the face center");
    }
  }

  #[test]
  fn test_geo_to_closest_face_poles() {
    let (north, _) = _geo_to_closest_face(&GeoCoord::new(crate::constants::M_PI_2, 0.0));
    assert!((0..5).contains(&north), "north pole is on a northern cap face");
    let (south, _) = _geo_to_closest_face(&GeoCoord::new(-crate::constants::M_PI_2, 0.0));
    assert!((15..20).contains(&south), "south pole is on a southern cap face");
  }

  #[test]
  fn test_hex2d_round_trip() {
    for res in 0..6 {
      for &(x, y) in &[(0.3, 0.2), (-0.4, 0.1), (0.25, -0.35)] {
        let v = Vec2d { x, y };
        let g = _hex2d_to_geo(&v, 7, res, false);
        let (face, back) = _geo_to_hex2d(&g, res);
        assert_eq!(face, 7, "point stays on its face");
        assert!((back.x - x).abs() < 1e-9 && (back.y - y).abs() < 1e-9, "hex2d survives the round trip");
      }
    }
  }

  #[test]
  fn test_face_ijk_round_trip() {
    for res in 1..5 {
      for coord in [CoordIJK::new(0, 0, 0), CoordIJK::new(1, 0, 0), CoordIJK::new(0, 1, 0), CoordIJK::new(1, 1, 0)] {
        let fijk = FaceIJK::new(2, coord);
        let g = _face_ijk_to_geo(&fijk, res);
        assert_eq!(_geo_to_face_ijk(&g, res), fijk, "cell center maps back to its face IJK");
      }
    }
  }

  #[test]
  fn test_adjust_overage_class_ii() {
    let mut on_face = FaceIJK::new(0, CoordIJK::new(1, 1, 0));
    assert_eq!(
      _adjust_overage_class_ii(&mut on_face, 0, false, false),
      Overage::NoOverage,
      "inside the face"
    );
    assert_eq!(on_face, FaceIJK::new(0, CoordIJK::new(1, 1, 0)), "unchanged when on face");

    let mut on_edge = FaceIJK::new(0, CoordIJK::new(6, 0, 0));
    assert_eq!(
      _adjust_overage_class_ii(&mut on_edge, 0, false, true),
      Overage::FaceEdge,
      "substrate point on the edge"
    );

    let mut over = FaceIJK::new(0, CoordIJK::new(3, 0, 0));
    assert_eq!(_adjust_overage_class_ii(&mut over, 0, false, false), Overage::NewFace, "past the ij edge");
    assert_eq!(over.face, 4, "moved to the ij neighbor");

    let mut over_jk = FaceIJK::new(0, CoordIJK::new(0, 2, 1));
    assert_eq!(_adjust_overage_class_ii(&mut over_jk, 0, false, false), Overage::NewFace, "past the jk edge");
    assert_eq!(over_jk.face, 5, "moved to the jk neighbor");

    let mut over_ki = FaceIJK::new(0, CoordIJK::new(2, 0, 1));
    assert_eq!(_adjust_overage_class_ii(&mut over_ki, 0, false, false), Overage::NewFace, "past the ki edge");
    assert_eq!(over_ki.face, 1, "moved to the ki neighbor");
  }

  #[test]
  fn test_adjacent_face_dir_is_consistent() {
    for (face, row) in FACE_NEIGHBORS.iter().enumerate() {
      assert_eq!(row[0].face, face as i32, "quadrant 0 is the face itself");
      for (quadrant, orient) in row.iter().enumerate().skip(1) {
        assert_eq!(
          ADJACENT_FACE_DIR[face][orient.face as usize],
          quadrant as i32,
          "neighbor table and direction table agree"
        );
      }
    }
  }

  #[test]
  fn test_verts_class_ii() {
    let fijk = FaceIJK::new(3, CoordIJK::new(0, 0, 0));
    let (adj_res, verts) = _face_ijk_to_verts(&fijk, 2);
    assert_eq!(adj_res, 2, "Class II keeps the resolution");
    assert_eq!(verts[0].coord, CoordIJK::new(2, 1, 0), "first vertex offset");
    assert!(verts.iter().all(|v| v.face == 3), "vertices start on the cell face");

    let (adj_res, pent) = _face_ijk_pent_to_verts(&fijk, 1);
    assert_eq!(adj_res, 2, "Class III moves to the next Class II resolution");
    assert_eq!(pent[0].coord, CoordIJK::new(5, 4, 0), "first Class III vertex offset");
  }

  #[test]
  fn test_face_center_boundary() {
    for res in 0..3 {
      let fijk = FaceIJK::new(0, CoordIJK::default());
      let center = _face_ijk_to_geo(&fijk, res);
      let boundary = _face_ijk_to_geo_boundary(&fijk, res, false, true);
      assert_eq!(boundary.num_verts, NUM_HEX_VERTS, "face center cell has no crossings");

      let d0 = point_dist_rads(&center, &boundary.verts[0]);
      for vert in boundary.verts() {
        let d = point_dist_rads(&center, vert);
        assert!((d - d0).abs() < d0 * 0.1, "vertices are roughly equidistant from the center");
        assert!(!geo_almost_equal_threshold(vert, &center, EPSILON_RAD), "vertex is not the center");
      }
    }
  }
}
