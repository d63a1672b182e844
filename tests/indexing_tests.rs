// tests/indexing_tests.rs

use hexgrid_h3::geo_coord::geo_almost_equal_threshold;
use hexgrid_h3::*;

#[test]
fn test_geo_to_h3_known_cells() {
  let sf = GeoCoord::from_degrees(37.779265, -122.419277);
  assert_eq!(h3_to_string(geo_to_h3(&sf, 5)), "85283083fffffff", "SF at res 5");
  assert_eq!(h3_to_string(geo_to_h3(&sf, 10)), "8a2830828767fff", "SF at res 10");

  let radians = GeoCoord::new(0.659966917, -2.1364398);
  assert_eq!(geo_to_h3(&radians, 5), H3Index::from_raw(0x85283083fffffff), "radian input near SF at res 5");

  let point = GeoCoord::from_degrees(20.0, 123.0);
  assert_eq!(geo_to_h3(&point, 2), H3Index::from_raw(0x824b9ffffffffff), "res 2 cell off Taiwan");
}

#[test]
fn test_geo_to_h3_poles() {
  let north = GeoCoord::from_degrees(90.0, 0.0);
  let south = GeoCoord::from_degrees(-90.0, 0.0);
  assert_eq!(geo_to_h3(&north, 3), H3Index::from_raw(0x830326fffffffff), "north pole");
  assert_eq!(geo_to_h3(&south, 4), H3Index::from_raw(0x84f2939ffffffff), "south pole");
}

#[test]
fn test_geo_to_h3_rejects_bad_input() {
  let sf = GeoCoord::from_degrees(37.779265, -122.419277);
  assert_eq!(geo_to_h3(&sf, -1), H3_NULL, "negative resolution");
  assert_eq!(geo_to_h3(&sf, 16), H3_NULL, "resolution past 15");
  assert_eq!(geo_to_h3(&GeoCoord::new(f64::NAN, 0.0), 5), H3_NULL, "NaN latitude");
  assert_eq!(geo_to_h3(&GeoCoord::new(0.0, f64::INFINITY), 5), H3_NULL, "infinite longitude");
}

#[test]
fn test_h3_to_geo_known_center() {
  let center = h3_to_geo(H3Index::from_raw(0x8928342e20fffff));
  let expected = GeoCoord::from_degrees(37.5012466151, -122.5003039349);
  assert!(geo_almost_equal_threshold(&center, &expected, 1e-9), "center {center:?}");
}

#[test]
fn test_boundary_vertex_counts() {
  let hexagon = H3Index::from_raw(0x8928342e20fffff);
  let boundary = h3_to_geo_boundary(hexagon, false);
  assert_eq!(boundary.verts().len(), 6, "hexagon");
  assert!(boundary.verts().iter().all(|v| v.lat.is_finite() && v.lon.is_finite()), "finite vertices");

  let mut pentagons = [H3_NULL; 12];
  get_pentagon_indexes(1, &mut pentagons).expect("valid resolution");
  for pentagon in pentagons {
    assert_eq!(h3_to_geo_boundary(pentagon, false).num_verts, 5, "pentagon {pentagon}");
    assert_eq!(h3_to_geo_boundary(pentagon, true).num_verts, 10, "class III pentagon {pentagon} with edge vertices");
  }
}

#[test]
fn test_boundary_surrounds_center() {
  let cell = H3Index::from_raw(0x85283473fffffff);
  let center = h3_to_geo(cell);
  let radius = edge_length_km(5).expect("valid resolution");
  for vert in h3_to_geo_boundary(cell, false).verts() {
    let dist = point_dist_km(&center, vert);
    assert!(dist > radius * 0.5 && dist < radius * 1.5, "vertex {dist} km from the center");
  }
}

#[test]
fn test_round_trip_through_centers() {
  let points = [
    (37.779265, -122.419277),
    (-33.8688, 151.2093),
    (51.5074, -0.1278),
    (64.1466, -21.9426),
    (-54.8019, -68.303),
    (0.0, 180.0),
  ];
  for (lat, lon) in points {
    let geo = GeoCoord::from_degrees(lat, lon);
    for res in 0..=MAX_H3_RES {
      let cell = geo_to_h3(&geo, res);
      assert!(h3_is_valid(cell), "({lat}, {lon}) at res {res}");
      assert_eq!(geo_to_h3(&h3_to_geo(cell), res), cell, "center of {cell} maps back");
    }
  }
}

#[test]
fn test_pentagon_round_trip() {
  for res in 0..=MAX_H3_RES {
    let mut pentagons = [H3_NULL; 12];
    get_pentagon_indexes(res, &mut pentagons).expect("valid resolution");
    for pentagon in pentagons {
      assert!(h3_is_pentagon(pentagon), "{pentagon} at res {res}");
      assert_eq!(geo_to_h3(&h3_to_geo(pentagon), res), pentagon, "center of pentagon {pentagon} maps back");
    }
  }
}

#[test]
fn test_faces() {
  let cell = H3Index::from_raw(0x85283473fffffff);
  assert_eq!(h3_faces(cell), vec![7], "interior cell sits on one face");
  assert_eq!(h3_to_face_ijk(cell).face, 7, "home face");

  let pentagon = H3Index::from_raw(0x8009fffffffffff);
  let faces = h3_faces(pentagon);
  assert_eq!(faces.len(), 5, "a pentagon touches five faces");
  let mut sorted = faces.clone();
  sorted.sort_unstable();
  sorted.dedup();
  assert_eq!(sorted.len(), 5, "distinct faces");
}
