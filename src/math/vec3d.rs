use crate::types::{GeoCoord, Vec3d};

#[inline]
fn _square(x: f64) -> f64 {
  x * x
}

/// Square of the euclidean distance between two 3D points.
#[inline]
#[must_use]
pub(crate) fn _point_square_dist(v1: &Vec3d, v2: &Vec3d) -> f64 {
  _square(v1.x - v2.x) + _square(v1.y - v2.y) + _square(v1.z - v2.z)
}

/// Point on the unit sphere for a latitude/longitude in radians.
#[inline]
#[must_use]
pub(crate) fn _geo_to_vec3d(geo: &GeoCoord) -> Vec3d {
  let r = geo.lat.cos();
  Vec3d {
    x: geo.lon.cos() * r,
    y: geo.lon.sin() * r,
    z: geo.lat.sin(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{EPSILON_RAD, M_PI, M_PI_2};

  #[test]
  fn test_point_square_dist() {
    let v1 = Vec3d { x: 0.0, y: 0.0, z: 0.0 };
    let v2 = Vec3d { x: 1.0, y: 0.0, z: 0.0 };
    let v3 = Vec3d { x: 0.0, y: 1.0, z: 1.0 };
    let v4 = Vec3d { x: 1.0, y: 1.0, z: 1.0 };
    let v5 = Vec3d { x: 1.0, y: 1.0, z: 2.0 };

    assert!(_point_square_dist(&v1, &v1).abs() < f64::EPSILON, "distance to self is 0");
    assert!((_point_square_dist(&v1, &v2) - 1.0).abs() < f64::EPSILON, "distance to <1,0,0> is 1");
    assert!((_point_square_dist(&v1, &v3) - 2.0).abs() < f64::EPSILON, "distance to <0,1,1> is 2");
    assert!((_point_square_dist(&v1, &v4) - 3.0).abs() < f64::EPSILON, "distance to <1,1,1> is 3");
    assert!((_point_square_dist(&v1, &v5) - 6.0).abs() < f64::EPSILON, "distance to <1,1,2> is 6");
  }

  #[test]
  fn test_geo_to_vec3d() {
    let origin = Vec3d::default();

    let p1 = _geo_to_vec3d(&GeoCoord { lat: 0.0, lon: 0.0 });
    assert!(
      (_point_square_dist(&origin, &p1) - 1.0).abs() < EPSILON_RAD,
      "Geo point is on the unit sphere"
    );

    let p2 = _geo_to_vec3d(&GeoCoord { lat: M_PI_2, lon: 0.0 });
    assert!(
      (_point_square_dist(&p1, &p2) - 2.0).abs() < EPSILON_RAD,
      "Geo point is on another axis"
    );

    let p3 = _geo_to_vec3d(&GeoCoord { lat: M_PI, lon: 0.0 });
    assert!(
      (_point_square_dist(&p1, &p3) - 4.0).abs() < EPSILON_RAD,
      "Geo point is the other side of the sphere"
    );
  }
}
