//! Spherical coordinate helpers.

use crate::constants::{EARTH_RADIUS_KM, EPSILON, EPSILON_RAD, M_180_PI, M_2PI, M_PI, M_PI_180, M_PI_2};
use crate::types::GeoCoord;

impl GeoCoord {
  /// Builds a coordinate from radians.
  #[inline]
  #[must_use]
  pub const fn new(lat: f64, lon: f64) -> Self {
    Self { lat, lon }
  }

  /// Builds a coordinate from decimal degrees.
  #[inline]
  #[must_use]
  pub fn from_degrees(lat_degs: f64, lon_degs: f64) -> Self {
    Self {
      lat: degs_to_rads(lat_degs),
      lon: degs_to_rads(lon_degs),
    }
  }

  /// Latitude in decimal degrees.
  #[inline]
  #[must_use]
  pub fn lat_degs(&self) -> f64 {
    rads_to_degs(self.lat)
  }

  /// Longitude in decimal degrees.
  #[inline]
  #[must_use]
  pub fn lon_degs(&self) -> f64 {
    rads_to_degs(self.lon)
  }
}

/// Normalizes radians to `[0, 2pi)` for inputs within one turn of that range.
#[inline]
#[must_use]
pub(crate) fn _pos_angle_rads(rads: f64) -> f64 {
  let tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  if rads >= M_2PI {
    tmp - M_2PI
  } else {
    tmp
  }
}

/// True when both components differ by less than `threshold`.
#[inline]
#[must_use]
pub fn geo_almost_equal_threshold(p1: &GeoCoord, p2: &GeoCoord, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lon - p2.lon).abs() < threshold
}

/// True when both components are within ~0.1mm of each other.
#[inline]
#[must_use]
pub fn geo_almost_equal(p1: &GeoCoord, p2: &GeoCoord) -> bool {
  geo_almost_equal_threshold(p1, p2, EPSILON_RAD)
}

/// Sets `p` from decimal degrees.
#[inline]
pub fn set_geo_degs(p: &mut GeoCoord, lat_degs: f64, lon_degs: f64) {
  *p = GeoCoord::from_degrees(lat_degs, lon_degs);
}

/// Converts decimal degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to decimal degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Folds latitude above the north pole back by pi.
#[inline]
#[must_use]
pub fn constrain_lat(mut lat: f64) -> f64 {
  while lat > M_PI_2 {
    lat -= M_PI;
  }
  lat
}

/// Wraps longitude into `[-pi, pi]`.
#[inline]
#[must_use]
pub fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Great circle distance in radians (spherical law of cosines).
#[must_use]
pub fn point_dist_rads(p1: &GeoCoord, p2: &GeoCoord) -> f64 {
  let mut big_c = (p2.lon - p1.lon).abs();
  if big_c > M_PI {
    // take the shorter way around
    let lon1 = if p1.lon < 0.0 { p1.lon + M_2PI } else { p1.lon };
    let lon2 = if p2.lon < 0.0 { p2.lon + M_2PI } else { p2.lon };
    big_c = (lon2 - lon1).abs();
  }

  let b = M_PI_2 - p1.lat;
  let a = M_PI_2 - p2.lat;

  let cos_c = (a.cos() * b.cos() + a.sin() * b.sin() * big_c.cos()).clamp(-1.0, 1.0);
  cos_c.acos()
}

/// Great circle distance in kilometers.
#[must_use]
pub fn point_dist_km(p1: &GeoCoord, p2: &GeoCoord) -> f64 {
  point_dist_rads(p1, p2) * EARTH_RADIUS_KM
}

/// Great circle distance in meters.
#[must_use]
pub fn point_dist_m(p1: &GeoCoord, p2: &GeoCoord) -> f64 {
  point_dist_km(p1, p2) * 1000.0
}

/// Azimuth in radians from `p1` to `p2`.
#[inline]
#[must_use]
pub(crate) fn _geo_azimuth_rads(p1: &GeoCoord, p2: &GeoCoord) -> f64 {
  (p2.lat.cos() * (p2.lon - p1.lon).sin())
    .atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * (p2.lon - p1.lon).cos())
}

/// Point `distance` radians from `p1` along azimuth `az`.
///
/// Due north/south headings and results landing on a pole are special cased
/// so longitude never comes out of a degenerate `atan2`.
#[must_use]
pub(crate) fn _geo_az_distance_rads(p1: &GeoCoord, az: f64, distance: f64) -> GeoCoord {
  if distance < EPSILON {
    return *p1;
  }

  let az = _pos_angle_rads(az);
  let mut p2 = GeoCoord::default();

  if az < EPSILON || (az - M_PI).abs() < EPSILON {
    p2.lat = if az < EPSILON { p1.lat + distance } else { p1.lat - distance };

    if (p2.lat - M_PI_2).abs() < EPSILON {
      p2.lat = M_PI_2;
      p2.lon = 0.0;
    } else if (p2.lat + M_PI_2).abs() < EPSILON {
      p2.lat = -M_PI_2;
      p2.lon = 0.0;
    } else {
      p2.lon = constrain_lng(p1.lon);
    }
    return p2;
  }

  let sin_lat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
  p2.lat = sin_lat.asin();

  if (p2.lat - M_PI_2).abs() < EPSILON {
    p2.lat = M_PI_2;
    p2.lon = 0.0;
  } else if (p2.lat + M_PI_2).abs() < EPSILON {
    p2.lat = -M_PI_2;
    p2.lon = 0.0;
  } else {
    let sin_lon = (az.sin() * distance.sin() / p2.lat.cos()).clamp(-1.0, 1.0);
    let cos_lon = ((distance.cos() - p1.lat.sin() * p2.lat.sin()) / p1.lat.cos() / p2.lat.cos()).clamp(-1.0, 1.0);
    p2.lon = constrain_lng(p1.lon + sin_lon.atan2(cos_lon));
  }
  p2
}
