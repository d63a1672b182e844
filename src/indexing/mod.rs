//! Conversion between geographic coordinates and cells.

pub mod from_h3;
pub mod to_h3;

pub use from_h3::{h3_to_geo, h3_to_geo_boundary};
pub use to_h3::geo_to_h3;
