//! Scalar and vector helpers used by the projection code.

pub mod extensions;
pub mod vec2d;
pub mod vec3d;
