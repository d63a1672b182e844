// src/traversal/mod.rs

pub mod hex_range;
pub mod k_ring;
pub mod neighbors; // h3NeighborRotations and its digit tables

pub use hex_range::{hex_range, hex_range_distances, hex_ranges, hex_ring};
pub use k_ring::{k_ring, k_ring_distances, max_kring_size};
pub use neighbors::{h3_neighbor, h3_neighbor_rotations};
