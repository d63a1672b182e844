#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)] // digit and resolution fields are narrow by construction
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // raw index literals read best as the hex strings they print as
#![allow(clippy::similar_names)]
#![allow(clippy::wildcard_imports)]

//! `hexgrid-h3` indexes the sphere with a hierarchical grid of hexagonal cells.
//!
//! Points are projected onto the faces of an icosahedron, snapped to a
//! hexagonal lattice and packed into a 64-bit [`H3Index`]. On top of the
//! encoding the crate offers parent/child navigation, set compaction and grid
//! traversal (neighbors, filled disks and rings) that stay correct across face
//! edges and around the twelve pentagons.
//!
//! ```
//! use hexgrid_h3::{geo_to_h3, h3_to_parent, h3_to_string, GeoCoord};
//!
//! let cell = geo_to_h3(&GeoCoord::from_degrees(37.779265, -122.419277), 10);
//! assert_eq!(h3_to_string(cell), "8a2830828767fff");
//! assert_eq!(h3_to_string(h3_to_parent(cell, 5)), "85283083fffffff");
//! ```

pub mod base_cells;
pub mod constants;
pub mod coords;
pub mod geo_coord;
pub mod h3_index;
pub mod hierarchy;
pub mod index_table;
pub mod indexing;
pub mod math;
pub mod measures;
pub mod traversal;
pub mod types;

pub use constants::{MAX_CELL_BNDRY_VERTS, MAX_H3_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
pub use geo_coord::{degs_to_rads, point_dist_km, point_dist_m, point_dist_rads, rads_to_degs};
pub use types::{
  CompactError, CoordIJ, CoordIJK, Direction, FaceIJK, GeoBoundary, GeoCoord, H3Error, H3Index, HexRangeError,
  UncompactError, Vec2d, Vec3d, H3_NULL,
};

pub use h3_index::inspection::{
  get_pentagon_indexes, get_res0_indexes, h3_faces, h3_get_faces, h3_is_pentagon, h3_is_valid, h3_to_face_ijk,
  max_face_count, pentagon_index_count, res0_index_count,
};
pub use h3_index::string_conv::{h3_to_string, string_to_h3};
pub use h3_index::{h3_get_base_cell, h3_get_resolution, h3_is_res_class_iii};
pub use hierarchy::{
  compact, h3_to_center_child, h3_to_children, h3_to_parent, max_h3_to_children_size, max_uncompact_size, uncompact,
};
pub use indexing::{geo_to_h3, h3_to_geo, h3_to_geo_boundary};
pub use measures::{edge_length_km, edge_length_m, hex_area_km2, hex_area_m2, num_hexagons};
pub use traversal::{
  h3_neighbor, h3_neighbor_rotations, hex_range, hex_range_distances, hex_ranges, hex_ring, k_ring, k_ring_distances,
  max_kring_size,
};
