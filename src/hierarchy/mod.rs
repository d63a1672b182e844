//! Cell hierarchy: parents, children and set compaction.

pub mod compaction;
pub mod parent_child;

pub use compaction::{compact, max_uncompact_size, uncompact};
pub use parent_child::{h3_to_center_child, h3_to_children, h3_to_parent, make_direct_child, max_h3_to_children_size};
