mod bounding_box;

pub use bounding_box::{get_extents, get_extents_rotated, get_extents_rotated_multi_point};
