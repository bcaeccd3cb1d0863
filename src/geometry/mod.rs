mod bounding_box;
pub mod multi_point;
mod multi_point3;

pub use bounding_box::{BoundingBox, BoundingBox3};
pub use multi_point::MultiPoint;
pub use multi_point3::MultiPoint3;
