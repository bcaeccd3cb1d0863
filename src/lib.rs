pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{MultiPointError, Result};
pub use geometry::{BoundingBox, BoundingBox3, MultiPoint, MultiPoint3};
pub use math::{Coord, CoordF, Point2, Point3, Points, Points3, Vector2, Vector3};
