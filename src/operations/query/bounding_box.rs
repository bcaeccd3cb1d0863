use crate::geometry::{BoundingBox, MultiPoint};
use crate::math::rotate_2d::rotate_point;
use crate::math::Point2;

/// Returns the axis-aligned extents of a point sequence.
#[must_use]
pub fn get_extents(mp: &MultiPoint) -> BoundingBox {
    BoundingBox::from_points(&mp.points)
}

/// Returns the extents `points` would have after rotating them by `angle`
/// radians about the origin. The input is not modified.
///
/// Rotated coordinates are rounded to the nearest integer before they are
/// merged. The box is undefined when `points` is empty.
#[must_use]
pub fn get_extents_rotated(points: &[Point2], angle: f64) -> BoundingBox {
    let (s, c) = angle.sin_cos();
    let mut bbox = BoundingBox::new();
    for pt in points {
        bbox.merge_point(&rotate_point(pt, c, s));
    }
    bbox
}

/// [`get_extents_rotated`] for a [`MultiPoint`].
#[must_use]
pub fn get_extents_rotated_multi_point(mp: &MultiPoint, angle: f64) -> BoundingBox {
    get_extents_rotated(&mp.points, angle)
}
