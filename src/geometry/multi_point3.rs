use super::bounding_box::BoundingBox3;
use super::multi_point::has_duplicate_points;
use crate::math::{Coord, Point3, Points3, Vector2};

/// An ordered sequence of 3D points with scaled integer coordinates.
///
/// Typically a planar contour lifted to a fixed Z height, which is why
/// [`MultiPoint3::translate`] only shifts X and Y.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiPoint3 {
    pub points: Points3,
}

impl MultiPoint3 {
    #[must_use]
    pub fn new(points: Points3) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shifts every point in the XY plane. Z is left untouched.
    ///
    /// Each displacement is truncated toward zero before it is applied.
    #[allow(clippy::cast_possible_truncation)]
    pub fn translate(&mut self, x: f64, y: f64) {
        let (dx, dy) = (x as Coord, y as Coord);
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    /// Shifts every point in the XY plane by an integer vector.
    pub fn translate_by(&mut self, v: &Vector2) {
        for p in &mut self.points {
            p.x += v.x;
            p.y += v.y;
        }
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox3 {
        BoundingBox3::from_points(&self.points)
    }

    /// Returns `true` if two consecutive points are equal.
    #[must_use]
    pub fn has_duplicate_points(&self) -> bool {
        has_duplicate_points(&self.points)
    }

    /// Collapses runs of equal consecutive points to their first occurrence.
    ///
    /// Returns `true` if any point was removed.
    pub fn remove_duplicate_points(&mut self) -> bool {
        let before = self.points.len();
        self.points.dedup();
        before != self.points.len()
    }
}

impl From<Points3> for MultiPoint3 {
    fn from(points: Points3) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point3> for MultiPoint3 {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
