use std::fmt::Write as _;

use super::bounding_box::BoundingBox;
use crate::error::Result;
use crate::math::distance_2d::{distance, distance_squared, segment_foot};
use crate::math::rotate_2d::{rotate_point, rotate_point_around};
use crate::math::{Coord, CoordF, Point2, Points, Vector2};
use crate::operations::simplify::{DouglasPeucker, Visvalingam};

/// An ordered sequence of 2D points with scaled integer coordinates.
///
/// The sequence can stand for an open polyline or a closed polygon outline;
/// closure is left to the caller. Adjacent duplicates are allowed until
/// [`MultiPoint::remove_duplicate_points`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiPoint {
    pub points: Points,
}

impl MultiPoint {
    /// Creates a sequence that takes ownership of `points`.
    #[must_use]
    pub fn new(points: Points) -> Self {
        Self { points }
    }

    /// Creates a sequence by copying `points`.
    #[must_use]
    pub fn from_slice(points: &[Point2]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A sequence needs at least two points to describe a path.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 2
    }

    #[must_use]
    pub fn first_point(&self) -> Option<Point2> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last_point(&self) -> Option<Point2> {
        self.points.last().copied()
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn append(&mut self, points: &[Point2]) {
        self.points.extend_from_slice(points);
    }

    /// Multiplies every coordinate by `factor`.
    ///
    /// Products are narrowed toward zero, the same policy as [`Self::scale_xy`].
    pub fn scale(&mut self, factor: f64) {
        self.scale_xy(factor, factor);
    }

    /// Multiplies X coordinates by `factor_x` and Y coordinates by `factor_y`,
    /// truncating each product toward zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn scale_xy(&mut self, factor_x: f64, factor_y: f64) {
        for pt in &mut self.points {
            pt.x = (pt.x as CoordF * factor_x) as Coord;
            pt.y = (pt.y as CoordF * factor_y) as Coord;
        }
    }

    pub fn translate(&mut self, v: &Vector2) {
        for pt in &mut self.points {
            *pt += v;
        }
    }

    /// Rotates about the origin by a precomputed cosine/sine pair, rounding
    /// every coordinate to the nearest integer.
    pub fn rotate(&mut self, cos_angle: f64, sin_angle: f64) {
        for pt in &mut self.points {
            *pt = rotate_point(pt, cos_angle, sin_angle);
        }
    }

    /// Rotates about `center` by `angle` radians, rounding every coordinate to
    /// the nearest integer.
    pub fn rotate_around(&mut self, angle: f64, center: &Point2) {
        let (s, c) = angle.sin_cos();
        for pt in &mut self.points {
            *pt = rotate_point_around(pt, c, s, center);
        }
    }

    /// Returns the index of the first point equal to `point`.
    #[must_use]
    pub fn find_point(&self, point: &Point2) -> Option<usize> {
        self.points.iter().position(|pt| pt == point)
    }

    /// Returns the index of the point nearest to `point` if it lies strictly
    /// closer than `epsilon`. An `epsilon` of zero requires an exact match.
    ///
    /// When several points share the minimum distance, the first one wins.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn find_point_within(&self, point: &Point2, epsilon: f64) -> Option<usize> {
        if epsilon == 0.0 {
            return self.find_point(point);
        }

        let mut dist2_min = f64::MAX;
        let mut idx_min = None;
        for (i, pt) in self.points.iter().enumerate() {
            let d2 = distance_squared(pt, point);
            if d2 < dist2_min {
                idx_min = Some(i);
                dist2_min = d2;
            }
        }
        if dist2_min < epsilon * epsilon {
            idx_min
        } else {
            None
        }
    }

    /// Projects `point` onto the sequence treated as an open polyline.
    ///
    /// Returns the closest point found and the index it is attached to: a
    /// vertex index when a vertex wins, or the index of the segment start
    /// when a perpendicular foot wins. Within each segment the start vertex
    /// is tested first, then the end vertex, then the foot; a later candidate
    /// must be strictly closer to replace the current best. Sequences with
    /// fewer than two points yield `(point, None)`.
    #[must_use]
    pub fn point_projection(&self, point: &Point2) -> (Point2, Option<usize>) {
        let mut proj = *point;
        let mut pt_idx = None;
        let mut dmin = f64::MAX;

        for (i, seg) in self.points.windows(2).enumerate() {
            let (pt0, pt1) = (&seg[0], &seg[1]);

            let d = distance(pt0, point);
            if d < dmin {
                dmin = d;
                proj = *pt0;
                pt_idx = Some(i);
            }
            let d = distance(pt1, point);
            if d < dmin {
                dmin = d;
                proj = *pt1;
                pt_idx = Some(i + 1);
            }
            if let Some(foot) = segment_foot(point, pt0, pt1) {
                let d = distance(&foot, point);
                if d < dmin {
                    dmin = d;
                    proj = foot;
                    pt_idx = Some(i);
                }
            }
        }

        (proj, pt_idx)
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
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
        let removed = before - self.points.len();
        if removed > 0 {
            tracing::trace!(removed, remaining = self.points.len(), "removed duplicate points");
        }
        removed > 0
    }

    /// Visvalingam–Whyatt simplification of `points`.
    ///
    /// # Errors
    ///
    /// See [`Visvalingam::execute`].
    pub fn visvalingam(points: &[Point2], tolerance: f64) -> Result<Points> {
        Visvalingam::new(tolerance).execute(points)
    }

    /// Douglas–Peucker simplification of `points`.
    ///
    /// # Errors
    ///
    /// See [`DouglasPeucker::execute`].
    pub fn douglas_peucker(points: &[Point2], tolerance: f64) -> Result<Points> {
        DouglasPeucker::new(tolerance).execute(points)
    }

    /// Returns a Visvalingam–Whyatt simplified copy of this sequence.
    ///
    /// # Errors
    ///
    /// See [`Visvalingam::execute`].
    pub fn simplified_visvalingam(&self, tolerance: f64) -> Result<Self> {
        Self::visvalingam(&self.points, tolerance).map(Self::new)
    }

    /// Returns a Douglas–Peucker simplified copy of this sequence.
    ///
    /// # Errors
    ///
    /// See [`DouglasPeucker::execute`].
    pub fn simplified_douglas_peucker(&self, tolerance: f64) -> Result<Self> {
        Self::douglas_peucker(&self.points, tolerance).map(Self::new)
    }

    /// Formats the points as `{Point{x,y},Point{x,y}}`, ready to paste into a
    /// test fixture.
    #[must_use]
    pub fn to_debug_string(&self) -> String {
        let mut out = String::from("{");
        for (i, pt) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "Point{{{},{}}}", pt.x, pt.y);
        }
        out.push('}');
        out
    }
}

impl From<Points> for MultiPoint {
    fn from(points: Points) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point2> for MultiPoint {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Returns `true` if two consecutive entries of `points` are equal.
#[must_use]
pub fn has_duplicate_points<T: PartialEq>(points: &[T]) -> bool {
    points.windows(2).any(|w| w[0] == w[1])
}
