use std::fmt;

use crate::math::{Point2, Point3, Vector2, Vector3};

/// A 2D axis-aligned bounding box with integer coordinates.
///
/// An empty box is *undefined*: `min` and `max` sit at the origin and carry
/// no meaning until the first point is merged.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
    defined: bool,
}

impl BoundingBox {
    /// Creates an undefined bounding box.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: Point2::origin(),
            max: Point2::origin(),
            defined: false,
        }
    }

    /// Creates the tightest box around `points`. Undefined if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let mut bb = Self::new();
        for p in points {
            bb.merge_point(p);
        }
        bb
    }

    /// Returns `true` once at least one point has been merged.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    /// Grows the box to include `p`.
    pub fn merge_point(&mut self, p: &Point2) {
        if self.defined {
            self.min.x = self.min.x.min(p.x);
            self.min.y = self.min.y.min(p.y);
            self.max.x = self.max.x.max(p.x);
            self.max.y = self.max.y.max(p.y);
        } else {
            self.min = *p;
            self.max = *p;
            self.defined = true;
        }
    }

    /// Grows the box to include `other`. Undefined boxes are ignored.
    pub fn merge(&mut self, other: &BoundingBox) {
        if other.defined {
            self.merge_point(&other.min);
            self.merge_point(&other.max);
        }
    }

    /// Extent along each axis; zero for an undefined box.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        if self.defined {
            self.max - self.min
        } else {
            Vector2::zeros()
        }
    }

    /// Center point, rounded toward zero.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) / 2,
            (self.min.y + self.max.y) / 2,
        )
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        self.defined
            && p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.defined {
            write!(
                f,
                "BoundingBox(({}, {}) - ({}, {}))",
                self.min.x, self.min.y, self.max.x, self.max.y
            )
        } else {
            write!(f, "BoundingBox(undefined)")
        }
    }
}

/// A 3D axis-aligned bounding box with integer coordinates.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox3 {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
    defined: bool,
}

impl BoundingBox3 {
    /// Creates an undefined bounding box.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: Point3::origin(),
            max: Point3::origin(),
            defined: false,
        }
    }

    /// Creates the tightest box around `points`. Undefined if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Self {
        let mut bb = Self::new();
        for p in points {
            bb.merge_point(p);
        }
        bb
    }

    /// Returns `true` once at least one point has been merged.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    /// Grows the box to include `p`.
    pub fn merge_point(&mut self, p: &Point3) {
        if self.defined {
            for axis in 0..3 {
                self.min[axis] = self.min[axis].min(p[axis]);
                self.max[axis] = self.max[axis].max(p[axis]);
            }
        } else {
            self.min = *p;
            self.max = *p;
            self.defined = true;
        }
    }

    /// Extent along each axis; zero for an undefined box.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        if self.defined {
            self.max - self.min
        } else {
            Vector3::zeros()
        }
    }
}

impl Default for BoundingBox3 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoundingBox3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.defined {
            write!(
                f,
                "BoundingBox3(({}, {}, {}) - ({}, {}, {}))",
                self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
            )
        } else {
            write!(f, "BoundingBox3(undefined)")
        }
    }
}
