use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_segment_dist_squared;
use crate::math::{Point2, Points};

/// Douglas–Peucker polyline simplification.
///
/// Keeps the endpoints and recursively keeps the point farthest from the
/// chord of each span while that distance exceeds `tolerance`.
pub struct DouglasPeucker {
    tolerance: f64,
}

impl DouglasPeucker {
    /// Creates a new `DouglasPeucker` operation.
    ///
    /// * `tolerance` - Maximum allowed deviation, in coordinate units.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Executes the simplification. Inputs of two points or fewer are
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if the tolerance is NaN.
    pub fn execute(&self, points: &[Point2]) -> Result<Points> {
        if self.tolerance.is_nan() {
            return Err(GeometryError::InvalidParameter {
                parameter: "tolerance",
                value: self.tolerance,
            }
            .into());
        }
        let n = points.len();
        if n <= 2 {
            return Ok(points.to_vec());
        }

        let tolerance_sq = self.tolerance * self.tolerance;
        let mut keep = vec![false; n];
        keep[0] = true;
        keep[n - 1] = true;

        // Explicit stack instead of recursion; long contours would overflow.
        let mut stack = vec![(0, n - 1)];
        while let Some((anchor, floater)) = stack.pop() {
            if anchor + 1 >= floater {
                continue;
            }
            let (a, b) = (&points[anchor], &points[floater]);
            let mut max_dist_sq = 0.0;
            let mut furthest = anchor;
            for (i, pt) in points.iter().enumerate().take(floater).skip(anchor + 1) {
                let d = point_to_segment_dist_squared(pt, a, b);
                if d > max_dist_sq {
                    max_dist_sq = d;
                    furthest = i;
                }
            }
            if furthest != anchor && max_dist_sq > tolerance_sq {
                keep[furthest] = true;
                stack.push((anchor, furthest));
                stack.push((furthest, floater));
            }
        }

        let result: Points = points
            .iter()
            .zip(&keep)
            .filter(|&(_, &k)| k)
            .map(|(pt, _)| *pt)
            .collect();
        tracing::debug!(
            input = n,
            output = result.len(),
            tolerance = self.tolerance,
            "douglas-peucker simplification"
        );
        Ok(result)
    }
}
