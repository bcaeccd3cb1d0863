use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::{cross2, to_vec2d, Point2, Points};

/// Visvalingam–Whyatt polyline simplification.
///
/// Every interior point receives a survival score; a point is kept when its
/// score is strictly greater than `tolerance`. Endpoints always survive.
///
/// Scores are produced by repeatedly eliminating the interior point with the
/// largest current effective area (the triangle it spans with its surviving
/// neighbours) and recording the running maximum of eliminated areas. After
/// each elimination both neighbours are re-measured against their new
/// neighbours. Because the threshold never decreases, a larger tolerance never
/// yields more points.
///
/// When two points share the same area, the one with the lower index is
/// eliminated first.
pub struct Visvalingam {
    tolerance: f64,
}

impl Visvalingam {
    /// Creates a new `Visvalingam` operation.
    ///
    /// * `tolerance` - Minimum score (an area in squared units) a point needs
    ///   to survive.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Executes the simplification, returning the surviving points in order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `points` holds fewer than two
    /// points, or `GeometryError::InvalidParameter` if the tolerance is NaN.
    pub fn execute(&self, points: &[Point2]) -> Result<Points> {
        if self.tolerance.is_nan() {
            return Err(GeometryError::InvalidParameter {
                parameter: "tolerance",
                value: self.tolerance,
            }
            .into());
        }
        let scores = Self::scores(points)?;

        let last = points.len() - 1;
        let result: Points = points
            .iter()
            .zip(&scores)
            .enumerate()
            .filter(|&(i, (_, &score))| i == 0 || i == last || score > self.tolerance)
            .map(|(_, (pt, _))| *pt)
            .collect();

        debug_assert!(result.len() >= 2);
        tracing::debug!(
            input = points.len(),
            output = result.len(),
            tolerance = self.tolerance,
            "visvalingam simplification"
        );
        Ok(result)
    }

    /// Computes the survival score of every point.
    ///
    /// Endpoints score `f64::INFINITY`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `points` holds fewer than two
    /// points.
    pub fn scores(points: &[Point2]) -> Result<Vec<f64>> {
        let n = points.len();
        if n < 2 {
            return Err(OperationError::InvalidInput(format!(
                "visvalingam simplification needs at least 2 points, got {n}"
            ))
            .into());
        }

        let mut scores = vec![f64::INFINITY; n];
        let mut nodes: Vec<Option<VisNode>> = vec![None; n];
        let mut heap = BinaryHeap::with_capacity(n.saturating_sub(2));

        for i in 1..n - 1 {
            let area = effective_area(points, i, i - 1, i + 1);
            nodes[i] = Some(VisNode {
                prev: i - 1,
                next: i + 1,
                area,
                version: 0,
            });
            heap.push(HeapEntry {
                area,
                index: i,
                version: 0,
            });
        }

        let mut threshold = f64::NEG_INFINITY;
        while let Some(entry) = heap.pop() {
            // Entries left behind by an area update are stale.
            let current = match nodes[entry.index] {
                Some(node) if node.version == entry.version => node,
                _ => continue,
            };
            nodes[entry.index] = None;

            threshold = threshold.max(current.area);
            scores[entry.index] = threshold;

            if let Some(prev) = nodes[current.prev].as_mut() {
                prev.next = current.next;
                prev.area = effective_area(points, current.prev, prev.prev, prev.next);
                prev.version += 1;
                heap.push(HeapEntry {
                    area: prev.area,
                    index: current.prev,
                    version: prev.version,
                });
            }
            if let Some(next) = nodes[current.next].as_mut() {
                next.prev = current.prev;
                next.area = effective_area(points, current.next, next.prev, next.next);
                next.version += 1;
                heap.push(HeapEntry {
                    area: next.area,
                    index: current.next,
                    version: next.version,
                });
            }
        }

        Ok(scores)
    }
}

/// A surviving interior point in the elimination arena.
#[derive(Debug, Clone, Copy)]
struct VisNode {
    prev: usize,
    next: usize,
    area: f64,
    version: u32,
}

/// Priority entry; the largest area is popped first.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    area: f64,
    index: usize,
    version: u32,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.area
            .total_cmp(&other.area)
            .then_with(|| other.index.cmp(&self.index))
            .then_with(|| self.version.cmp(&other.version))
    }
}

/// Area of the triangle spanned by `points[curr]` and its neighbours.
fn effective_area(points: &[Point2], curr: usize, prev: usize, next: usize) -> f64 {
    let c = &points[curr];
    let curr_to_next = to_vec2d(&(points[next] - c));
    let curr_to_prev = to_vec2d(&(points[prev] - c));
    0.5 * cross2(&curr_to_next, &curr_to_prev).abs()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MultiPointError;
    use crate::math::Coord;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn pts(coords: &[(Coord, Coord)]) -> Points {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    /// Deterministic zig-zag with varying amplitude.
    fn wiggle(n: Coord) -> Points {
        (0..n)
            .map(|i| {
                let amp = (i * 7919) % 23 - 11;
                Point2::new(i * 10, amp * (i % 5 + 1))
            })
            .collect()
    }

    #[test]
    fn rejects_fewer_than_two_points() {
        let err = Visvalingam::new(1.0).execute(&pts(&[(0, 0)])).unwrap_err();
        assert!(matches!(
            err,
            MultiPointError::Operation(OperationError::InvalidInput(_))
        ));
        assert!(Visvalingam::new(1.0).execute(&[]).is_err());
    }

    #[test]
    fn rejects_nan_tolerance() {
        let err = Visvalingam::new(f64::NAN)
            .execute(&pts(&[(0, 0), (1, 1)]))
            .unwrap_err();
        assert!(matches!(
            err,
            MultiPointError::Geometry(GeometryError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn two_points_are_returned_unchanged() {
        let input = pts(&[(0, 0), (10, 10)]);
        assert_eq!(Visvalingam::new(100.0).execute(&input).unwrap(), input);
    }

    #[test]
    fn straight_line_collapses_to_endpoints() {
        init_tracing();
        let input: Points = (0..50).map(|i| Point2::new(i * 3, i * 2)).collect();
        let out = Visvalingam::new(0.5).execute(&input).unwrap();
        assert_eq!(out, pts(&[(0, 0), (147, 98)]));
    }

    #[test]
    fn zero_tolerance_keeps_non_colinear_points() {
        let input = pts(&[(0, 0), (5, 0), (10, 0), (10, 10)]);
        // (10,0) goes first with area 25; (5,0) is then measured against
        // (10,10) and also scores 25.
        let scores = Visvalingam::scores(&input).unwrap();
        assert!(scores[0].is_infinite() && scores[3].is_infinite());
        assert!((scores[2] - 25.0).abs() < 1e-9);
        assert!((scores[1] - 25.0).abs() < 1e-9);
        let out = Visvalingam::new(0.0).execute(&input).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn running_maximum_is_recorded() {
        // (10,10) spans 95 and goes first. (20,1) shrinks to 15 once measured
        // against the endpoints but inherits the threshold.
        let input = pts(&[(0, 0), (10, 10), (20, 1), (30, 0)]);
        let scores = Visvalingam::scores(&input).unwrap();
        assert!((scores[1] - 95.0).abs() < 1e-9, "{scores:?}");
        assert!((scores[2] - 95.0).abs() < 1e-9, "{scores:?}");

        assert_eq!(Visvalingam::new(94.0).execute(&input).unwrap(), input);
        assert_eq!(
            Visvalingam::new(95.0).execute(&input).unwrap(),
            pts(&[(0, 0), (30, 0)])
        );
    }

    #[test]
    fn neighbours_are_remeasured() {
        // Both interior points start at 50; the lower index goes first.
        // (20,10) is then measured against (0,0) and (30,0) and grows to 150.
        let input = pts(&[(0, 0), (10, 10), (20, 10), (30, 0)]);
        let scores = Visvalingam::scores(&input).unwrap();
        assert!((scores[1] - 50.0).abs() < 1e-9, "{scores:?}");
        assert!((scores[2] - 150.0).abs() < 1e-9, "{scores:?}");

        let out = Visvalingam::new(100.0).execute(&input).unwrap();
        assert_eq!(out, pts(&[(0, 0), (20, 10), (30, 0)]));
    }

    #[test]
    fn endpoints_always_survive() {
        let input = wiggle(200);
        for tol in [0.0, 1.0, 10.0, 1e3, 1e6, f64::MAX, f64::INFINITY] {
            let out = Visvalingam::new(tol).execute(&input).unwrap();
            assert!(out.len() >= 2);
            assert_eq!(out.first(), input.first());
            assert_eq!(out.last(), input.last());
        }
    }

    #[test]
    fn larger_tolerance_never_adds_points() {
        let input = wiggle(300);
        let mut previous = usize::MAX;
        for tol in [0.0, 0.5, 5.0, 25.0, 100.0, 400.0, 1e4, 1e8] {
            let len = Visvalingam::new(tol).execute(&input).unwrap().len();
            assert!(len <= previous, "tol={tol}: {len} > {previous}");
            previous = len;
        }
    }

    #[test]
    fn output_is_a_subsequence_of_input() {
        let input = wiggle(120);
        let out = Visvalingam::new(30.0).execute(&input).unwrap();
        let mut it = input.iter();
        for p in &out {
            assert!(it.any(|q| q == p), "{p:?} out of order");
        }
    }
}
