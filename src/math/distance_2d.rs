use super::{to_vec2d, Coord, CoordF, Point2};

/// Squared Euclidean distance between two integer points, in double precision.
#[must_use]
pub fn distance_squared(a: &Point2, b: &Point2) -> CoordF {
    to_vec2d(&(b - a)).norm_squared()
}

/// Euclidean distance between two integer points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> CoordF {
    distance_squared(a, b).sqrt()
}

/// Returns the foot of the perpendicular from `p` onto segment `a → b`.
///
/// The foot is only reported when it falls strictly between the endpoints
/// (parameter `t` in the open interval `(0, 1)`). Zero-length segments have
/// no foot. Coordinates are rounded half up (`floor(x + 0.5)`).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn segment_foot(p: &Point2, a: &Point2, b: &Point2) -> Option<Point2> {
    let v1 = to_vec2d(&(b - a));
    let div = v1.norm_squared();
    if div <= 0.0 {
        return None;
    }
    let v2 = to_vec2d(&(p - a));
    let t = v1.dot(&v2) / div;
    if t <= 0.0 || t >= 1.0 {
        return None;
    }
    let origin = to_vec2d(&a.coords);
    let foot = origin + v1 * t;
    Some(Point2::new(
        (foot.x + 0.5).floor() as Coord,
        (foot.y + 0.5).floor() as Coord,
    ))
}

/// Returns the squared distance from `p` to the closed segment `a → b`.
#[must_use]
pub fn point_to_segment_dist_squared(p: &Point2, a: &Point2, b: &Point2) -> CoordF {
    let d = to_vec2d(&(b - a));
    let len_sq = d.norm_squared();
    let ap = to_vec2d(&(p - a));

    if len_sq <= 0.0 {
        // Degenerate segment (zero length).
        return ap.norm_squared();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = (ap.dot(&d) / len_sq).clamp(0.0, 1.0);
    (ap - d * t).norm_squared()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: Coord, y: Coord) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn distance_pythagorean() {
        assert!((distance(&p(0, 0), &p(3, 4)) - 5.0).abs() < TOLERANCE);
        assert!((distance_squared(&p(1, 1), &p(-2, 5)) - 25.0).abs() < TOLERANCE);
    }

    #[test]
    fn foot_inside_segment() {
        let foot = segment_foot(&p(5, 7), &p(0, 0), &p(10, 0)).unwrap();
        assert_eq!(foot, p(5, 0));
    }

    #[test]
    fn foot_rounds_half_up() {
        // t = 0.5 on (0,0)→(1,1): foot at (0.5, 0.5), rounded to (1, 1).
        let foot = segment_foot(&p(1, 0), &p(0, 0), &p(1, 1)).unwrap();
        assert_eq!(foot, p(1, 1));
    }

    #[test]
    fn foot_outside_segment() {
        assert!(segment_foot(&p(-3, 2), &p(0, 0), &p(10, 0)).is_none());
        assert!(segment_foot(&p(13, 2), &p(0, 0), &p(10, 0)).is_none());
    }

    #[test]
    fn foot_at_endpoint_is_excluded() {
        // t == 0 and t == 1 are not strictly inside.
        assert!(segment_foot(&p(0, 5), &p(0, 0), &p(10, 0)).is_none());
        assert!(segment_foot(&p(10, 5), &p(0, 0), &p(10, 0)).is_none());
    }

    #[test]
    fn foot_degenerate_segment() {
        assert!(segment_foot(&p(3, 4), &p(1, 1), &p(1, 1)).is_none());
    }

    #[test]
    fn segment_dist_perpendicular_projection() {
        let d = point_to_segment_dist_squared(&p(1, 1), &p(0, 0), &p(2, 0));
        assert!((d - 1.0).abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist_squared(&p(-1, 0), &p(0, 0), &p(2, 0));
        assert!((d - 1.0).abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        let d = point_to_segment_dist_squared(&p(3, 4), &p(0, 0), &p(0, 0));
        assert!((d - 25.0).abs() < TOLERANCE, "d={d}");
    }
}
