pub mod distance_2d;
pub mod rotate_2d;

/// Integer coordinate type. One unit is `SCALING_FACTOR` millimetres.
pub type Coord = i64;

/// Floating-point coordinate type used for intermediate computations.
pub type CoordF = f64;

/// 2D point with scaled integer coordinates.
pub type Point2 = nalgebra::Point2<Coord>;

/// 3D point with scaled integer coordinates.
pub type Point3 = nalgebra::Point3<Coord>;

/// 2D integer displacement.
pub type Vector2 = nalgebra::Vector2<Coord>;

/// 3D integer displacement.
pub type Vector3 = nalgebra::Vector3<Coord>;

/// 2D floating-point vector.
pub type Vec2d = nalgebra::Vector2<CoordF>;

/// Ordered sequence of 2D points.
pub type Points = Vec<Point2>;

/// Ordered sequence of 3D points.
pub type Points3 = Vec<Point3>;

/// Size of one integer unit in millimetres (1 unit = 1 nm).
pub const SCALING_FACTOR: CoordF = 0.000_001;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Converts millimetres to scaled integer units, rounding to nearest.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn scale(value: CoordF) -> Coord {
    (value / SCALING_FACTOR).round() as Coord
}

/// Converts scaled integer units back to millimetres.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn unscale(value: Coord) -> CoordF {
    value as CoordF * SCALING_FACTOR
}

/// Lifts an integer vector into double precision.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_vec2d(v: &Vector2) -> Vec2d {
    Vec2d::new(v.x as CoordF, v.y as CoordF)
}

/// 2D pseudo cross product `a.x * b.y - a.y * b.x`.
#[must_use]
pub fn cross2(a: &Vec2d, b: &Vec2d) -> CoordF {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_roundtrip() {
        assert_eq!(scale(1.0), 1_000_000);
        assert_eq!(scale(-0.000_000_4), 0);
        assert!((unscale(scale(12.345)) - 12.345).abs() < 1e-9);
    }

    #[test]
    fn cross2_orientation() {
        let a = Vec2d::new(1.0, 0.0);
        let b = Vec2d::new(0.0, 1.0);
        assert!((cross2(&a, &b) - 1.0).abs() < TOLERANCE);
        assert!((cross2(&b, &a) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn to_vec2d_preserves_large_values() {
        let v = to_vec2d(&Vector2::new(300_000_000, -7));
        assert!((v.x - 300_000_000.0).abs() < TOLERANCE);
        assert!((v.y + 7.0).abs() < TOLERANCE);
    }
}
