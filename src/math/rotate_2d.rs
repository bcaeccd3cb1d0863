use super::{Coord, CoordF, Point2};

/// Rotates `p` about the origin by a precomputed cosine/sine pair.
///
/// The 2×2 rotation is applied in double precision and each coordinate is
/// rounded to the nearest integer (halves away from zero).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn rotate_point(p: &Point2, cos_angle: CoordF, sin_angle: CoordF) -> Point2 {
    let x = p.x as CoordF;
    let y = p.y as CoordF;
    Point2::new(
        (cos_angle * x - sin_angle * y).round() as Coord,
        (cos_angle * y + sin_angle * x).round() as Coord,
    )
}

/// Rotates `p` about `center` by a precomputed cosine/sine pair.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn rotate_point_around(
    p: &Point2,
    cos_angle: CoordF,
    sin_angle: CoordF,
    center: &Point2,
) -> Point2 {
    let v = p - center;
    let (vx, vy) = (v.x as CoordF, v.y as CoordF);
    let (cx, cy) = (center.x as CoordF, center.y as CoordF);
    Point2::new(
        (cx + cos_angle * vx - sin_angle * vy).round() as Coord,
        (cy + cos_angle * vy + sin_angle * vx).round() as Coord,
    )
}
