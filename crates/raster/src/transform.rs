//! 2D point transforms: rotation, scaling and translation about a center.

use crate::types::Point;

/// Rotate `p` around `center` by `angle` radians.
pub fn rotate_point(p: Point, center: Point, angle: f32) -> Point {
    let (sin_a, cos_a) = angle.sin_cos();
    let tx = p.x - center.x;
    let ty = p.y - center.y;
    Point::new(
        tx * cos_a - ty * sin_a + center.x,
        tx * sin_a + ty * cos_a + center.y,
    )
}

/// Scale `p` relative to `center` by `(sx, sy)`.
pub fn scale_point(p: Point, center: Point, sx: f32, sy: f32) -> Point {
    Point::new(
        (p.x - center.x) * sx + center.x,
        (p.y - center.y) * sy + center.y,
    )
}

pub fn translate_point(p: Point, dx: f32, dy: f32) -> Point {
    Point::new(p.x + dx, p.y + dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn quarter_turn_about_center() {
        let r = rotate_point(Point::new(2.0, 1.0), Point::new(1.0, 1.0), FRAC_PI_2);
        assert!(close(r, Point::new(1.0, 2.0)));
    }

    #[test]
    fn scale_keeps_center_fixed() {
        let c = Point::new(5.0, 5.0);
        assert_eq!(scale_point(c, c, 3.0, 0.5), c);
        assert_eq!(
            scale_point(Point::new(7.0, 9.0), c, 2.0, 0.5),
            Point::new(9.0, 7.0)
        );
    }

    #[test]
    fn translate_offsets() {
        assert_eq!(
            translate_point(Point::new(1.0, 2.0), -3.0, 4.5),
            Point::new(-2.0, 6.5)
        );
    }
}
