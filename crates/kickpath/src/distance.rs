use kickpath_core::Point;

/// Chebyshev (L∞) distance between two points.
///
/// Saturates at `i32::MAX` for points at opposite ends of the `i32` range.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let d = a.x.abs_diff(b.x).max(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}

/// Octile distance: the cheapest mix of straight and diagonal steps between
/// two points on an 8-connected grid.
///
/// A diagonal costing more than two straight steps is capped at
/// `2 * straight`, so the result stays a lower bound for any weights.
#[inline]
pub fn octile(a: Point, b: Point, straight: i32, diagonal: i32) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let diagonal = diagonal.min(2 * straight);
    dx.min(dy) * diagonal + (dx - dy).abs() * straight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_metrics() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 3);
        assert_eq!(chebyshev(a, b), 3);
        assert_eq!(chebyshev(b, a), 3);
        assert_eq!(chebyshev(a, a), 0);
        assert_eq!(chebyshev(Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)), i32::MAX);
    }

    #[test]
    fn octile_mixes_steps() {
        let o = Point::ZERO;
        assert_eq!(octile(o, Point::new(4, 4), 10, 14), 56);
        assert_eq!(octile(o, Point::new(5, 0), 10, 14), 50);
        assert_eq!(octile(o, Point::new(3, 5), 10, 14), 3 * 14 + 2 * 10);
        assert_eq!(octile(Point::new(3, 5), o, 10, 14), 62);
    }

    #[test]
    fn octile_caps_expensive_diagonals() {
        assert_eq!(octile(Point::ZERO, Point::new(2, 2), 10, 30), 40);
    }
}
