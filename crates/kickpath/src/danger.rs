//! Lazily computed cells adjacent to obstacles.

use std::cell::OnceCell;
use std::collections::HashSet;

use kickpath_core::{Point, Range};

use crate::distance::chebyshev;

/// Cells within a Chebyshev radius of some obstacle.
///
/// The set is built on first access and kept for the lifetime of the value.
/// There is no invalidation, so each cache belongs to exactly one obstacle
/// layout; [`Pitch`](crate::Pitch) owns it and always passes its own bounds
/// and obstacles.
#[derive(Debug, Clone)]
pub(crate) struct DangerZones {
    radius: i32,
    cells: OnceCell<HashSet<Point>>,
}

impl DangerZones {
    /// Create an empty, not yet computed cache for the given radius.
    pub(crate) fn new(radius: i32) -> Self {
        Self {
            radius: radius.max(0),
            cells: OnceCell::new(),
        }
    }

    /// The danger radius in cells.
    #[inline]
    pub(crate) fn radius(&self) -> i32 {
        self.radius
    }

    #[cfg(test)]
    pub(crate) fn is_computed(&self) -> bool {
        self.cells.get().is_some()
    }

    /// In-bounds, obstacle-free cells near an obstacle, computed on the
    /// first call. `bounds` must be non-empty.
    pub(crate) fn zones(&self, bounds: Range, obstacles: &HashSet<Point>) -> &HashSet<Point> {
        self.cells.get_or_init(|| {
            let r = self.radius;
            let mut cells = HashSet::new();
            for &obs in obstacles {
                // Nearest in-bounds cell; obstacles farther than the radius
                // from the pitch touch nothing.
                let near = Point::new(
                    obs.x.clamp(bounds.min.x, bounds.max.x - 1),
                    obs.y.clamp(bounds.min.y, bounds.max.y - 1),
                );
                if chebyshev(obs, near) > r {
                    continue;
                }
                let (x0, x1) = clip(obs.x, r, bounds.min.x, bounds.max.x);
                let (y0, y1) = clip(obs.y, r, bounds.min.y, bounds.max.y);
                for y in y0..=y1 {
                    for x in x0..=x1 {
                        let p = Point::new(x, y);
                        if p != obs && !obstacles.contains(&p) {
                            cells.insert(p);
                        }
                    }
                }
            }
            log::debug!(
                "danger zones: {} cells around {} obstacles (radius {r})",
                cells.len(),
                obstacles.len()
            );
            cells
        })
    }
}

/// `[c - r, c + r]` intersected with the half-open `[min, max)`, as an
/// inclusive pair. Computed in `i64` so cells near `i32` limits don't wrap.
fn clip(c: i32, r: i32, min: i32, max: i32) -> (i32, i32) {
    let lo = (i64::from(c) - i64::from(r)).max(i64::from(min));
    let hi = (i64::from(c) + i64::from(r)).min(i64::from(max) - 1);
    // Both ends lie within [min, max) once the obstacle is within reach.
    (lo as i32, hi as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pts: &[(i32, i32)]) -> HashSet<Point> {
        pts.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn ring_around_center_obstacle() {
        let dz = DangerZones::new(1);
        let obstacles = set(&[(1, 1)]);
        let zones = dz.zones(Range::with_size(3, 3), &obstacles);
        assert_eq!(zones.len(), 8);
        assert!(!zones.contains(&Point::new(1, 1)));
    }

    #[test]
    fn clipped_to_bounds() {
        let dz = DangerZones::new(1);
        let obstacles = set(&[(0, 0)]);
        let zones = dz.zones(Range::with_size(3, 3), &obstacles);
        assert_eq!(zones, &set(&[(1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn obstacles_are_never_danger() {
        let dz = DangerZones::new(1);
        let obstacles = set(&[(1, 1), (2, 1)]);
        let zones = dz.zones(Range::with_size(4, 3), &obstacles);
        assert!(!zones.contains(&Point::new(1, 1)));
        assert!(!zones.contains(&Point::new(2, 1)));
        assert_eq!(zones.len(), 12 - 2);
    }

    #[test]
    fn wider_radius() {
        let dz = DangerZones::new(2);
        let obstacles = set(&[(2, 2)]);
        let zones = dz.zones(Range::with_size(5, 5), &obstacles);
        assert_eq!(zones.len(), 24);
    }

    #[test]
    fn obstacle_outside_bounds_projects_inward() {
        let dz = DangerZones::new(1);
        let obstacles = set(&[(-1, 0)]);
        let zones = dz.zones(Range::with_size(3, 3), &obstacles);
        assert_eq!(zones, &set(&[(0, 0), (0, 1)]));
    }

    #[test]
    fn obstacles_near_integer_limits() {
        let dz = DangerZones::new(1);
        let obstacles = set(&[(i32::MAX, 0), (i32::MIN, i32::MIN), (0, i32::MAX)]);
        let zones = dz.zones(Range::with_size(3, 3), &obstacles);
        assert!(zones.is_empty());
    }

    #[test]
    fn huge_radius_stays_on_the_pitch() {
        let dz = DangerZones::new(i32::MAX);
        let obstacles = set(&[(1, 1)]);
        let zones = dz.zones(Range::with_size(3, 3), &obstacles);
        assert_eq!(zones.len(), 8);
    }

    #[test]
    fn computed_once() {
        let dz = DangerZones::new(1);
        assert!(!dz.is_computed());
        let obstacles = set(&[(1, 1)]);
        let first = dz.zones(Range::with_size(3, 3), &obstacles) as *const _;
        assert!(dz.is_computed());
        let second = dz.zones(Range::with_size(3, 3), &obstacles) as *const _;
        assert_eq!(first, second);
    }
}
