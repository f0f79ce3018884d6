//! The static obstacle model.

use std::collections::HashSet;

use kickpath_core::{Point, Range};

use crate::danger::DangerZones;
use crate::error::PlanError;

/// Largest accepted width or height.
///
/// Keeps octile estimates across the whole pitch within `i32` under the
/// default weights. Accumulated route costs saturate instead of wrapping.
pub const MAX_PITCH_SIDE: i32 = 1 << 15;

/// A bounded pitch with static obstacles.
///
/// Immutable once built; the only interior state is the danger-zone cache,
/// which is derived from the obstacles on first use.
#[derive(Debug, Clone)]
pub struct Pitch {
    bounds: Range,
    obstacles: HashSet<Point>,
    danger: DangerZones,
}

impl Pitch {
    /// Build a `width × height` pitch. Duplicate obstacles collapse.
    pub fn new(
        width: i32,
        height: i32,
        obstacles: impl IntoIterator<Item = Point>,
    ) -> Result<Self, PlanError> {
        if width <= 0 || height <= 0 {
            return Err(PlanError::InvalidDimensions { width, height });
        }
        if width > MAX_PITCH_SIDE || height > MAX_PITCH_SIDE {
            return Err(PlanError::PitchTooLarge { width, height });
        }
        Ok(Self {
            bounds: Range::with_size(width, height),
            obstacles: obstacles.into_iter().collect(),
            danger: DangerZones::new(1),
        })
    }

    /// Use a different danger radius. Resets the danger-zone cache.
    pub fn with_danger_radius(mut self, radius: i32) -> Self {
        self.danger = DangerZones::new(radius);
        self
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.obstacles.contains(&p)
    }

    /// In bounds and not blocked.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.is_obstacle(p)
    }

    /// The distinct obstacle cells, in no particular order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.obstacles.iter().copied()
    }

    /// Open cells among the eight neighbours of `p`.
    pub fn open_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_8().into_iter().filter(|&n| self.is_open(n))
    }

    /// Whether at least one neighbour of `p` is open.
    pub fn has_open_neighbor(&self, p: Point) -> bool {
        self.open_neighbors(p).next().is_some()
    }

    /// The danger-zone cells, computed on first call.
    pub fn danger_zones(&self) -> &HashSet<Point> {
        self.danger.zones(self.bounds, &self.obstacles)
    }

    #[inline]
    pub fn is_danger(&self, p: Point) -> bool {
        self.danger_zones().contains(&p)
    }

    /// The danger radius in cells.
    #[inline]
    pub fn danger_radius(&self) -> i32 {
        self.danger.radius()
    }
}
