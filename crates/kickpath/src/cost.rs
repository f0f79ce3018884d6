//! Composite move cost: step length, turning and obstacle proximity.

use kickpath_core::{Direction, Point};

use crate::config::CostConfig;
use crate::distance;
use crate::pitch::Pitch;
use crate::traits::{AstarPather, Pather, TurningPather};

/// Sharpness bucket of a heading change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TurnClass {
    /// Same heading, or the first step of a route.
    Straight,
    /// Below 45°.
    Nudge,
    /// At least 45° and below 90°.
    Soft,
    /// At least 90° and below 135°.
    Sharp,
    /// 135° or more.
    Reversal,
}

impl TurnClass {
    /// Bucket an unsigned heading change in degrees. Only a zero angle is
    /// [`TurnClass::Straight`].
    pub fn from_degrees(deg: u32) -> Self {
        match deg {
            0 => TurnClass::Straight,
            1..45 => TurnClass::Nudge,
            45..90 => TurnClass::Soft,
            90..135 => TurnClass::Sharp,
            _ => TurnClass::Reversal,
        }
    }

    /// Classify the turn from heading `prev` into heading `cur`.
    pub fn of(prev: Option<Direction>, cur: Direction) -> Self {
        match prev {
            None => TurnClass::Straight,
            Some(prev) if prev == cur => TurnClass::Straight,
            Some(prev) => Self::from_degrees(prev.angle_to(cur)),
        }
    }
}

/// Penalty for turning from `prev` into `cur`, scaled by the ball factor
/// while the ball is carried.
pub fn rotation_cost(
    costs: &CostConfig,
    prev: Option<Direction>,
    cur: Direction,
    has_ball: bool,
) -> i32 {
    let base = costs.turn(TurnClass::of(prev, cur));
    if has_ball { base * costs.ball_factor } else { base }
}

/// Move costs for one player on one pitch.
///
/// Implements the pather traits so the search stays unaware of how turns
/// and danger zones are priced.
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    pitch: &'a Pitch,
    costs: &'a CostConfig,
    has_ball: bool,
}

impl<'a> CostModel<'a> {
    pub fn new(pitch: &'a Pitch, costs: &'a CostConfig, has_ball: bool) -> Self {
        Self {
            pitch,
            costs,
            has_ball,
        }
    }

    #[inline]
    pub fn has_ball(&self) -> bool {
        self.has_ball
    }

    /// Octile distance under the configured step weights.
    #[inline]
    pub fn heuristic(&self, a: Point, b: Point) -> i32 {
        distance::octile(a, b, self.costs.straight, self.costs.diagonal)
    }

    /// Cost of a single step ignoring heading and danger.
    #[inline]
    pub fn base_cost(&self, from: Point, to: Point) -> i32 {
        if (to.x - from.x).abs() == 1 && (to.y - from.y).abs() == 1 {
            self.costs.diagonal
        } else {
            self.costs.straight
        }
    }

    /// Full cost of stepping `from → to` after arriving with heading `prev`.
    pub fn move_cost(&self, from: Point, to: Point, prev: Option<Direction>) -> i32 {
        let turn = match Direction::between(from, to) {
            Some(cur) => rotation_cost(self.costs, prev, cur, self.has_ball),
            None => 0,
        };
        let danger = if self.pitch.is_danger(to) {
            self.costs.danger
        } else {
            0
        };
        self.base_cost(from, to) + turn + danger
    }

    /// Total cost of walking `path` from `start`, threading the heading
    /// through every step. Returns `None` if two consecutive cells are not
    /// adjacent.
    pub fn path_cost(&self, start: Point, path: &[Point]) -> Option<i32> {
        let mut total = 0;
        let mut cur = start;
        let mut heading = None;
        for &next in path {
            if !cur.is_adjacent(next) {
                return None;
            }
            total = self.move_cost(cur, next, heading).saturating_add(total);
            heading = Direction::between(cur, next);
            cur = next;
        }
        Some(total)
    }

    /// Sum of the turn penalties alone along `path`.
    pub fn turning_cost(&self, start: Point, path: &[Point]) -> i32 {
        let mut total = 0;
        let mut cur = start;
        let mut heading = None;
        for &next in path {
            if let Some(dir) = Direction::between(cur, next) {
                total += rotation_cost(self.costs, heading, dir, self.has_ball);
                heading = Some(dir);
            }
            cur = next;
        }
        total
    }
}

impl Pather for CostModel<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in Direction::ALL {
            let n = p.step(d);
            if self.pitch.is_open(n) {
                buf.push(n);
            }
        }
    }
}

impl TurningPather for CostModel<'_> {
    fn cost(&self, from: Point, to: Point, arrival: Option<Direction>) -> i32 {
        self.move_cost(from, to, arrival)
    }
}

impl AstarPather for CostModel<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        self.heuristic(from, to)
    }
}
