use kickpath_core::{Direction, Point};

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather whose step cost depends on the heading the mover arrived with.
pub trait TurningPather: Pather {
    /// Cost of stepping from `from` to adjacent `to` after arriving at
    /// `from` heading `arrival` (`None` before the first step). Must be > 0.
    fn cost(&self, from: Point, to: Point, arrival: Option<Direction>) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: TurningPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
