//! The eight headings of an 8-connected grid.

use std::fmt;

use crate::geom::Point;

/// A unit step between adjacent cells. `+y` is north.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Cardinal headings first, then diagonals. Search expansion follows
    /// this order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Horizontal component, in `{-1, 0, 1}`.
    #[inline]
    pub const fn dx(self) -> i32 {
        match self {
            Direction::North | Direction::South => 0,
            Direction::NorthEast | Direction::East | Direction::SouthEast => 1,
            Direction::SouthWest | Direction::West | Direction::NorthWest => -1,
        }
    }

    /// Vertical component, in `{-1, 0, 1}`.
    #[inline]
    pub const fn dy(self) -> i32 {
        match self {
            Direction::East | Direction::West => 0,
            Direction::NorthWest | Direction::North | Direction::NorthEast => 1,
            Direction::SouthWest | Direction::South | Direction::SouthEast => -1,
        }
    }

    /// The step as a point delta.
    #[inline]
    pub const fn delta(self) -> Point {
        Point::new(self.dx(), self.dy())
    }

    /// Heading from a `(dx, dy)` delta, normalized to unit steps.
    /// Returns `None` for the zero delta.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        let d = match (dx.signum(), dy.signum()) {
            (0, 1) => Direction::North,
            (1, 1) => Direction::NorthEast,
            (1, 0) => Direction::East,
            (1, -1) => Direction::SouthEast,
            (0, -1) => Direction::South,
            (-1, -1) => Direction::SouthWest,
            (-1, 0) => Direction::West,
            (-1, 1) => Direction::NorthWest,
            _ => return None,
        };
        Some(d)
    }

    /// Heading of the move `from → to`, or `None` if they coincide.
    #[inline]
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        Self::from_delta(to.x - from.x, to.y - from.y)
    }

    /// Whether both components are non-zero.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.dx() != 0 && self.dy() != 0
    }

    /// Counter-clockwise angular index from east, 45° per step.
    #[inline]
    pub const fn octant(self) -> u8 {
        match self {
            Direction::East => 0,
            Direction::NorthEast => 1,
            Direction::North => 2,
            Direction::NorthWest => 3,
            Direction::West => 4,
            Direction::SouthWest => 5,
            Direction::South => 6,
            Direction::SouthEast => 7,
        }
    }

    /// Unsigned angle between two headings, in degrees, within `[0, 180]`.
    ///
    /// Equivalent to `|atan2(b) - atan2(a)|` folded into `[0, π]`, but exact.
    #[inline]
    pub fn angle_to(self, other: Direction) -> u32 {
        let diff = (self.octant() as i32 - other.octant() as i32).unsigned_abs();
        45 * diff.min(8 - diff)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        };
        f.write_str(s)
    }
}
