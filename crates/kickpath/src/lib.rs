//! Route planning for robot-soccer players on a grid pitch.
//!
//! The planner finds a least-cost 8-connected route between two cells of a
//! pitch with static obstacles. Step cost is composite:
//!
//! - **base**: 10 for a straight step, 14 for a diagonal one;
//! - **turning**: a penalty that grows with the heading change, doubled
//!   while the player carries the ball;
//! - **danger**: a surcharge for entering a cell next to an obstacle.
//!
//! Goals that are blocked or boxed in are rejected before any search runs.
//! Everything else goes through A* ([`SearchSpace::astar`]) with an octile
//! heuristic.
//!
//! ```
//! use kickpath::{find_path, Point};
//!
//! let path = find_path(Point::new(0, 0), Point::new(4, 4), &[], 5, 5, false);
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.last(), Some(&Point::new(4, 4)));
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`TurningPather`] : [`Pather`] | heading-dependent step cost |
//! | [`AstarPather`] : [`TurningPather`] | admissible heuristic |
//!
//! [`CostModel`] implements all three for a [`Pitch`].

mod astar;
mod config;
mod cost;
mod danger;
mod distance;
mod error;
mod pitch;
mod planner;
mod space;
mod traits;

pub use config::{CostConfig, PlannerConfig};
pub use cost::{CostModel, TurnClass, rotation_cost};
pub use distance::{chebyshev, octile};
pub use error::PlanError;
pub use kickpath_core::{Direction, Point, Range};
pub use pitch::{MAX_PITCH_SIDE, Pitch};
pub use planner::{PathPlan, PlanOutcome, Planner, find_path};
pub use space::{SearchResult, SearchSpace, UNREACHABLE};
pub use traits::{AstarPather, Pather, TurningPather};

#[cfg(test)]
mod properties;
