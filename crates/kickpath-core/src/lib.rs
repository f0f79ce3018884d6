//! **kickpath-core** — geometry types shared by the kickpath planner.
//!
//! This crate provides integer cell coordinates ([`Point`]), rectangular
//! pitch bounds ([`Range`]) and the eight grid headings ([`Direction`]).

pub mod direction;
pub mod geom;

pub use direction::Direction;
pub use geom::{Point, Range};
