use std::fmt;

use kickpath_core::Point;

/// Malformed planner input.
///
/// An unreachable goal is not an error; see [`PlanOutcome`](crate::PlanOutcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Width or height is not positive.
    InvalidDimensions { width: i32, height: i32 },
    /// A side exceeds [`MAX_PITCH_SIDE`](crate::MAX_PITCH_SIDE).
    PitchTooLarge { width: i32, height: i32 },
    /// The start cell lies outside the pitch.
    StartOutOfBounds(Point),
    /// The goal cell lies outside the pitch.
    GoalOutOfBounds(Point),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid pitch dimensions {width}x{height}")
            }
            Self::PitchTooLarge { width, height } => write!(
                f,
                "pitch {width}x{height} exceeds the {max}x{max} limit",
                max = crate::MAX_PITCH_SIDE
            ),
            Self::StartOutOfBounds(p) => write!(f, "start {p} is outside the pitch"),
            Self::GoalOutOfBounds(p) => write!(f, "goal {p} is outside the pitch"),
        }
    }
}

impl std::error::Error for PlanError {}
