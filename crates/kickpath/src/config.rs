//! Cost weights and planner limits.

use crate::cost::TurnClass;

/// Weights of the composite move cost.
///
/// All costs are integer units where a straight step is 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostConfig {
    /// Horizontal or vertical step.
    pub straight: i32,
    /// Diagonal step (≈ √2 × straight).
    pub diagonal: i32,
    /// Heading change below 45°.
    pub nudge: i32,
    /// Heading change of at least 45° and below 90°.
    pub soft_turn: i32,
    /// Heading change of at least 90° and below 135°.
    pub sharp_turn: i32,
    /// Heading change of 135° or more.
    pub reversal: i32,
    /// Multiplier on every turn cost while the ball is carried.
    pub ball_factor: i32,
    /// Surcharge for entering a cell next to an obstacle.
    pub danger: i32,
    /// Chebyshev radius around obstacles that counts as dangerous.
    pub danger_radius: i32,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            straight: 10,
            diagonal: 14,
            nudge: 2,
            soft_turn: 5,
            sharp_turn: 15,
            reversal: 25,
            ball_factor: 2,
            danger: 8,
            danger_radius: 1,
        }
    }
}

impl CostConfig {
    /// Base cost of a turn of the given class, before the ball factor.
    #[inline]
    pub fn turn(&self, class: TurnClass) -> i32 {
        match class {
            TurnClass::Straight => 0,
            TurnClass::Nudge => self.nudge,
            TurnClass::Soft => self.soft_turn,
            TurnClass::Sharp => self.sharp_turn,
            TurnClass::Reversal => self.reversal,
        }
    }
}

/// Configuration for a [`Planner`](crate::Planner).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub costs: CostConfig,
    /// Stop after finalizing this many cells. `None` searches until the
    /// frontier is exhausted.
    pub max_expansions: Option<usize>,
}
