//! Entry point: goal feasibility checks followed by the A* search.

use kickpath_core::Point;

use crate::config::PlannerConfig;
use crate::cost::CostModel;
use crate::error::PlanError;
use crate::pitch::Pitch;
use crate::space::{SearchResult, SearchSpace};

/// A route found by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPlan {
    /// Cells from the one after the start through the goal.
    pub path: Vec<Point>,
    /// Composite cost of walking `path` from the start.
    pub cost: i32,
    /// Cells finalized by the search.
    pub expanded: usize,
}

/// Result of a planning request.
///
/// Every variant but `Found` collapses to an empty path in [`find_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    Found(PathPlan),
    /// The goal cell is an obstacle.
    GoalBlocked,
    /// No neighbour of the goal is open, so nothing can step onto it.
    GoalEnclosed,
    /// The search exhausted every reachable cell.
    Unreachable,
    /// The expansion budget ran out before the goal was reached.
    BudgetExhausted,
}

impl PlanOutcome {
    /// The route, or an empty vector on any failure.
    pub fn into_path(self) -> Vec<Point> {
        match self {
            PlanOutcome::Found(plan) => plan.path,
            _ => Vec::new(),
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, PlanOutcome::Found(_))
    }
}

/// Route planner for a single pitch layout.
///
/// Owns the pitch (and with it the danger-zone cache); every call to
/// [`Planner::plan`] runs a fresh search with its own tables.
#[derive(Debug, Clone)]
pub struct Planner {
    pitch: Pitch,
    config: PlannerConfig,
}

impl Planner {
    /// Planner with default costs over a `width × height` pitch.
    pub fn new(
        width: i32,
        height: i32,
        obstacles: impl IntoIterator<Item = Point>,
    ) -> Result<Self, PlanError> {
        let config = PlannerConfig::default();
        let pitch = Pitch::new(width, height, obstacles)?
            .with_danger_radius(config.costs.danger_radius);
        Ok(Self { pitch, config })
    }

    /// Replace the configuration. The danger-zone cache is rebuilt if the
    /// radius changes.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        if config.costs.danger_radius != self.pitch.danger_radius() {
            self.pitch = self.pitch.with_danger_radius(config.costs.danger_radius);
        }
        self.config = config;
        self
    }

    #[inline]
    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Cost model for this pitch and configuration.
    pub fn cost_model(&self, has_ball: bool) -> CostModel<'_> {
        CostModel::new(&self.pitch, &self.config.costs, has_ball)
    }

    /// Reject goals nothing can reach, before any search runs.
    pub fn precheck(&self, goal: Point) -> Option<PlanOutcome> {
        if self.pitch.is_obstacle(goal) {
            log::debug!("goal {goal} is an obstacle");
            return Some(PlanOutcome::GoalBlocked);
        }
        if !self.pitch.has_open_neighbor(goal) {
            log::debug!("goal {goal} has no open neighbour");
            return Some(PlanOutcome::GoalEnclosed);
        }
        None
    }

    /// Plan a route from `start` to `goal`.
    ///
    /// Start and goal must lie on the pitch. The start cell is always
    /// expandable, even if it is listed as an obstacle.
    pub fn plan(
        &self,
        start: Point,
        goal: Point,
        has_ball: bool,
    ) -> Result<PlanOutcome, PlanError> {
        if !self.pitch.in_bounds(start) {
            return Err(PlanError::StartOutOfBounds(start));
        }
        if !self.pitch.in_bounds(goal) {
            return Err(PlanError::GoalOutOfBounds(goal));
        }
        if let Some(rejected) = self.precheck(goal) {
            return Ok(rejected);
        }

        let model = self.cost_model(has_ball);
        let mut space = SearchSpace::new(self.pitch.bounds());
        log::debug!("searching {start} -> {goal} (ball: {has_ball})");
        let outcome = match space.astar(&model, start, goal, self.config.max_expansions) {
            SearchResult::Found { path, cost } => {
                let cost = model.path_cost(start, &path).unwrap_or(cost);
                log::debug!(
                    "found {} steps, cost {cost}, {} cells expanded",
                    path.len(),
                    space.expanded()
                );
                PlanOutcome::Found(PathPlan {
                    path,
                    cost,
                    expanded: space.expanded(),
                })
            }
            SearchResult::Exhausted => {
                log::warn!("no path found from {start} to {goal}");
                PlanOutcome::Unreachable
            }
            SearchResult::OverBudget => {
                log::warn!(
                    "search from {start} to {goal} stopped after {} expansions",
                    space.expanded()
                );
                PlanOutcome::BudgetExhausted
            }
        };
        Ok(outcome)
    }
}

/// Least-cost route from `start` to `goal` on a `width × height` pitch.
///
/// Returns the cells after `start` up to and including `goal`, or an empty
/// vector when the goal is blocked, enclosed or unreachable, or when the
/// input is malformed.
pub fn find_path(
    start: Point,
    goal: Point,
    obstacles: &[Point],
    width: i32,
    height: i32,
    has_ball: bool,
) -> Vec<Point> {
    let planner = match Planner::new(width, height, obstacles.iter().copied()) {
        Ok(planner) => planner,
        Err(err) => {
            log::warn!("{err}");
            return Vec::new();
        }
    };
    match planner.plan(start, goal, has_ball) {
        Ok(outcome) => outcome.into_path(),
        Err(err) => {
            log::warn!("{err}");
            Vec::new()
        }
    }
}
