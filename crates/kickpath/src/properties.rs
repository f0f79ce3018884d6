//! Randomized checks of the planner's invariants.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use proptest::prelude::*;

use crate::{Direction, Pitch, PlanOutcome, Planner, Point, find_path, octile};

/// Exact shortest cost on an open grid with plain 10/14 steps.
fn flat_shortest(width: i32, height: i32, from: Point, to: Point) -> i32 {
    let mut best: HashMap<Point, i32> = HashMap::new();
    let mut open = BinaryHeap::new();
    best.insert(from, 0);
    open.push(Reverse((0, from)));
    while let Some(Reverse((g, p))) = open.pop() {
        if p == to {
            return g;
        }
        if best.get(&p).is_some_and(|&b| b < g) {
            continue;
        }
        for d in Direction::ALL {
            let n = p.step(d);
            if n.x < 0 || n.y < 0 || n.x >= width || n.y >= height {
                continue;
            }
            let ng = g + if d.is_diagonal() { 14 } else { 10 };
            if best.get(&n).is_none_or(|&b| ng < b) {
                best.insert(n, ng);
                open.push(Reverse((ng, n)));
            }
        }
    }
    i32::MAX
}

fn cell(w: i32, h: i32) -> impl Strategy<Value = (i32, i32)> {
    (0..w, 0..h)
}

prop_compose! {
    fn layout()(w in 2i32..10, h in 2i32..10)(
        w in Just(w),
        h in Just(h),
        start in cell(w, h),
        goal in cell(w, h),
        obstacles in prop::collection::vec(cell(w, h), 0..20),
    ) -> (i32, i32, Point, Point, Vec<Point>) {
        let obstacles = obstacles.into_iter().map(Point::from).collect();
        (w, h, Point::from(start), Point::from(goal), obstacles)
    }
}

proptest! {
    #[test]
    fn blocked_goal_is_always_empty((w, h, start, goal, mut obstacles) in layout(), ball: bool) {
        obstacles.push(goal);
        prop_assert!(find_path(start, goal, &obstacles, w, h, ball).is_empty());
    }

    #[test]
    fn isolated_goal_is_always_empty((w, h, start, goal, mut obstacles) in layout(), ball: bool) {
        obstacles.extend(goal.neighbors_8());
        obstacles.retain(|&p| p != goal);
        let planner = Planner::new(w, h, obstacles.clone()).unwrap();
        prop_assert_eq!(planner.plan(start, goal, ball).unwrap(), PlanOutcome::GoalEnclosed);
        prop_assert!(find_path(start, goal, &obstacles, w, h, ball).is_empty());
    }

    #[test]
    fn found_routes_are_connected((w, h, start, goal, obstacles) in layout(), ball: bool) {
        let path = find_path(start, goal, &obstacles, w, h, ball);
        if !path.is_empty() {
            let pitch = Pitch::new(w, h, obstacles).unwrap();
            prop_assert_eq!(path.last(), Some(&goal));
            prop_assert!(!path.contains(&start));
            let mut cur = start;
            for &p in &path {
                prop_assert!(cur.is_adjacent(p));
                prop_assert!(pitch.is_open(p));
                cur = p;
            }
        }
    }

    #[test]
    fn heuristic_never_overestimates(w in 1i32..8, h in 1i32..8, a in (0i32..8, 0i32..8), b in (0i32..8, 0i32..8)) {
        let a = Point::new(a.0 % w, a.1 % h);
        let b = Point::new(b.0 % w, b.1 % h);
        prop_assert!(octile(a, b, 10, 14) <= flat_shortest(w, h, a, b));
    }

    #[test]
    fn plan_cost_is_bounded_below((w, h, start, goal, obstacles) in layout(), ball: bool) {
        let planner = Planner::new(w, h, obstacles).unwrap();
        if let PlanOutcome::Found(plan) = planner.plan(start, goal, ball).unwrap() {
            prop_assert!(plan.cost >= octile(start, goal, 10, 14));
            let model = planner.cost_model(ball);
            prop_assert_eq!(model.path_cost(start, &plan.path), Some(plan.cost));
        }
    }

    #[test]
    fn identical_calls_agree((w, h, start, goal, obstacles) in layout(), ball: bool) {
        let first = find_path(start, goal, &obstacles, w, h, ball);
        let second = find_path(start, goal, &obstacles, w, h, ball);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn carrying_the_ball_never_cheapens_turns((w, h, start, goal, obstacles) in layout()) {
        let planner = Planner::new(w, h, obstacles).unwrap();
        if let PlanOutcome::Found(plan) = planner.plan(start, goal, false).unwrap() {
            let loose = planner.cost_model(false);
            let held = planner.cost_model(true);
            let loose_turns = loose.turning_cost(start, &plan.path);
            let held_turns = held.turning_cost(start, &plan.path);
            prop_assert!(held_turns >= loose_turns);
            prop_assert_eq!(held_turns == loose_turns, loose_turns == 0);
            prop_assert!(held.path_cost(start, &plan.path) >= loose.path_cost(start, &plan.path));
        }
    }
}
