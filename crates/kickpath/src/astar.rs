use std::collections::BinaryHeap;

use kickpath_core::{Direction, Point};

use crate::space::{Node, NodeRef, SearchResult, SearchSpace};
use crate::traits::AstarPather;

impl SearchSpace {
    /// Least-cost route from `from` to `to` using A* with heading-aware
    /// step costs.
    ///
    /// The route excludes `from`. A `budget` caps the number of finalized
    /// cells. Both endpoints must lie in the range; otherwise the search
    /// reports [`SearchResult::Exhausted`] immediately.
    pub fn astar<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        budget: Option<usize>,
    ) -> SearchResult {
        self.reset();
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return SearchResult::Exhausted;
        };

        self.nodes.insert(
            start_idx,
            Node {
                g: 0,
                ..Node::default()
            },
        );
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: pather.estimate(from, to),
            arrival: None,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let result = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search SearchResult::Exhausted;
            };

            let ci = current.idx;
            let Some(&Node { g: current_g, closed, .. }) = self.nodes.get(&ci) else {
                continue;
            };

            // Skip stale entries: already finalized at this cost or better.
            if closed <= current_g {
                continue;
            }
            if budget.is_some_and(|max| self.expanded >= max) {
                break 'search SearchResult::OverBudget;
            }

            if let Some(n) = self.nodes.get_mut(&ci) {
                n.closed = current_g;
            }
            self.expanded += 1;

            if ci == goal_idx {
                break 'search SearchResult::Found {
                    path: self.reconstruct(start_idx, goal_idx),
                    cost: current_g,
                };
            }

            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let Some(heading) = Direction::between(current_point, np) else {
                    continue;
                };
                let tentative_g =
                    current_g.saturating_add(pather.cost(current_point, np, current.arrival));

                let n = self.nodes.entry(ni).or_default();
                if tentative_g >= n.g {
                    continue;
                }

                n.g = tentative_g;
                n.parent = ci;

                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g.saturating_add(pather.estimate(np, to)),
                    arrival: Some(heading),
                });
            }
        };

        self.nbuf = nbuf;
        result
    }
}
