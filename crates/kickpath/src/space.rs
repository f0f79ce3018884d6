use std::collections::HashMap;

use kickpath_core::{Direction, Point, Range};

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

/// Sentinel for "no cost recorded yet".
pub const UNREACHABLE: i32 = i32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy)]
pub(crate) struct Node {
    /// Best known cost from the start.
    pub(crate) g: i32,
    /// Cost at which the node was last finalized, or `UNREACHABLE`.
    pub(crate) closed: i32,
    pub(crate) parent: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            closed: UNREACHABLE,
            parent: NO_PARENT,
        }
    }
}

/// Queue entry, ordered by `f` for use in `BinaryHeap`.
///
/// The same cell may be queued several times with different headings; the
/// cost tables decide which entries are stale.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) arrival: Option<Direction>,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Outcome of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// Goal reached. `path` runs from the cell after the start through the
    /// goal; `cost` is the goal's final `g`.
    Found { path: Vec<Point>, cost: i32 },
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// The expansion budget ran out first.
    OverBudget,
}

/// Transient state of one search over a pitch rectangle.
///
/// Holds the best-cost, finalized-cost and predecessor tables keyed by the
/// range's flat cell index. Only cells the search touches get an entry, so
/// memory follows the explored area rather than the pitch size.
pub struct SearchSpace {
    pub(crate) rng: Range,
    pub(crate) nodes: HashMap<usize, Node>,
    pub(crate) expanded: usize,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl SearchSpace {
    /// Create the tables for the given rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: HashMap::new(),
            expanded: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of cells finalized by the last search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Best known cost to `p` after the last search, or [`UNREACHABLE`].
    pub fn cost_at(&self, p: Point) -> i32 {
        self.idx(p)
            .and_then(|i| self.nodes.get(&i))
            .map_or(UNREACHABLE, |n| n.g)
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point(idx)
    }

    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.expanded = 0;
    }

    /// Walk predecessors back from `goal`; the start itself is left out.
    pub(crate) fn reconstruct(&self, start: usize, goal: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != start && ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes.get(&ci).map_or(NO_PARENT, |n| n.parent);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_f() {
        let mut open = BinaryHeap::new();
        for (idx, f) in [(0, 30), (1, 10), (2, 20)] {
            open.push(NodeRef {
                idx,
                f,
                arrival: None,
            });
        }
        let order: Vec<_> = std::iter::from_fn(|| open.pop().map(|n| n.f)).collect();
        assert_eq!(order, vec![10, 20, 30]);
    }

    #[test]
    fn fresh_space_is_unreached() {
        let space = SearchSpace::new(Range::with_size(4, 4));
        assert!(space.nodes.is_empty());
        assert_eq!(space.cost_at(Point::new(2, 2)), UNREACHABLE);
        assert_eq!(space.cost_at(Point::new(9, 9)), UNREACHABLE);
        assert_eq!(space.expanded(), 0);
    }

    #[test]
    fn reconstruct_excludes_start() {
        let mut space = SearchSpace::new(Range::with_size(3, 1));
        for (idx, parent) in [(1, 0), (2, 1)] {
            let node = Node {
                parent,
                ..Node::default()
            };
            space.nodes.insert(idx, node);
        }
        assert_eq!(
            space.reconstruct(0, 2),
            vec![Point::new(1, 0), Point::new(2, 0)]
        );
        assert!(space.reconstruct(0, 0).is_empty());
    }

    #[test]
    fn huge_range_allocates_lazily() {
        let space = SearchSpace::new(Range::with_size(i32::MAX, i32::MAX));
        assert!(space.nodes.is_empty());
        assert_eq!(space.cost_at(Point::new(i32::MAX - 1, 0)), UNREACHABLE);
    }
}
