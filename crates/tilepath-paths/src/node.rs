use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use tilepath_core::{Direction, Point, Range};

/// Accumulated path cost in fixed-point units.
pub type Cost = u64;

/// Cost of one orthogonal step.
pub const STEP_COST: Cost = 1 << 32;

/// Index of a node inside the per-call arena.
pub(crate) type NodeId = usize;

/// One visited or candidate cell of a search.
///
/// Equality and hashing consider the position only: two nodes for the same
/// cell are the same node regardless of cost or entry direction.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pos: Point,
    cost: Cost,
    direction: Option<Direction>,
    pub(crate) parent: Option<NodeId>,
}

impl SearchNode {
    pub(crate) fn start(pos: Point) -> Self {
        Self {
            pos,
            cost: 0,
            direction: None,
            parent: None,
        }
    }

    pub(crate) fn reached(pos: Point, cost: Cost, direction: Direction, parent: NodeId) -> Self {
        Self {
            pos,
            cost,
            direction: Some(direction),
            parent: Some(parent),
        }
    }

    /// Grid position of this step.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Accumulated cost from the start, including turn penalties.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Direction moved to enter this cell, `None` for the start.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Revise the route to this node after a cheaper one was found.
    pub(crate) fn relink(&mut self, cost: Cost, direction: Direction, parent: NodeId) {
        debug_assert!(cost < self.cost);
        self.cost = cost;
        self.direction = Some(direction);
        self.parent = Some(parent);
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step, pos={}, cost={}", self.pos, self.cost)?;
        match self.direction {
            Some(d) => write!(f, ", dir={d}"),
            None => write!(f, ", dir=none"),
        }
    }
}

// ---------------------------------------------------------------------------
// Arena
// ---------------------------------------------------------------------------

/// Open/closed membership of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Unseen,
    Open(NodeId),
    Closed(NodeId),
}

/// Per-call node storage. Predecessor links are arena indices, and a
/// per-cell slot table answers open/closed membership by position.
pub(crate) struct Arena {
    bounds: Range,
    nodes: Vec<SearchNode>,
    slots: Vec<Slot>,
}

impl Arena {
    pub(crate) fn new(bounds: Range) -> Self {
        Self {
            bounds,
            nodes: Vec::new(),
            slots: vec![Slot::Unseen; bounds.len()],
        }
    }

    /// Membership of the cell at `p`. Cells outside the bounds read as unseen.
    #[inline]
    pub(crate) fn slot(&self, p: Point) -> Slot {
        self.bounds
            .index_of(p)
            .map_or(Slot::Unseen, |i| self.slots[i])
    }

    /// Store a new node and mark its cell open.
    pub(crate) fn open(&mut self, node: SearchNode) -> NodeId {
        let id = self.nodes.len();
        if let Some(i) = self.bounds.index_of(node.pos) {
            self.slots[i] = Slot::Open(id);
        }
        self.nodes.push(node);
        id
    }

    /// Freeze a node; it is never revised afterwards.
    pub(crate) fn close(&mut self, id: NodeId) {
        if let Some(i) = self.bounds.index_of(self.nodes[id].pos) {
            self.slots[i] = Slot::Closed(id);
        }
    }

    #[inline]
    pub(crate) fn is_open(&self, id: NodeId) -> bool {
        self.slot(self.nodes[id].pos) == Slot::Open(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk predecessor links back from `goal` and return the nodes in
    /// start-to-goal order. The start node is dropped unless `include_start`.
    pub(crate) fn reconstruct(&self, goal: NodeId, include_start: bool) -> Vec<SearchNode> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(id) = cur {
            let node = &self.nodes[id];
            cur = node.parent;
            if cur.is_some() || include_start {
                path.push(node.clone());
            }
        }
        path.reverse();
        path
    }
}

impl Index<NodeId> for Arena {
    type Output = SearchNode;
    #[track_caller]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }
}

impl IndexMut<NodeId> for Arena {
    #[track_caller]
    fn index_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_cost_and_direction() {
        let a = SearchNode::start(Point::new(1, 1));
        let b = SearchNode::reached(Point::new(1, 1), 5 * STEP_COST, Direction::Left, 0);
        let c = SearchNode::start(Point::new(1, 2));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display() {
        let n = SearchNode::reached(Point::new(2, 0), 7, Direction::Right, 0);
        assert_eq!(n.to_string(), "Step, pos=(2, 0), cost=7, dir=→");
        let s = SearchNode::start(Point::ZERO);
        assert_eq!(s.to_string(), "Step, pos=(0, 0), cost=0, dir=none");
    }

    #[test]
    fn arena_slots_track_membership() {
        let mut arena = Arena::new(Range::new(0, 0, 3, 3));
        let p = Point::new(1, 2);
        assert_eq!(arena.slot(p), Slot::Unseen);
        let id = arena.open(SearchNode::start(p));
        assert_eq!(arena.slot(p), Slot::Open(id));
        assert!(arena.is_open(id));
        arena.close(id);
        assert_eq!(arena.slot(p), Slot::Closed(id));
        assert!(!arena.is_open(id));
        assert_eq!(arena.slot(Point::new(5, 5)), Slot::Unseen);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn relink_revises_in_place() {
        let mut arena = Arena::new(Range::new(0, 0, 3, 1));
        let a = arena.open(SearchNode::start(Point::new(0, 0)));
        let b = arena.open(SearchNode::reached(Point::new(2, 0), 9, Direction::Right, a));
        arena[b].relink(4, Direction::Left, a);
        assert_eq!(arena[b].cost(), 4);
        assert_eq!(arena[b].direction(), Some(Direction::Left));
        assert_eq!(arena.slot(Point::new(2, 0)), Slot::Open(b));
    }

    #[test]
    fn reconstruct_with_and_without_start() {
        let mut arena = Arena::new(Range::new(0, 0, 3, 1));
        let a = arena.open(SearchNode::start(Point::new(0, 0)));
        let b = arena.open(SearchNode::reached(Point::new(1, 0), STEP_COST, Direction::Right, a));
        let c = arena.open(SearchNode::reached(
            Point::new(2, 0),
            2 * STEP_COST,
            Direction::Right,
            b,
        ));

        let without: Vec<_> = arena.reconstruct(c, false).iter().map(|n| n.pos()).collect();
        assert_eq!(without, vec![Point::new(1, 0), Point::new(2, 0)]);

        let with: Vec<_> = arena.reconstruct(c, true).iter().map(|n| n.pos()).collect();
        assert_eq!(with, vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
    }
}
