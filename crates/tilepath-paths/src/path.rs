use std::fmt;
use std::ops::Index;

use tilepath_core::Point;

use crate::node::{Cost, SearchNode};

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier and closed.
    pub expanded: usize,
    /// Nodes created, including the start.
    pub generated: usize,
    /// Open nodes revised in place after a cheaper route was found.
    pub improved: usize,
    /// Largest frontier size seen.
    pub max_open: usize,
}

/// The result of a search: the steps from start to end.
///
/// An empty path means there was nothing to walk: either the start already
/// is the end, or no route exists.
#[derive(Clone, Debug, Default)]
pub struct Path {
    nodes: Vec<SearchNode>,
    stats: SearchStats,
}

impl Path {
    pub(crate) fn new(nodes: Vec<SearchNode>, stats: SearchStats) -> Self {
        Self { nodes, stats }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchNode> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[SearchNode] {
        &self.nodes
    }

    pub fn into_vec(self) -> Vec<SearchNode> {
        self.nodes
    }

    pub fn last(&self) -> Option<&SearchNode> {
        self.nodes.last()
    }

    pub fn positions(&self) -> Vec<Point> {
        self.nodes.iter().map(SearchNode::pos).collect()
    }

    /// Total cost of reaching the end, zero for an empty path.
    pub fn cost(&self) -> Cost {
        self.last().map_or(0, SearchNode::cost)
    }

    /// Number of orthogonal moves.
    pub fn steps(&self) -> usize {
        self.nodes.iter().filter(|n| n.direction().is_some()).count()
    }

    /// Number of direction changes between consecutive moves.
    pub fn turns(&self) -> usize {
        self.nodes
            .windows(2)
            .filter(|w| match (w[0].direction(), w[1].direction()) {
                (Some(a), Some(b)) => a != b,
                _ => false,
            })
            .count()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Index<usize> for Path {
    type Output = SearchNode;
    #[track_caller]
    fn index(&self, i: usize) -> &SearchNode {
        &self.nodes[i]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a SearchNode;
    type IntoIter = std::slice::Iter<'a, SearchNode>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Path {
    type Item = SearchNode;
    type IntoIter = std::vec::IntoIter<SearchNode>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

/// Renders one arrow per move, e.g. `→→↓↓`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.nodes.iter().filter_map(SearchNode::direction) {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
