use tilepath_core::{Grid, Point, Range};

/// Read-only walkability view searched by [`PathFinder`](crate::PathFinder).
///
/// Implement this for a host map type to search it without copying into a
/// [`Grid`].
pub trait WalkGrid {
    /// The rectangle of addressable cells.
    fn bounds(&self) -> Range;

    /// Whether the cell at `p` is blocked. Only called for `p` inside
    /// [`bounds`](Self::bounds).
    fn is_blocked(&self, p: Point) -> bool;

    /// Whether `p` is inside the bounds and not blocked.
    #[inline]
    fn is_open(&self, p: Point) -> bool {
        self.bounds().contains(p) && !self.is_blocked(p)
    }
}

impl WalkGrid for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.is_wall(p).unwrap_or(true)
    }
}
