//! A rectangular walkability grid.
//!
//! [`Grid`] stores one blocked flag per cell in row-major order. It can be
//! built from boolean rows, from an integer matrix where [`Grid::WALL`]
//! marks a blocked cell, or parsed from text (`#` blocked, `.` open).
//! Once handed to a search it is only read through shared references.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// Errors raised while building or querying a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid would have no cells.
    Empty,
    /// A row's length differs from the first row's.
    Malformed {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Text input contained a character other than `#` or `.`.
    InvalidChar { ch: char, pos: Point },
    /// A query addressed a cell outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Malformed {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::OutOfBounds(p) => write!(f, "grid: {p} is out of bounds"),
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular grid of open and blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid", into = "RawGrid")
)]
pub struct Grid {
    bounds: Range,
    walls: Vec<bool>,
}

impl Grid {
    /// Matrix value marking a blocked cell in [`Grid::from_matrix`].
    pub const WALL: i32 = 1;

    /// Create an all-open grid.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let bounds = Range::new(0, 0, width, height);
        Ok(Self {
            walls: vec![false; bounds.len()],
            bounds,
        })
    }

    /// Build a grid from rows of blocked flags (`true` = blocked).
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::build(rows.iter().map(|r| r.as_ref().iter().copied()))
    }

    /// Build a grid from an integer matrix; cells equal to [`Grid::WALL`]
    /// are blocked, every other value is open.
    pub fn from_matrix<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::build(
            rows.iter()
                .map(|r| r.as_ref().iter().map(|&v| v == Self::WALL)),
        )
    }

    fn build<R, I>(rows: R) -> Result<Self, GridError>
    where
        R: Iterator<Item = I>,
        I: Iterator<Item = bool>,
    {
        let mut walls = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (y, row) in rows.enumerate() {
            let before = walls.len();
            walls.extend(row);
            let found = walls.len() - before;
            if y == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::Malformed {
                    row: y,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            bounds: Range::new(0, 0, width as i32, height as i32),
            walls,
        })
    }

    /// The grid rectangle, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether the cell at `p` is blocked.
    pub fn is_wall(&self, p: Point) -> Result<bool, GridError> {
        self.bounds
            .index_of(p)
            .map(|i| self.walls[i])
            .ok_or(GridError::OutOfBounds(p))
    }

    /// Whether `p` is inside the grid and open.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        matches!(self.is_wall(p), Ok(false))
    }

    /// Mark or clear a wall while the grid is still being prepared.
    pub fn set_wall(&mut self, p: Point, blocked: bool) -> Result<(), GridError> {
        let i = self.bounds.index_of(p).ok_or(GridError::OutOfBounds(p))?;
        self.walls[i] = blocked;
        Ok(())
    }

    /// Number of blocked cells.
    pub fn count_walls(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Row-major iterator over `(position, blocked)`.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.bounds.iter().zip(self.walls.iter().copied())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse rows of `#` (blocked) and `.` (open). Surrounding whitespace on
    /// each line and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (y, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    _ => Err(GridError::InvalidChar {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, blocked)) in self.iter().enumerate() {
            if i > 0 && p.x == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", if blocked { '#' } else { '.' })?;
        }
        Ok(())
    }
}

/// Serialized form: dimensions plus the row-major wall flags.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGrid {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

#[cfg(feature = "serde")]
impl From<Grid> for RawGrid {
    fn from(g: Grid) -> Self {
        Self {
            width: g.width(),
            height: g.height(),
            walls: g.walls,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let mut grid = Grid::new(raw.width, raw.height)?;
        if raw.walls.len() != grid.walls.len() {
            return Err(GridError::Malformed {
                row: 0,
                expected: grid.walls.len(),
                found: raw.walls.len(),
            });
        }
        grid.walls = raw.walls;
        Ok(grid)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g: Grid = ".#.\n#..".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn grid_rejects_mismatched_cells() {
        let json = r#"{"width":2,"height":2,"walls":[true,false,false]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
