//! Shortest orthogonal paths on walkability grids.
//!
//! [`PathFinder`] runs a best-first search from a start cell to an end cell,
//! moving only up, down, left and right. Every step has the same cost, and
//! a small penalty for changing direction makes the search prefer the
//! straightest of several equally short routes.
//!
//! ```
//! use tilepath_core::{Grid, Point};
//! use tilepath_paths::find_shortest_path;
//!
//! let grid: Grid = "
//!     .#.#
//!     ....
//!     #.#.
//!     #.#.".parse().unwrap();
//! let path = find_shortest_path(&grid, Point::new(0, 0), Point::new(3, 3)).unwrap();
//! assert_eq!(path.to_string(), "↓→→→↓↓");
//! ```
//!
//! | Item | Role |
//! |---|---|
//! | [`WalkGrid`] | read-only grid view being searched, implemented for [`Grid`](tilepath_core::Grid) |
//! | [`SearchConfig`] | turn penalty, start inclusion, heuristic, expansion budget |
//! | [`Path`] | ordered [`SearchNode`]s plus [`SearchStats`] |
//! | [`SearchError`] | rejected endpoints or turn penalty, cancellation, exhausted budget |

mod config;
mod error;
mod node;
mod open_set;
mod path;
mod pathfinder;
mod traits;

pub use config::{DEFAULT_TURN_PENALTY, Heuristic, SearchConfig, max_turn_penalty};
pub use error::{Endpoint, SearchError};
pub use node::{Cost, STEP_COST, SearchNode};
pub use path::{Path, SearchStats};
pub use pathfinder::{PathFinder, find_shortest_path};
pub use traits::WalkGrid;
