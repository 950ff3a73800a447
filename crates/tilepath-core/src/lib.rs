//! **tilepath-core** — core types for orthogonal grid pathfinding.
//!
//! This crate provides the foundational types used by `tilepath-paths`:
//! integer geometry, the four movement directions, and an immutable
//! walkability [`Grid`].

pub mod direction;
pub mod geom;
pub mod grid;

pub use direction::Direction;
pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
