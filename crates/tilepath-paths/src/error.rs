use std::fmt;

use tilepath_core::{Point, Range};

use crate::node::Cost;

/// Which end of a query a coordinate belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Errors returned by a search. An unreachable target is not an error; it
/// yields an empty [`Path`](crate::Path).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// `start` or `end` lies outside the grid.
    InvalidCoordinate {
        endpoint: Endpoint,
        pos: Point,
        bounds: Range,
    },
    /// The configured turn penalty is above
    /// [`max_turn_penalty`](crate::max_turn_penalty) for this grid.
    TurnPenaltyTooLarge { penalty: Cost, max: Cost },
    /// The cancellation flag was raised while searching.
    Cancelled,
    /// The configured expansion budget ran out.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate {
                endpoint,
                pos,
                bounds,
            } => write!(f, "search: {endpoint} {pos} outside grid {bounds}"),
            Self::TurnPenaltyTooLarge { penalty, max } => {
                write!(f, "search: turn penalty {penalty} exceeds {max} for this grid")
            }
            Self::Cancelled => write!(f, "search: cancelled"),
            Self::ExpansionLimit { limit } => {
                write!(f, "search: gave up after {limit} expansions")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = SearchError::InvalidCoordinate {
            endpoint: Endpoint::End,
            pos: Point::new(4, 0),
            bounds: Range::new(0, 0, 4, 4),
        };
        assert_eq!(e.to_string(), "search: end (4, 0) outside grid [(0, 0)-(4, 4))");
        assert_eq!(
            SearchError::ExpansionLimit { limit: 3 }.to_string(),
            "search: gave up after 3 expansions"
        );
        assert_eq!(
            SearchError::TurnPenaltyTooLarge { penalty: 9, max: 4 }.to_string(),
            "search: turn penalty 9 exceeds 4 for this grid"
        );
    }
}
