use tilepath_core::{Point, Range};

use crate::node::{Cost, STEP_COST};

/// Default extra cost for changing direction between two steps.
pub const DEFAULT_TURN_PENALTY: Cost = 1;

/// Largest turn penalty accepted for a search over `bounds`.
///
/// A returned path visits each cell at most once, so it makes fewer turns
/// than the grid has cells. Keeping `penalty * cells <= STEP_COST` means the
/// penalties on a path add up to less than one step, so a longer path can
/// never undercut a shorter one and costs cannot overflow.
pub fn max_turn_penalty(bounds: Range) -> Cost {
    STEP_COST / (bounds.len().max(1) as Cost)
}

/// Cost-to-go estimate added to a node's cost when ordering the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// No estimate: uniform-cost search.
    #[default]
    Zero,
    /// Manhattan distance in whole steps. Never overestimates, so returned
    /// paths stay optimal.
    Manhattan,
}

impl Heuristic {
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> Cost {
        match self {
            Heuristic::Zero => 0,
            Heuristic::Manhattan => Cost::from(from.manhattan(to)) * STEP_COST,
        }
    }
}

/// Tunables for a [`PathFinder`](crate::PathFinder).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Added to a step's cost when it changes direction. Zero disables it.
    /// Searches reject values above [`max_turn_penalty`] for the grid.
    pub turn_penalty: Cost,
    /// Whether the returned path begins with the start cell.
    pub include_start: bool,
    /// Estimate added to the frontier priority only; node costs never include it.
    pub heuristic: Heuristic,
    /// Abort with [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit)
    /// after this many expansions.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            turn_penalty: DEFAULT_TURN_PENALTY,
            include_start: false,
            heuristic: Heuristic::Zero,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    pub fn with_turn_penalty(mut self, penalty: Cost) -> Self {
        self.turn_penalty = penalty;
        self
    }

    /// Rank equal-length paths arbitrarily instead of by turn count.
    pub fn without_turn_penalty(self) -> Self {
        self.with_turn_penalty(0)
    }

    pub fn with_start_included(mut self, include: bool) -> Self {
        self.include_start = include;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default()
            .with_heuristic(Heuristic::Manhattan)
            .with_max_expansions(64);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn config_missing_fields_use_defaults() {
        let back: SearchConfig = serde_json::from_str(r#"{"include_start":true}"#).unwrap();
        assert_eq!(back, SearchConfig::default().with_start_included(true));
    }
}
