use std::sync::atomic::{AtomicBool, Ordering};

use tilepath_core::{Direction, Point};

use crate::config::{SearchConfig, max_turn_penalty};
use crate::error::{Endpoint, SearchError};
use crate::node::{Arena, Cost, NodeId, STEP_COST, SearchNode, Slot};
use crate::open_set::OpenSet;
use crate::path::{Path, SearchStats};
use crate::traits::WalkGrid;

/// Neighbour enumeration order. Fixed so that ties resolve the same way on
/// every call.
const EXPANSION_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

/// Shortest-path search over a [`WalkGrid`].
///
/// A `PathFinder` only holds its [`SearchConfig`]; open and closed sets are
/// built and dropped inside each call, so one finder can serve concurrent
/// queries against the same grid.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {
    /// A finder with the default configuration: turn penalty on, start
    /// excluded from results.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compute the cheapest orthogonal path from `start` to `end`.
    ///
    /// Every step costs [`STEP_COST`]; a step that changes direction costs
    /// the configured turn penalty on top, so among equally short routes the
    /// straighter one wins. The result runs from the first step after
    /// `start` (or from `start` itself with
    /// [`include_start`](SearchConfig::include_start)) to `end` inclusive.
    /// It is empty when `start == end` or when `end` cannot be reached.
    ///
    /// Fails with [`SearchError::InvalidCoordinate`] if either endpoint is
    /// outside the grid, and with [`SearchError::TurnPenaltyTooLarge`] if
    /// the turn penalty exceeds [`max_turn_penalty`] for it. Endpoints are not required to be walkable; a
    /// blocked `end` is simply unreachable.
    pub fn find_shortest_path<G: WalkGrid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        end: Point,
    ) -> Result<Path, SearchError> {
        self.search(grid, start, end, None)
    }

    /// Like [`find_shortest_path`](Self::find_shortest_path), but checks
    /// `cancel` before every expansion and stops with
    /// [`SearchError::Cancelled`] once it is set.
    pub fn find_shortest_path_cancellable<G: WalkGrid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        end: Point,
        cancel: &AtomicBool,
    ) -> Result<Path, SearchError> {
        self.search(grid, start, end, Some(cancel))
    }

    fn search<G: WalkGrid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        end: Point,
        cancel: Option<&AtomicBool>,
    ) -> Result<Path, SearchError> {
        let bounds = grid.bounds();
        for (endpoint, pos) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !bounds.contains(pos) {
                return Err(SearchError::InvalidCoordinate {
                    endpoint,
                    pos,
                    bounds,
                });
            }
        }

        let max = max_turn_penalty(bounds);
        if self.config.turn_penalty > max {
            return Err(SearchError::TurnPenaltyTooLarge {
                penalty: self.config.turn_penalty,
                max,
            });
        }

        if start == end {
            log::debug!("path {start} -> {end}: already there");
            return Ok(Path::default());
        }

        let cfg = &self.config;
        let estimate = |p: Point| cfg.heuristic.estimate(p, end);

        let mut arena = Arena::new(bounds);
        let mut open = OpenSet::default();
        let mut stats = SearchStats::default();

        let start_id = arena.open(SearchNode::start(start));
        open.push(start_id, estimate(start));
        stats.max_open = open.len();

        while let Some(current) =
            open.pop(|id, priority| arena.is_open(id) && priority_of(&arena, id, &estimate) == priority)
        {
            if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
                log::debug!("path {start} -> {end}: cancelled after {} expansions", stats.expanded);
                return Err(SearchError::Cancelled);
            }
            if let Some(limit) = cfg.max_expansions {
                if stats.expanded >= limit {
                    log::debug!("path {start} -> {end}: expansion limit {limit} reached");
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }

            arena.close(current);
            stats.expanded += 1;

            let (pos, cost, entered) = {
                let node = &arena[current];
                (node.pos(), node.cost(), node.direction())
            };
            log::trace!("expand {pos} cost={cost} open={}", open.len());

            if pos == end {
                stats.generated = arena.len();
                let path = Path::new(arena.reconstruct(current, cfg.include_start), stats);
                log::debug!(
                    "path {start} -> {end}: {} steps, {} turns, {stats:?}",
                    path.steps(),
                    path.turns()
                );
                return Ok(path);
            }

            for dir in EXPANSION_ORDER {
                let next = pos.step(dir);
                if !grid.is_open(next) {
                    continue;
                }
                let next_cost = cost + move_cost(entered, dir, cfg.turn_penalty);

                match arena.slot(next) {
                    Slot::Closed(_) => {}
                    Slot::Unseen => {
                        let id = arena.open(SearchNode::reached(next, next_cost, dir, current));
                        open.push(id, next_cost + estimate(next));
                    }
                    Slot::Open(id) => {
                        if next_cost < arena[id].cost() {
                            arena[id].relink(next_cost, dir, current);
                            open.reprioritize(id, next_cost + estimate(next));
                            stats.improved += 1;
                        }
                    }
                }
            }
            stats.max_open = stats.max_open.max(open.len());
        }

        stats.generated = arena.len();
        log::debug!("path {start} -> {end}: unreachable, {stats:?}");
        Ok(Path::new(Vec::new(), stats))
    }
}

/// Cost of stepping in `dir` after having entered the current cell moving
/// `entered`.
#[inline]
fn move_cost(entered: Option<Direction>, dir: Direction, turn_penalty: Cost) -> Cost {
    match entered {
        Some(d) if d != dir => STEP_COST + turn_penalty,
        _ => STEP_COST,
    }
}

#[inline]
fn priority_of(arena: &Arena, id: NodeId, estimate: &impl Fn(Point) -> Cost) -> Cost {
    let node = &arena[id];
    node.cost() + estimate(node.pos())
}

/// Search with the default [`SearchConfig`].
pub fn find_shortest_path<G: WalkGrid + ?Sized>(
    grid: &G,
    start: Point,
    end: Point,
) -> Result<Path, SearchError> {
    PathFinder::new().find_shortest_path(grid, start, end)
}
