//! Graph search over sliding-tile boards.
//!
//! Three interchangeable strategies are provided, selected by [`Strategy`]:
//! - `bfs`: breadth-first, FIFO frontier.
//! - `dfs`: depth-first, LIFO frontier.
//! - `ast`: best-first on `cost + manhattan_distance` with decrease-key.
//!
//! All of them test for the goal when a node is taken off the frontier, mark
//! states visited when they are first queued, and report their bookkeeping
//! through [`SearchStats`]. [`solve`] runs a strategy and traces the winning
//! node back into a [`Solution`].
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Direction};
use crate::error::{Result, SolverError};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod expand;
pub mod frontier;
pub mod node;

use expand::expand;
use frontier::Frontier;
use node::{NodeArena, NodeId, SearchNode};

/// Search strategy tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::AStar];

    /// The selector accepted on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::AStar => "ast",
        }
    }
}

impl FromStr for Strategy {
    type Err = SolverError;

    /// Parses a selector case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::solver::Strategy;
    /// assert_eq!("BFS".parse::<Strategy>().unwrap(), Strategy::Bfs);
    /// assert_eq!("ast".parse::<Strategy>().unwrap(), Strategy::AStar);
    /// assert!("ida".parse::<Strategy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.tag() == tag)
            .ok_or_else(|| SolverError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag().to_uppercase())
    }
}

/// Options for a single search.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Reject boards of the wrong permutation parity before searching. When
    /// off, such boards exhaust their reachable states and end in
    /// [`SolverError::NoSolution`].
    pub check_solvability: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            check_solvability: true,
        }
    }
}

/// Counters owned by one search invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of `expand` calls.
    pub nodes_expanded: u64,
    /// Largest frontier length seen after an expansion.
    pub max_fringe_size: usize,
    /// Deepest node ever queued.
    pub max_search_depth: u32,
}

impl SearchStats {
    pub(crate) fn record_depth(&mut self, depth: u32) {
        self.max_search_depth = self.max_search_depth.max(depth);
    }

    pub(crate) fn record_fringe(&mut self, len: usize) {
        self.max_fringe_size = self.max_fringe_size.max(len);
    }
}

/// What a strategy hands back when it dequeues the goal.
#[derive(Clone, Copy, Debug)]
pub struct Outcome {
    pub goal: NodeId,
    /// Frontier length right after the goal was dequeued.
    pub fringe_size: usize,
}

/// A solved search: the move sequence plus the statistics of the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<Direction>,
    pub nodes_expanded: u64,
    pub fringe_size: usize,
    pub max_fringe_size: usize,
    pub search_depth: u32,
    pub max_search_depth: u32,
}

impl Solution {
    /// Number of moves in the path.
    pub fn cost(&self) -> usize {
        self.path.len()
    }
}

/// Solves `start` with the chosen strategy.
///
/// # Arguments
/// * `strategy`: Which search to run.
/// * `start`: The scrambled board. The goal is always `0, 1, ..., N²-1`.
/// * `config`: Search options.
///
/// # Returns
/// * `Ok(Solution)` with the path from `start` to the goal.
/// * `Err(SolverError::Unsolvable)` if parity checking is on and the goal is unreachable.
/// * `Err(SolverError::NoSolution)` if the frontier empties first.
///
/// # Examples
/// ```
/// use npuzzle_solver::board::{Board, Direction};
/// use npuzzle_solver::solver::{solve, SearchConfig, Strategy};
///
/// let start = Board::new(vec![1, 2, 0, 3, 4, 5, 6, 7, 8]).unwrap();
/// let solution = solve(Strategy::Bfs, &start, &SearchConfig::default()).unwrap();
/// assert_eq!(solution.path, vec![Direction::Left, Direction::Left]);
/// assert_eq!(solution.cost(), 2);
/// ```
pub fn solve(strategy: Strategy, start: &Board, config: &SearchConfig) -> Result<Solution> {
    if config.check_solvability {
        if !start.is_solvable() {
            return Err(SolverError::Unsolvable);
        }
    } else {
        warn!("solvability check disabled; an unsolvable board searches its whole parity class");
    }

    let mut arena = NodeArena::new();
    let mut stats = SearchStats::default();
    let outcome = match strategy {
        Strategy::Bfs => bfs::search(start, &mut arena, &mut stats),
        Strategy::Dfs => dfs::search(start, &mut arena, &mut stats),
        Strategy::AStar => astar::search(start, &mut arena, &mut stats),
    };

    let outcome = match outcome {
        Some(outcome) => outcome,
        None => {
            debug!(
                "{} exhausted {} states without reaching the goal",
                strategy,
                arena.len()
            );
            return Err(SolverError::NoSolution {
                nodes_expanded: stats.nodes_expanded,
            });
        }
    };

    let path = backtrace(&arena, outcome.goal, start);
    let search_depth = arena[outcome.goal].depth;
    debug!(
        "{} reached the goal at depth {} after {} expansions ({} nodes allocated)",
        strategy,
        search_depth,
        stats.nodes_expanded,
        arena.len()
    );

    Ok(Solution {
        path,
        nodes_expanded: stats.nodes_expanded,
        fringe_size: outcome.fringe_size,
        max_fringe_size: stats.max_fringe_size,
        search_depth,
        max_search_depth: stats.max_search_depth,
    })
}

/// Follows parent links from `goal` until the node holding `initial`, and
/// returns the moves in start-to-goal order.
pub fn backtrace(arena: &NodeArena, goal: NodeId, initial: &Board) -> Vec<Direction> {
    let mut path: Vec<Direction> = arena
        .ancestry(goal)
        .take_while(|(_, node)| node.board != *initial)
        .filter_map(|(_, node)| node.direction)
        .collect();
    path.reverse();
    path
}

/// Child order used when pushing onto an uninformed frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ChildOrder {
    /// Up, Down, Left, Right.
    Expansion,
    /// Right, Left, Down, Up; a stack then pops `Up` first.
    Reversed,
}

/// The search loop shared by BFS and DFS.
pub(crate) fn graph_search<F: Frontier>(
    mut frontier: F,
    order: ChildOrder,
    start: &Board,
    arena: &mut NodeArena,
    stats: &mut SearchStats,
) -> Option<Outcome> {
    let mut visited: FxHashSet<Board> = FxHashSet::default();
    visited.insert(start.clone());
    frontier.push(arena.push(SearchNode::root(start.clone())));

    while let Some(id) = frontier.pop() {
        if arena[id].board.is_goal() {
            return Some(Outcome {
                goal: id,
                fringe_size: frontier.len(),
            });
        }

        let mut children = expand(arena, id, stats);
        if order == ChildOrder::Reversed {
            children.reverse();
        }

        for child in children {
            if visited.contains(&child.board) {
                continue;
            }
            visited.insert(child.board.clone());
            stats.record_depth(child.depth);
            frontier.push(arena.push(child));
        }

        stats.record_fringe(frontier.len());
    }

    None
}
