//! Depth-first search: LIFO frontier.
//!
//! Children are pushed in reverse expansion order, so `Up` is still the first
//! sibling to be popped. Paths are not optimal.
use crate::board::Board;
use crate::solver::frontier::LifoFrontier;
use crate::solver::node::NodeArena;
use crate::solver::{graph_search, ChildOrder, Outcome, SearchStats};

pub fn search(start: &Board, arena: &mut NodeArena, stats: &mut SearchStats) -> Option<Outcome> {
    graph_search(LifoFrontier::default(), ChildOrder::Reversed, start, arena, stats)
}
