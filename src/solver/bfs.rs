//! Breadth-first search: FIFO frontier, optimal in move count.
use crate::board::Board;
use crate::solver::frontier::FifoFrontier;
use crate::solver::node::NodeArena;
use crate::solver::{graph_search, ChildOrder, Outcome, SearchStats};

pub fn search(start: &Board, arena: &mut NodeArena, stats: &mut SearchStats) -> Option<Outcome> {
    graph_search(FifoFrontier::default(), ChildOrder::Expansion, start, arena, stats)
}
