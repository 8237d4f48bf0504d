//! Successor generation shared by every strategy.
use crate::board::Direction;
use crate::solver::node::{NodeArena, NodeId, SearchNode};
use crate::solver::SearchStats;

/// Produces every legal child of `id`, in the order Up, Down, Left, Right.
///
/// Children are returned detached; the caller decides which ones enter the
/// arena. Counts as exactly one expansion in `stats`, however many children
/// come back.
pub fn expand(arena: &NodeArena, id: NodeId, stats: &mut SearchStats) -> Vec<SearchNode> {
    stats.nodes_expanded += 1;

    let node = &arena[id];
    Direction::ALL
        .iter()
        .filter_map(|&direction| {
            node.board.move_blank(direction).map(|board| SearchNode {
                board,
                parent: Some(id),
                direction: Some(direction),
                depth: node.depth + 1,
                cost: node.cost + 1,
                key: 0,
            })
        })
        .collect()
}
