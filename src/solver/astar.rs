//! Best-first search ordered by `cost + manhattan_distance`.
//!
//! Ties on the key go to the lower move code, then to the earlier insertion.
//! A state is queued once; if a cheaper path to a still-queued state turns up,
//! its frontier entry is replaced in place. States already taken off the
//! frontier are closed for good: with a consistent heuristic and unit move
//! costs they were dequeued with their optimal cost, so no cheaper key can
//! appear for them later.
use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::Board;
use crate::heuristics::manhattan_distance;
use crate::solver::expand::expand;
use crate::solver::frontier::{Priority, PriorityFrontier};
use crate::solver::node::{NodeArena, NodeId, SearchNode};
use crate::solver::{Outcome, SearchStats};

pub fn search(start: &Board, arena: &mut NodeArena, stats: &mut SearchStats) -> Option<Outcome> {
    let mut checked: FxHashSet<Board> = FxHashSet::default();
    // Board -> node currently representing it in the frontier.
    let mut open: FxHashMap<Board, NodeId> = FxHashMap::default();
    let mut frontier = PriorityFrontier::new();

    let mut root = SearchNode::root(start.clone());
    root.key = manhattan_distance(start);
    let priority = Priority {
        key: root.key,
        move_code: root.move_code(),
    };
    let root_id = arena.push(root);
    frontier.push(root_id, priority);
    checked.insert(start.clone());
    open.insert(start.clone(), root_id);

    while let Some(id) = frontier.pop() {
        open.remove(&arena[id].board);
        if arena[id].board.is_goal() {
            return Some(Outcome {
                goal: id,
                fringe_size: frontier.len(),
            });
        }

        for mut child in expand(arena, id, stats) {
            child.key = child.cost + manhattan_distance(&child.board);
            let priority = Priority {
                key: child.key,
                move_code: child.move_code(),
            };

            if !checked.contains(&child.board) {
                checked.insert(child.board.clone());
                stats.record_depth(child.depth);
                let board = child.board.clone();
                let child_id = arena.push(child);
                frontier.push(child_id, priority);
                open.insert(board, child_id);
            } else if let Some(&existing) = open.get(&child.board) {
                let better = frontier
                    .priority(existing)
                    .map_or(false, |current| priority.key < current.key);
                if better {
                    trace!("decrease-key {} -> {}", arena[existing].key, priority.key);
                    let board = child.board.clone();
                    let child_id = arena.push(child);
                    frontier.replace(existing, child_id, priority);
                    open.insert(board, child_id);
                }
            }
        }

        stats.record_fringe(frontier.len());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    fn run(tiles: &[u8]) -> (NodeArena, SearchStats, Outcome) {
        let start = Board::new(tiles.to_vec()).unwrap();
        let mut arena = NodeArena::new();
        let mut stats = SearchStats::default();
        let outcome = search(&start, &mut arena, &mut stats).expect("solvable");
        (arena, stats, outcome)
    }

    #[test]
    fn test_goes_straight_for_the_goal() {
        let (arena, stats, outcome) = run(&[1, 2, 0, 3, 4, 5, 6, 7, 8]);
        let goal = &arena[outcome.goal];
        assert!(goal.board.is_goal());
        assert_eq!(goal.depth, 2);
        assert_eq!(goal.key, 2);
        // Each step on the optimal path keeps f = 2, everything else is worse.
        assert_eq!(stats.nodes_expanded, 2);
    }

    #[test]
    fn test_keys_are_cost_plus_heuristic() {
        let (arena, _, outcome) = run(&[3, 1, 2, 4, 0, 5, 6, 7, 8]);
        for (_, node) in arena.ancestry(outcome.goal) {
            assert_eq!(node.key, node.cost + manhattan_distance(&node.board));
            assert_eq!(node.cost, node.depth);
        }
        let moves: Vec<Direction> = arena
            .ancestry(outcome.goal)
            .filter_map(|(_, n)| n.direction)
            .collect();
        assert_eq!(moves, vec![Direction::Up, Direction::Left]);
    }

    #[test]
    fn test_start_is_goal() {
        let (arena, stats, outcome) = run(&[0, 1, 2, 3]);
        assert_eq!(arena[outcome.goal].depth, 0);
        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(outcome.fringe_size, 0);
    }

    #[test]
    fn test_every_state_expanded_at_most_once() {
        let start = Board::new(vec![0, 2, 1, 3]).unwrap();
        let mut arena = NodeArena::new();
        let mut stats = SearchStats::default();
        assert!(search(&start, &mut arena, &mut stats).is_none());
        assert_eq!(stats.nodes_expanded, 12);
    }
}
