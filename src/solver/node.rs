//! Search-tree nodes and the arena that owns them.
//!
//! Nodes refer to their parent by [`NodeId`] instead of by reference, so the
//! whole tree lives in one `Vec` and is released in one go once the winning
//! path has been traced back.
use std::ops::Index;

use crate::board::{Board, Direction};

/// Index of a node inside a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One board state together with how the search reached it.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub board: Board,
    /// Node this one was expanded from; `None` for the root.
    pub parent: Option<NodeId>,
    /// Move that produced this node from its parent; `None` for the root.
    pub direction: Option<Direction>,
    pub depth: u32,
    /// Path cost so far. Every move costs 1, so this always equals `depth`.
    pub cost: u32,
    /// `cost + heuristic`, filled in by the informed search only.
    pub key: u32,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        SearchNode {
            board,
            parent: None,
            direction: None,
            depth: 0,
            cost: 0,
            key: 0,
        }
    }

    /// Numeric code of the producing move, `0` for the root.
    pub fn move_code(&self) -> u8 {
        self.direction.map_or(0, Direction::code)
    }
}

/// Owns every node created during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks from `id` up to the root, yielding `id` first.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SearchNode)> + '_ {
        std::iter::successors(Some(id), move |&current| self[current].parent)
            .map(move |current| (current, &self[current]))
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node_defaults() {
        let root = SearchNode::root(Board::goal(3));
        assert!(root.parent.is_none());
        assert!(root.direction.is_none());
        assert_eq!(root.depth, 0);
        assert_eq!(root.cost, 0);
        assert_eq!(root.move_code(), 0);
    }

    #[test]
    fn test_ancestry_walks_to_root() {
        let mut arena = NodeArena::new();
        let goal = Board::goal(3);
        let root = arena.push(SearchNode::root(goal.clone()));

        let down = goal.move_blank(Direction::Down).unwrap();
        let child = arena.push(SearchNode {
            board: down.clone(),
            parent: Some(root),
            direction: Some(Direction::Down),
            depth: 1,
            cost: 1,
            key: 0,
        });
        let grandchild = arena.push(SearchNode {
            board: down.move_blank(Direction::Right).unwrap(),
            parent: Some(child),
            direction: Some(Direction::Right),
            depth: 2,
            cost: 2,
            key: 0,
        });

        let ids: Vec<NodeId> = arena.ancestry(grandchild).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![grandchild, child, root]);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena[child].move_code(), 2);
        assert!(arena.get(NodeId(3)).is_none());
    }
}
