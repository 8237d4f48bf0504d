//! Board model for the sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Direction`: The four moves of the blank tile, with their fixed numeric codes.
//! - `Board`: A square N×N permutation of `0..N²` where `0` is the blank,
//!   together with the move operator and the parity test used to reject
//!   unreachable boards.
use serde::Serialize;
use std::fmt;

use crate::error::{Result, SolverError};

/// Largest number of tiles a `Board` can hold (tiles are stored as `u8`).
pub const MAX_TILES: usize = 256;

/// A move of the blank tile.
///
/// The numeric codes are fixed (`Up` = 1 .. `Right` = 4). Expansion always
/// tries directions in ascending code order, and the informed search uses the
/// code as its secondary ordering key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the numeric code of this direction (1 = Up, 2 = Down, 3 = Left, 4 = Right).
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::board::Direction;
    /// assert_eq!(Direction::Up.code(), 1);
    /// assert_eq!(Direction::Right.code(), 4);
    /// ```
    pub fn code(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::Right => 4,
        }
    }

    /// Inverse of [`Direction::code`]. Returns `None` for anything outside `1..=4`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Direction::Up),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            4 => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A sliding-tile board.
///
/// Tiles are stored row-major (left to right, top to bottom). The board is
/// immutable by convention: [`Board::move_blank`] returns a new board and
/// leaves `self` untouched. Equality and hashing cover the tile sequence, so a
/// `Board` doubles as the canonical key for visited-set membership.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: Box<[u8]>,
    side: usize,
    blank: usize,
}

impl Board {
    /// Creates a board from a row-major tile sequence.
    ///
    /// # Arguments
    /// * `tiles`: The tile values. Must contain every value of `0..N²` exactly once,
    ///   where `N²` is the sequence length and a perfect square.
    ///
    /// # Returns
    /// * `Ok(Board)` if the sequence is a valid square permutation.
    /// * `Err(SolverError::InvalidBoard)` if it is empty, too large, not a perfect
    ///   square, or contains a duplicate or out-of-range tile.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::board::Board;
    /// let board = Board::new(vec![1, 2, 0, 3, 4, 5, 6, 7, 8]).unwrap();
    /// assert_eq!(board.side(), 3);
    /// assert_eq!(board.blank_index(), 2);
    ///
    /// assert!(Board::new(vec![1, 2, 3]).is_err()); // not a square
    /// assert!(Board::new(vec![0, 1, 1, 3]).is_err()); // duplicate tile
    /// ```
    pub fn new(tiles: Vec<u8>) -> Result<Self> {
        let len = tiles.len();
        if len == 0 {
            return Err(SolverError::InvalidBoard("board has no tiles".to_string()));
        }
        if len > MAX_TILES {
            return Err(SolverError::InvalidBoard(format!(
                "board has {} tiles, at most {} are supported",
                len, MAX_TILES
            )));
        }

        let side = integer_sqrt(len);
        if side * side != len {
            return Err(SolverError::InvalidBoard(format!(
                "{} tiles do not form a square grid",
                len
            )));
        }

        let mut seen = vec![false; len];
        for (index, &tile) in tiles.iter().enumerate() {
            let value = tile as usize;
            if value >= len {
                return Err(SolverError::InvalidBoard(format!(
                    "tile {} at position {} is out of range 0..{}",
                    tile, index, len
                )));
            }
            if seen[value] {
                return Err(SolverError::InvalidBoard(format!(
                    "tile {} appears more than once",
                    tile
                )));
            }
            seen[value] = true;
        }

        // Every value in 0..len was seen exactly once, so the blank exists.
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or(0);
        Ok(Board {
            tiles: tiles.into_boxed_slice(),
            side,
            blank,
        })
    }

    /// Returns the goal board for the given side length: `0, 1, ..., N²-1`.
    ///
    /// # Panics
    /// Panics if `side * side` exceeds [`MAX_TILES`].
    pub fn goal(side: usize) -> Self {
        let len = side * side;
        assert!(len <= MAX_TILES, "goal board of side {} is too large", side);
        Board {
            tiles: (0..len).map(|t| t as u8).collect(),
            side,
            blank: 0,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of tiles, blank included.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Row-major index of the blank tile.
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn tile(&self, r: usize, c: usize) -> u8 {
        assert!(r < self.side && c < self.side, "({}, {}) is outside the board", r, c);
        self.tiles[r * self.side + c]
    }

    /// Whether this board is the identity permutation.
    pub fn is_goal(&self) -> bool {
        self.tiles.iter().enumerate().all(|(i, &t)| t as usize == i)
    }

    /// Slides the blank one step in `direction`.
    ///
    /// The blank swaps places with the neighbouring tile: `side` positions
    /// earlier for `Up`, `side` later for `Down`, one earlier for `Left` and one
    /// later for `Right`.
    ///
    /// # Returns
    /// * `Some(Board)` holding the new arrangement; `self` is not modified.
    /// * `None` if the blank sits on the board edge in that direction.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::board::{Board, Direction};
    /// let board = Board::new(vec![1, 2, 0, 3, 4, 5, 6, 7, 8]).unwrap();
    /// let moved = board.move_blank(Direction::Left).unwrap();
    /// assert_eq!(moved.tiles(), &[1, 0, 2, 3, 4, 5, 6, 7, 8]);
    /// assert!(board.move_blank(Direction::Up).is_none());
    /// assert!(board.move_blank(Direction::Right).is_none());
    /// ```
    pub fn move_blank(&self, direction: Direction) -> Option<Board> {
        let side = self.side;
        let len = self.tiles.len();
        let index = self.blank;

        let target = match direction {
            Direction::Up if index >= side => index - side,
            Direction::Down if index < len - side => index + side,
            Direction::Left if index % side != 0 => index - 1,
            Direction::Right if index % side != side - 1 => index + 1,
            _ => return None,
        };

        let mut tiles = self.tiles.clone();
        tiles.swap(index, target);
        Some(Board {
            tiles,
            side,
            blank: target,
        })
    }

    /// Counts pairs of non-blank tiles that appear in the wrong relative order.
    pub fn inversions(&self) -> usize {
        let tiles = &self.tiles;
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// Whether the goal is reachable from this board.
    ///
    /// For an odd side every move preserves the parity of the inversion count,
    /// and the goal has none, so the count must be even. For an even side a
    /// vertical move flips both the inversion parity and the blank's row
    /// parity; with the goal's blank in row 0 the sum must be even.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.side % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row = self.blank / self.side;
            (inversions + blank_row) % 2 == 0
        }
    }

    /// Renders each row as space-separated tiles, without a trailing newline.
    pub fn rows(&self) -> Vec<String> {
        let width = (self.tiles.len() - 1).to_string().len();
        self.tiles
            .chunks(self.side)
            .map(|row| {
                row.iter()
                    .map(|t| format!("{:>width$}", t, width = width))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: &[u8]) -> Board {
        Board::new(tiles.to_vec()).unwrap()
    }

    #[test]
    fn test_direction_codes_round_trip_in_expansion_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.code() as usize, i + 1);
            assert_eq!(Direction::from_code(dir.code()), Some(*dir));
        }
        assert_eq!(Direction::from_code(0), None);
        assert_eq!(Direction::from_code(5), None);
    }

    #[test]
    fn test_new_rejects_malformed_boards() {
        assert!(Board::new(vec![]).is_err());
        assert!(Board::new(vec![0, 1, 2]).is_err());
        assert!(Board::new(vec![0, 1, 2, 4]).is_err());
        assert!(Board::new(vec![0, 1, 1, 2]).is_err());
        assert!(Board::new(vec![0; MAX_TILES + 1]).is_err());
    }

    #[test]
    fn test_single_tile_board_is_goal() {
        let b = board(&[0]);
        assert_eq!(b.side(), 1);
        assert!(b.is_goal());
        for dir in Direction::ALL {
            assert!(b.move_blank(dir).is_none());
        }
    }

    #[test]
    fn test_goal_board() {
        let goal = Board::goal(3);
        assert_eq!(goal.tiles(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(goal.blank_index(), 0);
        assert_eq!(goal.tile(2, 1), 7);
        assert!(goal.is_goal());
        assert_eq!(goal, board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]));
        assert!(!board(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).is_goal());
    }

    #[test]
    fn test_moves_from_center() {
        let b = board(&[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        assert_eq!(b.move_blank(Direction::Up).unwrap().tiles(), &[1, 0, 3, 4, 2, 5, 6, 7, 8]);
        assert_eq!(b.move_blank(Direction::Down).unwrap().tiles(), &[1, 2, 3, 4, 7, 5, 6, 0, 8]);
        assert_eq!(b.move_blank(Direction::Left).unwrap().tiles(), &[1, 2, 3, 0, 4, 5, 6, 7, 8]);
        assert_eq!(b.move_blank(Direction::Right).unwrap().tiles(), &[1, 2, 3, 4, 5, 0, 6, 7, 8]);
        // Input is untouched.
        assert_eq!(b.tiles(), &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
    }

    #[test]
    fn test_moves_blocked_at_edges() {
        // Top-left corner.
        let b = Board::goal(3);
        assert!(b.move_blank(Direction::Up).is_none());
        assert!(b.move_blank(Direction::Left).is_none());
        assert!(b.move_blank(Direction::Down).is_some());
        assert!(b.move_blank(Direction::Right).is_some());

        // Bottom-right corner.
        let b = board(&[8, 1, 2, 3, 4, 5, 6, 7, 0]);
        assert!(b.move_blank(Direction::Down).is_none());
        assert!(b.move_blank(Direction::Right).is_none());

        // Right column, middle row: the blank must not wrap onto the next row.
        let b = board(&[1, 2, 3, 4, 5, 0, 6, 7, 8]);
        assert!(b.move_blank(Direction::Right).is_none());
        // Left column, middle row.
        let b = board(&[1, 2, 3, 0, 4, 5, 6, 7, 8]);
        assert!(b.move_blank(Direction::Left).is_none());
    }

    #[test]
    fn test_every_legal_move_is_one_adjacent_swap_with_the_blank() {
        let b = board(&[5, 1, 3, 4, 0, 2, 6, 15, 8, 9, 10, 11, 12, 13, 14, 7]);
        for r_blank in 0..4 {
            for c_blank in 0..4 {
                let mut tiles = b.tiles().to_vec();
                let blank = tiles.iter().position(|&t| t == 0).unwrap();
                tiles.swap(blank, r_blank * 4 + c_blank);
                let start = Board::new(tiles).unwrap();
                for dir in Direction::ALL {
                    if let Some(next) = start.move_blank(dir) {
                        let diffs: Vec<usize> = (0..16)
                            .filter(|&i| start.tiles()[i] != next.tiles()[i])
                            .collect();
                        assert_eq!(diffs.len(), 2);
                        assert!(diffs.contains(&start.blank_index()));
                        assert!(diffs.contains(&next.blank_index()));
                        let (a, b) = (diffs[0], diffs[1]);
                        let adjacent = b - a == 4 || (b - a == 1 && a / 4 == b / 4);
                        assert!(adjacent, "{:?} moved blank from {} to {}", dir, a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_solvability_odd_side() {
        assert!(Board::goal(3).is_solvable());
        assert!(board(&[1, 2, 0, 3, 4, 5, 6, 7, 8]).is_solvable());
        // Swapping two non-blank tiles flips the parity.
        assert!(!board(&[0, 2, 1, 3, 4, 5, 6, 7, 8]).is_solvable());
    }

    #[test]
    fn test_solvability_even_side() {
        let goal = Board::goal(4);
        assert!(goal.is_solvable());
        let down = goal.move_blank(Direction::Down).unwrap();
        assert!(down.is_solvable());
        assert!(!board(&[0, 2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]).is_solvable());
        assert_eq!(board(&[1, 0, 3, 2]).inversions(), 1);
        assert!(!board(&[1, 0, 3, 2]).is_solvable());
    }

    #[test]
    fn test_display_pads_to_widest_tile() {
        assert_eq!(Board::goal(3).to_string(), "0 1 2\n3 4 5\n6 7 8");
        let rows = Board::goal(4).rows();
        assert_eq!(rows[0], " 0  1  2  3");
        assert_eq!(rows[3], "12 13 14 15");
    }

    #[test]
    fn test_integer_sqrt() {
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(8), 2);
        assert_eq!(integer_sqrt(9), 3);
        assert_eq!(integer_sqrt(256), 16);
    }
}
