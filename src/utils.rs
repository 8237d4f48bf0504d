use crate::board::Board;
use crate::error::{Result, SolverError};

/// Parses a comma-separated tile list such as `"1,2,0,3,4,5,6,7,8"` into a `Board`.
///
/// Whitespace around each tile is ignored.
///
/// # Arguments
/// * `s`: The tiles, row-major, separated by commas.
///
/// # Returns
/// * `Ok(Board)` if every token is a non-negative integer and together they
///   form a square permutation of `0..N²`.
/// * `Err(SolverError::Parse)` if a token is empty or not a number.
/// * `Err(SolverError::InvalidBoard)` if the numbers do not form a valid board.
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("1,2,0,3,4,5,6,7,8").unwrap();
/// assert_eq!(board.side(), 3);
///
/// assert!(board_from_str("1,2,x").is_err());
/// assert!(board_from_str("1,2,0,3,4,5,6,7").is_err()); // 8 tiles
/// assert!(board_from_str("1,1,0,3,4,5,6,7,8").is_err()); // duplicate
/// ```
pub fn board_from_str(s: &str) -> Result<Board> {
    let mut tiles = Vec::new();
    for token in s.trim().split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(SolverError::Parse {
                token: token.to_string(),
                reason: "empty tile".to_string(),
            });
        }
        let value: usize = token.parse().map_err(|e: std::num::ParseIntError| SolverError::Parse {
            token: token.to_string(),
            reason: e.to_string(),
        })?;
        let tile = u8::try_from(value).map_err(|_| {
            SolverError::InvalidBoard(format!("tile {} is out of range", value))
        })?;
        tiles.push(tile);
    }
    Board::new(tiles)
}

/// Renders the start board beside the goal board, with `->` on the middle row.
///
/// ```text
/// Start    Goal
/// 1 2 0    0 1 2
/// 3 4 5 -> 3 4 5
/// 6 7 8    6 7 8
/// ```
pub fn start_goal_banner(start: &Board) -> String {
    let goal = Board::goal(start.side());
    let start_rows = start.rows();
    let goal_rows = goal.rows();
    let width = start_rows.first().map_or(0, String::len);
    let middle = start.side() / 2;

    let mut lines = vec![format!("{:<width$}Goal", "Start", width = width + 4)];
    for (r, (start_row, goal_row)) in start_rows.iter().zip(goal_rows.iter()).enumerate() {
        let arrow = if r == middle { "->" } else { "  " };
        lines.push(format!("{} {} {}", start_row, arrow, goal_row));
    }
    lines.join("\n")
}
