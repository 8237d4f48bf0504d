//! Distance estimates used by the informed search.
use crate::board::Board;

/// Sum of the Manhattan distances of every non-blank tile from its goal cell.
///
/// Tile `t` belongs at row `t / side`, column `t % side`. The blank is
/// ignored, which keeps the estimate admissible and consistent.
///
/// # Arguments
/// * `board`: The board to evaluate.
///
/// # Returns
/// The estimate as `u32`; zero exactly when `board` is the goal.
///
/// # Examples
/// ```
/// use npuzzle_solver::board::Board;
/// use npuzzle_solver::heuristics::manhattan_distance;
/// assert_eq!(manhattan_distance(&Board::goal(3)), 0);
/// let board = Board::new(vec![1, 2, 0, 3, 4, 5, 6, 7, 8]).unwrap();
/// assert_eq!(manhattan_distance(&board), 2);
/// ```
pub fn manhattan_distance(board: &Board) -> u32 {
    let side = board.side();
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(index, &tile)| {
            let goal = tile as usize;
            let dr = (index / side).abs_diff(goal / side);
            let dc = (index % side).abs_diff(goal % side);
            (dr + dc) as u32
        })
        .sum()
}

/// Upper bound on [`manhattan_distance`] for any board of the given side:
/// every one of the `side² - 1` tiles at most `2 * (side - 1)` away.
pub fn max_manhattan_distance(side: usize) -> u32 {
    if side == 0 {
        return 0;
    }
    ((side * side - 1) * 2 * (side - 1)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_goal_has_zero_distance() {
        for side in 1..=5 {
            assert_eq!(manhattan_distance(&Board::goal(side)), 0);
        }
    }

    #[test]
    fn test_known_values() {
        let board = Board::new(vec![8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        // 8,6,2 are 4 away; 7,5,3,1 are 2 away; 4 is home.
        assert_eq!(manhattan_distance(&board), 4 * 3 + 2 * 4);

        let board = Board::new(vec![1, 0, 2, 3]).unwrap();
        assert_eq!(manhattan_distance(&board), 1);
    }

    #[test]
    fn test_blank_is_ignored() {
        // Counting the blank would give 2.
        let board = Board::new(vec![1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(manhattan_distance(&board), 1);
    }

    #[test]
    fn test_zero_only_for_goal_and_bounded() {
        let mut rng = SmallRng::seed_from_u64(514514);
        for side in 2..=4 {
            let bound = max_manhattan_distance(side);
            let mut board = Board::goal(side);
            for _ in 0..500 {
                let dir = Direction::ALL[rng.gen_range(0..4)];
                if let Some(next) = board.move_blank(dir) {
                    board = next;
                }
                let h = manhattan_distance(&board);
                assert_eq!(h == 0, board.is_goal());
                assert!(h <= bound);
            }
        }
    }

    #[test]
    fn test_single_move_changes_distance_by_one() {
        // Consistency: one move shifts exactly one tile by one cell.
        let mut rng = SmallRng::seed_from_u64(7);
        let mut board = Board::goal(4);
        for _ in 0..300 {
            let dir = Direction::ALL[rng.gen_range(0..4)];
            if let Some(next) = board.move_blank(dir) {
                let before = manhattan_distance(&board) as i64;
                let after = manhattan_distance(&next) as i64;
                assert_eq!((before - after).abs(), 1);
                board = next;
            }
        }
    }
}
