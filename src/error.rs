//! Error taxonomy shared by parsing, searching and reporting.

use std::io;

/// Everything that can stop a solver run.
///
/// All variants are fatal: a run either produces a complete report or ends
/// with one of these.
#[derive(thiserror::Error, Debug)]
pub enum SolverError {
    /// A board token was not a non-negative integer.
    #[error("invalid tile '{token}': {reason}")]
    Parse { token: String, reason: String },

    /// The tiles parsed but do not form a square permutation of `0..N²`.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("unsupported algorithm '{0}' (expected one of: bfs, dfs, ast)")]
    UnsupportedAlgorithm(String),

    /// The start board has the wrong permutation parity to ever reach the goal.
    #[error("board is unsolvable: permutation parity differs from the goal")]
    Unsolvable,

    /// The frontier emptied without the goal ever being dequeued.
    #[error("no solution found after expanding {nodes_expanded} nodes")]
    NoSolution { nodes_expanded: u64 },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = SolverError::UnsupportedAlgorithm("ida".to_string());
        assert!(err.to_string().contains("unsupported algorithm 'ida'"));

        let err = SolverError::Parse { token: "x".to_string(), reason: "not a number".to_string() };
        assert_eq!(err.to_string(), "invalid tile 'x': not a number");

        let err = SolverError::NoSolution { nodes_expanded: 181440 };
        assert!(err.to_string().contains("181440"));
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: SolverError = io_err.into();
        assert!(matches!(err, SolverError::Io(_)));
    }
}
