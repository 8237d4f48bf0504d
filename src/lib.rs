//! # N-Puzzle Solver Library
//!
//! This library solves the sliding-tile puzzle (8-puzzle, 15-puzzle, ...):
//! given a scrambled N×N board, it finds a sequence of blank moves that
//! reaches the goal `0, 1, ..., N²-1` (blank in the top-left corner).
//!
//! It is used by the `puzzle_solver` binary, which takes a strategy tag and a
//! comma-separated board, prints the start board beside the goal, runs the
//! search and writes the statistics to a report file.
//!
//! ## Modules
//! - `board`: The board representation (`Board`), the blank moves (`Direction`)
//!   and the parity test for solvability.
//! - `heuristics`: The Manhattan-distance estimate used by the informed search.
//! - `solver`: The search node arena, successor expansion, the `bfs`, `dfs` and
//!   `ast` strategies, and `solve`, which traces the goal node back into a path.
//! - `report`: Timing, peak-memory sampling and the output artifact.
//! - `utils`: Parsing boards from strings and rendering the console banner.
//! - `error`: The `SolverError` type shared by all of the above.

pub mod board;
pub mod error;
pub mod heuristics;
pub mod report;
pub mod solver;
pub mod utils;

pub use error::{Result, SolverError};
