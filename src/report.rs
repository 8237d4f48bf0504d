//! The output artifact of a run.
//!
//! [`run`] times a [`solve`](crate::solver::solve) call, samples peak memory
//! and packages everything into a [`Report`], which can be written either in
//! the plain `key: value` form or as JSON. Nothing is written unless the
//! search succeeded.
use log::info;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::board::{Board, Direction};
use crate::error::Result;
use crate::solver::{solve, SearchConfig, Solution, Strategy};

/// Output format of the report file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One `key: value` line per field.
    #[default]
    Text,
    Json,
}

/// Final statistics of a solved run, in artifact order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub path_to_goal: Vec<Direction>,
    pub cost_of_path: usize,
    pub nodes_expanded: u64,
    pub fringe_size: usize,
    pub max_fringe_size: usize,
    pub search_depth: u32,
    pub max_search_depth: u32,
    /// Seconds spent in the search call.
    pub running_time: f64,
    /// Peak resident memory of the process, in megabytes.
    pub max_ram_usage: f64,
}

impl Report {
    pub fn new(solution: Solution, running_time: f64, max_ram_usage: f64) -> Self {
        Report {
            cost_of_path: solution.cost(),
            path_to_goal: solution.path,
            nodes_expanded: solution.nodes_expanded,
            fringe_size: solution.fringe_size,
            max_fringe_size: solution.max_fringe_size,
            search_depth: solution.search_depth,
            max_search_depth: solution.max_search_depth,
            running_time,
            max_ram_usage,
        }
    }

    /// Renders the plain-text form.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::board::Direction;
    /// use npuzzle_solver::report::Report;
    ///
    /// let report = Report {
    ///     path_to_goal: vec![Direction::Left, Direction::Left],
    ///     cost_of_path: 2,
    ///     nodes_expanded: 4,
    ///     fringe_size: 3,
    ///     max_fringe_size: 4,
    ///     search_depth: 2,
    ///     max_search_depth: 3,
    ///     running_time: 0.00012,
    ///     max_ram_usage: 9.5,
    /// };
    /// let text = report.to_text();
    /// assert!(text.starts_with("path_to_goal: ['Left', 'Left']\ncost_of_path: 2\n"));
    /// assert!(text.ends_with("running_time: 0.00012000\nmax_ram_usage: 9.50000000"));
    /// ```
    pub fn to_text(&self) -> String {
        let path = self
            .path_to_goal
            .iter()
            .map(|dir| format!("'{}'", dir))
            .collect::<Vec<_>>()
            .join(", ");

        let lines = [
            format!("path_to_goal: [{}]", path),
            format!("cost_of_path: {}", self.cost_of_path),
            format!("nodes_expanded: {}", self.nodes_expanded),
            format!("fringe_size: {}", self.fringe_size),
            format!("max_fringe_size: {}", self.max_fringe_size),
            format!("search_depth: {}", self.search_depth),
            format!("max_search_depth: {}", self.max_search_depth),
            format!("running_time: {:.8}", self.running_time),
            format!("max_ram_usage: {:.8}", self.max_ram_usage),
        ];
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the report to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path, format: ReportFormat) -> Result<()> {
        let body = match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Json => self.to_json()?,
        };
        let mut file = fs::File::create(path)?;
        file.write_all(body.as_bytes())?;
        info!("wrote {:?} report to {}", format, path.display());
        Ok(())
    }
}

/// Solves `start` and measures the search.
///
/// # Returns
/// The report of a successful search, or the search's error.
pub fn run(strategy: Strategy, start: &Board, config: &SearchConfig) -> Result<Report> {
    let started = Instant::now();
    let solution = solve(strategy, start, config)?;
    let running_time = started.elapsed().as_secs_f64();
    let max_ram_usage = peak_memory_mb();

    info!(
        "{} solved the board in {} moves ({:.6}s, {} nodes expanded)",
        strategy,
        solution.cost(),
        running_time,
        solution.nodes_expanded
    );
    Ok(Report::new(solution, running_time, max_ram_usage))
}

/// Peak resident set size of this process in megabytes (kB / 1000).
///
/// Read from `VmHWM` in `/proc/self/status`; `0.0` where that is unavailable.
pub fn peak_memory_mb() -> f64 {
    fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| parse_vm_hwm_kb(&status))
        .map_or(0.0, |kb| kb as f64 / 1000.0)
}

fn parse_vm_hwm_kb(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmHWM:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|kb| kb.parse().ok())
}
