use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use npuzzle_solver::report::{run, ReportFormat};
use npuzzle_solver::solver::{SearchConfig, Strategy};
use npuzzle_solver::utils::{board_from_str, start_goal_banner};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve an N-puzzle with BFS, DFS or A*", long_about = None)]
struct Args {
    /// Search strategy: bfs, dfs or ast
    algorithm: String,

    /// Start board as comma-separated tiles, 0 is the blank (e.g. 1,2,5,3,4,0,6,7,8)
    board: String,

    /// Where to write the report
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Search even if the board has the wrong parity to reach the goal
    #[arg(long)]
    allow_unsolvable: bool,

    /// Do not print the start and goal boards
    #[arg(short, long)]
    quiet: bool,

    /// Increase logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let strategy: Strategy = args.algorithm.parse()?;
    let board = board_from_str(&args.board)
        .with_context(|| format!("Failed to read board '{}'", args.board))?;

    if !args.quiet {
        println!();
        println!("{}", start_goal_banner(&board));
        println!("\nCalculating solution using {}....\n", strategy);
    }

    let config = SearchConfig {
        check_solvability: !args.allow_unsolvable,
    };
    let report = run(strategy, &board, &config)?;
    report
        .write_to(&args.output, args.format)
        .with_context(|| format!("Failed to write report to {}", args.output.display()))?;

    if !args.quiet {
        println!(
            "Script completed. Check {} for the results.\n",
            args.output.display()
        );
    }
    Ok(())
}
