use clap::Parser;
use ring_sort_solver::engine::Board;
use ring_sort_solver::solver::{solve_with_config, SolverConfig};
use ring_sort_solver::utils::{board_from_text, replay};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of boards to expand before giving up
    #[clap(short, long)]
    max_expansions: Option<u64>,

    /// Time limit for the search, in milliseconds
    #[clap(short, long)]
    time_limit_ms: Option<u64>,

    /// Path to a board file (one peg per line, bottom ring first, `-` for an empty peg).
    /// Solves the classic six-peg layout when omitted.
    board_file: Option<PathBuf>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    board_from_text(&content).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let board = match &args.board_file {
        Some(path) => match read_board_file(path) {
            Ok(board) => {
                println!("Loaded board from {}\n", path.display());
                board
            }
            Err(e) => {
                eprintln!("Failed to read board from {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Board::classic(),
    };

    let mut config = SolverConfig::default();
    if let Some(limit) = args.max_expansions {
        config = config.with_max_expansions(limit);
    }
    if let Some(ms) = args.time_limit_ms {
        config = config.with_time_limit(Duration::from_millis(ms));
    }

    println!("Initial board state:\n{}\n", board);
    println!("Searching for a solution...\n");

    match solve_with_config(&board, &config) {
        Ok(solution) => {
            println!("Solution found:\n");
            println!("Moves ({}):", solution.moves.len());
            if solution.moves.is_empty() {
                println!("  Board is already sorted.");
            } else {
                for (i, mv) in solution.moves.iter().enumerate() {
                    println!("  Move {}: peg {} to peg {}", i + 1, mv.from, mv.to);
                }
            }
            println!(
                "Expanded {} boards, generated {}, frontier peak {}\n",
                solution.expanded, solution.generated, solution.frontier_high_water
            );
            match replay(&board, &solution.moves) {
                Ok(end) => println!("Final board state:\n{}\n", end),
                Err(e) => {
                    eprintln!("Solution failed to replay: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("No solution found: {}\n", e);
            ExitCode::FAILURE
        }
    }
}
