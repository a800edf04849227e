use clap::Parser;
use ring_sort_solver::engine::{Board, RandomLayout, ALL_RINGS};
use ring_sort_solver::heuristics::{count_mixed_pegs, count_unique_colors, misplaced_rings};
use ring_sort_solver::solver::{solve_with_config, SolveError, SolverConfig};
use std::process::ExitCode;
use std::time::Instant;

/// Runs the solver over seeded random boards
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of random boards to solve
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Seed of the first board; board `i` uses `start_seed + i`
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    /// Number of pegs on each board
    #[clap(long, default_value_t = 6)]
    pegs: usize,

    /// Number of colors dealt
    #[clap(long, default_value_t = 4)]
    colors: usize,

    /// Rings of each color
    #[clap(long, default_value_t = 4)]
    height: usize,

    /// Expansion budget per board
    #[clap(short, long, default_value_t = 500_000)]
    max_expansions: u64,
}

#[derive(Default)]
struct Totals {
    solved: u64,
    no_solution: u64,
    over_budget: u64,
    moves: u64,
    expanded: u64,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.colors > ALL_RINGS.len() || args.colors > args.pegs {
        eprintln!(
            "Cannot deal {} colors onto {} pegs (at most {} colors exist)",
            args.colors,
            args.pegs,
            ALL_RINGS.len()
        );
        return ExitCode::FAILURE;
    }

    let layout = RandomLayout {
        pegs: args.pegs,
        colors: args.colors,
        height: args.height,
    };
    let config = SolverConfig::default().with_max_expansions(args.max_expansions);
    let mut totals = Totals::default();

    println!("Starting solver evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let seed = args.start_seed + board_idx;
        let board = Board::new_random_with_seed(layout, seed);
        println!(
            "\nBoard {} (Seed: {}): {} colors, {} mixed pegs, {} misplaced rings",
            board_idx,
            seed,
            count_unique_colors(&board),
            count_mixed_pegs(&board),
            misplaced_rings(&board)
        );

        let started = Instant::now();
        match solve_with_config(&board, &config) {
            Ok(solution) => {
                totals.solved += 1;
                totals.moves += solution.moves.len() as u64;
                totals.expanded += solution.expanded;
                println!(
                    "  Solved in {} moves, {} expansions, {:?}",
                    solution.moves.len(),
                    solution.expanded,
                    started.elapsed()
                );
            }
            Err(e @ SolveError::NoSolution { .. }) => {
                totals.no_solution += 1;
                println!("  {}", e);
            }
            Err(e) => {
                totals.over_budget += 1;
                println!("  {}", e);
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Boards solved: {}", totals.solved);
    println!("Boards with no solution: {}", totals.no_solution);
    println!("Boards over budget: {}", totals.over_budget);
    if totals.solved > 0 {
        println!(
            "Average moves = {:.2}, average expansions = {:.2}",
            totals.moves as f64 / totals.solved as f64,
            totals.expanded as f64 / totals.solved as f64
        );
    }
    ExitCode::SUCCESS
}
