use ring_sort_solver::engine::Game;
use ring_sort_solver::solver::{solve_with_config, SolverConfig};
use ring_sort_solver::utils::parse_move;
use std::io::{self, Write};

/// Hints must come back quickly, so the search is capped.
const HINT_MAX_EXPANSIONS: u64 = 200_000;

fn main() {
    env_logger::init();
    let mut game = Game::new();
    let hint_config = SolverConfig::default().with_max_expansions(HINT_MAX_EXPANSIONS);
    let mut last_target = None;
    println!("Welcome to Ring Sort!");

    loop {
        println!("---------------------");
        println!("Steps: {}", game.steps());
        println!("{}", game.board().to_string_with_highlight(last_target));

        if game.is_solved() {
            println!();
            println!("---------------------");
            println!("Every peg is sorted!");
            println!("Total Steps: {}", game.steps());
            println!("---------------------");
            break;
        }

        print!("Enter your move (from to), 'h' hint, 's' full solution, 'q' quit: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "h" | "s" => match solve_with_config(game.board(), &hint_config) {
                Ok(solution) if input.trim() == "h" => match solution.moves.first() {
                    Some(mv) => println!("Hint: move peg {} to peg {}", mv.from, mv.to),
                    None => println!("The board is already sorted."),
                },
                Ok(solution) => {
                    println!("Solution ({} moves):", solution.moves.len());
                    for (i, mv) in solution.moves.iter().enumerate() {
                        println!("  Move {}: peg {} to peg {}", i + 1, mv.from, mv.to);
                    }
                }
                Err(e) => println!("No hint available: {}", e),
            },
            other => match parse_move(other) {
                Ok(mv) => match game.process_move(mv) {
                    Ok(()) => {
                        last_target = Some(mv.to);
                        println!("Moved {}.", mv);
                    }
                    Err(e) => println!("Invalid move, please try again: {}", e),
                },
                Err(e) => println!("{}", e),
            },
        }
    }
}
