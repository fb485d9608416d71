use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use sudoku_count::{load_board, parallel, sequential};

fn main() -> ExitCode {
    env_logger::init();

    let mut run_sequential = false;
    let mut path: Option<PathBuf> = None;
    for argument in env::args().skip(1) {
        match argument.as_str() {
            "--sequential" => run_sequential = true,
            "--parallel" => run_sequential = false,
            other if path.is_none() => path = Some(PathBuf::from(other)),
            other => {
                eprintln!("unexpected argument: {other}");
                return usage();
            }
        }
    }
    let Some(path) = path else {
        return usage();
    };

    let mut board = match load_board(&path) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    board.initialize_candidates();
    // Report the state of the puzzle as loaded, before propagation fills in
    // the forced cells.
    let estimate = board.solution_space_estimate();
    let fill_rate = board.fill_rate();
    board.cascade_singletons();

    let count = if run_sequential {
        sequential::count_solutions(&board)
    } else {
        parallel::count_solutions(&board)
    };

    println!("Solution space estimate: {estimate}");
    println!("Fill rate: {fill_rate}%");
    println!("Legal completions: {count}");
    ExitCode::SUCCESS
}

fn usage() -> ExitCode {
    eprintln!("usage: sudoku-count [--sequential|--parallel] <puzzle-file>");
    ExitCode::FAILURE
}
