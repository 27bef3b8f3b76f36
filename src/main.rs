//! Command-line frontend of the solver: reads a puzzle, prints it, solves
//! it, and prints the result together with a status line.

use clap::Parser;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use sudoku_backtrack::SudokuGrid;
use sudoku_backtrack::rules::RuleSet;
use sudoku_backtrack::solver::BacktrackingSolver;

// The demo puzzle solved when no puzzle is supplied.
const DEMO_PUZZLE: &str = "
    .95.7..4.
    3...46..2
    6..5.2...
    ..7...81.
    91.....26
    .36...9..
    ...6.8..1
    7..21...5
    .8..5.26.";

/// Solves a 9x9 Sudoku puzzle by exhaustive backtracking.
#[derive(Parser)]
#[command(version, about)]
struct Cli {

    /// The puzzle as 81 cells in row-major order, each a digit from 1 to 9
    /// or an empty-cell marker (0 or .). Whitespace is ignored. A built-in
    /// demo puzzle is solved if neither this nor --input is given.
    puzzle: Option<String>,

    /// Read the puzzle from a text file in the same format.
    #[arg(short, long, value_name = "FILE", conflicts_with = "puzzle")]
    input: Option<PathBuf>,

    /// Additionally require unique digits on both main diagonals.
    #[arg(short, long)]
    diagonals: bool
}

fn read_puzzle(cli: &Cli) -> Result<String, String> {
    if let Some(path) = &cli.input {
        fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))
    }
    else if let Some(puzzle) = &cli.puzzle {
        Ok(puzzle.clone())
    }
    else {
        Ok(String::from(DEMO_PUZZLE))
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let code = read_puzzle(cli)?;
    let grid = SudokuGrid::parse(&code).map_err(|e| e.to_string())?;
    let rules = if cli.diagonals {
        RuleSet::with_diagonals()
    }
    else {
        RuleSet::classic()
    };
    let mut solver =
        BacktrackingSolver::new(grid, rules).map_err(|e| e.to_string())?;

    log::debug!("solving a puzzle with {} clues",
        solver.grid().count_clues());
    println!("{}", solver.grid());

    if solver.solve() {
        println!("solution found");
    }
    else {
        println!("no solution found");
    }

    println!("{}", solver.grid());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    // an unsolvable puzzle is a normal outcome and still exits successfully;
    // only unusable input is a failure
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}
