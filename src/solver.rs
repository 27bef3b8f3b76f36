//! This module contains the backtracking search which drives a puzzle to a
//! complete assignment, or proves that none exists.
//!
//! The search visits empty cells in row-major order and tries the digits 1
//! to 9 in ascending order, so its output is deterministic for a given
//! input. Legality of every trial is decided up front by the
//! [occupancy index](crate::occupancy::OccupancyIndex), which means no
//! recursion is ever entered for a placement that is already illegal.

use crate::{SudokuGrid, CELL_COUNT, SIZE};
use crate::error::SudokuResult;
use crate::occupancy::OccupancyIndex;
use crate::rules::RuleSet;

use log::trace;

/// A solver which finds the first complete legal assignment of a 9x9 Sudoku
/// grid by exhaustive depth-first backtracking, or proves that no assignment
/// exists.
///
/// The solver owns its grid and the associated [OccupancyIndex] and mutates
/// both in place during the search. On every failed branch all speculative
/// placements are retracted, so after [solve](BacktrackingSolver::solve)
/// returns `false` the grid is exactly the initial puzzle again.
///
/// ```
/// use sudoku_backtrack::SudokuGrid;
/// use sudoku_backtrack::rules::RuleSet;
/// use sudoku_backtrack::solver::BacktrackingSolver;
///
/// let mut solver = BacktrackingSolver::new(SudokuGrid::empty(),
///     RuleSet::classic()).unwrap();
///
/// assert!(solver.solve());
/// assert!(solver.grid().is_full());
/// ```
pub struct BacktrackingSolver {
    grid: SudokuGrid,
    occupancy: OccupancyIndex
}

impl BacktrackingSolver {

    /// Creates a solver for the given initial grid under the given rules.
    /// The occupancy index is built from the pre-filled cells, so the puzzle
    /// is validated here once and never re-checked during the search.
    ///
    /// # Errors
    ///
    /// If two pre-filled cells already violate a uniqueness rule,
    /// `SudokuError::ConflictingClues` is returned.
    pub fn new(grid: SudokuGrid, rules: RuleSet)
            -> SudokuResult<BacktrackingSolver> {
        let occupancy = OccupancyIndex::new(&grid, rules)?;

        Ok(BacktrackingSolver {
            grid,
            occupancy
        })
    }

    /// Searches for a complete legal assignment of the grid. Returns `true`
    /// if one was found, in which case the grid holds that assignment, and
    /// `false` if none exists, in which case the grid is unchanged. Failure
    /// is a normal outcome, not an error.
    ///
    /// The first solution in search order is reported; for a puzzle with
    /// multiple solutions, repeated runs always yield the same one.
    pub fn solve(&mut self) -> bool {
        self.solve_from(0)
    }

    /// Recursive step: solves the sub-problem of all empty cells at linear
    /// position `start` or later. Cells before `start` are already filled
    /// and are never rescanned.
    fn solve_from(&mut self, start: usize) -> bool {
        let mut position = start;

        while position < CELL_COUNT && self.grid.cells()[position].is_some() {
            position += 1;
        }

        if position == CELL_COUNT {
            return true;
        }

        let column = position % SIZE;
        let row = position / SIZE;

        for digit in 1..=SIZE {
            if !self.occupancy.can_place(column, row, digit) {
                continue;
            }

            trace!("cell {:2} +{}", position, digit);
            self.occupancy.place(column, row, digit);
            self.grid.set_cell(column, row, digit).unwrap();

            if self.solve_from(position + 1) {
                return true;
            }

            trace!("cell {:2} -{}", position, digit);
            self.occupancy.retract(column, row, digit);
            self.grid.clear_cell(column, row).unwrap();
        }

        false
    }

    /// Gets a reference to the solver's grid. Before a solve this is the
    /// initial puzzle; after a successful solve it holds the solution.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Destructures the solver into its grid.
    pub fn into_grid(self) -> SudokuGrid {
        self.grid
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::block;

    // The demo puzzle of the command-line frontend. Its unique solution was
    // verified with an independent exhaustive enumeration.
    const DEMO_PUZZLE: [usize; 81] = [
        0, 9, 5, 0, 7, 0, 0, 4, 0,
        3, 0, 0, 0, 4, 6, 0, 0, 2,
        6, 0, 0, 5, 0, 2, 0, 0, 0,
        0, 0, 7, 0, 0, 0, 8, 1, 0,
        9, 1, 0, 0, 0, 0, 0, 2, 6,
        0, 3, 6, 0, 0, 0, 9, 0, 0,
        0, 0, 0, 6, 0, 8, 0, 0, 1,
        7, 0, 0, 2, 1, 0, 0, 0, 5,
        0, 8, 0, 0, 5, 0, 2, 6, 0
    ];

    const DEMO_SOLUTION: &str = "
        295371648
        378946152
        641582397
        527469813
        914837526
        836125974
        452698731
        769213485
        183754269";

    fn assert_group_complete(cells: Vec<Option<usize>>) {
        let mut seen = [false; SIZE];

        for cell in cells {
            seen[cell.unwrap() - 1] = true;
        }

        assert_eq!([true; SIZE], seen);
    }

    fn assert_valid_solution(grid: &SudokuGrid) {
        assert!(grid.is_full());

        for group in 0..SIZE {
            assert_group_complete((0..SIZE)
                .map(|column| grid.get_cell(column, group).unwrap())
                .collect());
            assert_group_complete((0..SIZE)
                .map(|row| grid.get_cell(group, row).unwrap())
                .collect());
            assert_group_complete((0..CELL_COUNT)
                .filter(|&position| {
                    block(position % SIZE, position / SIZE) == group
                })
                .map(|position| grid.cells()[position])
                .collect());
        }
    }

    fn solve_parsed(puzzle: &str, rules: RuleSet) -> (bool, SudokuGrid) {
        let grid = SudokuGrid::parse(puzzle).unwrap();
        let mut solver = BacktrackingSolver::new(grid, rules).unwrap();
        let solved = solver.solve();
        (solved, solver.into_grid())
    }

    #[test]
    fn solves_demo_puzzle_to_known_solution() {
        let grid = SudokuGrid::from_digits(&DEMO_PUZZLE).unwrap();
        let mut solver =
            BacktrackingSolver::new(grid, RuleSet::classic()).unwrap();

        assert!(solver.solve());

        let solution = solver.into_grid();

        assert_eq!(SudokuGrid::parse(DEMO_SOLUTION).unwrap(), solution);
        assert_valid_solution(&solution);
    }

    #[test]
    fn solution_extends_the_puzzle() {
        let grid = SudokuGrid::from_digits(&DEMO_PUZZLE).unwrap();
        let mut solver =
            BacktrackingSolver::new(grid, RuleSet::classic()).unwrap();
        solver.solve();

        for (position, &digit) in DEMO_PUZZLE.iter().enumerate() {
            if digit != 0 {
                assert_eq!(Some(digit), solver.grid().cells()[position]);
            }
        }
    }

    // World Puzzle Federation Sudoku GP 2020 Round 8, Puzzle 2
    #[test]
    fn solves_classic_puzzle() {
        let (solved, solution) = solve_parsed("
            ....81...
            ..2..78..
            .53...17.
            37.......
            6.......3
            .......24
            .69...23.
            ..59..4..
            ...65....", RuleSet::classic());

        assert!(solved);
        assert_eq!(SudokuGrid::parse("
            746281359
            912537846
            853496172
            374125698
            628749513
            591368724
            169874235
            285913467
            437652981").unwrap(), solution);
    }

    #[test]
    fn full_consistent_grid_solves_immediately() {
        let full = SudokuGrid::parse(DEMO_SOLUTION).unwrap();
        let mut solver =
            BacktrackingSolver::new(full.clone(), RuleSet::classic()).unwrap();

        assert!(solver.solve());
        assert_eq!(full, solver.into_grid());
    }

    #[test]
    fn unsolvable_puzzle_leaves_grid_unchanged() {
        // the demo puzzle with an 8 forced into the top-left cell; no clue
        // conflicts directly, but no completion exists
        let mut digits = DEMO_PUZZLE;
        digits[0] = 8;
        let puzzle = SudokuGrid::from_digits(&digits).unwrap();
        let mut solver = BacktrackingSolver::new(puzzle.clone(),
            RuleSet::classic()).unwrap();

        assert!(!solver.solve());
        assert_eq!(puzzle, solver.into_grid());
    }

    #[test]
    fn failed_solve_can_be_retried_deterministically() {
        let mut digits = DEMO_PUZZLE;
        digits[0] = 8;
        let puzzle = SudokuGrid::from_digits(&digits).unwrap();
        let mut solver = BacktrackingSolver::new(puzzle.clone(),
            RuleSet::classic()).unwrap();

        assert!(!solver.solve());
        assert!(!solver.solve());
        assert_eq!(puzzle, solver.into_grid());
    }

    #[test]
    fn conflicting_clues_rejected_at_construction() {
        let mut digits = [0usize; 81];
        digits[0] = 5;
        digits[2] = 5;
        let grid = SudokuGrid::from_digits(&digits).unwrap();

        assert!(BacktrackingSolver::new(grid, RuleSet::classic()).is_err());
    }

    #[test]
    fn empty_grid_first_solution_is_deterministic() {
        // ascending digit trials in row-major order fix the first solution
        let mut solver = BacktrackingSolver::new(SudokuGrid::empty(),
            RuleSet::classic()).unwrap();

        assert!(solver.solve());

        let solution = solver.into_grid();

        assert_eq!(SudokuGrid::parse("
            123456789
            456789123
            789123456
            214365897
            365897214
            897214365
            531642978
            642978531
            978531642").unwrap(), solution);
        assert_valid_solution(&solution);
    }

    #[test]
    fn repeated_solves_of_same_puzzle_agree() {
        let first = {
            let grid = SudokuGrid::from_digits(&DEMO_PUZZLE).unwrap();
            let mut solver =
                BacktrackingSolver::new(grid, RuleSet::classic()).unwrap();
            solver.solve();
            solver.into_grid()
        };
        let second = {
            let grid = SudokuGrid::from_digits(&DEMO_PUZZLE).unwrap();
            let mut solver =
                BacktrackingSolver::new(grid, RuleSet::classic()).unwrap();
            solver.solve();
            solver.into_grid()
        };

        assert_eq!(first, second);
    }

    // World Puzzle Federation Sudoku GP 2020 Round 8, Puzzle 6
    #[test]
    fn solves_diagonals_puzzle() {
        let (solved, grid) = solve_parsed("
            .1234567.
            .........
            .........
            7.......5
            2.......1
            9.......3
            .........
            .........
            .3456789.", RuleSet::with_diagonals());

        assert!(solved);
        assert_eq!(SudokuGrid::parse("
            812345679
            375689124
            496172358
            741936285
            263758941
            958421763
            527893416
            689214537
            134567892").unwrap(), grid);
    }

    #[test]
    fn diagonal_rules_change_the_outcome() {
        // legal classically, impossible with unique diagonals: the main
        // diagonal already holds two 1s
        let mut digits = [0usize; 81];
        digits[0] = 1;
        digits[80] = 1;
        let grid = SudokuGrid::from_digits(&digits).unwrap();

        let mut classic = BacktrackingSolver::new(grid.clone(),
            RuleSet::classic()).unwrap();

        assert!(classic.solve());

        assert!(BacktrackingSolver::new(grid,
            RuleSet::with_diagonals()).is_err());
    }
}
