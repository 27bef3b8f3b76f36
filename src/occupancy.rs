//! This module contains the occupancy index, the bookkeeping structure which
//! answers "is digit D legal at cell C" in constant time.
//!
//! For every row, column, and block (and, if enabled, both diagonals) the
//! index records which cell currently holds each digit. A placement is legal
//! exactly if no affected group has an occupant recorded for the digit. The
//! [solver](crate::solver) keeps the index in sync with the grid by pairing
//! every [place](OccupancyIndex::place) with a
//! [retract](OccupancyIndex::retract) on backtracking.

use crate::{block, index, SudokuGrid, SIZE};
use crate::error::{SudokuError, SudokuResult};
use crate::rules::RuleSet;

/// For one group, maps each digit (at offset digit - 1) to the linear index
/// of the cell currently holding it, or `None` if the digit is absent from
/// the group.
type DigitTable = [Option<usize>; SIZE];

const EMPTY_TABLE: DigitTable = [None; SIZE];

#[derive(Clone, Debug, Eq, PartialEq)]
struct DiagonalTables {
    main: DigitTable,
    anti: DigitTable
}

fn on_main_diagonal(column: usize, row: usize) -> bool {
    column == row
}

fn on_anti_diagonal(column: usize, row: usize) -> bool {
    column + row == SIZE - 1
}

/// Tracks, for every row, column, and block, which cell currently holds each
/// digit. This makes the legality query [OccupancyIndex::can_place] a
/// constant-time lookup instead of a scan over the affected groups.
///
/// The index does not validate its preconditions at runtime: callers must
/// only [place](OccupancyIndex::place) digits for which
/// [can_place](OccupancyIndex::can_place) just returned `true`, and only
/// [retract](OccupancyIndex::retract) placements that were actually made.
/// The solver's control flow guarantees both.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OccupancyIndex {
    rows: [DigitTable; SIZE],
    columns: [DigitTable; SIZE],
    blocks: [DigitTable; SIZE],
    diagonals: Option<DiagonalTables>
}

impl OccupancyIndex {

    /// Creates an occupancy index for the given grid under the given rules,
    /// registering every pre-filled cell. Cells filled during a later solve
    /// are registered incrementally via [OccupancyIndex::place].
    ///
    /// # Errors
    ///
    /// If two pre-filled cells contain the same digit in one row, column,
    /// block, or active diagonal, `SudokuError::ConflictingClues` is
    /// returned. This guarantees the index invariant - at most one occupant
    /// per digit and group - from the start.
    pub fn new(grid: &SudokuGrid, rules: RuleSet)
            -> SudokuResult<OccupancyIndex> {
        let diagonals = if rules.diagonals() {
            Some(DiagonalTables {
                main: EMPTY_TABLE,
                anti: EMPTY_TABLE
            })
        }
        else {
            None
        };
        let mut occupancy = OccupancyIndex {
            rows: [EMPTY_TABLE; SIZE],
            columns: [EMPTY_TABLE; SIZE],
            blocks: [EMPTY_TABLE; SIZE],
            diagonals
        };

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(digit) = grid.get_cell(column, row).unwrap() {
                    if !occupancy.can_place(column, row, digit) {
                        return Err(SudokuError::ConflictingClues);
                    }

                    occupancy.place(column, row, digit);
                }
            }
        }

        Ok(occupancy)
    }

    /// Indicates whether the given digit may be placed in the cell at the
    /// given position without violating uniqueness in its row, column,
    /// block, or - under diagonal rules, if the cell lies on one - the
    /// affected diagonals. Has no side effects.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the queried cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the queried cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit whose legality is queried. Must be in the range
    /// `[1, 9]`.
    pub fn can_place(&self, column: usize, row: usize, digit: usize) -> bool {
        let digit = digit - 1;

        if self.rows[row][digit].is_some() ||
                self.columns[column][digit].is_some() ||
                self.blocks[block(column, row)][digit].is_some() {
            return false;
        }

        if let Some(diagonals) = &self.diagonals {
            if on_main_diagonal(column, row) &&
                    diagonals.main[digit].is_some() {
                return false;
            }

            if on_anti_diagonal(column, row) &&
                    diagonals.anti[digit].is_some() {
                return false;
            }
        }

        true
    }

    /// Records the cell at the given position as the occupant of `digit` in
    /// its row, column, and block simultaneously, as well as in any affected
    /// diagonal under diagonal rules.
    ///
    /// Precondition: [OccupancyIndex::can_place] must have just returned
    /// `true` for the same arguments. This is not re-checked. Every call
    /// must be paired with a later [OccupancyIndex::retract] unless the
    /// placement is part of the final accepted solution.
    pub fn place(&mut self, column: usize, row: usize, digit: usize) {
        let cell = index(column, row);
        let digit = digit - 1;

        self.rows[row][digit] = Some(cell);
        self.columns[column][digit] = Some(cell);
        self.blocks[block(column, row)][digit] = Some(cell);

        if let Some(diagonals) = &mut self.diagonals {
            if on_main_diagonal(column, row) {
                diagonals.main[digit] = Some(cell);
            }

            if on_anti_diagonal(column, row) {
                diagonals.anti[digit] = Some(cell);
            }
        }
    }

    /// Clears the occupant of `digit` in the row, column, and block of the
    /// cell at the given position, as well as in any affected diagonal under
    /// diagonal rules.
    ///
    /// Precondition: a matching [OccupancyIndex::place] was previously
    /// performed and not yet retracted. Calling this twice without an
    /// intervening `place` is a caller error.
    pub fn retract(&mut self, column: usize, row: usize, digit: usize) {
        let digit = digit - 1;

        self.rows[row][digit] = None;
        self.columns[column][digit] = None;
        self.blocks[block(column, row)][digit] = None;

        if let Some(diagonals) = &mut self.diagonals {
            if on_main_diagonal(column, row) {
                diagonals.main[digit] = None;
            }

            if on_anti_diagonal(column, row) {
                diagonals.anti[digit] = None;
            }
        }
    }
}
