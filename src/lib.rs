// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a solver for classic 9x9 Sudoku. It supports the
//! following key features:
//!
//! * Parsing and printing 9x9 Sudoku grids
//! * Constant-time legality queries through an occupancy index which tracks,
//! for every row, column, and block, which cell currently holds each digit
//! * Solving by exhaustive depth-first backtracking with forward checking,
//! i.e. illegal placements are pruned before any recursion is entered
//! * An optional rule requiring unique digits on both main diagonals
//!
//! # Parsing and printing grids
//!
//! A grid is written as 81 cells in row-major order, where each cell is a
//! digit from 1 to 9 or an empty-cell marker (`0` or `.`). Whitespace is
//! ignored, so puzzles may be formatted with one row per line.
//!
//! ```
//! use sudoku_backtrack::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("
//!     .95.7..4.
//!     3...46..2
//!     6..5.2...
//!     ..7...81.
//!     91.....26
//!     .36...9..
//!     ...6.8..1
//!     7..21...5
//!     .8..5.26.").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving
//!
//! A [BacktrackingSolver](solver::BacktrackingSolver) takes ownership of a
//! grid together with a [RuleSet](rules::RuleSet) and searches for the first
//! complete assignment in a fixed scan order. Solvability is reported as a
//! plain `bool`; an unsolvable puzzle is a normal outcome, not an error.
//!
//! ```
//! use sudoku_backtrack::SudokuGrid;
//! use sudoku_backtrack::rules::RuleSet;
//! use sudoku_backtrack::solver::BacktrackingSolver;
//!
//! let grid = SudokuGrid::parse("
//!     .95.7..4.
//!     3...46..2
//!     6..5.2...
//!     ..7...81.
//!     91.....26
//!     .36...9..
//!     ...6.8..1
//!     7..21...5
//!     .8..5.26.").unwrap();
//! let mut solver = BacktrackingSolver::new(grid, RuleSet::classic()).unwrap();
//!
//! assert!(solver.solve());
//! assert!(solver.grid().is_full());
//! assert_eq!(Some(2), solver.grid().get_cell(0, 0).unwrap());
//! ```

pub mod error;
pub mod occupancy;
pub mod rules;
pub mod solver;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The width and height of the grid, i.e. the number of cells in each row,
/// column, and block.
pub const SIZE: usize = 9;

/// The width and height of one block of the grid.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in the grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Computes the linear, row-major index of the cell at the given coordinates.
pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// Computes the id of the 3x3 block containing the cell at the given
/// coordinates. Blocks are numbered in row-major order, so the top-left
/// block has id 0 and the bottom-right block has id 8.
pub(crate) fn block(column: usize, row: usize) -> usize {
    (row / BLOCK_SIZE) * BLOCK_SIZE + column / BLOCK_SIZE
}

/// A 9x9 Sudoku grid of cells organized into nine 3x3 blocks. Each cell may
/// or may not be occupied by a digit from 1 to 9.
///
/// Cells are stored in row-major order, i.e. the entire first row from left
/// to right is followed by the entire second row and so on.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())
    }
}

impl SudokuGrid {

    /// Creates a new, empty 9x9 grid.
    pub fn empty() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Creates a grid from a sequence of 81 digits in row-major order, where
    /// 0 represents an empty cell and 1 to 9 represent themselves.
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::WrongNumberOfCells`: If the slice does not
    /// contain exactly 81 elements.
    /// * `SudokuParseError::InvalidNumber`: If any element is greater than 9.
    pub fn from_digits(digits: &[usize]) -> SudokuParseResult<SudokuGrid> {
        if digits.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut cells = Vec::with_capacity(CELL_COUNT);

        for &digit in digits {
            if digit > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            if digit == 0 {
                cells.push(None);
            }
            else {
                cells.push(Some(digit));
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Parses the textual form of a grid: 81 cells in row-major order, each
    /// written as a digit from 1 to 9 or an empty-cell marker (`0` or `.`).
    /// All whitespace is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code
    ///
    /// ```text
    /// 12.......
    /// .34......
    /// ..5......
    /// .........
    /// .........
    /// .........
    /// .........
    /// .........
    /// ........9
    /// ```
    ///
    /// parses to a grid whose top-left block contains the digits 1 to 5 and
    /// whose bottom-right cell contains a 9.
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::InvalidCharacter`: If the code contains a
    /// character which is neither a digit, `.`, nor whitespace.
    /// * `SudokuParseError::WrongNumberOfCells`: If the code does not specify
    /// exactly 81 cells.
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let mut cells = Vec::with_capacity(CELL_COUNT);

        for c in code.chars() {
            match c {
                '1'..='9' => cells.push(Some(c as usize - '0' as usize)),
                '0' | '.' => cells.push(None),
                c if c.is_whitespace() => { },
                c => return Err(SudokuParseError::InvalidCharacter(c))
            }
        }

        if cells.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change. Empty cells are written as `.`.
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(|&cell| match cell {
                Some(n) => (b'0' + n as u8) as char,
                None => '.'
            })
            .collect()
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds`: If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber`: If `digit` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if digit == 0 || digit > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(digit);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid, i.e. the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}
