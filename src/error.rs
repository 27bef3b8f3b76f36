//! This module contains some error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Miscellaneous errors that can occur on some methods in the
/// [root module](crate). This does not exclude errors that occur when parsing
/// puzzles, see [SudokuParseError] for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for a cell of the grid. This is
    /// the case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either is greater than or equal to
    /// 9.
    OutOfBounds,

    /// Indicates that two clues of the initial puzzle contain the same digit
    /// in one row, column, block, or active diagonal. Such a puzzle has no
    /// solution and is rejected before any search is run.
    ConflictingClues
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidNumber =>
                write!(f, "number outside the range 1 to 9"),
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates outside the 9x9 grid"),
            SudokuError::ConflictingClues =>
                write!(f, "two equal clues share a row, column, block, or \
                    diagonal")
        }
    }
}

impl Error for SudokuError { }

/// An enumeration of the errors that may occur when parsing a [SudokuGrid]
/// from its textual form or constructing one from a digit sequence.
///
/// [SudokuGrid]: crate::SudokuGrid
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells provided does not equal 81, the
    /// amount of cells in a 9x9 grid.
    WrongNumberOfCells,

    /// Indicates that the puzzle text contains a character which is neither a
    /// digit, an empty-cell marker (`0` or `.`), nor whitespace. The
    /// offending character is wrapped in this instance.
    InvalidCharacter(char),

    /// Indicates that a cell is specified with an invalid number (greater
    /// than 9).
    InvalidNumber
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "puzzle does not contain exactly 81 cells"),
            SudokuParseError::InvalidCharacter(c) =>
                write!(f, "invalid character {:?} in puzzle", c),
            SudokuParseError::InvalidNumber =>
                write!(f, "cell number outside the range 0 to 9")
        }
    }
}

impl Error for SudokuParseError { }
