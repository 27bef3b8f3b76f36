//! This module defines the rule set under which a puzzle is solved.
//!
//! Classic rules require unique digits in every row, column, and 3x3 block.
//! The only supported variation adds the two main diagonals ( ╲ and ╱ ) as
//! further uniqueness groups.

use serde::{Deserialize, Serialize};

/// The set of uniqueness rules enforced during a solve. The classic
/// row/column/block rules are always active; diagonal uniqueness can be
/// enabled on top of them.
///
/// ```
/// use sudoku_backtrack::rules::RuleSet;
///
/// assert!(!RuleSet::classic().diagonals());
/// assert!(RuleSet::with_diagonals().diagonals());
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RuleSet {
    diagonals: bool
}

impl RuleSet {

    /// Creates the classic rule set: unique digits in every row, column, and
    /// block. This is also the `Default` rule set.
    pub fn classic() -> RuleSet {
        RuleSet {
            diagonals: false
        }
    }

    /// Creates a rule set which additionally requires unique digits on the
    /// two main diagonals, i.e. the cells whose column equals their row and
    /// the cells whose column and row sum to 8.
    pub fn with_diagonals() -> RuleSet {
        RuleSet {
            diagonals: true
        }
    }

    /// Indicates whether diagonal uniqueness is enforced by this rule set.
    pub fn diagonals(&self) -> bool {
        self.diagonals
    }
}
