use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for board construction.
/// Raised when caller-supplied rows cannot form a rectangular grid of
/// single-character cells.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the length of the first row.
    #[error("Jagged grid: row {row} has {found} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell is not exactly one non-whitespace character.
    #[error("Invalid cell at ({row}, {col}): {value:?} is not a single character")]
    InvalidCell {
        row: usize,
        col: usize,
        value: String,
    },
}
