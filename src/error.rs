use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The window side `2 * radius + 1` exceeds a grid dimension.
    #[error("neighborhood of radius {radius} (side {side}) does not fit a {rows}x{cols} grid")]
    InvalidNeighborhoodSize {
        radius: usize,
        /// Saturates at `usize::MAX` for absurd radii.
        side: usize,
        rows: usize,
        cols: usize,
    },

    #[error("center ({row}, {col}) is outside a {rows}x{cols} grid")]
    CenterOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {found} columns, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}
