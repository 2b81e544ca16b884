//! Layout error types.

use thiserror::Error;

use crate::model::SectionKind;

/// Errors surfaced while placing cells on the grid or sizing tracks.
///
/// Placement errors carry the section and the row index within that section
/// so a caller can point at the offending input directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A cell declared a `column_span` or `row_span` of zero.
    #[error("{section} row {row}, cell {cell}: spans must be at least 1")]
    ZeroSpan {
        section: SectionKind,
        row: usize,
        cell: usize,
    },

    /// A row ran out of cells before every column was covered.
    #[error("{section} row {row} covers {filled} of {expected} columns")]
    RowUnderflow {
        section: SectionKind,
        row: usize,
        filled: usize,
        expected: usize,
    },

    /// A row had more cells than open columns, or a column span ran past the
    /// last column.
    #[error("{section} row {row} overflows the {columns}-column grid")]
    RowOverflow {
        section: SectionKind,
        row: usize,
        columns: usize,
    },

    /// A cell's footprint collided with a column still covered by a row span
    /// from an earlier row.
    #[error("{section} row {row}, cell {cell}: overlaps a cell spanning down from an earlier row")]
    OverlappingCells {
        section: SectionKind,
        row: usize,
        cell: usize,
    },

    /// A `row_span` extended beyond the last row of its section.
    #[error("{section} row {row}, cell {cell}: row span of {span} runs past the end of the section")]
    RowSpanOutOfRange {
        section: SectionKind,
        row: usize,
        cell: usize,
        span: usize,
    },

    /// A border glyph set did not contain exactly 16 characters.
    #[error("border glyph set must contain exactly 16 characters, got {0}")]
    InvalidGlyphSet(usize),

    /// Layout arithmetic reached a state that should be unreachable.
    #[error("internal layout invariant violated: {0}")]
    Internal(String),
}

impl LayoutError {
    pub(crate) fn internal(message: impl Into<String>) -> LayoutError {
        LayoutError::Internal(message.into())
    }
}
