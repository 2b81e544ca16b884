//! ANSI-aware text measurement.
//!
//! All widths are counted in Unicode code points: every visible code point
//! occupies exactly one column, and ANSI escape sequences occupy zero. This
//! keeps layout arithmetic stable for colored content without depending on
//! terminal-specific rendering of wide glyphs.

use console::AnsiCodeIterator;

/// Returns the number of columns `text` occupies.
///
/// Each visible code point counts as one column. ANSI escape sequences are
/// skipped entirely.
///
/// # Example
///
/// ```rust
/// use trestle_canvas::visual_width;
///
/// assert_eq!(visual_width("table"), 5);
/// assert_eq!(visual_width("\u{1b}[31mred\u{1b}[0m"), 3);
/// ```
pub fn visual_width(text: &str) -> usize {
    AnsiCodeIterator::new(text)
        .filter(|(_, is_ansi)| !is_ansi)
        .map(|(chunk, _)| chunk.chars().count())
        .sum()
}

/// Returns the byte index of the first byte at visual column `column`.
///
/// Escape sequences sitting exactly at `column` are not consumed, so the
/// returned index points before any zero-width run that precedes the column's
/// visible character.
///
/// # Panics
///
/// Panics if `column` is greater than the visual width of `text`.
///
/// # Example
///
/// ```rust
/// use trestle_canvas::visual_index;
///
/// assert_eq!(visual_index("abc", 2), 2);
/// // The escape occupies bytes but no columns.
/// assert_eq!(visual_index("a\u{1b}[31mbc", 2), 7);
/// // A boundary touching an escape run stays before it.
/// assert_eq!(visual_index("a\u{1b}[31mbc", 1), 1);
/// ```
pub fn visual_index(text: &str, column: usize) -> usize {
    let mut offset = 0;
    let mut remaining = column;
    for (chunk, is_ansi) in AnsiCodeIterator::new(text) {
        if is_ansi {
            if remaining == 0 {
                return offset;
            }
            offset += chunk.len();
            continue;
        }
        for (index, _) in chunk.char_indices() {
            if remaining == 0 {
                return offset + index;
            }
            remaining -= 1;
        }
        offset += chunk.len();
    }
    assert!(
        remaining == 0,
        "column {column} out of range for text of width {}",
        column - remaining
    );
    offset
}

/// Like [`visual_index`], but consumes any escape runs sitting exactly at
/// `column`, returning the index of the column's visible character itself.
///
/// Used for the left edge of a splice so that a neighbor's trailing reset
/// sequence stays with the neighbor.
pub(crate) fn visual_index_past(text: &str, column: usize) -> usize {
    let mut offset = 0;
    let mut remaining = column;
    for (chunk, is_ansi) in AnsiCodeIterator::new(text) {
        if is_ansi {
            offset += chunk.len();
            continue;
        }
        for (index, _) in chunk.char_indices() {
            if remaining == 0 {
                return offset + index;
            }
            remaining -= 1;
        }
        offset += chunk.len();
    }
    assert!(
        remaining == 0,
        "column {column} out of range for text of width {}",
        column - remaining
    );
    offset
}
