//! Border glyph selection and segment activation.
//!
//! Borders live on tracks between the grid's rows and columns: a table with
//! `R` rows and `C` columns has `R + 1` horizontal and `C + 1` vertical
//! tracks. Each segment of a track is switched on or off by the two cells it
//! separates, a whole track only takes up a canvas row or column when at
//! least one of its segments is on, and the glyph drawn where tracks cross
//! is picked from a [`TextBorder`] by the directions that meet there.

use crate::error::LayoutError;
use crate::grid::Grid;
use crate::style::{BorderStyle, TableStyle};

/// A set of 16 border glyphs indexed by the directions meeting at a point.
///
/// The index is a bitmask: down adds 1, up adds 2, right adds 4, left adds 8.
/// Index 0 is the glyph for "no border here" and is never drawn by the
/// renderer, but custom sets still provide it.
///
/// # Example
///
/// ```rust
/// use trestle::TextBorder;
///
/// assert_eq!(TextBorder::DEFAULT.get(true, true, false, false), '│');
/// assert_eq!(TextBorder::DEFAULT.get(true, false, true, false), '┌');
/// assert_eq!(TextBorder::ROUNDED.get(true, false, true, false), '╭');
/// assert_eq!(TextBorder::ASCII.get(true, true, true, true), '+');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBorder {
    glyphs: [char; 16],
}

impl TextBorder {
    /// Light box-drawing glyphs, with half-stubs at dead ends.
    pub const DEFAULT: TextBorder = TextBorder {
        glyphs: [
            ' ', '╷', '╵', '│', '╶', '┌', '└', '├', '╴', '┐', '┘', '┤', '─', '┬', '┴', '┼',
        ],
    };

    /// Like [`TextBorder::DEFAULT`] but with rounded corners.
    pub const ROUNDED: TextBorder = TextBorder {
        glyphs: [
            ' ', '╷', '╵', '│', '╶', '╭', '╰', '├', '╴', '╮', '╯', '┤', '─', '┬', '┴', '┼',
        ],
    };

    /// Plain `|`, `-` and `+`, with spaces at dead ends.
    pub const ASCII: TextBorder = TextBorder {
        glyphs: [
            ' ', ' ', ' ', '|', ' ', '+', '+', '+', ' ', '+', '+', '+', '-', '+', '+', '+',
        ],
    };

    /// Builds a glyph set from a 16-character string ordered by bitmask.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trestle::TextBorder;
    ///
    /// let heavy = TextBorder::new(" ╻╹┃╺┏┗┣╸┓┛┫━┳┻╋").unwrap();
    /// assert_eq!(heavy.get(true, true, false, false), '┃');
    /// assert!(TextBorder::new("+-+").is_err());
    /// ```
    pub fn new(glyphs: &str) -> Result<TextBorder, LayoutError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        let count = glyphs.len();
        let glyphs: [char; 16] = glyphs
            .try_into()
            .map_err(|_| LayoutError::InvalidGlyphSet(count))?;
        Ok(TextBorder { glyphs })
    }

    /// The glyph for the given meeting of border directions.
    pub fn get(&self, down: bool, up: bool, right: bool, left: bool) -> char {
        let mut mask = 0;
        if down {
            mask |= 1;
        }
        if up {
            mask |= 2;
        }
        if right {
            mask |= 4;
        }
        if left {
            mask |= 8;
        }
        self.glyphs[mask]
    }

    /// The plain vertical glyph (up and down only).
    pub fn vertical(&self) -> char {
        self.glyphs[0b0011]
    }

    /// The plain horizontal glyph (left and right only).
    pub fn horizontal(&self) -> char {
        self.glyphs[0b1100]
    }

    pub(crate) fn glyph(&self, mask: u8) -> char {
        self.glyphs[mask as usize]
    }
}

impl Default for TextBorder {
    fn default() -> TextBorder {
        TextBorder::DEFAULT
    }
}

/// Which border segments are on, and which tracks consequently take space.
#[derive(Debug)]
pub(crate) struct BorderMap {
    columns: usize,
    rows: usize,
    /// `vertical[row * (columns + 1) + track]`
    vertical: Vec<bool>,
    /// `horizontal[track * columns + column]`
    horizontal: Vec<bool>,
    /// Extent (0 or 1) of each vertical track, left to right.
    pub(crate) vertical_tracks: Vec<usize>,
    /// Extent (0 or 1) of each horizontal track, top to bottom.
    pub(crate) horizontal_tracks: Vec<usize>,
}

impl BorderMap {
    pub(crate) fn build(grid: &Grid<'_>, style: &TableStyle) -> BorderMap {
        let columns = grid.columns;
        let rows = grid.rows;
        let hidden = style.border_style == BorderStyle::Hidden;

        let mut vertical = vec![false; rows * (columns + 1)];
        for row in 0..rows {
            for track in 0..=columns {
                let at_edge = track == 0 || track == columns;
                if hidden && at_edge {
                    continue;
                }
                if !at_edge
                    && grid.cell_index_at(row, track - 1) == grid.cell_index_at(row, track)
                {
                    // Interior to one cell's footprint.
                    continue;
                }
                let left_wants = if track == 0 {
                    style.border
                } else {
                    grid.cell_at(row, track - 1)
                        .is_some_and(|cell| cell.style.border_right)
                };
                let right_wants = if track == columns {
                    style.border
                } else {
                    grid.cell_at(row, track)
                        .is_some_and(|cell| cell.style.border_left)
                };
                vertical[row * (columns + 1) + track] = left_wants || right_wants;
            }
        }

        let mut horizontal = vec![false; (rows + 1) * columns];
        for track in 0..=rows {
            for column in 0..columns {
                let at_edge = track == 0 || track == rows;
                if hidden && at_edge {
                    continue;
                }
                if !at_edge
                    && grid.cell_index_at(track - 1, column) == grid.cell_index_at(track, column)
                {
                    continue;
                }
                let above_wants = if track == 0 {
                    style.border
                } else {
                    grid.cell_at(track - 1, column)
                        .is_some_and(|cell| cell.style.border_bottom)
                };
                let below_wants = if track == rows {
                    style.border
                } else {
                    grid.cell_at(track, column)
                        .is_some_and(|cell| cell.style.border_top)
                };
                horizontal[track * columns + column] = above_wants || below_wants;
            }
        }

        let vertical_tracks = (0..=columns)
            .map(|track| {
                let on = (0..rows).any(|row| vertical[row * (columns + 1) + track]);
                usize::from(on)
            })
            .collect();
        let horizontal_tracks = (0..=rows)
            .map(|track| {
                let on = (0..columns).any(|column| horizontal[track * columns + column]);
                usize::from(on)
            })
            .collect();

        BorderMap {
            columns,
            rows,
            vertical,
            horizontal,
            vertical_tracks,
            horizontal_tracks,
        }
    }

    /// Is the vertical segment beside grid row `row` on track `track` drawn?
    pub(crate) fn vertical_at(&self, row: usize, track: usize) -> bool {
        self.vertical[row * (self.columns + 1) + track]
    }

    /// Is the horizontal segment above/below grid column `column` on track
    /// `track` drawn?
    pub(crate) fn horizontal_at(&self, track: usize, column: usize) -> bool {
        self.horizontal[track * self.columns + column]
    }

    /// Direction bitmask at the crossing of a horizontal and a vertical
    /// track, assembled from the four surrounding segments.
    pub(crate) fn crossing(&self, horizontal_track: usize, vertical_track: usize) -> u8 {
        let mut mask = 0;
        if horizontal_track < self.rows && self.vertical_at(horizontal_track, vertical_track) {
            mask |= 1;
        }
        if horizontal_track > 0 && self.vertical_at(horizontal_track - 1, vertical_track) {
            mask |= 2;
        }
        if vertical_track < self.columns && self.horizontal_at(horizontal_track, vertical_track) {
            mask |= 4;
        }
        if vertical_track > 0 && self.horizontal_at(horizontal_track, vertical_track - 1) {
            mask |= 8;
        }
        mask
    }
}
