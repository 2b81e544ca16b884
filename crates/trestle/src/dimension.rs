//! Track sizing from cell content and span requirements.
//!
//! Sizing happens in two stages. Cells spanning a single column or row set
//! hard minimums on their track. Spanning cells then check whether their
//! footprint, border tracks inside it included, already fits their natural
//! size; a shortfall is spread evenly over the spanned tracks with the
//! remainder going to the last one. Growing a track can unlock another
//! spanning cell, so the second stage repeats until nothing changes.

use trestle_canvas::visual_width;

use crate::border::BorderMap;
use crate::error::LayoutError;
use crate::grid::{Grid, PositionedCell};

/// Passes the sizing loop may take before giving up. Each productive pass
/// grows at least one track, so real inputs settle long before this.
const MAX_PASSES: usize = 1000;

/// Resolved content extents for every column and row.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Dimensions {
    pub(crate) column_widths: Vec<usize>,
    pub(crate) row_heights: Vec<usize>,
}

impl Dimensions {
    pub(crate) fn solve(grid: &Grid<'_>, borders: &BorderMap) -> Result<Dimensions, LayoutError> {
        let mut column_widths = vec![0usize; grid.columns];
        let mut row_heights = vec![0usize; grid.rows];

        for cell in &grid.cells {
            let (width, height) = natural_size(cell);
            if cell.column_span == 1 {
                column_widths[cell.column] = column_widths[cell.column].max(width);
            }
            if cell.row_span == 1 {
                row_heights[cell.row] = row_heights[cell.row].max(height);
            }
        }

        for _ in 0..MAX_PASSES {
            let mut changed = false;
            for cell in &grid.cells {
                let (width, height) = natural_size(cell);
                if cell.column_span > 1 {
                    let interior: usize = borders.vertical_tracks
                        [cell.column + 1..cell.column + cell.column_span]
                        .iter()
                        .sum();
                    changed |= grow_to_fit(
                        &mut column_widths[cell.column..cell.column + cell.column_span],
                        width,
                        interior,
                    );
                }
                if cell.row_span > 1 {
                    let interior: usize = borders.horizontal_tracks
                        [cell.row + 1..cell.row + cell.row_span]
                        .iter()
                        .sum();
                    changed |= grow_to_fit(
                        &mut row_heights[cell.row..cell.row + cell.row_span],
                        height,
                        interior,
                    );
                }
            }
            if !changed {
                return Ok(Dimensions {
                    column_widths,
                    row_heights,
                });
            }
        }
        Err(LayoutError::internal("track sizing failed to converge"))
    }
}

/// Padded content extents of a cell: the widest line plus horizontal
/// padding, and the line count plus vertical padding. Empty content still
/// counts as one line.
fn natural_size(cell: &PositionedCell<'_>) -> (usize, usize) {
    let style = &cell.style;
    let mut width = 0;
    let mut lines = 0;
    for line in cell.content.split('\n') {
        width = width.max(visual_width(line));
        lines += 1;
    }
    (
        style.padding_left + style.padding_right + width,
        style.padding_top + lines + style.padding_bottom,
    )
}

/// Grows `tracks` until their sum plus `interior` reaches `need`. Returns
/// whether anything grew.
fn grow_to_fit(tracks: &mut [usize], need: usize, interior: usize) -> bool {
    let available: usize = tracks.iter().sum::<usize>() + interior;
    if available >= need {
        return false;
    }
    let deficit = need - available;
    let share = deficit / tracks.len();
    let remainder = deficit % tracks.len();
    for track in tracks.iter_mut() {
        *track += share;
    }
    if let Some(last) = tracks.last_mut() {
        *last += remainder;
    }
    true
}
