//! Table rendering onto a text canvas.
//!
//! Rendering interleaves border tracks and content tracks: the canvas
//! columns run track 0, column 0, track 1, column 1, and so on, with tracks
//! contributing a column or row only when their extent is 1. Cell rectangles
//! span from their first content track to the track after their footprint,
//! so a spanning cell flows straight across any border tracks it covers.

use trestle_canvas::{visual_width, Clip, TextCanvas};

use crate::border::{BorderMap, TextBorder};
use crate::dimension::Dimensions;
use crate::error::LayoutError;
use crate::grid::{Grid, PositionedCell};
use crate::model::Table;
use crate::style::TextAlignment;

pub(crate) fn render(table: &Table, border: &TextBorder) -> Result<String, LayoutError> {
    let grid = Grid::resolve(table)?;
    if grid.rows == 0 {
        return Ok(String::new());
    }
    let table_style = table.style.unwrap_or_default();
    let borders = BorderMap::build(&grid, &table_style);
    let sizes = Dimensions::solve(&grid, &borders)?;

    let (track_x, column_x, width) = offsets(&borders.vertical_tracks, &sizes.column_widths);
    let (track_y, row_y, height) = offsets(&borders.horizontal_tracks, &sizes.row_heights);
    let mut canvas = TextCanvas::new(width, height);

    for track in 0..=grid.columns {
        if borders.vertical_tracks[track] == 0 {
            continue;
        }
        let x = track_x[track];
        for row in 0..grid.rows {
            if !borders.vertical_at(row, track) {
                continue;
            }
            for y in row_y[row]..row_y[row] + sizes.row_heights[row] {
                canvas.put(x, y, border.vertical());
            }
        }
    }

    for track in 0..=grid.rows {
        if borders.horizontal_tracks[track] == 0 {
            continue;
        }
        let y = track_y[track];
        for column in 0..grid.columns {
            if !borders.horizontal_at(track, column) {
                continue;
            }
            for x in column_x[column]..column_x[column] + sizes.column_widths[column] {
                canvas.put(x, y, border.horizontal());
            }
        }
    }

    // Crossing glyphs are only written where some direction is set; a blank
    // crossing may sit inside a spanning cell's rectangle and must not
    // clobber its content.
    for horizontal_track in 0..=grid.rows {
        if borders.horizontal_tracks[horizontal_track] == 0 {
            continue;
        }
        for vertical_track in 0..=grid.columns {
            if borders.vertical_tracks[vertical_track] == 0 {
                continue;
            }
            let mask = borders.crossing(horizontal_track, vertical_track);
            if mask != 0 {
                canvas.put(
                    track_x[vertical_track],
                    track_y[horizontal_track],
                    border.glyph(mask),
                );
            }
        }
    }

    for cell in &grid.cells {
        let x = column_x[cell.column];
        let y = row_y[cell.row];
        let cell_width = track_x[cell.column + cell.column_span] - x;
        let cell_height = track_y[cell.row + cell.row_span] - y;
        let mut clip = canvas.clip(x, y, cell_width, cell_height);
        draw_cell(&mut clip, cell);
    }

    Ok(canvas.into_string())
}

/// Prefix sums over alternating track and content extents. Returns each
/// track's offset, each content column's offset, and the total extent.
fn offsets(tracks: &[usize], contents: &[usize]) -> (Vec<usize>, Vec<usize>, usize) {
    let mut track_offsets = Vec::with_capacity(tracks.len());
    let mut content_offsets = Vec::with_capacity(contents.len());
    let mut at = 0;
    for (index, track) in tracks.iter().enumerate() {
        track_offsets.push(at);
        at += track;
        if index < contents.len() {
            content_offsets.push(at);
            at += contents[index];
        }
    }
    (track_offsets, content_offsets, at)
}

fn draw_cell(clip: &mut Clip<'_>, cell: &PositionedCell<'_>) {
    let style = &cell.style;
    let lines: Vec<&str> = cell.content.split('\n').collect();
    let occupied_height = style.padding_top + lines.len() + style.padding_bottom;
    let top = match style.alignment {
        TextAlignment::TopLeft | TextAlignment::TopCenter | TextAlignment::TopRight => {
            style.padding_top
        }
        TextAlignment::MiddleLeft | TextAlignment::MiddleCenter | TextAlignment::MiddleRight => {
            (clip.height() - occupied_height) / 2 + style.padding_top
        }
        TextAlignment::BottomLeft | TextAlignment::BottomCenter | TextAlignment::BottomRight => {
            clip.height() - occupied_height + style.padding_top
        }
    };
    for (index, line) in lines.iter().enumerate() {
        let occupied_width = style.padding_left + visual_width(line) + style.padding_right;
        let left = match style.alignment {
            TextAlignment::TopLeft | TextAlignment::MiddleLeft | TextAlignment::BottomLeft => {
                style.padding_left
            }
            TextAlignment::TopCenter
            | TextAlignment::MiddleCenter
            | TextAlignment::BottomCenter => {
                (clip.width() - occupied_width) / 2 + style.padding_left
            }
            TextAlignment::TopRight | TextAlignment::MiddleRight | TextAlignment::BottomRight => {
                clip.width() - occupied_width + style.padding_left
            }
        };
        clip.write(left, top + index, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- offsets tests ---

    #[test]
    fn offsets_interleave_tracks_and_content() {
        // Tracks 1,0,1 around columns 3,2: |ccc cc| is 7 wide.
        let (tracks, contents, total) = offsets(&[1, 0, 1], &[3, 2]);
        assert_eq!(tracks, vec![0, 4, 6]);
        assert_eq!(contents, vec![1, 4]);
        assert_eq!(total, 7);
    }

    #[test]
    fn offsets_without_tracks_pack_content() {
        let (tracks, contents, total) = offsets(&[0, 0, 0], &[2, 3]);
        assert_eq!(tracks, vec![0, 2, 5]);
        assert_eq!(contents, vec![0, 2]);
        assert_eq!(total, 5);
    }

    #[test]
    fn offsets_handle_empty_grids() {
        let (tracks, contents, total) = offsets(&[0], &[]);
        assert_eq!(tracks, vec![0]);
        assert!(contents.is_empty());
        assert_eq!(total, 0);
    }
}
