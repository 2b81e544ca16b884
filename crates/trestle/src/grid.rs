//! Span-aware placement of cells onto the logical grid.
//!
//! Sections stack top to bottom into one grid: the first row of the first
//! non-empty section fixes the column count, and every later row has to
//! cover exactly that many columns between its own cells and the columns
//! still held by row spans from above. Row spans never cross a section
//! boundary.

use crate::error::LayoutError;
use crate::model::{SectionKind, Table};
use crate::style::EffectiveStyle;

/// A cell fixed to its grid footprint with its style cascade resolved.
#[derive(Debug, Clone)]
pub(crate) struct PositionedCell<'a> {
    pub(crate) content: &'a str,
    pub(crate) row: usize,
    pub(crate) column: usize,
    pub(crate) row_span: usize,
    pub(crate) column_span: usize,
    pub(crate) style: EffectiveStyle,
}

/// The resolved grid: every coordinate maps to exactly one cell.
#[derive(Debug)]
pub(crate) struct Grid<'a> {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    pub(crate) cells: Vec<PositionedCell<'a>>,
    cover: Vec<Option<usize>>,
}

impl<'a> Grid<'a> {
    pub(crate) fn resolve(table: &'a Table) -> Result<Grid<'a>, LayoutError> {
        let columns = match table
            .sections()
            .flat_map(|(_, section)| section.rows.first())
            .next()
        {
            Some(first_row) => first_row.cells.iter().map(|cell| cell.column_span).sum(),
            None => {
                return Ok(Grid {
                    columns: 0,
                    rows: 0,
                    cells: Vec::new(),
                    cover: Vec::new(),
                })
            }
        };
        let rows = table
            .sections()
            .map(|(_, section)| section.rows.len())
            .sum();

        let mut grid = Grid {
            columns,
            rows,
            cells: Vec::new(),
            cover: vec![None; rows * columns],
        };

        let base_style = table.cell_style.unwrap_or_default();
        let mut grid_row = 0;
        for (kind, section) in table.sections() {
            let section_style = match section.cell_style {
                Some(tier) => base_style.merge(&tier),
                None => base_style,
            };
            // carry[c] > 0 while column c is still covered by a row span
            // opened in an earlier row of this section.
            let mut carry = vec![0usize; columns];
            for (row_index, row) in section.rows.iter().enumerate() {
                let row_style = match row.cell_style {
                    Some(tier) => section_style.merge(&tier),
                    None => section_style,
                };
                let mut column = 0;
                for (cell_index, cell) in row.cells.iter().enumerate() {
                    if cell.column_span == 0 || cell.row_span == 0 {
                        return Err(LayoutError::ZeroSpan {
                            section: kind,
                            row: row_index,
                            cell: cell_index,
                        });
                    }
                    while column < columns && carry[column] > 0 {
                        column += 1;
                    }
                    if column >= columns || column + cell.column_span > columns {
                        return Err(LayoutError::RowOverflow {
                            section: kind,
                            row: row_index,
                            columns,
                        });
                    }
                    if carry[column..column + cell.column_span]
                        .iter()
                        .any(|&held| held > 0)
                    {
                        return Err(LayoutError::OverlappingCells {
                            section: kind,
                            row: row_index,
                            cell: cell_index,
                        });
                    }
                    if row_index + cell.row_span > section.rows.len() {
                        return Err(LayoutError::RowSpanOutOfRange {
                            section: kind,
                            row: row_index,
                            cell: cell_index,
                            span: cell.row_span,
                        });
                    }

                    let style = match cell.style {
                        Some(tier) => row_style.merge(&tier),
                        None => row_style,
                    };
                    let index = grid.cells.len();
                    grid.cells.push(PositionedCell {
                        content: &cell.content,
                        row: grid_row,
                        column,
                        row_span: cell.row_span,
                        column_span: cell.column_span,
                        style: EffectiveStyle::resolve(&style),
                    });
                    for r in grid_row..grid_row + cell.row_span {
                        for c in column..column + cell.column_span {
                            grid.cover[r * columns + c] = Some(index);
                        }
                    }
                    for held in &mut carry[column..column + cell.column_span] {
                        *held = cell.row_span;
                    }
                    column += cell.column_span;
                }
                while column < columns && carry[column] > 0 {
                    column += 1;
                }
                if column < columns {
                    // At this point carry marks every column covered this
                    // row, freshly placed cells included.
                    let filled = carry.iter().filter(|&&held| held > 0).count();
                    return Err(LayoutError::RowUnderflow {
                        section: kind,
                        row: row_index,
                        filled,
                        expected: columns,
                    });
                }
                for held in &mut carry {
                    *held = held.saturating_sub(1);
                }
                grid_row += 1;
            }
        }
        Ok(grid)
    }

    /// The cell whose footprint covers `(row, column)`, if in range.
    pub(crate) fn cell_at(&self, row: usize, column: usize) -> Option<&PositionedCell<'a>> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cover[row * self.columns + column].map(|index| &self.cells[index])
    }

    /// Index into `cells` for the cell covering `(row, column)`.
    pub(crate) fn cell_index_at(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cover[row * self.columns + column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Row, Table, TableSection};
    use crate::style::{CellStyle, TextAlignment};

    fn body(rows: Vec<Row>) -> Table {
        Table {
            body: TableSection { rows, cell_style: None },
            ..Table::default()
        }
    }

    // --- placement tests ---

    #[test]
    fn plain_rows_place_left_to_right() {
        let table = body(vec![Row::of(["a", "b"]), Row::of(["c", "d"])]);
        let grid = Grid::resolve(&table).unwrap();
        assert_eq!(grid.columns, 2);
        assert_eq!(grid.rows, 2);
        let positions: Vec<(usize, usize, &str)> = grid
            .cells
            .iter()
            .map(|cell| (cell.row, cell.column, cell.content))
            .collect();
        assert_eq!(
            positions,
            vec![(0, 0, "a"), (0, 1, "b"), (1, 0, "c"), (1, 1, "d")]
        );
    }

    #[test]
    fn first_row_fixes_the_column_count() {
        let table = body(vec![
            Row::new().cell(Cell::new("wide").column_span(3)),
            Row::of(["a", "b", "c"]),
        ]);
        let grid = Grid::resolve(&table).unwrap();
        assert_eq!(grid.columns, 3);
    }

    #[test]
    fn empty_table_resolves_to_an_empty_grid() {
        let grid = Grid::resolve(&Table::default()).unwrap();
        assert_eq!(grid.columns, 0);
        assert_eq!(grid.rows, 0);
        assert!(grid.cells.is_empty());
    }

    #[test]
    fn row_spans_push_later_cells_aside() {
        let table = body(vec![
            Row::new().cell(Cell::new("tall").row_span(2)).cell("a"),
            Row::of(["b"]),
        ]);
        let grid = Grid::resolve(&table).unwrap();
        // "b" lands in column 1 because column 0 is still held.
        assert_eq!(grid.cells[2].content, "b");
        assert_eq!(grid.cells[2].row, 1);
        assert_eq!(grid.cells[2].column, 1);
    }

    #[test]
    fn footprints_cover_every_spanned_coordinate() {
        let table = body(vec![
            Row::new()
                .cell(Cell::new("big").row_span(2).column_span(2))
                .cell("a"),
            Row::of(["b"]),
            Row::of(["c", "d", "e"]),
        ]);
        let grid = Grid::resolve(&table).unwrap();
        for (row, column) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert_eq!(grid.cell_at(row, column).unwrap().content, "big");
        }
        assert_eq!(grid.cell_at(1, 2).unwrap().content, "b");
        assert_eq!(grid.cell_at(2, 1).unwrap().content, "d");
    }

    #[test]
    fn interlocking_row_spans_resolve() {
        let table = body(vec![
            Row::new().cell("1").cell(Cell::new("2").row_span(2)),
            Row::new().cell(Cell::new("3").row_span(2)),
            Row::of(["4"]),
            Row::of(["5", "6"]),
        ]);
        let grid = Grid::resolve(&table).unwrap();
        assert_eq!(grid.cell_at(1, 0).unwrap().content, "3");
        assert_eq!(grid.cell_at(1, 1).unwrap().content, "2");
        assert_eq!(grid.cell_at(2, 0).unwrap().content, "3");
        assert_eq!(grid.cell_at(2, 1).unwrap().content, "4");
    }

    #[test]
    fn sections_stack_into_one_grid() {
        let table = Table {
            header: Some(TableSection::new().row(Row::of(["h1", "h2"]))),
            body: TableSection::new().row(Row::of(["b1", "b2"])),
            footer: Some(TableSection::new().row(Row::of(["f1", "f2"]))),
            ..Table::default()
        };
        let grid = Grid::resolve(&table).unwrap();
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.cell_at(0, 0).unwrap().content, "h1");
        assert_eq!(grid.cell_at(1, 1).unwrap().content, "b2");
        assert_eq!(grid.cell_at(2, 0).unwrap().content, "f1");
    }

    // --- rejection tests ---

    #[test]
    fn short_rows_are_rejected() {
        let table = body(vec![Row::of(["a", "b", "c"]), Row::of(["d", "e"])]);
        let error = Grid::resolve(&table).unwrap_err();
        assert_eq!(
            error,
            LayoutError::RowUnderflow {
                section: SectionKind::Body,
                row: 1,
                filled: 2,
                expected: 3,
            }
        );
    }

    #[test]
    fn uncovered_gap_between_row_spans_is_rejected() {
        let table = body(vec![
            Row::new()
                .cell("1")
                .cell(Cell::new("2").row_span(2))
                .cell("3")
                .cell(Cell::new("4").row_span(2)),
            Row::of(["5"]),
            Row::of(["6", "7", "8", "9"]),
        ]);
        let error = Grid::resolve(&table).unwrap_err();
        assert_eq!(
            error,
            LayoutError::RowUnderflow {
                section: SectionKind::Body,
                row: 1,
                filled: 3,
                expected: 4,
            }
        );
    }

    #[test]
    fn overlong_rows_are_rejected() {
        let table = body(vec![Row::of(["a", "b"]), Row::of(["c", "d", "e"])]);
        let error = Grid::resolve(&table).unwrap_err();
        assert_eq!(
            error,
            LayoutError::RowOverflow {
                section: SectionKind::Body,
                row: 1,
                columns: 2,
            }
        );
    }

    #[test]
    fn column_span_past_the_last_column_is_rejected() {
        let table = body(vec![
            Row::of(["a", "b"]),
            Row::new().cell(Cell::new("wide").column_span(3)),
        ]);
        let error = Grid::resolve(&table).unwrap_err();
        assert!(matches!(error, LayoutError::RowOverflow { row: 1, .. }));
    }

    #[test]
    fn column_span_crossing_a_held_column_is_rejected() {
        let table = body(vec![
            Row::new().cell("a").cell(Cell::new("b").row_span(2)).cell("c"),
            Row::new().cell(Cell::new("d").column_span(2)),
            Row::of(["e", "f", "g"]),
        ]);
        let error = Grid::resolve(&table).unwrap_err();
        assert_eq!(
            error,
            LayoutError::OverlappingCells {
                section: SectionKind::Body,
                row: 1,
                cell: 0,
            }
        );
    }

    #[test]
    fn row_span_past_the_section_end_is_rejected() {
        let table = body(vec![
            Row::new().cell("a").cell(Cell::new("tall").row_span(3)),
            Row::of(["b"]),
        ]);
        let error = Grid::resolve(&table).unwrap_err();
        assert_eq!(
            error,
            LayoutError::RowSpanOutOfRange {
                section: SectionKind::Body,
                row: 0,
                cell: 1,
                span: 3,
            }
        );
    }

    #[test]
    fn row_span_may_not_lean_into_the_next_section() {
        let table = Table {
            body: TableSection::new()
                .row(Row::new().cell("a").cell(Cell::new("tall").row_span(2))),
            footer: Some(TableSection::new().row(Row::of(["f1", "f2"]))),
            ..Table::default()
        };
        let error = Grid::resolve(&table).unwrap_err();
        assert_eq!(
            error,
            LayoutError::RowSpanOutOfRange {
                section: SectionKind::Body,
                row: 0,
                cell: 1,
                span: 2,
            }
        );
    }

    #[test]
    fn zero_spans_are_rejected_at_resolve_time() {
        let table = body(vec![Row::new().cell(Cell::new("a").row_span(0))]);
        let error = Grid::resolve(&table).unwrap_err();
        assert_eq!(
            error,
            LayoutError::ZeroSpan {
                section: SectionKind::Body,
                row: 0,
                cell: 0,
            }
        );
    }

    // --- cascade tests ---

    #[test]
    fn styles_cascade_table_section_row_cell() {
        let table = Table {
            body: TableSection {
                rows: vec![Row {
                    cells: vec![
                        Cell::new("styled")
                            .style(CellStyle::new().alignment(TextAlignment::BottomRight)),
                        Cell::new("plain"),
                    ],
                    cell_style: Some(CellStyle::new().padding_left(2)),
                }],
                cell_style: Some(CellStyle::new().padding_left(1).padding_right(1)),
            },
            cell_style: Some(CellStyle::new().alignment(TextAlignment::MiddleCenter)),
            ..Table::default()
        };
        let grid = Grid::resolve(&table).unwrap();

        let styled = &grid.cells[0].style;
        assert_eq!(styled.alignment, TextAlignment::BottomRight);
        assert_eq!(styled.padding_left, 2);
        assert_eq!(styled.padding_right, 1);

        let plain = &grid.cells[1].style;
        assert_eq!(plain.alignment, TextAlignment::MiddleCenter);
        assert_eq!(plain.padding_left, 2);
    }

    #[test]
    fn unset_tiers_fall_through_to_defaults() {
        let table = body(vec![Row::of(["x"])]);
        let grid = Grid::resolve(&table).unwrap();
        let style = &grid.cells[0].style;
        assert_eq!(style.alignment, TextAlignment::TopLeft);
        assert_eq!(style.padding_left, 0);
        assert!(!style.border_left);
    }
}
