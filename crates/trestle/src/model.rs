//! Table data model.
//!
//! A [`Table`] is three optional-to-rich sections (header, body, footer) of
//! [`Row`]s of [`Cell`]s. Cells carry their content, an optional span
//! footprint, and optional style overrides; tables, sections, and rows each
//! carry an optional [`CellStyle`] tier of their own for the cascade.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::border::TextBorder;
use crate::error::LayoutError;
use crate::render;
use crate::style::{CellStyle, TableStyle};

fn default_span() -> usize {
    1
}

/// One cell of content plus its span footprint and style overrides.
///
/// Content may hold embedded newlines; each line is laid out on its own
/// canvas row. Spans default to 1 and must stay at least 1.
///
/// # Example
///
/// ```rust
/// use trestle::Cell;
///
/// let cell = Cell::new("total").column_span(3);
/// assert_eq!(cell.column_span, 3);
/// assert_eq!(cell.row_span, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub content: String,
    #[serde(default = "default_span")]
    pub column_span: usize,
    #[serde(default = "default_span")]
    pub row_span: usize,
    #[serde(default)]
    pub style: Option<CellStyle>,
}

impl Cell {
    pub fn new(content: impl Into<String>) -> Cell {
        Cell {
            content: content.into(),
            ..Cell::default()
        }
    }

    pub fn column_span(mut self, span: usize) -> Cell {
        self.column_span = span;
        self
    }

    pub fn row_span(mut self, span: usize) -> Cell {
        self.row_span = span;
        self
    }

    pub fn style(mut self, style: CellStyle) -> Cell {
        self.style = Some(style);
        self
    }
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            content: String::new(),
            column_span: 1,
            row_span: 1,
            style: None,
        }
    }
}

impl From<&str> for Cell {
    fn from(content: &str) -> Cell {
        Cell::new(content)
    }
}

impl From<String> for Cell {
    fn from(content: String) -> Cell {
        Cell::new(content)
    }
}

/// A horizontal run of cells with an optional row-level style tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub cell_style: Option<CellStyle>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    /// Builds a row from anything cell-like.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trestle::Row;
    ///
    /// let row = Row::of(["name", "version"]);
    /// assert_eq!(row.cells.len(), 2);
    /// ```
    pub fn of<I, C>(cells: I) -> Row
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Row {
            cells: cells.into_iter().map(Into::into).collect(),
            cell_style: None,
        }
    }

    pub fn cell(mut self, cell: impl Into<Cell>) -> Row {
        self.cells.push(cell.into());
        self
    }

    pub fn cell_style(mut self, style: CellStyle) -> Row {
        self.cell_style = Some(style);
        self
    }
}

/// A run of rows with an optional section-level style tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableSection {
    pub rows: Vec<Row>,
    #[serde(default)]
    pub cell_style: Option<CellStyle>,
}

impl TableSection {
    pub fn new() -> TableSection {
        TableSection::default()
    }

    pub fn row(mut self, row: Row) -> TableSection {
        self.rows.push(row);
        self
    }

    pub fn cell_style(mut self, style: CellStyle) -> TableSection {
        self.cell_style = Some(style);
        self
    }
}

/// Labels the three table tiers in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Body,
    Footer,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Header => "header",
            SectionKind::Body => "body",
            SectionKind::Footer => "footer",
        };
        f.write_str(name)
    }
}

/// A complete table: sections, an optional table-wide cell style tier, and
/// table-level presentation settings.
///
/// All fields are public, so a table can be assembled literally, built
/// fluently through [`Table::builder`], or deserialized. Span validation
/// always runs again inside [`Table::render`], whichever path produced the
/// value.
///
/// # Example
///
/// ```rust
/// use trestle::{CellStyle, Row, Table};
///
/// let table = Table::builder()
///     .cell_style(CellStyle::new().padding_left(1).padding_right(1).border(true))
///     .row(Row::of(["crate", "version"]))
///     .row(Row::of(["serde", "1.0"]))
///     .build()
///     .unwrap();
/// let rendered = table.render().unwrap();
/// assert!(rendered.starts_with('┌'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    pub header: Option<TableSection>,
    pub body: TableSection,
    pub footer: Option<TableSection>,
    /// Base tier of the cell style cascade.
    pub cell_style: Option<CellStyle>,
    pub style: Option<TableStyle>,
}

impl Table {
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Lays the table out and renders it with the default box-drawing
    /// glyphs.
    ///
    /// The output has no trailing newline; every line is padded with spaces
    /// to the same visual width.
    pub fn render(&self) -> Result<String, LayoutError> {
        self.render_with(&TextBorder::DEFAULT)
    }

    /// Like [`Table::render`], but draws borders with the given glyph set.
    pub fn render_with(&self, border: &TextBorder) -> Result<String, LayoutError> {
        render::render(self, border)
    }

    pub(crate) fn sections(&self) -> impl Iterator<Item = (SectionKind, &TableSection)> {
        self.header
            .iter()
            .map(|section| (SectionKind::Header, section))
            .chain(std::iter::once((SectionKind::Body, &self.body)))
            .chain(
                self.footer
                    .iter()
                    .map(|section| (SectionKind::Footer, section)),
            )
    }

    pub(crate) fn validate_spans(&self) -> Result<(), LayoutError> {
        for (kind, section) in self.sections() {
            for (row_index, row) in section.rows.iter().enumerate() {
                for (cell_index, cell) in row.cells.iter().enumerate() {
                    if cell.column_span == 0 || cell.row_span == 0 {
                        return Err(LayoutError::ZeroSpan {
                            section: kind,
                            row: row_index,
                            cell: cell_index,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Fluent construction of a [`Table`].
///
/// `build` checks that no cell declares a zero span; grid placement is
/// validated later, at render time, once column geometry is known.
#[derive(Debug, Default)]
pub struct TableBuilder {
    header: Option<TableSection>,
    body: Option<TableSection>,
    footer: Option<TableSection>,
    cell_style: Option<CellStyle>,
    style: Option<TableStyle>,
}

impl TableBuilder {
    pub fn new() -> TableBuilder {
        TableBuilder::default()
    }

    pub fn header(mut self, section: TableSection) -> TableBuilder {
        self.header = Some(section);
        self
    }

    pub fn body(mut self, section: TableSection) -> TableBuilder {
        self.body = Some(section);
        self
    }

    pub fn footer(mut self, section: TableSection) -> TableBuilder {
        self.footer = Some(section);
        self
    }

    /// Appends a row to the body.
    pub fn row(mut self, row: Row) -> TableBuilder {
        self.body.get_or_insert_with(TableSection::new).rows.push(row);
        self
    }

    pub fn cell_style(mut self, style: CellStyle) -> TableBuilder {
        self.cell_style = Some(style);
        self
    }

    pub fn style(mut self, style: TableStyle) -> TableBuilder {
        self.style = Some(style);
        self
    }

    pub fn build(self) -> Result<Table, LayoutError> {
        let table = Table {
            header: self.header,
            body: self.body.unwrap_or_default(),
            footer: self.footer,
            cell_style: self.cell_style,
            style: self.style,
        };
        table.validate_spans()?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Cell tests ---

    #[test]
    fn new_cell_spans_one_by_one() {
        let cell = Cell::new("x");
        assert_eq!(cell.content, "x");
        assert_eq!(cell.column_span, 1);
        assert_eq!(cell.row_span, 1);
        assert_eq!(cell.style, None);
    }

    #[test]
    fn cells_convert_from_strings() {
        let from_str: Cell = "a".into();
        let from_string: Cell = String::from("b").into();
        assert_eq!(from_str.content, "a");
        assert_eq!(from_string.content, "b");
    }

    #[test]
    fn fluent_spans_and_style() {
        let cell = Cell::new("wide")
            .column_span(3)
            .row_span(2)
            .style(CellStyle::new().border(true));
        assert_eq!(cell.column_span, 3);
        assert_eq!(cell.row_span, 2);
        assert!(cell.style.is_some());
    }

    // --- Row and TableSection tests ---

    #[test]
    fn row_of_collects_mixed_cells() {
        let row = Row::of(["a", "b"]).cell(Cell::new("c").column_span(2));
        assert_eq!(row.cells.len(), 3);
        assert_eq!(row.cells[2].column_span, 2);
    }

    #[test]
    fn sections_accumulate_rows() {
        let section = TableSection::new()
            .row(Row::of(["a"]))
            .row(Row::of(["b"]))
            .cell_style(CellStyle::new().border(true));
        assert_eq!(section.rows.len(), 2);
        assert!(section.cell_style.is_some());
    }

    // --- Table and TableBuilder tests ---

    #[test]
    fn sections_iterate_in_header_body_footer_order() {
        let table = Table {
            header: Some(TableSection::new().row(Row::of(["h"]))),
            body: TableSection::new().row(Row::of(["b"])),
            footer: Some(TableSection::new().row(Row::of(["f"]))),
            ..Table::default()
        };
        let kinds: Vec<SectionKind> = table.sections().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Header, SectionKind::Body, SectionKind::Footer]
        );
    }

    #[test]
    fn missing_sections_are_skipped() {
        let table = Table::default();
        let kinds: Vec<SectionKind> = table.sections().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![SectionKind::Body]);
    }

    #[test]
    fn builder_rows_land_in_the_body() {
        let table = Table::builder()
            .row(Row::of(["a", "b"]))
            .row(Row::of(["c", "d"]))
            .build()
            .unwrap();
        assert_eq!(table.body.rows.len(), 2);
        assert!(table.header.is_none());
    }

    #[test]
    fn builder_rejects_zero_column_span() {
        let error = Table::builder()
            .row(Row::of(["a"]).cell(Cell::new("b").column_span(0)))
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            LayoutError::ZeroSpan {
                section: SectionKind::Body,
                row: 0,
                cell: 1,
            }
        );
    }

    #[test]
    fn builder_rejects_zero_row_span_in_footer() {
        let error = Table::builder()
            .row(Row::of(["a"]))
            .footer(TableSection::new().row(Row::new().cell(Cell::new("f").row_span(0))))
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            LayoutError::ZeroSpan {
                section: SectionKind::Footer,
                row: 0,
                cell: 0,
            }
        );
    }

    #[test]
    fn section_kind_displays_lowercase() {
        assert_eq!(SectionKind::Header.to_string(), "header");
        assert_eq!(SectionKind::Body.to_string(), "body");
        assert_eq!(SectionKind::Footer.to_string(), "footer");
    }

    // --- serde tests ---

    #[test]
    fn table_round_trips_through_json() {
        let table = Table::builder()
            .header(TableSection::new().row(Row::of(["name", "count"])))
            .row(Row::of(["a", "1"]))
            .cell_style(CellStyle::new().padding_left(1))
            .style(TableStyle::new().border(true))
            .build()
            .unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn cell_spans_default_to_one_when_absent() {
        let cell: Cell = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        assert_eq!(cell.column_span, 1);
        assert_eq!(cell.row_span, 1);
    }

    #[test]
    fn table_deserializes_from_sparse_json() {
        let table: Table = serde_json::from_str(
            r#"{
                "body": {
                    "rows": [
                        {"cells": [{"content": "a"}, {"content": "b", "column_span": 2}]}
                    ]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(table.body.rows[0].cells[1].column_span, 2);
        assert!(table.header.is_none());
        assert!(table.style.is_none());
    }
}
