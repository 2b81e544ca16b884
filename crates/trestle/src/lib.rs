//! # Trestle - Text Table Layout
//!
//! `trestle` lays out tables as fixed-width text: header, body, and footer
//! sections, cells that span rows and columns, a four-tier cascading style
//! system, and box-drawing borders that only take up space where they are
//! actually drawn.
//!
//! Cell content may span multiple lines and carry ANSI color escapes; output
//! is deterministic, every line padded to the same visual width.
//!
//! ## Core Concepts
//!
//! - [`Table`]: Header, body, and footer sections of rows of cells
//! - [`Cell`]: Content plus `row_span` / `column_span` and style overrides
//! - [`CellStyle`]: Optional alignment, padding, and border flags, cascading
//!   table → section → row → cell with later tiers winning field by field
//! - [`TableStyle`]: The table-wide border flag and [`BorderStyle`]
//! - [`TextBorder`]: 16-glyph border sets ([`TextBorder::DEFAULT`],
//!   [`TextBorder::ROUNDED`], [`TextBorder::ASCII`], or custom)
//! - [`LayoutError`]: Invalid span layouts reported with their coordinates
//!
//! ## Quick Start
//!
//! ```rust
//! use trestle::{CellStyle, Row, Table, TableSection};
//!
//! let table = Table::builder()
//!     .cell_style(CellStyle::new().padding_left(1).padding_right(1).border(true))
//!     .header(TableSection::new().row(Row::of(["crate", "version"])))
//!     .row(Row::of(["serde", "1.0"]))
//!     .row(Row::of(["console", "0.16"]))
//!     .build()
//!     .unwrap();
//!
//! let expected = [
//!     "┌─────────┬─────────┐",
//!     "│ crate   │ version │",
//!     "├─────────┼─────────┤",
//!     "│ serde   │ 1.0     │",
//!     "├─────────┼─────────┤",
//!     "│ console │ 0.16    │",
//!     "└─────────┴─────────┘",
//! ]
//! .join("\n");
//! assert_eq!(table.render().unwrap(), expected);
//! ```
//!
//! ## Spans and Styling
//!
//! Cells may claim a rectangle of the grid, and alignment is honored inside
//! the whole rectangle:
//!
//! ```rust
//! use trestle::{Cell, CellStyle, Row, Table, TextAlignment};
//!
//! let table = Table::builder()
//!     .row(Row::new().cell(
//!         Cell::new("tall")
//!             .row_span(3)
//!             .style(CellStyle::new().alignment(TextAlignment::MiddleLeft).padding_right(1)),
//!     ).cell("a"))
//!     .row(Row::of(["b"]))
//!     .row(Row::of(["c"]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.render().unwrap(), "     a\ntall b\n     c");
//! ```

mod border;
mod dimension;
mod error;
mod grid;
mod model;
mod render;
mod style;

pub use border::TextBorder;
pub use error::LayoutError;
pub use model::{Cell, Row, SectionKind, Table, TableBuilder, TableSection};
pub use style::{BorderStyle, CellStyle, TableStyle, TextAlignment};
