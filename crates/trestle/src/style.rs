//! Cascading cell and table styles.
//!
//! Styling resolves in four tiers: table, section, row, then cell, with later
//! tiers overriding earlier ones field by field. [`CellStyle`] keeps every
//! field optional so the cascade can tell "unset" apart from an explicit
//! value; [`EffectiveStyle`] is the fully resolved result the layout engine
//! works with.

use serde::{Deserialize, Serialize};

/// Where cell content sits inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// How the table's outermost border tracks are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Outer border tracks collapse entirely; interior borders are untouched.
    Hidden,
    /// Outer border tracks appear wherever an edge segment is switched on.
    #[default]
    Solid,
}

/// Per-cell styling overrides.
///
/// Every field is optional; an unset field defers to the tier below it in
/// the cascade, and ultimately to the defaults in [`EffectiveStyle`].
///
/// # Example
///
/// ```rust
/// use trestle::{CellStyle, TextAlignment};
///
/// let style = CellStyle::new()
///     .alignment(TextAlignment::MiddleRight)
///     .padding_left(1)
///     .padding_right(1)
///     .border(true);
/// assert_eq!(style.border_top, Some(true));
/// assert_eq!(style.padding_top, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    pub alignment: Option<TextAlignment>,
    pub padding_left: Option<usize>,
    pub padding_right: Option<usize>,
    pub padding_top: Option<usize>,
    pub padding_bottom: Option<usize>,
    pub border_left: Option<bool>,
    pub border_right: Option<bool>,
    pub border_top: Option<bool>,
    pub border_bottom: Option<bool>,
}

impl CellStyle {
    pub fn new() -> CellStyle {
        CellStyle::default()
    }

    pub fn alignment(mut self, alignment: TextAlignment) -> CellStyle {
        self.alignment = Some(alignment);
        self
    }

    pub fn padding_left(mut self, columns: usize) -> CellStyle {
        self.padding_left = Some(columns);
        self
    }

    pub fn padding_right(mut self, columns: usize) -> CellStyle {
        self.padding_right = Some(columns);
        self
    }

    pub fn padding_top(mut self, rows: usize) -> CellStyle {
        self.padding_top = Some(rows);
        self
    }

    pub fn padding_bottom(mut self, rows: usize) -> CellStyle {
        self.padding_bottom = Some(rows);
        self
    }

    /// Sets all four paddings at once.
    pub fn padding(self, size: usize) -> CellStyle {
        self.padding_left(size)
            .padding_right(size)
            .padding_top(size)
            .padding_bottom(size)
    }

    pub fn border_left(mut self, on: bool) -> CellStyle {
        self.border_left = Some(on);
        self
    }

    pub fn border_right(mut self, on: bool) -> CellStyle {
        self.border_right = Some(on);
        self
    }

    pub fn border_top(mut self, on: bool) -> CellStyle {
        self.border_top = Some(on);
        self
    }

    pub fn border_bottom(mut self, on: bool) -> CellStyle {
        self.border_bottom = Some(on);
        self
    }

    /// Sets all four border flags at once.
    pub fn border(self, on: bool) -> CellStyle {
        self.border_left(on)
            .border_right(on)
            .border_top(on)
            .border_bottom(on)
    }

    /// Overlays `over` on top of `self`: fields set in `over` win, unset
    /// fields keep the value from `self`.
    pub fn merge(&self, over: &CellStyle) -> CellStyle {
        CellStyle {
            alignment: over.alignment.or(self.alignment),
            padding_left: over.padding_left.or(self.padding_left),
            padding_right: over.padding_right.or(self.padding_right),
            padding_top: over.padding_top.or(self.padding_top),
            padding_bottom: over.padding_bottom.or(self.padding_bottom),
            border_left: over.border_left.or(self.border_left),
            border_right: over.border_right.or(self.border_right),
            border_top: over.border_top.or(self.border_top),
            border_bottom: over.border_bottom.or(self.border_bottom),
        }
    }
}

/// Table-wide presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Stands in for the missing neighbor when an edge segment is resolved:
    /// with `border` on, any cell touching the table edge gets a border there.
    pub border: bool,
    pub border_style: BorderStyle,
}

impl TableStyle {
    pub fn new() -> TableStyle {
        TableStyle::default()
    }

    pub fn border(mut self, on: bool) -> TableStyle {
        self.border = on;
        self
    }

    pub fn border_style(mut self, style: BorderStyle) -> TableStyle {
        self.border_style = style;
        self
    }
}

/// A fully resolved style with every field filled in.
///
/// Unset fields resolve to top-left alignment, zero padding, and no borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EffectiveStyle {
    pub(crate) alignment: TextAlignment,
    pub(crate) padding_left: usize,
    pub(crate) padding_right: usize,
    pub(crate) padding_top: usize,
    pub(crate) padding_bottom: usize,
    pub(crate) border_left: bool,
    pub(crate) border_right: bool,
    pub(crate) border_top: bool,
    pub(crate) border_bottom: bool,
}

impl EffectiveStyle {
    pub(crate) fn resolve(style: &CellStyle) -> EffectiveStyle {
        EffectiveStyle {
            alignment: style.alignment.unwrap_or_default(),
            padding_left: style.padding_left.unwrap_or(0),
            padding_right: style.padding_right.unwrap_or(0),
            padding_top: style.padding_top.unwrap_or(0),
            padding_bottom: style.padding_bottom.unwrap_or(0),
            border_left: style.border_left.unwrap_or(false),
            border_right: style.border_right.unwrap_or(false),
            border_top: style.border_top.unwrap_or(false),
            border_bottom: style.border_bottom.unwrap_or(false),
        }
    }
}
