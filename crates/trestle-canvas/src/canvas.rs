//! Fixed-size character canvas assembled row by row.
//!
//! A [`TextCanvas`] starts as a `width` x `height` block of spaces. Callers
//! splice glyphs and whole lines into it at visual coordinates; rows keep a
//! constant visual width even when spliced content carries zero-width ANSI
//! escape sequences.

use crate::measure;

/// A rectangular text buffer addressed by visual column and row.
///
/// # Example
///
/// ```rust
/// use trestle_canvas::TextCanvas;
///
/// let mut canvas = TextCanvas::new(5, 2);
/// canvas.write(1, 0, "abc");
/// canvas.put(0, 1, '|');
/// assert_eq!(canvas.into_string(), " abc \n|    ");
/// ```
#[derive(Debug, Clone)]
pub struct TextCanvas {
    width: usize,
    height: usize,
    rows: Vec<String>,
}

impl TextCanvas {
    /// Creates a canvas filled with spaces.
    pub fn new(width: usize, height: usize) -> TextCanvas {
        TextCanvas {
            width,
            height,
            rows: vec![" ".repeat(width); height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Places a single glyph at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the canvas.
    pub fn put(&mut self, x: usize, y: usize, glyph: char) {
        let mut buffer = [0u8; 4];
        self.write_line(x, y, glyph.encode_utf8(&mut buffer));
    }

    /// Writes `text` with its first character at `(x, y)`. Each line after a
    /// `'\n'` starts at the same column on the next row.
    ///
    /// # Panics
    ///
    /// Panics if any line runs outside the canvas.
    pub fn write(&mut self, x: usize, y: usize, text: &str) {
        for (index, line) in text.split('\n').enumerate() {
            self.write_line(x, y + index, line);
        }
    }

    /// Borrows a rectangular view whose coordinates are relative to
    /// `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle does not fit inside the canvas.
    pub fn clip(&mut self, x: usize, y: usize, width: usize, height: usize) -> Clip<'_> {
        assert!(
            x + width <= self.width && y + height <= self.height,
            "clip {width}x{height} at ({x}, {y}) outside canvas {}x{}",
            self.width,
            self.height
        );
        Clip {
            canvas: self,
            x,
            y,
            width,
            height,
        }
    }

    /// Consumes the canvas, joining rows with `'\n'`. Trailing spaces are
    /// kept and no trailing newline is appended.
    pub fn into_string(self) -> String {
        self.rows.join("\n")
    }

    fn write_line(&mut self, x: usize, y: usize, line: &str) {
        assert!(y < self.height, "row {y} not in range [0, {})", self.height);
        let width = measure::visual_width(line);
        assert!(
            x + width <= self.width,
            "columns {x}..{} not in range [0, {}]",
            x + width,
            self.width
        );
        let row = &mut self.rows[y];
        // The left boundary consumes escape runs so a neighbor's trailing
        // reset stays put; the right boundary stops before escape runs so a
        // neighbor's leading color survives.
        let (start, end) = if width == 0 {
            let at = measure::visual_index(row, x);
            (at, at)
        } else {
            (
                measure::visual_index_past(row, x),
                measure::visual_index(row, x + width),
            )
        };
        row.replace_range(start..end, line);
    }
}

/// A mutable rectangular view into a [`TextCanvas`].
#[derive(Debug)]
pub struct Clip<'a> {
    canvas: &'a mut TextCanvas,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl Clip<'_> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Writes `text` at clip-relative coordinates.
    ///
    /// # Panics
    ///
    /// Panics if any line runs outside the clip rectangle.
    pub fn write(&mut self, x: usize, y: usize, text: &str) {
        for (index, line) in text.split('\n').enumerate() {
            let row = y + index;
            assert!(row < self.height, "row {row} not in range [0, {})", self.height);
            let width = measure::visual_width(line);
            assert!(
                x + width <= self.width,
                "columns {x}..{} not in range [0, {}]",
                x + width,
                self.width
            );
            self.canvas.write_line(self.x + x, self.y + row, line);
        }
    }
}
