//! # Trestle Canvas - ANSI-Aware Text Surfaces
//!
//! `trestle-canvas` provides the character-level plumbing for fixed-width
//! text layout: measuring strings that may carry ANSI escape sequences, and
//! splicing content into rectangular text buffers at visual coordinates.
//!
//! This crate is the rendering surface for the `trestle` table engine, but
//! stands on its own for any tool that assembles column-aligned terminal
//! output.
//!
//! ## Core Concepts
//!
//! - [`visual_width`]: Column count of a string; escape sequences are free
//! - [`visual_index`]: Byte position of a visual column within a string
//! - [`TextCanvas`]: A spaces-filled rectangle that content is spliced into
//! - [`Clip`]: A translated, bounds-checked view of a canvas region
//!
//! ## Quick Start
//!
//! ```rust
//! use trestle_canvas::{visual_width, TextCanvas};
//!
//! let label = "\u{1b}[1mtotal\u{1b}[0m";
//! assert_eq!(visual_width(label), 5);
//!
//! let mut canvas = TextCanvas::new(7, 1);
//! canvas.write(1, 0, label);
//! assert_eq!(visual_width(&canvas.into_string()), 7);
//! ```

mod canvas;
mod measure;

pub use canvas::{Clip, TextCanvas};
pub use measure::{visual_index, visual_width};
