//! `nfoview` - NFO text-art viewer core
//!
//! Decodes scene `.nfo` files (code page 437 or UTF-8), splits them into a
//! cell grid, and tells art glyphs (box drawing, blocks, shades) apart from
//! plain text so the two can be coloured differently. The same
//! classification drives two presentations: a styled terminal view
//! ([`view`] + [`ansi`]) and a PNG raster export ([`raster`]).
//!
//! ```
//! use nfoview::glyph::{GlyphClass, segment_runs};
//! use nfoview::NfoDocument;
//!
//! let doc = NfoDocument::from_bytes(vec![0xDB, 0xDB, b' ', b'h', b'i'], "x.nfo");
//! let runs: Vec<_> = segment_runs(&doc.lines()[0]).collect();
//! assert_eq!(runs[0].text, "██");
//! assert_eq!(runs[0].class, GlyphClass::Art);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional pixel coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional pixel coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for layout math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow glyph::GlyphClass etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod ansi;
pub mod color;
pub mod decode;
pub mod document;
pub mod error;
pub mod glyph;
pub mod layout;
pub mod raster;
pub mod source;
pub mod theme;
pub mod view;

// Re-export core types at crate root
pub use color::Rgba;
pub use decode::{SourceEncoding, decode};
pub use document::NfoDocument;
pub use error::{Error, Result};
pub use glyph::{GlyphClass, GlyphRun, RenderMode, classify, segment_runs};
pub use theme::{Palette, THEMES, Theme, theme_by_id};

// Re-export presentation types
pub use ansi::{AnsiWriter, ColorMode};
pub use layout::{CellLayout, Zoom};
pub use raster::{ExportOptions, Glyphs, RasterFrame, export_png, render_raster};
pub use view::{DocumentView, ViewOptions};
