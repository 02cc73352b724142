//! Outline font glyphs via `fontdue`.
//!
//! Used for plain text cells. Art glyphs never come from here; they are
//! drawn by [`super::builtin`] so they tile exactly.

use super::GlyphMask;
use crate::error::{Error, Result};
use crate::layout::CellRect;
use fontdue::{Font, FontSettings};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Monospace fonts commonly installed on Linux, macOS and Windows, in order
/// of preference.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/ibm-plex/IBMPlexMono-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/Library/Fonts/Courier New.ttf",
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    "C:\\Windows\\Fonts\\CascadiaMono.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// A parsed outline font.
pub struct FontGlyphs {
    font: Font,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for FontGlyphs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontGlyphs")
            .field("path", &self.path)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl FontGlyphs {
    /// Parse TrueType or OpenType data.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|err| Error::InvalidFont(err.to_owned()))?;
        Ok(Self { font, path: None })
    }

    /// Read and parse a font file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Font::from_bytes(bytes.as_slice(), FontSettings::default())
            .map_err(|err| Error::InvalidFont(format!("{}: {err}", path.display())))?;
        debug!(path = %path.display(), "loaded font");
        Ok(Self {
            font,
            path: Some(path.to_path_buf()),
        })
    }

    /// First system font from [`SYSTEM_FONT_CANDIDATES`] that loads.
    #[must_use]
    pub fn discover() -> Option<Self> {
        SYSTEM_FONT_CANDIDATES
            .iter()
            .map(Path::new)
            .filter(|path| path.is_file())
            .find_map(|path| match Self::load(path) {
                Ok(glyphs) => Some(glyphs),
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "skipping font");
                    None
                }
            })
    }

    /// File the font was loaded from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the font has an outline for `ch`.
    #[must_use]
    pub fn has_glyph(&self, ch: char) -> bool {
        self.font.lookup_glyph_index(ch) != 0
    }

    /// Coverage mask for `ch` at `font_size` pixels, positioned relative to
    /// the top-left of `cell` with the ascent as baseline.
    #[must_use]
    pub fn rasterize(&self, ch: char, font_size: f64, cell: &CellRect) -> Option<GlyphMask> {
        if !self.has_glyph(ch) {
            return None;
        }
        let px = font_size as f32;
        let (metrics, coverage) = self.font.rasterize(ch, px);
        if metrics.width == 0 || metrics.height == 0 {
            return None;
        }
        let ascent = self
            .font
            .horizontal_line_metrics(px)
            .map_or(px * 0.8, |line| line.ascent);
        // Centre the advance in the cell; fonts that are not exactly
        // 0.6 em wide stay inside their column.
        let slack = (cell.width as f32 - metrics.advance_width) / 2.0;
        let left = (metrics.xmin as f32 + slack).round() as i32;
        let top = ascent.round() as i32 - (metrics.ymin + metrics.height as i32);
        Some(GlyphMask {
            left,
            top,
            width: metrics.width as u32,
            height: metrics.height as u32,
            coverage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_invalid_font() {
        let err = FontGlyphs::from_bytes(b"definitely not a font").unwrap_err();
        assert!(matches!(err, Error::InvalidFont(_)));
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let err = FontGlyphs::load("/nonexistent/font.ttf").unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn test_discovered_font_draws_ascii() {
        // Only meaningful where a system font is installed.
        let Some(font) = FontGlyphs::discover() else {
            return;
        };
        let cell = CellRect {
            x: 0,
            y: 0,
            width: 8,
            height: 14,
        };
        assert!(font.path().is_some_and(Path::is_file));
        let mask = font.rasterize('A', 14.0, &cell).unwrap();
        assert!(mask.coverage.iter().any(|&c| c > 0));
        assert!(font.rasterize(' ', 14.0, &cell).is_none());
    }
}
