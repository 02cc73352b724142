//! Raster export: paint a document onto an RGBA surface and encode it as PNG.
//!
//! The exporter uses the same cell grid as [`crate::layout`] and the same
//! classification as the terminal view, so both presentations agree on
//! which cell holds which glyph in which colour. Every painted cell is
//! recorded in [`RasterFrame::glyphs`].
//!
//! Art glyphs are drawn procedurally by [`builtin`]. Plain glyphs need an
//! outline font ([`font::FontGlyphs`]); without one they are recorded but
//! left un-inked.

pub mod builtin;
pub mod font;

use crate::color::Rgba;
use crate::document::NfoDocument;
use crate::error::{Error, Result};
use crate::glyph::{GlyphClass, RenderMode};
use crate::layout::{CellLayout, CellRect};
use crate::theme::Palette;
use font::FontGlyphs;
use image::{ImageFormat, RgbaImage};
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Largest surface the exporter will allocate (about 1 GiB of RGBA).
pub const MAX_SURFACE_PIXELS: u64 = 1 << 28;

/// An 8-bit coverage mask placed relative to a cell's top-left corner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphMask {
    /// Horizontal offset from the cell origin.
    pub left: i32,
    /// Vertical offset from the cell origin.
    pub top: i32,
    pub width: u32,
    pub height: u32,
    /// Row-major coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

/// Supplies coverage masks for glyphs.
pub trait GlyphSource {
    /// Mask for `ch` drawn in `cell` at `font_size` pixels, or `None` when
    /// this source cannot draw it.
    fn glyph(&mut self, ch: char, cell: &CellRect, font_size: f64) -> Option<GlyphMask>;
}

/// Built-in art glyphs plus an optional outline font for everything else.
#[derive(Debug, Default)]
pub struct Glyphs {
    font: Option<FontGlyphs>,
    cache: HashMap<(char, u32, u32, u64), Option<GlyphMask>>,
}

impl Glyphs {
    /// Art glyphs only.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Art glyphs plus `font` for plain text.
    #[must_use]
    pub fn with_font(font: FontGlyphs) -> Self {
        Self {
            font: Some(font),
            cache: HashMap::new(),
        }
    }

    /// Whether plain text can be inked.
    #[must_use]
    pub const fn has_font(&self) -> bool {
        self.font.is_some()
    }
}

impl GlyphSource for Glyphs {
    fn glyph(&mut self, ch: char, cell: &CellRect, font_size: f64) -> Option<GlyphMask> {
        let font = self.font.as_ref();
        self.cache
            .entry((ch, cell.width, cell.height, font_size.to_bits()))
            .or_insert_with(|| {
                builtin::rasterize(ch, cell.width, cell.height)
                    .or_else(|| font?.rasterize(ch, font_size, cell))
            })
            .clone()
    }
}

/// Options for [`render_raster`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExportOptions {
    pub layout: CellLayout,
    pub mode: RenderMode,
}

/// An opaque RGBA pixel surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Surface {
    /// Allocate a `width × height` surface filled with `fill`.
    ///
    /// Fails with [`Error::ExportSurfaceUnavailable`] when either dimension
    /// is zero, the pixel count exceeds [`MAX_SURFACE_PIXELS`], or the
    /// allocation itself fails.
    pub fn try_new(width: u32, height: u32, fill: Rgba) -> Result<Self> {
        let unavailable = Error::ExportSurfaceUnavailable { width, height };
        let count = u64::from(width) * u64::from(height);
        if count == 0 || count > MAX_SURFACE_PIXELS {
            return Err(unavailable);
        }
        let count = usize::try_from(count).map_err(|_| Error::ExportSurfaceUnavailable { width, height })?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(count).map_err(|_| unavailable)?;
        pixels.resize(count, fill);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel at (x, y).
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        self.pixel_index(x, y).map(|idx| self.pixels[idx])
    }

    /// Set pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Blend `color` through `mask` placed at (`x`, `y`), clipped to the
    /// surface.
    pub fn blend_mask(&mut self, x: i64, y: i64, mask: &GlyphMask, color: Rgba) {
        let origin_x = x + i64::from(mask.left);
        let origin_y = y + i64::from(mask.top);
        for (row, line) in mask.coverage.chunks(mask.width.max(1) as usize).enumerate() {
            let py = origin_y + row as i64;
            let Ok(py) = u32::try_from(py) else {
                continue;
            };
            for (col, &coverage) in line.iter().enumerate() {
                if coverage == 0 {
                    continue;
                }
                let Ok(px) = u32::try_from(origin_x + col as i64) else {
                    continue;
                };
                if let Some(idx) = self.pixel_index(px, py) {
                    self.pixels[idx] = self.pixels[idx].mix(color, coverage);
                }
            }
        }
    }

    /// Row-major RGBA8 bytes.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_array()).collect()
    }

    /// Encode as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let image = RgbaImage::from_raw(self.width, self.height, self.to_rgba8()).ok_or(
            Error::ExportSurfaceUnavailable {
                width: self.width,
                height: self.height,
            },
        )?;
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

/// One cell painted onto the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintedGlyph {
    pub row: usize,
    pub col: usize,
    pub ch: char,
    pub class: GlyphClass,
    pub color: Rgba,
    /// Whether any pixel was drawn for the glyph.
    pub inked: bool,
}

/// A rendered export: the surface plus a record of every painted cell.
#[derive(Clone, Debug)]
pub struct RasterFrame {
    surface: Surface,
    glyphs: Vec<PaintedGlyph>,
}

impl RasterFrame {
    #[must_use]
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Painted cells in row-major order.
    #[must_use]
    pub fn glyphs(&self) -> &[PaintedGlyph] {
        &self.glyphs
    }

    /// `(row, col, char, class)` for every painted cell, comparable with
    /// [`crate::view::DocumentView::classification_stream`].
    #[must_use]
    pub fn classification_stream(&self) -> Vec<(usize, usize, char, GlyphClass)> {
        self.glyphs
            .iter()
            .map(|g| (g.row, g.col, g.ch, g.class))
            .collect()
    }

    /// Encode the surface as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        self.surface.to_png()
    }
}

/// Paint `doc` onto a fresh surface.
///
/// The surface is `layout.canvas_size(doc.width(), doc.height())`, filled
/// with the palette background. Each char sits at its own cell origin, so
/// columns line up regardless of font metrics.
pub fn render_raster(
    doc: &NfoDocument,
    palette: &Palette,
    options: &ExportOptions,
    glyphs: &mut impl GlyphSource,
) -> Result<RasterFrame> {
    let layout = options.layout;
    let (width, height) = layout.canvas_size(doc.width(), doc.height());
    let mut surface = Surface::try_new(width, height, palette.background)?;
    let mut painted = Vec::new();
    let mut missing = 0usize;

    for (row, line) in doc.lines().iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let class = options.mode.classify(ch);
            let color = palette.color_for(class);
            let cell = layout.cell_rect(row, col);
            let mask = if ch.is_whitespace() || ch.is_control() {
                None
            } else {
                glyphs.glyph(ch, &cell, layout.font_size)
            };
            let inked = mask.is_some();
            if let Some(mask) = mask {
                surface.blend_mask(i64::from(cell.x), i64::from(cell.y), &mask, color);
            } else if !ch.is_whitespace() && !ch.is_control() {
                missing += 1;
            }
            painted.push(PaintedGlyph {
                row,
                col,
                ch,
                class,
                color,
                inked,
            });
        }
    }

    if missing > 0 {
        warn!(missing, "no glyph available for some characters");
    }
    debug!(
        width,
        height,
        cells = painted.len(),
        file = doc.file_name(),
        "rendered raster"
    );

    Ok(RasterFrame {
        surface,
        glyphs: painted,
    })
}

/// Encode `frame` and write it to `path`.
///
/// The PNG is written to a temporary file in the destination directory and
/// renamed into place, so a failed export never leaves a partial file.
pub fn export_png(frame: &RasterFrame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let png = frame.to_png()?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(&png)?;
    file.flush()?;
    file.persist(path).map_err(|err| Error::Io(err.error))?;
    debug!(path = %path.display(), bytes = png.len(), "wrote PNG");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::theme_by_id;

    fn palette() -> Palette {
        Palette {
            background: Rgba::rgb(0, 0, 0),
            foreground: Rgba::rgb(200, 200, 200),
            art: Rgba::rgb(255, 0, 0),
        }
    }

    #[test]
    fn test_surface_rejects_zero_dimensions() {
        let err = Surface::try_new(0, 10, Rgba::BLACK).unwrap_err();
        assert!(matches!(
            err,
            Error::ExportSurfaceUnavailable {
                width: 0,
                height: 10
            }
        ));
        assert!(Surface::try_new(10, 0, Rgba::BLACK).is_err());
    }

    #[test]
    fn test_surface_rejects_huge_dimensions() {
        assert!(Surface::try_new(u32::MAX, u32::MAX, Rgba::BLACK).is_err());
    }

    #[test]
    fn test_surface_get_set() {
        let mut surface = Surface::try_new(4, 3, Rgba::BLACK).unwrap();
        surface.set(3, 2, Rgba::WHITE);
        surface.set(4, 0, Rgba::WHITE);
        assert_eq!(surface.get(3, 2), Some(Rgba::WHITE));
        assert_eq!(surface.get(0, 0), Some(Rgba::BLACK));
        assert_eq!(surface.get(4, 0), None);
    }

    #[test]
    fn test_blend_mask_clips() {
        let mut surface = Surface::try_new(2, 2, Rgba::BLACK).unwrap();
        let mask = GlyphMask {
            left: -1,
            top: -1,
            width: 3,
            height: 3,
            coverage: vec![255; 9],
        };
        surface.blend_mask(0, 0, &mask, Rgba::WHITE);
        assert_eq!(surface.get(0, 0), Some(Rgba::WHITE));
        assert_eq!(surface.get(1, 1), Some(Rgba::WHITE));
    }

    #[test]
    fn test_surface_size_and_background() {
        let doc = NfoDocument::build("abc\n█", "f");
        let frame =
            render_raster(&doc, &palette(), &ExportOptions::default(), &mut Glyphs::builtin())
                .unwrap();
        assert_eq!(frame.surface().width(), 58);
        assert_eq!(frame.surface().height(), 60);
        assert_eq!(frame.surface().get(0, 0), Some(palette().background));
    }

    #[test]
    fn test_art_cell_painted_in_art_colour() {
        let doc = NfoDocument::build("█", "f");
        let frame =
            render_raster(&doc, &palette(), &ExportOptions::default(), &mut Glyphs::builtin())
                .unwrap();
        // Cell 0,0 starts at the padding offset.
        assert_eq!(frame.surface().get(16, 16), Some(palette().art));
        assert_eq!(frame.surface().get(20, 29), Some(palette().art));
        assert_eq!(frame.glyphs()[0].class, GlyphClass::Art);
        assert!(frame.glyphs()[0].inked);
    }

    #[test]
    fn test_text_mode_paints_art_in_foreground() {
        let doc = NfoDocument::build("█", "f");
        let options = ExportOptions {
            mode: RenderMode::Text,
            ..ExportOptions::default()
        };
        let frame = render_raster(&doc, &palette(), &options, &mut Glyphs::builtin()).unwrap();
        assert_eq!(frame.surface().get(16, 16), Some(palette().foreground));
        assert_eq!(frame.glyphs()[0].class, GlyphClass::Plain);
    }

    #[test]
    fn test_plain_text_without_font_is_recorded_uninked() {
        let doc = NfoDocument::build("A █", "f");
        let frame =
            render_raster(&doc, &palette(), &ExportOptions::default(), &mut Glyphs::builtin())
                .unwrap();
        let glyphs = frame.glyphs();
        assert_eq!(glyphs.len(), 3);
        assert!(!glyphs[0].inked);
        assert!(!glyphs[1].inked);
        assert!(glyphs[2].inked);
    }

    #[test]
    fn test_empty_document_is_padding_only() {
        let doc = NfoDocument::build("", "f");
        let frame = render_raster(
            &doc,
            &theme_by_id("dark").palette(),
            &ExportOptions::default(),
            &mut Glyphs::builtin(),
        )
        .unwrap();
        assert_eq!((frame.surface().width(), frame.surface().height()), (32, 32));
        assert!(frame.glyphs().is_empty());
    }

    #[test]
    fn test_empty_document_without_padding_fails() {
        let doc = NfoDocument::build("", "f");
        let options = ExportOptions {
            layout: CellLayout::new(14.0, 0.0),
            ..ExportOptions::default()
        };
        let err = render_raster(&doc, &palette(), &options, &mut Glyphs::builtin()).unwrap_err();
        assert!(matches!(err, Error::ExportSurfaceUnavailable { .. }));
    }

    #[test]
    fn test_png_signature() {
        let doc = NfoDocument::build("╔╗", "f");
        let frame =
            render_raster(&doc, &palette(), &ExportOptions::default(), &mut Glyphs::builtin())
                .unwrap();
        let png = frame.to_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_glyph_cache_reuses_masks() {
        let mut glyphs = Glyphs::builtin();
        let cell = CellRect {
            x: 0,
            y: 0,
            width: 8,
            height: 14,
        };
        let a = glyphs.glyph('░', &cell, 14.0);
        let b = glyphs.glyph('░', &cell, 14.0);
        assert_eq!(a, b);
        assert_eq!(glyphs.cache.len(), 1);
    }

    #[test]
    fn test_glyph_cache_keys_on_font_size() {
        let mut glyphs = Glyphs::builtin();
        let cell = CellRect {
            x: 0,
            y: 0,
            width: 9,
            height: 14,
        };
        // Both sizes round to the same cell; masks must not be shared.
        glyphs.glyph('A', &cell, 14.0);
        glyphs.glyph('A', &cell, 14.3);
        assert_eq!(glyphs.cache.len(), 2);
    }
}
