//! Monospaced cell geometry shared by the terminal view and the exporter.
//!
//! A cell is `0.6 × font_size` wide and `font_size` tall. A document of
//! `w × h` cells occupies `ceil(w·cell_width + 2·padding)` by
//! `ceil(h·cell_height + 2·padding)` pixels.

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Default padding around the document in pixels.
pub const DEFAULT_PADDING: f64 = 16.0;

/// Advance width of a monospace glyph relative to the font size.
pub const CELL_WIDTH_RATIO: f64 = 0.6;

/// Pixel geometry of the character grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellLayout {
    /// Font size (and cell height) in pixels.
    pub font_size: f64,
    /// Empty border on every side in pixels.
    pub padding: f64,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            padding: DEFAULT_PADDING,
        }
    }
}

/// Pixel rectangle covered by one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellLayout {
    /// Create a layout, clamping the font size to at least one pixel and the
    /// padding to be non-negative.
    #[must_use]
    pub fn new(font_size: f64, padding: f64) -> Self {
        let font_size = if font_size.is_finite() {
            font_size.max(1.0)
        } else {
            DEFAULT_FONT_SIZE
        };
        let padding = if padding.is_finite() {
            padding.max(0.0)
        } else {
            DEFAULT_PADDING
        };
        Self { font_size, padding }
    }

    /// Layout for a zoom level with the default padding.
    #[must_use]
    pub fn for_zoom(zoom: Zoom) -> Self {
        Self::new(zoom.font_size(), DEFAULT_PADDING)
    }

    /// Cell advance width in pixels.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        self.font_size * CELL_WIDTH_RATIO
    }

    /// Cell (line) height in pixels.
    #[must_use]
    pub const fn cell_height(&self) -> f64 {
        self.font_size
    }

    /// Pixel size of a `cols × rows` grid including padding.
    #[must_use]
    pub fn canvas_size(&self, cols: usize, rows: usize) -> (u32, u32) {
        let width = (cols as f64).mul_add(self.cell_width(), 2.0 * self.padding);
        let height = (rows as f64).mul_add(self.cell_height(), 2.0 * self.padding);
        (width.ceil() as u32, height.ceil() as u32)
    }

    /// Top-left corner of the cell at `row`, `col` (unrounded).
    #[must_use]
    pub fn cell_origin(&self, row: usize, col: usize) -> (f64, f64) {
        (
            (col as f64).mul_add(self.cell_width(), self.padding),
            (row as f64).mul_add(self.cell_height(), self.padding),
        )
    }

    /// Pixel rectangle of the cell at `row`, `col`.
    ///
    /// Edges are rounded independently so adjacent cells tile without gaps
    /// or overlap even when the cell width is fractional.
    #[must_use]
    pub fn cell_rect(&self, row: usize, col: usize) -> CellRect {
        let (x0, y0) = self.cell_origin(row, col);
        let (x1, y1) = self.cell_origin(row + 1, col + 1);
        let (x0, y0) = (x0.round() as u32, y0.round() as u32);
        let (x1, y1) = (x1.round() as u32, y1.round() as u32);
        CellRect {
            x: x0,
            y: y0,
            width: x1.saturating_sub(x0),
            height: y1.saturating_sub(y0),
        }
    }
}

/// View zoom factor, clamped to `[Zoom::MIN, Zoom::MAX]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom(f64);

impl Zoom {
    pub const MIN: f64 = 0.25;
    pub const MAX: f64 = 4.0;
    pub const STEP: f64 = 0.1;

    /// Create a zoom level, clamping into range. Non-finite input resets to 1.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(Self::MIN, Self::MAX))
        } else {
            Self::default()
        }
    }

    /// Zoom factor.
    #[must_use]
    pub const fn factor(self) -> f64 {
        self.0
    }

    /// One step larger.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(round_step(self.0 + Self::STEP))
    }

    /// One step smaller.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(round_step(self.0 - Self::STEP))
    }

    /// Back to 100%.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Effective font size: `round(14 × factor)`.
    #[must_use]
    pub fn font_size(self) -> f64 {
        (DEFAULT_FONT_SIZE * self.0).round()
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}

// Keeps repeated steps from drifting (1.0 + 0.1 + 0.1 ...).
fn round_step(factor: f64) -> f64 {
    (factor * 100.0).round() / 100.0
}
