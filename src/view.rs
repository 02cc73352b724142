//! Interactive view model: each document line as coloured spans.
//!
//! The view is a pure function of the document, palette and render mode.
//! Terminal output is produced from it by [`crate::ansi::AnsiWriter`].

use crate::color::Rgba;
use crate::document::NfoDocument;
use crate::glyph::{GlyphClass, RenderMode, segment_runs};
use crate::theme::Palette;

/// Options for building a view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Whether art glyphs get their own colour.
    pub mode: RenderMode,
}

/// A run of text drawn in one colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyledSpan<'a> {
    pub text: &'a str,
    pub class: GlyphClass,
    pub color: Rgba,
}

/// One document line.
///
/// An empty line has no spans and is drawn as a single blank cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewLine<'a> {
    pub row: usize,
    pub spans: Vec<StyledSpan<'a>>,
}

impl ViewLine<'_> {
    /// Whether the line has no content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.spans.is_empty()
    }

    /// Every char of the line with the class it is styled with.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, GlyphClass)> + '_ {
        self.spans
            .iter()
            .flat_map(|span| span.text.chars().map(move |ch| (ch, span.class)))
    }
}

/// A document laid out for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentView<'a> {
    lines: Vec<ViewLine<'a>>,
    palette: Palette,
    width: usize,
}

impl<'a> DocumentView<'a> {
    /// Build the view of `doc`.
    #[must_use]
    pub fn new(doc: &'a NfoDocument, palette: Palette, options: ViewOptions) -> Self {
        let lines = doc
            .lines()
            .iter()
            .enumerate()
            .map(|(row, line)| ViewLine {
                row,
                spans: style_line(line, &palette, options.mode),
            })
            .collect();

        Self {
            lines,
            palette,
            width: doc.width(),
        }
    }

    /// Lines in document order.
    #[must_use]
    pub fn lines(&self) -> &[ViewLine<'a>] {
        &self.lines
    }

    /// Colours the view was built with.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Document width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total number of spans, a measure of styling cost.
    #[must_use]
    pub fn span_count(&self) -> usize {
        self.lines.iter().map(|line| line.spans.len()).sum()
    }

    /// `(row, col, char, class)` for every styled char, row by row.
    #[must_use]
    pub fn classification_stream(&self) -> Vec<(usize, usize, char, GlyphClass)> {
        self.lines
            .iter()
            .flat_map(|line| {
                line.glyphs()
                    .enumerate()
                    .map(move |(col, (ch, class))| (line.row, col, ch, class))
            })
            .collect()
    }
}

fn style_line<'a>(line: &'a str, palette: &Palette, mode: RenderMode) -> Vec<StyledSpan<'a>> {
    if line.is_empty() {
        return Vec::new();
    }
    match mode {
        RenderMode::Block => segment_runs(line)
            .map(|run| StyledSpan {
                text: run.text,
                class: run.class,
                color: palette.color_for(run.class),
            })
            .collect(),
        RenderMode::Text => vec![StyledSpan {
            text: line,
            class: GlyphClass::Plain,
            color: palette.foreground,
        }],
    }
}
