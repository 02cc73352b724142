//! Art vs. plain glyph classification.
//!
//! A glyph is *art* when it exists to draw rather than to spell: shading and
//! block elements, box-drawing lines in every weight, and the handful of
//! geometric shapes and triangular arrows found in code page 437. Everything
//! else is *plain*.
//!
//! Every art codepoint lives in U+2500..=U+25FF, so membership is a bit test
//! against a 256-bit table computed at compile time. The terminal view and the
//! PNG exporter both classify through [`classify`], so they cannot disagree.

use std::fmt;

/// First codepoint covered by the art table.
const TABLE_BASE: u32 = 0x2500;

/// Geometric shapes and arrows outside the box-drawing and block ranges.
const ART_SHAPES: &[char] = &[
    '■', // U+25A0 black square
    '▬', // U+25AC black rectangle
    '▲', // U+25B2
    '►', // U+25BA
    '▼', // U+25BC
    '◄', // U+25C4
    '◆', // U+25C6
    '○', // U+25CB
    '●', // U+25CF
    '◘', // U+25D8 inverse bullet
    '◙', // U+25D9 inverse white circle
];

static ART_TABLE: [u64; 4] = build_art_table();

const fn build_art_table() -> [u64; 4] {
    let mut table = [0u64; 4];

    // Box drawing U+2500..=U+257F and block elements U+2580..=U+259F.
    let mut offset = 0;
    while offset < 0xA0 {
        table[offset / 64] |= 1u64 << (offset % 64);
        offset += 1;
    }

    let mut i = 0;
    while i < ART_SHAPES.len() {
        let offset = (ART_SHAPES[i] as u32 - TABLE_BASE) as usize;
        table[offset / 64] |= 1u64 << (offset % 64);
        i += 1;
    }
    table
}

/// Glyph category used to pick a colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    /// Ordinary text.
    #[default]
    Plain,
    /// Block, shading, line-drawing or shape glyph.
    Art,
}

impl GlyphClass {
    /// Whether this is [`GlyphClass::Art`].
    #[must_use]
    pub const fn is_art(self) -> bool {
        matches!(self, Self::Art)
    }
}

impl fmt::Display for GlyphClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "plain",
            Self::Art => "art",
        })
    }
}

/// Classify a single char.
///
/// ```
/// use nfoview::glyph::{GlyphClass, classify};
///
/// assert_eq!(classify('█'), GlyphClass::Art);
/// assert_eq!(classify('A'), GlyphClass::Plain);
/// ```
#[inline]
#[must_use]
pub fn classify(ch: char) -> GlyphClass {
    let offset = (ch as u32).wrapping_sub(TABLE_BASE);
    if offset < 256 && ART_TABLE[(offset / 64) as usize] & (1u64 << (offset % 64)) != 0 {
        GlyphClass::Art
    } else {
        GlyphClass::Plain
    }
}

/// How glyph classes are applied when rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Art glyphs get the art colour.
    #[default]
    Block,
    /// Everything is drawn as plain text.
    Text,
}

impl RenderMode {
    /// Class used for colouring `ch` under this mode.
    #[inline]
    #[must_use]
    pub fn classify(self, ch: char) -> GlyphClass {
        match self {
            Self::Block => classify(ch),
            Self::Text => GlyphClass::Plain,
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Block => Self::Text,
            Self::Text => Self::Block,
        }
    }
}

/// A maximal run of same-class chars within one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphRun<'a> {
    pub text: &'a str,
    pub class: GlyphClass,
}

impl<'a> GlyphRun<'a> {
    /// Create a run.
    #[must_use]
    pub const fn new(text: &'a str, class: GlyphClass) -> Self {
        Self { text, class }
    }

    /// Length in chars (cells).
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Iterator over the glyph runs of a line. See [`segment_runs`].
#[derive(Clone, Debug)]
pub struct GlyphRuns<'a> {
    rest: &'a str,
}

impl<'a> Iterator for GlyphRuns<'a> {
    type Item = GlyphRun<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.char_indices();
        let (_, first) = chars.next()?;
        let class = classify(first);
        let end = chars
            .find(|&(_, ch)| classify(ch) != class)
            .map_or(self.rest.len(), |(idx, _)| idx);

        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(GlyphRun { text, class })
    }
}

impl std::iter::FusedIterator for GlyphRuns<'_> {}

/// Split a line into maximal runs of same-class chars, left to right.
///
/// A boundary falls exactly where [`classify`] changes between neighbours.
/// An empty line yields no runs; renderers show it as a single blank cell.
///
/// ```
/// use nfoview::glyph::{GlyphClass, segment_runs};
///
/// let runs: Vec<_> = segment_runs("AB█▓C").map(|r| (r.text, r.class)).collect();
/// assert_eq!(
///     runs,
///     [("AB", GlyphClass::Plain), ("█▓", GlyphClass::Art), ("C", GlyphClass::Plain)]
/// );
/// ```
#[must_use]
pub fn segment_runs(line: &str) -> GlyphRuns<'_> {
    GlyphRuns { rest: line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_basic() {
        assert_eq!(classify('█'), GlyphClass::Art);
        assert_eq!(classify('A'), GlyphClass::Plain);
        assert_eq!(classify(' '), GlyphClass::Plain);
        assert_eq!(classify('\t'), GlyphClass::Plain);
    }

    #[test]
    fn test_shading_and_blocks_are_art() {
        for ch in ['░', '▒', '▓', '█', '▄', '▌', '▐', '▀', '▁', '▟'] {
            assert!(classify(ch).is_art(), "{ch}");
        }
    }

    #[test]
    fn test_box_drawing_all_weights_are_art() {
        let light = "─│┌┐└┘├┤┬┴┼";
        let heavy = "━┃┏┓┗┛┣┫┳┻╋";
        let double = "═║╔╗╚╝╠╣╦╩╬╒╓╕╖╘╙╛╜╞╟╡╢╤╥╧╨╪╫";
        for ch in light.chars().chain(heavy.chars()).chain(double.chars()) {
            assert!(classify(ch).is_art(), "{ch}");
        }
    }

    #[test]
    fn test_shapes_are_art() {
        for &ch in ART_SHAPES {
            assert!(classify(ch).is_art(), "{ch}");
        }
    }

    #[test]
    fn test_neighbouring_shapes_are_plain() {
        // Inside the table range but not in the art set.
        for ch in ['□', '▢', '△', '◇', '◯', '◿'] {
            assert_eq!(classify(ch), GlyphClass::Plain, "{ch}");
        }
    }

    #[test]
    fn test_text_and_symbols_are_plain() {
        for ch in ['é', 'ß', 'Σ', '∞', '☺', '♥', '→', '⌂', '\u{a0}', '漢'] {
            assert_eq!(classify(ch), GlyphClass::Plain, "{ch}");
        }
    }

    #[test]
    fn test_table_edges() {
        assert_eq!(classify('\u{24FF}'), GlyphClass::Plain);
        assert_eq!(classify('\u{2500}'), GlyphClass::Art);
        assert_eq!(classify('\u{259F}'), GlyphClass::Art);
        assert_eq!(classify('\u{25FF}'), GlyphClass::Plain);
        assert_eq!(classify('\u{2600}'), GlyphClass::Plain);
        assert_eq!(classify(char::MAX), GlyphClass::Plain);
    }

    #[test]
    fn test_render_mode() {
        assert_eq!(RenderMode::default(), RenderMode::Block);
        assert_eq!(RenderMode::Block.classify('▓'), GlyphClass::Art);
        assert_eq!(RenderMode::Text.classify('▓'), GlyphClass::Plain);
        assert_eq!(RenderMode::Block.toggled(), RenderMode::Text);
        assert_eq!(RenderMode::Text.toggled().toggled(), RenderMode::Text);
    }

    #[test]
    fn test_segment_runs_mixed_line() {
        let runs: Vec<_> = segment_runs("AB█▓C").collect();
        assert_eq!(
            runs,
            [
                GlyphRun::new("AB", GlyphClass::Plain),
                GlyphRun::new("█▓", GlyphClass::Art),
                GlyphRun::new("C", GlyphClass::Plain),
            ]
        );
    }

    #[test]
    fn test_segment_runs_empty_line() {
        assert_eq!(segment_runs("").count(), 0);
    }

    #[test]
    fn test_segment_runs_single_class() {
        let runs: Vec<_> = segment_runs("╔══╗").collect();
        assert_eq!(runs, [GlyphRun::new("╔══╗", GlyphClass::Art)]);
        assert_eq!(runs[0].char_len(), 4);
    }

    #[test]
    fn test_segment_runs_alternating() {
        let classes: Vec<_> = segment_runs("a█b█").map(|r| r.class).collect();
        assert_eq!(
            classes,
            [
                GlyphClass::Plain,
                GlyphClass::Art,
                GlyphClass::Plain,
                GlyphClass::Art
            ]
        );
    }
}
