//! Terminal output for a [`DocumentView`].
//!
//! [`AnsiWriter`] buffers output and tracks the current colours so that an
//! SGR sequence is only emitted when a colour actually changes.

use crate::color::Rgba;
use crate::theme::Theme;
use crate::view::DocumentView;
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Colour output mode for ANSI sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// True colour (24-bit RGB).
    #[default]
    TrueColor,
    /// 256-colour palette.
    Color256,
    /// Plain text, no escape sequences.
    NoColor,
}

/// Write an SGR foreground colour sequence.
pub fn write_fg(w: &mut impl Write, color: Rgba, mode: ColorMode) -> io::Result<()> {
    match mode {
        ColorMode::TrueColor => write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b),
        ColorMode::Color256 => write!(w, "\x1b[38;5;{}m", color.to_256_color()),
        ColorMode::NoColor => Ok(()),
    }
}

/// Write an SGR background colour sequence.
pub fn write_bg(w: &mut impl Write, color: Rgba, mode: ColorMode) -> io::Result<()> {
    match mode {
        ColorMode::TrueColor => write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b),
        ColorMode::Color256 => write!(w, "\x1b[48;5;{}m", color.to_256_color()),
        ColorMode::NoColor => Ok(()),
    }
}

/// Char actually sent to the terminal for a document char.
///
/// Anything that would not advance the cursor by exactly one column when
/// printed (controls such as tab, zero-width marks, double-width CJK) is
/// shown as a space so terminal columns stay aligned with raster cells.
#[must_use]
pub fn terminal_char(ch: char) -> char {
    if ch.is_control() {
        return ' ';
    }
    match ch.width() {
        Some(1) => ch,
        _ => ' ',
    }
}

/// Buffered writer that tracks ANSI state to minimize escape sequences.
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,
    color_mode: ColorMode,
    current_fg: Option<Rgba>,
    current_bg: Option<Rgba>,
}

impl<W: Write> AnsiWriter<W> {
    /// Create a new ANSI writer wrapping the given output.
    pub fn new(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::default())
    }

    /// Create a new ANSI writer with specified colour mode.
    pub fn with_color_mode(writer: W, color_mode: ColorMode) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(8192),
            color_mode,
            current_fg: None,
            current_bg: None,
        }
    }

    /// Get the current colour output mode.
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Set foreground colour if different from current.
    pub fn set_fg(&mut self, color: Rgba) {
        if self.current_fg != Some(color) {
            let _ = write_fg(&mut self.buffer, color, self.color_mode);
            self.current_fg = Some(color);
        }
    }

    /// Set background colour if different from current.
    pub fn set_bg(&mut self, color: Rgba) {
        if self.current_bg != Some(color) {
            let _ = write_bg(&mut self.buffer, color, self.color_mode);
            self.current_bg = Some(color);
        }
    }

    /// Reset attributes and forget tracked colours.
    pub fn reset(&mut self) {
        if self.color_mode != ColorMode::NoColor
            && (self.current_fg.is_some() || self.current_bg.is_some())
        {
            self.buffer.extend_from_slice(RESET.as_bytes());
        }
        self.current_fg = None;
        self.current_bg = None;
    }

    /// Write text, substituting chars per [`terminal_char`].
    pub fn write_text(&mut self, text: &str) {
        let mut utf8 = [0u8; 4];
        for ch in text.chars() {
            let ch = terminal_char(ch);
            self.buffer
                .extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
    }

    /// Append a whole view.
    ///
    /// Each line is padded to the document width so the background forms a
    /// solid rectangle; blank lines print as one space.
    pub fn write_view(&mut self, view: &DocumentView<'_>) {
        let palette = view.palette();
        for line in view.lines() {
            self.set_bg(palette.background);
            let mut cols = 0;
            if line.is_blank() {
                self.set_fg(palette.foreground);
                self.buffer.push(b' ');
                cols = 1;
            }
            for span in &line.spans {
                self.set_fg(span.color);
                self.write_text(span.text);
                cols += span.text.chars().count();
            }
            let pad = view.width().saturating_sub(cols);
            self.buffer.resize(self.buffer.len() + pad, b' ');
            self.reset();
            self.buffer.push(b'\n');
        }
    }

    /// Append one theme listing line: the id in the highlight colour, the
    /// name in the text colour and a shade sample in the art colour, all on
    /// the theme background.
    pub fn write_theme_line(&mut self, theme: &Theme) {
        self.set_bg(theme.background());
        self.set_fg(theme.highlight());
        self.write_text(&format!("{:<14}", theme.id()));
        self.set_fg(theme.foreground());
        self.write_text(&format!("{:<16}", theme.name()));
        self.set_fg(theme.art());
        self.write_text("░▒▓█");
        self.reset();
        self.buffer.push(b'\n');
    }

    /// Flush buffered output to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()
    }

    /// Consume the writer and return the underlying output.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}
