//! Built-in colour themes.
//!
//! The core only needs three colours from a theme: background, plain text
//! and art. Themes are static data looked up by id; an unknown id falls back
//! to [`DEFAULT_THEME_ID`].

use crate::color::Rgba;
use crate::glyph::GlyphClass;

/// Id of the theme used when none (or an unknown one) is requested.
pub const DEFAULT_THEME_ID: &str = "classic-blue";

/// A named colour theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    id: &'static str,
    name: &'static str,
    background: Rgba,
    foreground: Rgba,
    art: Rgba,
    highlight: Rgba,
}

impl Theme {
    const fn new(
        id: &'static str,
        name: &'static str,
        background: u32,
        foreground: u32,
        art: u32,
        highlight: u32,
    ) -> Self {
        Self {
            id,
            name,
            background: Rgba::from_u32(background),
            foreground: Rgba::from_u32(foreground),
            art: Rgba::from_u32(art),
            highlight: Rgba::from_u32(highlight),
        }
    }

    /// Stable identifier (e.g. `"classic-amber"`).
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Page background.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.background
    }

    /// Plain text colour.
    #[must_use]
    pub const fn foreground(&self) -> Rgba {
        self.foreground
    }

    /// Art glyph colour.
    #[must_use]
    pub const fn art(&self) -> Rgba {
        self.art
    }

    /// Accent colour for the theme's title in listings.
    #[must_use]
    pub const fn highlight(&self) -> Rgba {
        self.highlight
    }

    /// The three colours the renderers consume.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        Palette {
            background: self.background,
            foreground: self.foreground,
            art: self.art,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEMES[0]
    }
}

/// Background, plain and art colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba,
    pub foreground: Rgba,
    pub art: Rgba,
}

impl Palette {
    /// Colour for a glyph of the given class.
    #[must_use]
    pub const fn color_for(&self, class: GlyphClass) -> Rgba {
        match class {
            GlyphClass::Plain => self.foreground,
            GlyphClass::Art => self.art,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Theme::default().palette()
    }
}

/// All built-in themes; the first is the default.
pub static THEMES: [Theme; 6] = [
    Theme::new("classic-blue", "Classic Blue", 0x0a0e17, 0xb0b8c8, 0x66ccff, 0x66ccff),
    Theme::new("classic-green", "Classic Green", 0x0a100a, 0xa0c8a0, 0x33ff33, 0x33ff33),
    Theme::new("classic-amber", "Classic Amber", 0x1a1000, 0xccaa66, 0xffaa00, 0xffcc44),
    Theme::new("dark", "Dark", 0x1a1a2e, 0xc8c8e0, 0xe066ff, 0xbb77ff),
    Theme::new("light", "Light", 0xf5f5f0, 0x333333, 0x0066cc, 0x0044aa),
    Theme::new("white", "White on Black", 0x000000, 0xcccccc, 0xffffff, 0xffffff),
];

/// Look up a theme by id, falling back to the default theme.
#[must_use]
pub fn theme_by_id(id: &str) -> &'static Theme {
    find_theme(id).unwrap_or(&THEMES[0])
}

/// Look up a theme by id without falling back.
#[must_use]
pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}
