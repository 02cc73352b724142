//! 8-bit RGBA colour values shared by the terminal view and the PNG exporter.
//!
//! Theme colours are authored as hex strings and both outputs are 8 bits per
//! channel, so [`Rgba`] stores `u8` components. Glyph painting blends a
//! glyph colour over the surface using the glyph's coverage mask.
//!
//! # Examples
//!
//! ```
//! use nfoview::Rgba;
//!
//! let bg = Rgba::from_hex("#0a0e17").unwrap();
//! let art = Rgba::from_u32(0x66ccff);
//!
//! // Half coverage sits between the two colours.
//! let edge = bg.mix(art, 128);
//! assert!(edge.g > bg.g && edge.g < art.g);
//! ```

use std::fmt;

/// RGBA colour with one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a colour from all four components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create an opaque colour from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse a hex colour string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB), 6-char (#RRGGBB), and 8-char (#RRGGBBAA) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        match hex.len() {
            3 => {
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Blend `other` over `self` with the given 8-bit coverage.
    ///
    /// Coverage 0 returns `self`, 255 returns `other`. The result keeps the
    /// alpha of `self`, which is always opaque on an export surface.
    #[must_use]
    pub fn mix(self, other: Self, coverage: u8) -> Self {
        match coverage {
            0 => self,
            255 => Self { a: self.a, ..other },
            _ => {
                let t = u16::from(coverage);
                let inv = 255 - t;
                let channel = |dst: u8, src: u8| {
                    ((u16::from(src) * t + u16::from(dst) * inv + 127) / 255) as u8
                };
                Self {
                    r: channel(self.r, other.r),
                    g: channel(self.g, other.g),
                    b: channel(self.b, other.b),
                    a: self.a,
                }
            }
        }
    }

    /// Components as a `[r, g, b, a]` array, the layout of an RGBA8 image.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Nearest index in the xterm 256-colour palette.
    ///
    /// Near-gray colours map onto the 24-step grayscale ramp (232-255),
    /// everything else onto the 6x6x6 cube (16-231).
    #[must_use]
    pub fn to_256_color(self) -> u8 {
        let (r, g, b) = (self.r, self.g, self.b);
        let gray = ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8;
        let near_gray = [r, g, b].iter().all(|&c| c.abs_diff(gray) < 10);

        if near_gray {
            let step = (u16::from(gray) * 24 / 256) as u8;
            return 232 + step.min(23);
        }

        16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
    }
}

/// Cube levels are 0, 95, 135, 175, 215, 255; boundaries sit at the midpoints.
const fn cube_index(value: u8) -> u8 {
    match value {
        0..=47 => 0,
        48..=114 => 1,
        115..=154 => 2,
        155..=194 => 3,
        195..=234 => 4,
        _ => 5,
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}
