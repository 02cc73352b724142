//! Code page 437 byte-to-Unicode table.
//!
//! Bytes 0x01-0x1F map to the glyphs the IBM PC displayed for them in text
//! mode (smileys, card suits, arrows). Three of them keep their ASCII control
//! meaning because the document builder needs them: 0x09 (tab), 0x0A (line
//! feed) and 0x0D (carriage return). Byte 0x00 shows as a blank cell.

/// Unicode scalar for every byte value, indexed by the byte.
#[rustfmt::skip]
pub static CP437: [char; 256] = [
    // 0x00
    ' ',  '☺', '☻', '♥', '♦', '♣', '♠', '•', '◘', '\t', '\n', '♂', '♀', '\r', '♫', '☼',
    // 0x10
    '►', '◄', '↕', '‼', '¶', '§', '▬', '↨', '↑', '↓', '→', '←', '∟', '↔', '▲', '▼',
    // 0x20
    ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    // 0x30
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    // 0x40
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    // 0x50
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '[', '\\', ']', '^', '_',
    // 0x60
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    // 0x70
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '{', '|', '}', '~', '⌂',
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// Map one byte through the table.
#[inline]
#[must_use]
pub fn to_char(byte: u8) -> char {
    CP437[usize::from(byte)]
}

/// Decode a whole buffer, one char per byte.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    // Upper-half glyphs are 2-3 bytes in UTF-8.
    let mut text = String::with_capacity(bytes.len() * 2);
    text.extend(bytes.iter().map(|&b| to_char(b)));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_ascii_is_identity() {
        for byte in 0x20u8..=0x7E {
            assert_eq!(to_char(byte), char::from(byte), "byte {byte:#04x}");
        }
    }

    #[test]
    fn test_structural_controls_survive() {
        assert_eq!(to_char(0x09), '\t');
        assert_eq!(to_char(0x0A), '\n');
        assert_eq!(to_char(0x0D), '\r');
    }

    #[test]
    fn test_other_controls_become_glyphs() {
        for byte in 0x01u8..0x20 {
            if matches!(byte, 0x09 | 0x0A | 0x0D) {
                continue;
            }
            assert!(!to_char(byte).is_control(), "byte {byte:#04x}");
        }
        assert_eq!(to_char(0x01), '☺');
        assert_eq!(to_char(0x1A), '→');
        assert_eq!(to_char(0x7F), '⌂');
    }

    #[test]
    fn test_art_fixed_points() {
        assert_eq!(to_char(0xDB), '█');
        assert_eq!(to_char(0xC4), '─');
        assert_eq!(to_char(0xB0), '░');
        assert_eq!(to_char(0xB1), '▒');
        assert_eq!(to_char(0xB2), '▓');
        assert_eq!(to_char(0xC9), '╔');
        assert_eq!(to_char(0xBC), '╝');
        assert_eq!(to_char(0xFE), '■');
    }

    #[test]
    fn test_upper_half_is_non_ascii() {
        for byte in 0x80u8..=0xFF {
            assert!(!to_char(byte).is_ascii(), "byte {byte:#04x}");
        }
    }

    #[test]
    fn test_decode_keeps_one_char_per_byte() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&bytes).chars().count(), 256);
    }
}
