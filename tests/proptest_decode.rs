//! Property-based tests for decoding and document building.
//!
//! Decoding is total: every byte buffer yields text, and the document built
//! from it satisfies its shape invariants.

use nfoview::decode::{SourceEncoding, cp437, decode, decode_detailed};
use nfoview::NfoDocument;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Bytes typical of an NFO: printable ASCII, CR/LF and high CP437 art bytes.
fn nfo_bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            4 => 0x20u8..0x7F,
            1 => prop::sample::select(vec![b'\r', b'\n']),
            2 => 0xB0u8..=0xDF,
        ],
        0..400,
    )
}

// ============================================================================
// Decoder Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn decode_is_total(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let decoded = decode_detailed(&bytes);
        match decoded.encoding {
            SourceEncoding::Utf8 => prop_assert!(std::str::from_utf8(&bytes).is_ok()),
            SourceEncoding::Cp437 => {
                prop_assert!(std::str::from_utf8(&bytes).is_err());
                prop_assert_eq!(decoded.text.chars().count(), bytes.len());
            }
        }
    }

    #[test]
    fn valid_utf8_roundtrips(text in "\\PC{0,64}") {
        let expected = text.strip_prefix('\u{feff}').unwrap_or(&text);
        prop_assert_eq!(decode(text.as_bytes()), expected);
    }

    #[test]
    fn cp437_path_is_per_byte(bytes in prop::collection::vec(any::<u8>(), 1..256)) {
        let mut bytes = bytes;
        bytes.push(0xFF); // never valid UTF-8 on its own
        let text = decode(&bytes);
        for (ch, byte) in text.chars().zip(&bytes) {
            prop_assert_eq!(ch, cp437::to_char(*byte));
        }
    }

    #[test]
    fn document_invariants(bytes in nfo_bytes_strategy()) {
        let doc = NfoDocument::from_bytes(bytes, "x.nfo");
        prop_assert_eq!(doc.height(), doc.lines().len());
        let longest = doc.lines().iter().map(|l| l.chars().count()).max().unwrap_or(0);
        prop_assert_eq!(doc.width(), longest);
        for line in doc.lines() {
            prop_assert!(!line.contains('\r'));
            prop_assert!(!line.contains('\n'));
        }
    }
}

// ============================================================================
// Exhaustive Byte Checks
// ============================================================================

#[test]
fn every_single_byte_decodes_to_one_char() {
    for byte in 0..=u8::MAX {
        let text = decode(&[byte]);
        assert_eq!(text.chars().count(), 1, "byte {byte:#04x}");
    }
}

#[test]
fn ascii_prefers_utf8() {
    let bytes: Vec<u8> = (0x20..0x7F).collect();
    let decoded = decode_detailed(&bytes);
    assert_eq!(decoded.encoding, SourceEncoding::Utf8);
    assert_eq!(decoded.text.as_bytes(), bytes.as_slice());
}

#[test]
fn line_controls_survive_cp437_fallback() {
    let text = decode(&[b'a', b'\t', 0xDB, b'\r', b'\n', b'b']);
    assert_eq!(text, "a\t█\r\nb");
}
