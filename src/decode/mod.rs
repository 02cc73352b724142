//! Byte buffer to Unicode text.
//!
//! NFO files are either legacy code page 437 or modern UTF-8, and nothing in
//! the file says which. A buffer that is entirely well-formed UTF-8 is taken
//! as UTF-8; anything else is decoded byte-by-byte through [`cp437::CP437`].
//! Decoding is total: every byte sequence produces a string.
//!
//! Byte 0x1A (the DOS end-of-file marker) does not truncate the text. On the
//! code page path it decodes to `→` like any other byte.

pub mod cp437;

use tracing::debug;

const UTF8_BOM: &str = "\u{feff}";

/// Which decoding path produced the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SourceEncoding {
    /// The whole buffer was valid UTF-8.
    #[default]
    Utf8,
    /// Decoded byte-by-byte through code page 437.
    Cp437,
}

impl SourceEncoding {
    /// Short display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Cp437 => "CP437",
        }
    }
}

/// Decoded text together with the path that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: SourceEncoding,
}

/// Decode a raw buffer into text.
///
/// # Examples
///
/// ```
/// use nfoview::decode::decode;
///
/// assert_eq!(decode(b"hello"), "hello");
/// assert_eq!(decode(&[0xDB, 0xB0, 0xFF]), "█░\u{a0}");
/// ```
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    decode_detailed(bytes).text
}

/// Decode a raw buffer and report which encoding was used.
///
/// `std::str::from_utf8` is the strict check: it rejects overlong forms,
/// encoded surrogates, lead bytes 0xC0, 0xC1 and 0xF5-0xFF, and truncated or
/// stray continuation bytes. A leading byte-order mark is dropped.
#[must_use]
pub fn decode_detailed(bytes: &[u8]) -> Decoded {
    let decoded = match std::str::from_utf8(bytes) {
        Ok(text) => Decoded {
            text: text.strip_prefix(UTF8_BOM).unwrap_or(text).to_owned(),
            encoding: SourceEncoding::Utf8,
        },
        Err(err) => {
            debug!(
                valid_up_to = err.valid_up_to(),
                "buffer is not UTF-8, falling back to CP437"
            );
            Decoded {
                text: cp437::decode(bytes),
                encoding: SourceEncoding::Cp437,
            }
        }
    };
    debug!(
        bytes = bytes.len(),
        encoding = decoded.encoding.name(),
        "decoded buffer"
    );
    decoded
}
