//! Immutable NFO document: normalized text split into lines with its
//! bounding box in character cells.

use crate::decode::{self, SourceEncoding};
use tracing::debug;

/// A loaded NFO file.
///
/// Built once per file and never mutated. Loading another file produces a
/// new document.
///
/// Invariants: `height() == lines().len()`, `width()` is the longest line in
/// chars, no line contains `'\r'` or `'\n'`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NfoDocument {
    source: Box<[u8]>,
    encoding: SourceEncoding,
    text: String,
    lines: Vec<String>,
    width: usize,
    file_name: String,
}

impl NfoDocument {
    /// Build a document from already-decoded text.
    ///
    /// `"\r\n"` and lone `"\r"` become `"\n"`, the text is split on `"\n"`,
    /// and a single empty final element (left by a trailing line terminator)
    /// is dropped. Every other blank line is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use nfoview::NfoDocument;
    ///
    /// let doc = NfoDocument::build("a\r\nb\rc\n", "f");
    /// assert_eq!(doc.lines(), ["a", "b", "c"]);
    /// assert_eq!(doc.height(), 3);
    /// ```
    #[must_use]
    pub fn build(text: &str, file_name: impl Into<String>) -> Self {
        let mut doc = Self::from_text(normalize_line_endings(text), file_name.into());
        doc.source = text.as_bytes().into();
        doc
    }

    /// Decode raw bytes and build a document, keeping the bytes.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Box<[u8]>>, file_name: impl Into<String>) -> Self {
        let source: Box<[u8]> = bytes.into();
        let decoded = decode::decode_detailed(&source);
        let mut doc = Self::from_text(normalize_line_endings(&decoded.text), file_name.into());
        doc.source = source;
        doc.encoding = decoded.encoding;
        doc
    }

    fn from_text(text: String, file_name: String) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
        if lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        debug!(
            file = %file_name,
            width,
            height = lines.len(),
            "built document"
        );

        Self {
            source: Box::default(),
            encoding: SourceEncoding::Utf8,
            text,
            lines,
            width,
            file_name,
        }
    }

    /// The bytes the document was built from.
    #[must_use]
    pub fn source_bytes(&self) -> &[u8] {
        &self.source
    }

    /// Encoding detected for the source bytes.
    #[must_use]
    pub const fn encoding(&self) -> SourceEncoding {
        self.encoding
    }

    /// Full text with line endings normalized to `'\n'`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines, without terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `row`, if any.
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Longest line length in chars (0 for an empty document).
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Display name of the file.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Default name for a PNG export: the file name with its last extension
    /// replaced by `.png`.
    ///
    /// ```
    /// use nfoview::NfoDocument;
    ///
    /// assert_eq!(NfoDocument::build("", "release.nfo").export_file_name(), "release.png");
    /// assert_eq!(NfoDocument::build("", ".nfo").export_file_name(), "nfo.png");
    /// ```
    #[must_use]
    pub fn export_file_name(&self) -> String {
        let stem = match self.file_name.rfind('.') {
            Some(dot) => &self.file_name[..dot],
            None => self.file_name.as_str(),
        };
        if stem.is_empty() {
            "nfo.png".to_owned()
        } else {
            format!("{stem}.png")
        }
    }
}

fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_owned();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
