//! Where document bytes come from.
//!
//! The core never touches the filesystem directly: a [`ByteSource`] hands
//! over the whole file, and [`load_document`] decodes and builds it.
//! Hosts without file access use [`UnavailableSource`].

use crate::document::NfoDocument;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File extensions offered when picking a file, without the dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["nfo", "txt", "diz", "asc"];

/// Name used when a path has no usable final component.
pub const FALLBACK_FILE_NAME: &str = "file.nfo";

/// Supplies the raw bytes of a file.
pub trait ByteSource {
    /// Read the whole file at `path`.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Reads from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSource;

impl ByteSource for FsSource {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| Error::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A host with no file access; every read fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableSource;

impl ByteSource for UnavailableSource {
    fn read_bytes(&self, _path: &Path) -> Result<Vec<u8>> {
        Err(Error::CapabilityUnavailable("file access"))
    }
}

/// Read, decode and build the document at `path`.
///
/// On failure no document is produced; a caller holding a previous
/// document keeps it.
pub fn load_document(source: &impl ByteSource, path: impl AsRef<Path>) -> Result<NfoDocument> {
    let path = path.as_ref();
    let bytes = source.read_bytes(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read file");
    let name = display_file_name(&path.to_string_lossy());
    Ok(NfoDocument::from_bytes(bytes, name))
}

/// Last component of a `/` or `\` separated path.
///
/// ```
/// use nfoview::source::display_file_name;
///
/// assert_eq!(display_file_name("C:\\scene\\GROUP.NFO"), "GROUP.NFO");
/// assert_eq!(display_file_name("/tmp/"), "file.nfo");
/// ```
#[must_use]
pub fn display_file_name(path: &str) -> String {
    match path.rsplit(['/', '\\']).next() {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => FALLBACK_FILE_NAME.to_owned(),
    }
}

/// Whether `path` ends in one of [`SUPPORTED_EXTENSIONS`], ignoring case.
#[must_use]
pub fn is_supported_extension(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
