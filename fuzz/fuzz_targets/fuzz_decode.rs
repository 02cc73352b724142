//! Fuzz target for decoding and document building.
//!
//! Any byte buffer must decode, build a well-formed document and segment
//! into runs that cover every line exactly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nfoview::NfoDocument;
use nfoview::glyph::segment_runs;

fuzz_target!(|data: &[u8]| {
    let doc = NfoDocument::from_bytes(data.to_vec(), "fuzz.nfo");
    assert_eq!(doc.height(), doc.lines().len());

    for line in doc.lines() {
        assert!(!line.contains('\n') && !line.contains('\r'));
        let joined: String = segment_runs(line).map(|run| run.text).collect();
        assert_eq!(&joined, line);
        assert!(line.chars().count() <= doc.width());
    }
});
