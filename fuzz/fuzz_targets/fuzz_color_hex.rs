//! Fuzz target for theme colour parsing.
//!
//! `Rgba::from_hex` must return `None` rather than panic on bad input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nfoview::color::Rgba;

fuzz_target!(|data: &str| {
    let _ = Rgba::from_hex(data);

    if !data.starts_with('#') {
        let _ = Rgba::from_hex(&format!("#{data}"));
    }

    // Suffixes on char boundaries.
    for (i, _) in data.char_indices().take(10) {
        let _ = Rgba::from_hex(&data[i..]);
    }
});
