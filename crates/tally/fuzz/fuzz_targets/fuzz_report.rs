//! Fuzz target for report building.
//!
//! Checks that parsing, summarizing and rendering:
//! 1. Never panic on malformed input
//! 2. Handle any delimiter guess, including the comma fallback

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;
use tally::ReportBuilder;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let _ = ReportBuilder::new().render(temp_file.path());
        }
    }
});
