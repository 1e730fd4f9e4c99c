//! Fuzz target for `Directory.Packages.props` parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors for text that is not XML.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_version_file
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(table) = nuget_report_repo::fuzz::parse_version_file(text)
    {
        // Keys are unique and pins are never blank.
        for (_, pin) in table.value.iter() {
            assert!(!pin.package.is_empty());
            assert!(!pin.version.is_empty());
        }
    }
});
