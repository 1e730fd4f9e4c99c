//! Fuzz target for project file and `packages.config` parsing.
//!
//! Goal: The parsers should **never panic** on any input.
//! Malformed input must come back as diagnostics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_project_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let project = nuget_report_repo::fuzz::parse_project(text);
        for entry in &project.value {
            assert!(!entry.package.trim().is_empty());
        }

        let list = nuget_report_repo::fuzz::parse_packages_list(text);
        for entry in &list.value {
            assert!(!entry.package.trim().is_empty());
        }

        let _ = nuget_report_repo::fuzz::select_adapter(text);
    }
});
