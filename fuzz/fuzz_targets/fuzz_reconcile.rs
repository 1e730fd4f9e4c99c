//! Fuzz target for reconciliation and rendering.
//!
//! Goal: Classification and markdown rendering should **never panic**, and in centralized mode
//! every key lands in exactly one section.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_reconcile
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nuget_report_domain::VersionTable;
use nuget_report_render::{RenderOptions, render_markdown};
use nuget_report_types::{Classification, PackageReference, RepoPath};
use std::collections::BTreeSet;

#[derive(Arbitrary, Debug)]
struct ReconcileInput {
    references: Vec<(String, String, String)>,
    pins: Option<Vec<(String, String)>>,
    width: u8,
}

fuzz_target!(|input: ReconcileInput| {
    // Limit input size to keep fuzzing fast
    if input.references.len() > 200 {
        return;
    }

    let references: Vec<PackageReference> = input
        .references
        .into_iter()
        .filter(|(_, package, _)| !package.trim().is_empty())
        .map(|(project, package, version)| PackageReference::new(project, package, version))
        .collect();

    let table = input.pins.map(|pins| {
        VersionTable::from_declarations(&RepoPath::new("Directory.Packages.props"), pins).value
    });

    let classification = nuget_report_domain::reconcile(references, table);

    if let Classification::Centralized(report) = &classification {
        let mut seen = BTreeSet::new();
        for key in report
            .used
            .iter()
            .map(|p| &p.key)
            .chain(report.unused.iter().map(|p| &p.key))
            .chain(report.missing.iter().map(|p| &p.key))
        {
            assert!(seen.insert(key.clone()), "key classified twice");
        }
    }

    let options = RenderOptions {
        title: "# Report".to_string(),
        project_column_width: usize::from(input.width).max(1),
    };
    let _ = render_markdown(&classification, &options);
});
