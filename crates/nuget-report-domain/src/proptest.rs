//! Property-based tests for the reconciliation engine.
//!
//! These tests use proptest to verify invariants around:
//! - Partition totality in centralized mode
//! - Determinism regardless of reference order
//! - Case-insensitive ordering of every output section

use crate::engine::reconcile;
use crate::model::VersionTable;
use nuget_report_types::{Classification, PackageKey, PackageReference, RepoPath};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

/// Small id alphabet so that collisions (including case variants) are frequent.
fn arb_package_id() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just("Newtonsoft.Json"),
            Just("Serilog"),
            Just("Polly"),
            Just("xunit"),
            Just("Moq"),
            Just("Dapper"),
            Just("AutoMapper"),
            Just("FluentValidation"),
        ],
        any::<bool>(),
    )
        .prop_map(|(id, lower)| if lower { id.to_lowercase() } else { id.to_string() })
}

fn arb_project() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Api.csproj".to_string()),
        Just("Web.csproj".to_string()),
        Just("Core.csproj".to_string()),
        Just("Tests.csproj".to_string()),
    ]
}

fn arb_version() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (1u32..5, 0u32..3).prop_map(|(major, minor)| format!("{major}.{minor}.0")),
    ]
}

fn arb_reference() -> impl Strategy<Value = PackageReference> {
    (arb_project(), arb_package_id(), arb_version())
        .prop_map(|(project, package, version)| PackageReference::new(project, package, version))
}

fn arb_references() -> impl Strategy<Value = Vec<PackageReference>> {
    prop::collection::vec(arb_reference(), 0..24)
}

fn arb_pins() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (arb_package_id(), (1u32..9).prop_map(|m| format!("{m}.0.0"))),
        0..8,
    )
}

fn build_table(pins: &[(String, String)]) -> VersionTable {
    VersionTable::from_declarations(
        &RepoPath::new("Directory.Packages.props"),
        pins.iter().map(|(p, v)| (p.as_str(), v.as_str())),
    )
    .value
}

fn is_strictly_ascending(keys: &[&PackageKey]) -> bool {
    keys.windows(2).all(|w| w[0] < w[1])
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn centralized_partition_is_total_and_disjoint(
        refs in arb_references(),
        pins in arb_pins(),
    ) {
        let table = build_table(&pins);
        let mut expected: BTreeSet<PackageKey> = refs.iter().map(|r| r.key()).collect();
        expected.extend(table.iter().map(|(k, _)| k.clone()));

        let Classification::Centralized(report) = reconcile(refs, Some(table)) else {
            panic!("table supplied, expected centralized");
        };

        let mut seen: Vec<PackageKey> = Vec::new();
        seen.extend(report.used.iter().map(|u| u.key.clone()));
        seen.extend(report.unused.iter().map(|u| u.key.clone()));
        seen.extend(report.missing.iter().map(|m| m.key.clone()));

        let unique: BTreeSet<PackageKey> = seen.iter().cloned().collect();
        prop_assert_eq!(unique.len(), seen.len(), "a key landed in two categories");
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn reconcile_ignores_reference_order(
        refs in arb_references().prop_shuffle(),
        pins in arb_pins(),
        centralized in any::<bool>(),
    ) {
        let mut reversed = refs.clone();
        reversed.reverse();

        let table = centralized.then(|| build_table(&pins));
        let a = reconcile(refs, table.clone());
        let b = reconcile(reversed, table);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_section_is_key_ordered(
        refs in arb_references(),
        pins in arb_pins(),
    ) {
        let table = build_table(&pins);
        let Classification::Centralized(c) = reconcile(refs.clone(), Some(table)) else {
            panic!("expected centralized");
        };
        let used: Vec<&PackageKey> = c.used.iter().map(|u| &u.key).collect();
        let unused: Vec<&PackageKey> = c.unused.iter().map(|u| &u.key).collect();
        let missing: Vec<&PackageKey> = c.missing.iter().map(|m| &m.key).collect();
        prop_assert!(is_strictly_ascending(&used));
        prop_assert!(is_strictly_ascending(&unused));
        prop_assert!(is_strictly_ascending(&missing));

        let Classification::Decentralized(d) = reconcile(refs, None) else {
            panic!("expected decentralized");
        };
        let keys: Vec<&PackageKey> = d.packages.iter().map(|p| &p.key).collect();
        prop_assert!(is_strictly_ascending(&keys));
    }

    #[test]
    fn decentralized_reports_every_referenced_key_once(refs in arb_references()) {
        let expected: BTreeSet<PackageKey> = refs.iter().map(|r| r.key()).collect();
        let Classification::Decentralized(d) = reconcile(refs, None) else {
            panic!("expected decentralized");
        };
        let keys: Vec<PackageKey> = d.packages.iter().map(|p| p.key.clone()).collect();
        prop_assert_eq!(keys.len(), expected.len());
        prop_assert_eq!(keys.into_iter().collect::<BTreeSet<_>>(), expected);
    }

    #[test]
    fn project_lists_are_sorted_and_distinct(
        refs in arb_references(),
        pins in arb_pins(),
    ) {
        let Classification::Centralized(c) = reconcile(refs, Some(build_table(&pins))) else {
            panic!("expected centralized");
        };
        for projects in c.used.iter().map(|u| &u.projects).chain(c.missing.iter().map(|m| &m.projects)) {
            prop_assert!(projects.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(!projects.is_empty());
        }
    }
}
