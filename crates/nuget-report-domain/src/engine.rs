use crate::model::{PackageGroup, VersionTable};
use nuget_report_types::{
    CentralizedReport, Classification, DecentralizedReport, MissingReference, PackageKey,
    PackageReference, PackageUsage, ProjectVersion, UnusedPackage, UsedPackage,
};
use std::collections::BTreeMap;

/// Group references by case-insensitive package key.
///
/// The map is key ordered; each group keeps membership only, so the input order never leaks into
/// the result.
pub fn group_references<I>(references: I) -> BTreeMap<PackageKey, PackageGroup>
where
    I: IntoIterator<Item = PackageReference>,
{
    let mut groups: BTreeMap<PackageKey, PackageGroup> = BTreeMap::new();

    for r in references {
        let key = r.key();
        let group = groups.entry(key).or_default();
        group.spellings.insert(r.package.trim().to_string());
        group
            .rows
            .insert((r.project, r.version.trim().to_string()));
    }

    groups
}

/// Classify every referenced (and pinned) package.
///
/// With a version table the run is centralized: each key lands in exactly one of used, unused or
/// missing. Without one the run is decentralized and every referenced package is reported with
/// its per-project versions.
pub fn reconcile<I>(references: I, table: Option<VersionTable>) -> Classification
where
    I: IntoIterator<Item = PackageReference>,
{
    let groups = group_references(references);

    match table {
        Some(table) => Classification::Centralized(classify_centralized(groups, &table)),
        None => Classification::Decentralized(classify_decentralized(groups)),
    }
}

fn classify_centralized(
    groups: BTreeMap<PackageKey, PackageGroup>,
    table: &VersionTable,
) -> CentralizedReport {
    let mut report = CentralizedReport::default();

    for (key, group) in &groups {
        let projects = group.projects();
        match table.get(key) {
            // Inline versions are not expected in this mode; the pin is authoritative.
            Some(pinned) => report.used.push(UsedPackage {
                key: key.clone(),
                package: pinned.package.clone(),
                version: pinned.version.clone(),
                projects,
            }),
            None => report.missing.push(MissingReference {
                key: key.clone(),
                package: group.display_name().to_string(),
                projects,
            }),
        }
    }

    report.unused = table
        .iter()
        .filter(|(key, _)| !groups.contains_key(*key))
        .map(|(key, pinned)| UnusedPackage {
            key: key.clone(),
            package: pinned.package.clone(),
            version: pinned.version.clone(),
        })
        .collect();

    report
}

fn classify_decentralized(groups: BTreeMap<PackageKey, PackageGroup>) -> DecentralizedReport {
    let packages = groups
        .into_iter()
        .map(|(key, group)| {
            let mismatched_versions = group.has_version_skew();
            let package = group.display_name().to_string();
            let rows = group
                .rows
                .into_iter()
                .map(|(project, version)| ProjectVersion { project, version })
                .collect();
            PackageUsage {
                key,
                package,
                rows,
                mismatched_versions,
            }
        })
        .collect();

    DecentralizedReport { packages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{reference, table};

    fn centralized(c: Classification) -> CentralizedReport {
        match c {
            Classification::Centralized(r) => r,
            Classification::Decentralized(_) => panic!("expected centralized classification"),
        }
    }

    fn decentralized(c: Classification) -> DecentralizedReport {
        match c {
            Classification::Decentralized(r) => r,
            Classification::Centralized(_) => panic!("expected decentralized classification"),
        }
    }

    #[test]
    fn unused_pin_is_reported_and_missing_is_empty() {
        let refs = vec![reference("App.csproj", "A", "")];
        let report = centralized(reconcile(refs, Some(table(&[("A", "1.0"), ("B", "2.0")]))));

        assert_eq!(report.used.len(), 1);
        assert_eq!(report.used[0].package, "A");
        assert_eq!(report.used[0].version, "1.0");
        assert_eq!(report.used[0].projects, vec!["App.csproj"]);

        assert_eq!(report.unused.len(), 1);
        assert_eq!(report.unused[0].package, "B");
        assert_eq!(report.unused[0].version, "2.0");

        assert!(report.missing.is_empty());
    }

    #[test]
    fn reference_without_pin_is_missing() {
        let refs = vec![
            reference("Web.csproj", "Serilog", ""),
            reference("Api.csproj", "Serilog", ""),
            reference("Api.csproj", "Polly", ""),
        ];
        let report = centralized(reconcile(refs, Some(table(&[("Polly", "8.4.0")]))));

        assert_eq!(report.used.len(), 1);
        assert_eq!(report.used[0].package, "Polly");
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].package, "Serilog");
        assert_eq!(report.missing[0].projects, vec!["Api.csproj", "Web.csproj"]);
        assert!(report.unused.is_empty());
    }

    #[test]
    fn used_version_comes_from_table_not_inline() {
        let refs = vec![reference("App.csproj", "Polly", "7.0.0")];
        let report = centralized(reconcile(refs, Some(table(&[("Polly", "8.4.0")]))));
        assert_eq!(report.used[0].version, "8.4.0");
    }

    #[test]
    fn used_name_uses_table_spelling() {
        let refs = vec![reference("App.csproj", "newtonsoft.json", "")];
        let report = centralized(reconcile(
            refs,
            Some(table(&[("Newtonsoft.Json", "13.0.3")])),
        ));
        assert_eq!(report.used[0].package, "Newtonsoft.Json");
    }

    #[test]
    fn case_variants_merge_into_one_group() {
        let refs = vec![
            reference("A.csproj", "Newtonsoft.Json", "13.0.3"),
            reference("B.csproj", "newtonsoft.json", "13.0.3"),
        ];
        let report = decentralized(reconcile(refs, None));

        assert_eq!(report.packages.len(), 1);
        let usage = &report.packages[0];
        assert_eq!(usage.package, "Newtonsoft.Json");
        assert_eq!(usage.projects(), vec!["A.csproj", "B.csproj"]);
        assert!(!usage.mismatched_versions);
    }

    #[test]
    fn output_is_ordered_case_insensitively() {
        let refs = vec![
            reference("P.csproj", "Zeta", "1"),
            reference("P.csproj", "alpha", "1"),
            reference("P.csproj", "Beta", "1"),
        ];
        let report = decentralized(reconcile(refs, None));
        let names: Vec<&str> = report.packages.iter().map(|p| p.package.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn version_skew_is_flagged() {
        let skewed = decentralized(reconcile(
            vec![
                reference("ProjectA.csproj", "PkgY", "1.0"),
                reference("ProjectB.csproj", "PkgY", "2.0"),
            ],
            None,
        ));
        assert!(skewed.packages[0].mismatched_versions);

        let aligned = decentralized(reconcile(
            vec![
                reference("ProjectA.csproj", "PkgY", "1.0"),
                reference("ProjectB.csproj", "PkgY", "1.0"),
            ],
            None,
        ));
        assert!(!aligned.packages[0].mismatched_versions);
    }

    #[test]
    fn blank_versions_do_not_count_as_skew() {
        let report = decentralized(reconcile(
            vec![
                reference("A.csproj", "Pkg", "1.0"),
                reference("B.csproj", "Pkg", ""),
            ],
            None,
        ));
        assert!(!report.packages[0].mismatched_versions);
        assert_eq!(report.packages[0].rows.len(), 2);
    }

    #[test]
    fn repeated_reference_yields_one_row() {
        let report = decentralized(reconcile(
            vec![
                reference("A.csproj", "Pkg", "1.0"),
                reference("A.csproj", "Pkg", "1.0"),
            ],
            None,
        ));
        assert_eq!(report.packages[0].rows.len(), 1);
    }

    #[test]
    fn display_name_does_not_depend_on_input_order() {
        let forward = decentralized(reconcile(
            vec![
                reference("A.csproj", "serilog", "1"),
                reference("B.csproj", "Serilog", "1"),
            ],
            None,
        ));
        let backward = decentralized(reconcile(
            vec![
                reference("B.csproj", "Serilog", "1"),
                reference("A.csproj", "serilog", "1"),
            ],
            None,
        ));
        assert_eq!(forward, backward);
        assert_eq!(forward.packages[0].package, "Serilog");
    }

    #[test]
    fn empty_inputs_produce_empty_classifications() {
        assert_eq!(
            decentralized(reconcile(Vec::new(), None)),
            DecentralizedReport::default()
        );
        assert_eq!(
            centralized(reconcile(Vec::new(), Some(VersionTable::new()))),
            CentralizedReport::default()
        );
    }
}
