use crate::model::VersionTable;
use nuget_report_types::{PackageReference, RepoPath};

pub fn reference(project: &str, package: &str, version: &str) -> PackageReference {
    PackageReference::new(project, package, version)
}

pub fn table(pins: &[(&str, &str)]) -> VersionTable {
    let extraction =
        VersionTable::from_declarations(&RepoPath::new("Directory.Packages.props"), pins.iter().copied());
    assert!(
        extraction.diagnostics.is_empty(),
        "test table should be well formed: {:?}",
        extraction.diagnostics
    );
    extraction.value
}
