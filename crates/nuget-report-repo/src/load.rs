use crate::extract::{ProjectManifest, extractor_for};
use crate::marker::{AdapterTable, read_format_marker};
use crate::xml;
use camino::Utf8Path;
use nuget_report_types::{Diagnostic, Extraction, PackageReference, RepoPath, ids};

/// Load package references for every project, in the given order.
///
/// Per-project problems (unreadable file, malformed XML, missing or unknown marker) skip that
/// project with a diagnostic; the remaining projects are still processed.
pub fn load_project_references(
    root: &Utf8Path,
    projects: &[RepoPath],
    adapters: &AdapterTable,
) -> Extraction<Vec<PackageReference>> {
    let mut out = Extraction::new(Vec::new());
    for project in projects {
        let refs = load_one(root, project, adapters).drain_into(&mut out.diagnostics);
        out.value.extend(refs);
    }
    out
}

fn load_one(
    root: &Utf8Path,
    path: &RepoPath,
    adapters: &AdapterTable,
) -> Extraction<Vec<PackageReference>> {
    let text = match xml::read_text(root, path) {
        Ok(text) => text,
        Err(d) => return Extraction::failed(d),
    };
    let document = match xml::parse_document(path, &text) {
        Ok(doc) => doc,
        Err(d) => return Extraction::failed(d),
    };

    let Some(marker) = read_format_marker(&document) else {
        return Extraction::failed(
            Diagnostic::new(
                ids::CODE_MISSING_FORMAT_MARKER,
                format!(
                    "{} declares no TargetFramework or TargetFrameworkVersion; skipping",
                    path.file_name()
                ),
            )
            .at(path),
        );
    };

    let Some(kind) = adapters.select(&marker) else {
        return Extraction::failed(
            Diagnostic::new(
                ids::CODE_UNSUPPORTED_FORMAT_MARKER,
                format!(
                    "{} targets '{marker}', which no adapter handles; skipping",
                    path.file_name()
                ),
            )
            .at(path),
        );
    };

    let manifest = ProjectManifest {
        root,
        path,
        document: &document,
    };
    let project = path.file_name();
    extractor_for(kind).extract(&manifest).map(|entries| {
        entries
            .into_iter()
            .map(|entry| PackageReference::from_entry(project, entry))
            .collect()
    })
}
