//! Manifest extraction adapters.
//!
//! Each adapter turns one project into raw `(package, version)` pairs. Adapters never fail: a
//! missing, unreadable or malformed input becomes a diagnostic and an empty result, and a blank
//! package id skips only that entry.

use crate::xml;
use camino::Utf8Path;
use nuget_report_types::{AdapterKind, Diagnostic, Extraction, PackageEntry, RepoPath, ids};
use roxmltree::Document;

pub const PACKAGES_CONFIG: &str = "packages.config";

/// A project file that has already been read and parsed by the loader.
pub struct ProjectManifest<'a, 'input> {
    pub root: &'a Utf8Path,
    pub path: &'a RepoPath,
    pub document: &'a Document<'input>,
}

/// Common interface for the manifest dialects.
pub trait ManifestExtractor {
    /// Extract package entries for `project`. Stateless, so safe to call again on the same input.
    fn extract(&self, project: &ProjectManifest<'_, '_>) -> Extraction<Vec<PackageEntry>>;
}

/// `<PackageReference Include="Id" Version="1.0" />` items inside the project file.
pub struct InlineVersionExtractor;

/// `<package id="Id" version="1.0" />` entries in a sibling `packages.config`.
pub struct PackagesConfigExtractor;

/// Strategy lookup for an adapter kind.
pub fn extractor_for(kind: AdapterKind) -> &'static dyn ManifestExtractor {
    match kind {
        AdapterKind::Inline => &InlineVersionExtractor,
        AdapterKind::PackagesConfig => &PackagesConfigExtractor,
    }
}

impl ManifestExtractor for InlineVersionExtractor {
    fn extract(&self, project: &ProjectManifest<'_, '_>) -> Extraction<Vec<PackageEntry>> {
        package_references(project.path, project.document)
    }
}

impl ManifestExtractor for PackagesConfigExtractor {
    fn extract(&self, project: &ProjectManifest<'_, '_>) -> Extraction<Vec<PackageEntry>> {
        let config = project.path.with_file_name(PACKAGES_CONFIG);

        // Projects without NuGet packages simply have no packages.config.
        if !project.root.join(config.as_str()).is_file() {
            return Extraction::new(Vec::new());
        }

        let text = match xml::read_text(project.root, &config) {
            Ok(text) => text,
            Err(d) => return Extraction::failed(d),
        };
        parse_packages_config(&config, project.path.file_name(), &text)
    }
}

/// Parse project file text and extract its `PackageReference` items.
pub fn parse_package_references(path: &RepoPath, text: &str) -> Extraction<Vec<PackageEntry>> {
    match xml::parse_document(path, text) {
        Ok(doc) => package_references(path, &doc),
        Err(d) => Extraction::failed(d),
    }
}

/// Parse `packages.config` text. `project` names the owning project in diagnostics.
pub fn parse_packages_config(
    path: &RepoPath,
    project: &str,
    text: &str,
) -> Extraction<Vec<PackageEntry>> {
    let doc = match xml::parse_document(path, text) {
        Ok(doc) => doc,
        Err(d) => return Extraction::failed(d),
    };

    let mut out = Extraction::new(Vec::new());
    for node in xml::elements_named(&doc, "package") {
        let id = xml::attr(node, "id");
        if id.is_empty() {
            out.push(
                Diagnostic::new(
                    ids::CODE_MALFORMED_REFERENCE,
                    format!("malformed package entry in the packages.config of {project}; skipping"),
                )
                .at(path),
            );
            continue;
        }
        out.value.push(PackageEntry::new(id, xml::attr(node, "version")));
    }
    out
}

fn package_references(path: &RepoPath, doc: &Document<'_>) -> Extraction<Vec<PackageEntry>> {
    let mut out = Extraction::new(Vec::new());
    for node in xml::elements_named(doc, "PackageReference") {
        let id = xml::attr(node, "Include");
        if id.is_empty() {
            out.push(
                Diagnostic::new(
                    ids::CODE_MALFORMED_REFERENCE,
                    format!(
                        "malformed package reference in {} (missing Include); skipping",
                        path.file_name()
                    ),
                )
                .at(path),
            );
            continue;
        }

        let version = match xml::attr(node, "Version") {
            "" => xml::child_text(node, "Version"),
            v => v,
        };
        out.value.push(PackageEntry::new(id, version));
    }
    out
}
