//! Repository adapters: discover .NET workspaces, read and parse MSBuild project files,
//! `packages.config` lists and the centralized `Directory.Packages.props` version table.
//!
//! This crate is allowed to read the filesystem. It never writes and never logs; recoverable
//! problems are returned as diagnostics next to each result.

#![forbid(unsafe_code)]

mod discover;
mod extract;
mod load;
mod marker;
mod props;
mod xml;

use anyhow::Context;
use camino::Utf8Path;
use nuget_report_domain::VersionTable;
use nuget_report_types::{AdapterKind, Diagnostic, Extraction, PackageReference, RepoPath};

pub use discover::{Discovery, discover_workspace};
pub use extract::{
    InlineVersionExtractor, ManifestExtractor, PACKAGES_CONFIG, PackagesConfigExtractor,
    ProjectManifest, extractor_for, parse_package_references, parse_packages_config,
};
pub use load::load_project_references;
pub use marker::{AdapterTable, read_format_marker};
pub use props::{VERSION_FILE_NAME, load_version_table, parse_version_table};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a project file and extract its `PackageReference` items.
    pub fn parse_project(text: &str) -> Extraction<Vec<nuget_report_types::PackageEntry>> {
        parse_package_references(&RepoPath::new("Fuzz/Fuzz.csproj"), text)
    }

    /// Parse arbitrary text as a `packages.config` file.
    pub fn parse_packages_list(text: &str) -> Extraction<Vec<nuget_report_types::PackageEntry>> {
        parse_packages_config(&RepoPath::new("Fuzz/packages.config"), "Fuzz.csproj", text)
    }

    /// Parse arbitrary text as a version file.
    ///
    /// Returns `Err(...)` when the text is not XML. **Never panics** on any input.
    pub fn parse_version_file(text: &str) -> anyhow::Result<Extraction<VersionTable>> {
        parse_version_table(&RepoPath::new(VERSION_FILE_NAME), text)
    }

    /// Read the format marker of arbitrary project text and select an adapter from the default
    /// marker globs.
    pub fn select_adapter(text: &str) -> Option<AdapterKind> {
        let doc = roxmltree::Document::parse(text).ok()?;
        let marker = read_format_marker(&doc)?;
        let table = AdapterTable::new(&[
            (
                AdapterKind::Inline,
                vec![
                    "net[0-9]*".to_string(),
                    "netstandard*".to_string(),
                    "netcoreapp*".to_string(),
                ],
            ),
            (AdapterKind::PackagesConfig, vec!["v[0-9]*".to_string()]),
        ])
        .ok()?;
        table.select(&marker)
    }
}

/// Reporting mode, chosen from discovery and configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// A version file pins every package version.
    Centralized { version_file: RepoPath },
    /// Each project declares its own versions.
    Decentralized,
}

impl Mode {
    /// A configured version file forces centralized mode; otherwise a discovered one does.
    pub fn select(configured: Option<&str>, discovered: Option<&RepoPath>) -> anyhow::Result<Mode> {
        match (configured, discovered) {
            (Some(path), _) if path.trim().is_empty() => {
                anyhow::bail!("centralized mode requires a version file path")
            }
            (Some(path), _) => Ok(Mode::Centralized {
                version_file: RepoPath::new(path.trim()),
            }),
            (None, Some(found)) => Ok(Mode::Centralized {
                version_file: found.clone(),
            }),
            (None, None) => Ok(Mode::Decentralized),
        }
    }
}

/// Everything read from a workspace, ready for reconciliation.
#[derive(Clone, Debug)]
pub struct WorkspaceInputs {
    pub mode: Mode,
    pub projects: Vec<RepoPath>,
    pub references: Vec<PackageReference>,
    pub version_table: Option<VersionTable>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Options for [`load_workspace`].
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub exclude: Vec<String>,
    pub version_file: Option<String>,
    pub adapters: Vec<(AdapterKind, Vec<String>)>,
}

/// Discover and load a workspace: project references plus, in centralized mode, the version table.
///
/// Fatal errors are misconfiguration (bad globs, blank version file) and an unreadable or
/// non-XML version file.
pub fn load_workspace(repo_root: &Utf8Path, options: &LoadOptions) -> anyhow::Result<WorkspaceInputs> {
    let adapters = AdapterTable::new(&options.adapters).context("build adapter table")?;
    let discovery =
        discover_workspace(repo_root, &options.exclude).context("discover workspace")?;
    let mode = Mode::select(
        options.version_file.as_deref(),
        discovery.version_file.as_ref(),
    )?;

    let mut diagnostics = Vec::new();

    let version_table = match &mode {
        Mode::Centralized { version_file } => Some(
            load_version_table(repo_root, version_file)
                .with_context(|| format!("load version file {version_file}"))?
                .drain_into(&mut diagnostics),
        ),
        Mode::Decentralized => None,
    };

    let references = load_project_references(repo_root, &discovery.projects, &adapters)
        .drain_into(&mut diagnostics);

    Ok(WorkspaceInputs {
        mode,
        projects: discovery.projects,
        references,
        version_table,
        diagnostics,
    })
}
