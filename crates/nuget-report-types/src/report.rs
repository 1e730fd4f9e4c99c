//! Classification DTOs: the output of the reconciliation engine and the input of the renderers.

use crate::PackageKey;
use serde::{Deserialize, Serialize};

/// Packages classified for one run, per package management mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Classification {
    Centralized(CentralizedReport),
    Decentralized(DecentralizedReport),
}

/// Centralized mode: every key lands in exactly one of `used`, `unused` or `missing`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentralizedReport {
    pub used: Vec<UsedPackage>,
    pub unused: Vec<UnusedPackage>,
    pub missing: Vec<MissingReference>,
}

impl CentralizedReport {
    pub fn counts(&self) -> SummaryCounts {
        SummaryCounts {
            used: self.used.len() as u32,
            unused: self.unused.len() as u32,
            missing: self.missing.len() as u32,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub used: u32,
    pub unused: u32,
    pub missing: u32,
}

/// Referenced by at least one project and pinned in the version table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedPackage {
    pub key: PackageKey,
    pub package: String,
    /// Pinned version from the version table.
    pub version: String,
    /// Distinct project names, ordinal ascending.
    pub projects: Vec<String>,
}

/// Pinned in the version table, referenced by no project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnusedPackage {
    pub key: PackageKey,
    pub package: String,
    pub version: String,
}

/// Referenced by at least one project but absent from the version table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingReference {
    pub key: PackageKey,
    pub package: String,
    pub projects: Vec<String>,
}

/// Decentralized mode: every referenced package, with per-project versions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecentralizedReport {
    pub packages: Vec<PackageUsage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageUsage {
    pub key: PackageKey,
    pub package: String,
    /// One row per distinct `(project, version)`, ordered by project then version.
    pub rows: Vec<ProjectVersion>,
    /// More than one distinct non-blank version (case-insensitive) across the rows.
    pub mismatched_versions: bool,
}

impl PackageUsage {
    /// Distinct project names, ordinal ascending.
    pub fn projects(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.rows.iter().map(|r| r.project.as_str()).collect();
        out.dedup();
        out
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectVersion {
    pub project: String,
    pub version: String,
}
