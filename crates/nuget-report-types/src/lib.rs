//! Stable DTOs and IDs used across the nuget-report workspace.
//!
//! This crate is intentionally boring:
//! - extraction adapter kinds
//! - package references as extracted from project files
//! - the case-insensitive package key used for reconciliation
//! - diagnostics and stable diagnostic codes
//! - classification DTOs handed from the engine to the renderers
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod adapter;
pub mod diagnostic;
pub mod ids;
pub mod package;
pub mod path;
pub mod report;

pub use adapter::AdapterKind;
pub use diagnostic::{Diagnostic, Extraction};
pub use package::{PackageEntry, PackageKey, PackageReference};
pub use path::RepoPath;
pub use report::{
    CentralizedReport, Classification, DecentralizedReport, MissingReference, PackageUsage,
    ProjectVersion, SummaryCounts, UnusedPackage, UsedPackage,
};
