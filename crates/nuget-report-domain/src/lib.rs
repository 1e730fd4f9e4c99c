//! Pure package reconciliation (no IO).
//!
//! Input: package references and an optional version table, both built elsewhere.
//! Output: a [`Classification`](nuget_report_types::Classification) with deterministic ordering.

#![forbid(unsafe_code)]

pub mod model;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{group_references, reconcile};
pub use model::{PackageGroup, PinnedVersion, VersionTable};
