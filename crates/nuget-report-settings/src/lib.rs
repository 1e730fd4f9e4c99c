//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod defaults;
mod model;
mod resolve;

pub use defaults::{
    DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT, DEFAULT_PROJECT_COLUMN_WIDTH, DEFAULT_TITLE,
    default_adapter_markers, default_excludes,
};
pub use model::{AdaptersConfig, NugetReportConfigV1};
pub use resolve::{EffectiveConfig, Overrides, ResolvedConfig};

/// Parse `nuget-report.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<NugetReportConfigV1> {
    let cfg: NugetReportConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the run (defaults + file + overrides).
pub fn resolve_config(
    cfg: NugetReportConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
