//! The `report` use case: load the workspace, classify packages, render markdown.

use crate::render::render_markdown;
use anyhow::Context;
use camino::Utf8Path;
use nuget_report_repo::{LoadOptions, Mode};
use nuget_report_settings::{NugetReportConfigV1, Overrides, ResolvedConfig};
use nuget_report_types::{Classification, Diagnostic};

/// Input for the report use case.
#[derive(Clone, Debug)]
pub struct ReportInput<'a> {
    /// Workspace root to scan.
    pub workspace: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the report use case. Nothing has been written yet.
#[derive(Clone, Debug)]
pub struct ReportOutput {
    pub mode: Mode,
    pub classification: Classification,
    pub markdown: String,
    /// Recoverable problems met while loading, in discovery order.
    pub diagnostics: Vec<Diagnostic>,
    pub resolved_config: ResolvedConfig,
}

/// Read a config file; a missing file reads as empty (defaults apply).
pub fn load_config_text(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(%path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

/// Run the report use case: parse config, discover and load the workspace, reconcile, render.
pub fn run_report(input: ReportInput<'_>) -> anyhow::Result<ReportOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        NugetReportConfigV1::default()
    } else {
        nuget_report_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = nuget_report_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    let effective = &resolved.effective;

    if !input.workspace.is_dir() {
        anyhow::bail!("workspace does not exist: {}", input.workspace);
    }

    tracing::info!(workspace = %input.workspace, "Scanning workspace");

    let options = LoadOptions {
        exclude: effective.exclude.clone(),
        version_file: effective.version_file.clone(),
        adapters: effective.adapters.clone(),
    };
    let inputs = nuget_report_repo::load_workspace(input.workspace, &options)
        .context("load workspace")?;

    tracing::info!("Found {} projects", inputs.projects.len());
    match (&inputs.mode, &inputs.version_table) {
        (Mode::Centralized { version_file }, Some(table)) => {
            tracing::info!(
                %version_file,
                "Central package management detected; {} pinned versions",
                table.len()
            );
            if table.is_empty() {
                tracing::warn!(%version_file, "version file pins no packages");
            }
        }
        (Mode::Centralized { version_file }, None) => {
            tracing::info!(%version_file, "Central package management detected");
        }
        (Mode::Decentralized, _) => {
            tracing::info!("No central version file; reporting per-project versions");
        }
    }

    for d in &inputs.diagnostics {
        match &d.path {
            Some(path) => tracing::warn!(code = %d.code, %path, "{}", d.message),
            None => tracing::warn!(code = %d.code, "{}", d.message),
        }
    }

    let classification = nuget_report_domain::reconcile(inputs.references, inputs.version_table);
    let markdown = render_markdown(&classification, effective);

    Ok(ReportOutput {
        mode: inputs.mode,
        classification,
        markdown,
        diagnostics: inputs.diagnostics,
        resolved_config: resolved,
    })
}
