use serde::{Deserialize, Serialize};

/// `nuget-report.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and defaults apply.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NugetReportConfigV1 {
    /// First line of the report (a markdown heading).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Local report file, relative to the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Centralized version file, relative to the workspace. Forces centralized mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_file: Option<String>,

    /// Width the project column is padded to in decentralized reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_column_width: Option<usize>,

    /// Globs (workspace-relative) skipped during discovery. Replaces the defaults when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adapters: Option<AdaptersConfig>,
}

/// Format marker globs per extraction adapter. Unset adapters keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdaptersConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages_config: Option<Vec<String>>,
}
