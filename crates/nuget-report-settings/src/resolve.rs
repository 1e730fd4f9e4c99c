use crate::defaults;
use crate::model::NugetReportConfigV1;
use anyhow::Context;
use globset::Glob;
use nuget_report_types::AdapterKind;

/// Values supplied on the command line; they win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub version_file: Option<String>,
    pub output: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub title: String,
    pub output: String,
    /// Explicit centralized version file. `None` lets discovery decide the mode.
    pub version_file: Option<String>,
    pub project_column_width: usize,
    pub exclude: Vec<String>,
    /// Adapter selection table, checked in order.
    pub adapters: Vec<(AdapterKind, Vec<String>)>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            title: defaults::DEFAULT_TITLE.to_string(),
            output: defaults::DEFAULT_OUTPUT.to_string(),
            version_file: None,
            project_column_width: defaults::DEFAULT_PROJECT_COLUMN_WIDTH,
            exclude: defaults::default_excludes(),
            adapters: defaults::default_adapter_markers(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: NugetReportConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default();

    if let Some(title) = cfg.title {
        effective.title = title;
    }

    if let Some(output) = overrides.output.or(cfg.output) {
        if output.trim().is_empty() {
            anyhow::bail!("output must not be blank");
        }
        effective.output = output;
    }

    if let Some(version_file) = overrides.version_file.or(cfg.version_file) {
        if version_file.trim().is_empty() {
            anyhow::bail!("version_file is set but blank; remove it to auto-detect the mode");
        }
        effective.version_file = Some(version_file);
    }

    if let Some(width) = cfg.project_column_width {
        if width == 0 {
            anyhow::bail!("project_column_width must be greater than zero");
        }
        effective.project_column_width = width;
    }

    if let Some(exclude) = cfg.exclude {
        validate_globs("exclude", &exclude)?;
        effective.exclude = exclude;
    }

    if let Some(adapters) = cfg.adapters {
        for (kind, markers) in effective.adapters.iter_mut() {
            let configured = match kind {
                AdapterKind::Inline => adapters.inline.clone(),
                AdapterKind::PackagesConfig => adapters.packages_config.clone(),
            };
            if let Some(globs) = configured {
                validate_globs(&format!("adapters.{kind}"), &globs)?;
                *markers = globs;
            }
        }
    }

    Ok(ResolvedConfig { effective })
}

fn validate_globs(field: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid glob in {field}: {pattern}"))?;
    }
    Ok(())
}
