//! Render use cases: markdown and GitHub annotations from in-memory results.

use nuget_report_render::RenderOptions;
use nuget_report_settings::EffectiveConfig;
use nuget_report_types::{Classification, Diagnostic};

pub fn render_markdown(classification: &Classification, config: &EffectiveConfig) -> String {
    let options = RenderOptions {
        title: config.title.clone(),
        project_column_width: config.project_column_width,
    };
    nuget_report_render::render_markdown(classification, &options)
}

pub fn render_annotations(diagnostics: &[Diagnostic]) -> Vec<String> {
    nuget_report_render::render_github_annotations(diagnostics)
}
