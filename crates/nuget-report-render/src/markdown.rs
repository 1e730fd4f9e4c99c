use crate::RenderOptions;
use nuget_report_types::{CentralizedReport, Classification, DecentralizedReport};

pub const MISMATCHED_VERSIONS_NOTICE: &str = "This package has mismatched versions across projects.";

/// Render a classification as the markdown report, title included.
pub fn render_markdown(classification: &Classification, options: &RenderOptions) -> String {
    match classification {
        Classification::Centralized(report) => render_centralized(report, options),
        Classification::Decentralized(report) => render_decentralized(report, options),
    }
}

pub fn render_centralized(report: &CentralizedReport, options: &RenderOptions) -> String {
    let mut out = String::new();
    push_title(&mut out, options);

    let counts = report.counts();
    out.push_str("## Summary\n\n");
    out.push_str("| Metric | Count |\n|--------|-------|\n");
    out.push_str(&format!("| Used packages | {} |\n", counts.used));
    out.push_str(&format!("| Unused packages | {} |\n", counts.unused));
    out.push_str(&format!("| Missing references | {} |\n", counts.missing));

    out.push_str("\n## Used Packages\n\n");
    out.push_str("| Package | Version | Projects |\n|---------|---------|----------|\n");
    for p in &report.used {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            cell(&p.package),
            cell(&p.version),
            cell(&p.projects.join(", "))
        ));
    }

    if !report.unused.is_empty() {
        out.push_str("\n## Unused Packages\n\n");
        out.push_str("| Package | Version |\n|---------|---------|\n");
        for p in &report.unused {
            out.push_str(&format!("| {} | {} |\n", cell(&p.package), cell(&p.version)));
        }
    }

    if !report.missing.is_empty() {
        out.push_str("\n## Missing References\n\n");
        out.push_str("| Package | Projects |\n|---------|----------|\n");
        for p in &report.missing {
            out.push_str(&format!(
                "| {} | {} |\n",
                cell(&p.package),
                cell(&p.projects.join(", "))
            ));
        }
    }

    out
}

pub fn render_decentralized(report: &DecentralizedReport, options: &RenderOptions) -> String {
    let mut out = String::new();
    push_title(&mut out, options);

    if report.packages.is_empty() {
        out.push_str("No package references found.\n");
        return out;
    }

    let width = options.project_column_width;
    for usage in &report.packages {
        out.push_str(&format!("### {}\n", usage.package));
        for row in &usage.rows {
            out.push_str(&format!("  {:<width$} {}\n", row.project, row.version));
        }
        if usage.mismatched_versions {
            out.push_str(MISMATCHED_VERSIONS_NOTICE);
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

fn push_title(out: &mut String, options: &RenderOptions) {
    out.push_str(&options.title);
    out.push_str("\n\n");
}

fn cell(s: &str) -> String {
    s.replace('|', "\\|")
}
