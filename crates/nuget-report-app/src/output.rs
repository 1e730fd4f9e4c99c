//! Output routing: where the rendered report goes, and how it gets there.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use nuget_report_types::Classification;
use std::io::Write;

/// Where the markdown report is emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Append to the GitHub Actions job summary file.
    StepSummary(Utf8PathBuf),
    /// Write (overwriting) a local file.
    File(Utf8PathBuf),
}

impl Destination {
    /// Pick the destination.
    ///
    /// A forced output path always wins. Otherwise a non-blank `GITHUB_STEP_SUMMARY` value means
    /// the job summary, and the fallback is `<workspace>/<output>`.
    pub fn select(
        workspace: &Utf8Path,
        output: &str,
        forced_output: Option<&Utf8Path>,
        step_summary: Option<&str>,
    ) -> Destination {
        if let Some(path) = forced_output {
            return Destination::File(workspace.join(path));
        }
        match step_summary.map(str::trim).filter(|s| !s.is_empty()) {
            Some(summary) => Destination::StepSummary(Utf8PathBuf::from(summary)),
            None => Destination::File(workspace.join(output)),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        match self {
            Destination::StepSummary(p) | Destination::File(p) => p,
        }
    }
}

/// Emit the markdown once, to its destination.
pub fn emit_report(destination: &Destination, markdown: &str) -> anyhow::Result<()> {
    match destination {
        Destination::StepSummary(path) => {
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open step summary: {}", path))?;
            file.write_all(markdown.as_bytes())
                .with_context(|| format!("append step summary: {}", path))?;
        }
        Destination::File(path) => {
            write_text_file(path, markdown).context("write markdown")?;
        }
    }
    tracing::info!(path = %destination.path(), "Report written");
    Ok(())
}

fn serialize_classification(classification: &Classification) -> anyhow::Result<Vec<u8>> {
    let mut data =
        serde_json::to_vec_pretty(classification).context("serialize classification")?;
    data.push(b'\n');
    Ok(data)
}

/// Write the classification as pretty JSON, creating parent directories.
pub fn write_classification_json(
    path: &Utf8Path,
    classification: &Classification,
) -> anyhow::Result<()> {
    let data = serialize_classification(classification)?;
    write_file(path, &data).with_context(|| format!("write json: {}", path))
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_file(path, text.as_bytes()).with_context(|| format!("write text: {}", path))
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuget_report_test_util::WorkspaceFixture;
    use nuget_report_types::{CentralizedReport, DecentralizedReport};

    #[test]
    fn destination_prefers_step_summary() {
        let ws = Utf8Path::new("/ws");
        assert_eq!(
            Destination::select(ws, "NugetReport.md", None, Some("/tmp/summary.md")),
            Destination::StepSummary(Utf8PathBuf::from("/tmp/summary.md"))
        );
        assert_eq!(
            Destination::select(ws, "NugetReport.md", None, Some("  ")),
            Destination::File(Utf8PathBuf::from("/ws/NugetReport.md"))
        );
        assert_eq!(
            Destination::select(ws, "NugetReport.md", None, None),
            Destination::File(Utf8PathBuf::from("/ws/NugetReport.md"))
        );
    }

    #[test]
    fn forced_output_beats_step_summary() {
        let ws = Utf8Path::new("/ws");
        assert_eq!(
            Destination::select(
                ws,
                "NugetReport.md",
                Some(Utf8Path::new("out/report.md")),
                Some("/tmp/summary.md")
            ),
            Destination::File(Utf8PathBuf::from("/ws/out/report.md"))
        );
        assert_eq!(
            Destination::select(ws, "x.md", Some(Utf8Path::new("/abs/report.md")), None),
            Destination::File(Utf8PathBuf::from("/abs/report.md"))
        );
    }

    #[test]
    fn step_summary_is_appended() {
        let fixture = WorkspaceFixture::new();
        fixture.write("summary.md", "previous step\n");
        let dest = Destination::StepSummary(fixture.root().join("summary.md"));

        emit_report(&dest, "# report\n").expect("emit");
        assert_eq!(fixture.read("summary.md"), "previous step\n# report\n");
    }

    #[test]
    fn local_file_is_overwritten() {
        let fixture = WorkspaceFixture::new();
        fixture.write("NugetReport.md", "stale contents\n");
        let dest = Destination::File(fixture.root().join("NugetReport.md"));

        emit_report(&dest, "# report\n").expect("emit");
        assert_eq!(fixture.read("NugetReport.md"), "# report\n");
    }

    #[test]
    fn write_text_file_creates_parents() {
        let fixture = WorkspaceFixture::new();
        write_text_file(&fixture.root().join("a/b/out.md"), "x").expect("write");
        assert_eq!(fixture.read("a/b/out.md"), "x");
    }

    #[test]
    fn classification_json_is_written_with_parents() {
        let fixture = WorkspaceFixture::new();
        let path = fixture.root().join("out/report.json");
        write_classification_json(
            &path,
            &Classification::Decentralized(DecentralizedReport::default()),
        )
        .expect("write json");
        assert!(fixture.read("out/report.json").contains("\"mode\": \"decentralized\""));
    }

    #[test]
    fn classification_json_to_a_directory_fails() {
        let fixture = WorkspaceFixture::new();
        std::fs::create_dir_all(fixture.root().join("out")).expect("create dir");
        let err = write_classification_json(
            &fixture.root().join("out"),
            &Classification::Decentralized(DecentralizedReport::default()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("write json"));
    }

    #[test]
    fn classification_json_carries_mode_tag() {
        let data = serialize_classification(&Classification::Decentralized(
            DecentralizedReport::default(),
        ))
        .expect("serialize");
        let text = String::from_utf8(data).expect("utf8");
        assert!(text.contains("\"mode\": \"decentralized\""));
        assert!(text.ends_with("}\n"));

        let data = serialize_classification(&Classification::Centralized(
            CentralizedReport::default(),
        ))
        .expect("serialize");
        assert!(String::from_utf8(data).expect("utf8").contains("\"used\": []"));
    }
}
