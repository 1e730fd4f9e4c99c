//! Centralized version file (`Directory.Packages.props`) loading.

use crate::xml;
use anyhow::Context;
use camino::Utf8Path;
use nuget_report_domain::VersionTable;
use nuget_report_types::{Extraction, RepoPath};

pub const VERSION_FILE_NAME: &str = "Directory.Packages.props";

/// Load the version table from `path` (workspace-relative).
///
/// Blank or duplicate declarations are diagnostics. A blank path, an unreadable file, or text that
/// is not XML at all is an error: the version file is the single source of truth for a
/// centralized run.
pub fn load_version_table(
    root: &Utf8Path,
    path: &RepoPath,
) -> anyhow::Result<Extraction<VersionTable>> {
    if path.as_str().trim().is_empty() || path.as_str() == "." {
        anyhow::bail!("centralized mode requires a version file path");
    }

    let abs = root.join(path.as_str());
    let text = std::fs::read(&abs)
        .and_then(xml::decode_text)
        .with_context(|| format!("read {}", abs))?;
    parse_version_table(path, &text)
}

/// Parse version file text into a table.
pub fn parse_version_table(path: &RepoPath, text: &str) -> anyhow::Result<Extraction<VersionTable>> {
    let doc = xml::parse_document(path, text)
        .map_err(|d| anyhow::anyhow!("{}", d.message))
        .with_context(|| format!("parse {}", path))?;

    let declarations = xml::elements_named(&doc, "PackageVersion")
        .map(|node| (xml::attr(node, "Include"), xml::attr(node, "Version")));

    Ok(VersionTable::from_declarations(path, declarations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuget_report_test_util::{WorkspaceFixture, directory_packages_props, utf16le_with_bom};
    use nuget_report_types::{PackageKey, ids};

    #[test]
    fn loads_pins_and_reports_duplicates() {
        let fixture = WorkspaceFixture::new();
        fixture.write(
            VERSION_FILE_NAME,
            &directory_packages_props(&[("PackageX", "1.0"), ("PackageX", "2.0"), ("Polly", "8.4.0")]),
        );

        let table = load_version_table(fixture.root(), &RepoPath::new(VERSION_FILE_NAME))
            .expect("load table");

        assert_eq!(table.value.len(), 2);
        assert_eq!(
            table.value.get(&PackageKey::new("packagex")).map(|p| p.version.as_str()),
            Some("1.0")
        );
        assert_eq!(table.diagnostics.len(), 1);
        assert_eq!(table.diagnostics[0].code, ids::CODE_DUPLICATE_VERSION);
    }

    #[test]
    fn missing_attributes_are_skipped() {
        let text = r#"<Project>
  <ItemGroup>
    <PackageVersion Include="Serilog" />
    <PackageVersion Version="1.0.0" />
    <PackageVersion Include="Dapper" Version="2.1.35" />
  </ItemGroup>
</Project>"#;
        let table = parse_version_table(&RepoPath::new(VERSION_FILE_NAME), text).expect("parse");
        assert_eq!(table.value.len(), 1);
        assert_eq!(table.diagnostics.len(), 2);
        assert!(
            table
                .diagnostics
                .iter()
                .all(|d| d.code == ids::CODE_MALFORMED_VERSION)
        );
    }

    #[test]
    fn unparsable_version_file_is_fatal() {
        let err = parse_version_table(&RepoPath::new(VERSION_FILE_NAME), "<Project><ItemGroup>")
            .unwrap_err();
        assert!(format!("{err:#}").contains("parse Directory.Packages.props"));
    }

    #[test]
    fn missing_version_file_is_fatal() {
        let fixture = WorkspaceFixture::new();
        let err = load_version_table(fixture.root(), &RepoPath::new(VERSION_FILE_NAME)).unwrap_err();
        assert!(err.to_string().contains("read"));
    }

    #[test]
    fn blank_path_is_fatal() {
        let fixture = WorkspaceFixture::new();
        let err = load_version_table(fixture.root(), &RepoPath::new("")).unwrap_err();
        assert!(err.to_string().contains("requires a version file path"));
    }

    #[test]
    fn utf16_version_file_is_loaded() {
        let fixture = WorkspaceFixture::new();
        fixture.write_bytes(
            VERSION_FILE_NAME,
            &utf16le_with_bom(&directory_packages_props(&[("Polly", "8.4.0")])),
        );

        let table = load_version_table(fixture.root(), &RepoPath::new(VERSION_FILE_NAME))
            .expect("load table");
        assert_eq!(
            table.value.get(&PackageKey::new("polly")).map(|p| p.version.as_str()),
            Some("8.4.0")
        );
        assert!(table.diagnostics.is_empty());
    }
}
