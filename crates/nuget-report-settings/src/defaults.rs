use nuget_report_types::AdapterKind;

pub const DEFAULT_CONFIG_FILE: &str = "nuget-report.toml";
pub const DEFAULT_TITLE: &str = "# 📦 NuGet Package Report";
pub const DEFAULT_OUTPUT: &str = "NugetReport.md";
pub const DEFAULT_PROJECT_COLUMN_WIDTH: usize = 35;

/// Build output folders never hold source project files worth reporting.
pub fn default_excludes() -> Vec<String> {
    vec!["**/bin/**".to_string(), "**/obj/**".to_string()]
}

/// Marker globs per adapter, in selection order.
///
/// SDK-style projects declare `<TargetFramework>net8.0</TargetFramework>` and carry their
/// `PackageReference` items inline; legacy .NET Framework projects declare
/// `<TargetFrameworkVersion>v4.8</TargetFrameworkVersion>` and list packages in `packages.config`.
pub fn default_adapter_markers() -> Vec<(AdapterKind, Vec<String>)> {
    vec![
        (
            AdapterKind::Inline,
            vec![
                "net[0-9]*".to_string(),
                "netstandard*".to_string(),
                "netcoreapp*".to_string(),
            ],
        ),
        (AdapterKind::PackagesConfig, vec!["v[0-9]*".to_string()]),
    ]
}
