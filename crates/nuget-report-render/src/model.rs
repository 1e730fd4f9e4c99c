/// Presentation settings for the markdown report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// First line of the report, e.g. `# 📦 NuGet Package Report`.
    pub title: String,
    /// Width the project column is padded to in decentralized listings.
    pub project_column_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "# 📦 NuGet Package Report".to_string(),
            project_column_width: 35,
        }
    }
}
