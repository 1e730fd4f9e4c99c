use serde::{Deserialize, Serialize};

/// Manifest extraction adapters, selected per project by its format marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterKind {
    /// `<PackageReference>` items with inline versions in the project file.
    Inline,
    /// A `packages.config` file next to the project file.
    PackagesConfig,
}

impl AdapterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterKind::Inline => "inline",
            AdapterKind::PackagesConfig => "packages_config",
        }
    }
}

impl std::fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
