use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// Canonical workspace-relative path used in diagnostics and discovery results.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - never empty (`.` stands for the workspace root)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new(".")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, e.g. `Api.csproj` for `src/Api/Api.csproj`.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Sibling path in the same directory.
    pub fn with_file_name(&self, name: &str) -> RepoPath {
        match self.0.rsplit_once('/') {
            Some((dir, _)) => RepoPath::new(format!("{dir}/{name}")),
            None => RepoPath::new(name),
        }
    }

    /// Build a workspace-relative path from an absolute path under `root`.
    ///
    /// Paths outside `root` are kept as given.
    pub fn relative_to(path: &Utf8Path, root: &Utf8Path) -> RepoPath {
        RepoPath::new(path.strip_prefix(root).unwrap_or(path).as_str())
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
