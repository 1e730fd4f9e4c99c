use serde::{Deserialize, Serialize};

/// Reconciliation key for a package id.
///
/// NuGet ids are case-insensitive. The key is the trimmed id folded to upper case, so equality is
/// ordinal-ignore-case and `Ord` is a byte-wise ordinal comparison of the folded form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageKey(String);

impl PackageKey {
    pub fn new(package: &str) -> Self {
        Self(package.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One `(package, version)` pair as yielded by a manifest extractor.
///
/// `version` is empty when the manifest does not declare one inline (centralized mode).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    pub package: String,
    pub version: String,
}

impl PackageEntry {
    pub fn new(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
        }
    }
}

/// A package referenced by a project: the flat tuple fed to the reconciliation engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReference {
    pub project: String,
    pub package: String,
    pub version: String,
}

impl PackageReference {
    pub fn new(
        project: impl Into<String>,
        package: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            package: package.into(),
            version: version.into(),
        }
    }

    pub fn from_entry(project: &str, entry: PackageEntry) -> Self {
        Self {
            project: project.to_string(),
            package: entry.package,
            version: entry.version,
        }
    }

    pub fn key(&self) -> PackageKey {
        PackageKey::new(&self.package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_ignore_case_and_surrounding_whitespace() {
        assert_eq!(
            PackageKey::new("Newtonsoft.Json"),
            PackageKey::new(" newtonsoft.json ")
        );
        assert_ne!(PackageKey::new("Serilog"), PackageKey::new("Serilog.Sinks"));
    }

    #[test]
    fn key_order_is_ordinal_over_folded_ids() {
        let mut keys = vec![
            PackageKey::new("Zeta"),
            PackageKey::new("alpha"),
            PackageKey::new("Beta"),
        ];
        keys.sort();
        let order: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["ALPHA", "BETA", "ZETA"]);
    }

    #[test]
    fn underscore_sorts_after_letters() {
        // Upper-case folding puts '_' (0x5F) after 'A'..'Z'.
        assert!(PackageKey::new("Ab") < PackageKey::new("A_b"));
    }
}
