use nuget_report_types::{Diagnostic, Extraction, PackageKey, RepoPath, ids};
use std::collections::{BTreeMap, BTreeSet};

/// A version pinned by the centralized version file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinnedVersion {
    /// Package id as spelled in the version file.
    pub package: String,
    pub version: String,
}

/// Case-insensitive mapping from package id to pinned version.
///
/// Each key appears at most once; the first declaration wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionTable {
    entries: BTreeMap<PackageKey, PinnedVersion>,
}

impl VersionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from raw `(package, version)` declarations in file order.
    ///
    /// Declarations with a blank package or version are skipped, as are later duplicates of an
    /// existing key. Each skip produces a diagnostic located at `source`.
    pub fn from_declarations<I, P, V>(source: &RepoPath, declarations: I) -> Extraction<Self>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
        V: AsRef<str>,
    {
        let mut out = Extraction::new(VersionTable::new());

        for (package, version) in declarations {
            let package = package.as_ref().trim();
            let version = version.as_ref().trim();

            if package.is_empty() || version.is_empty() {
                out.push(
                    Diagnostic::new(
                        ids::CODE_MALFORMED_VERSION,
                        format!(
                            "malformed package version declaration (package '{package}', version '{version}')"
                        ),
                    )
                    .at(source),
                );
                continue;
            }

            if let Some(existing) = out.value.insert(package, version) {
                out.push(
                    Diagnostic::new(
                        ids::CODE_DUPLICATE_VERSION,
                        format!(
                            "duplicate package '{package}' (version '{version}') ignored; keeping '{}' at '{}'",
                            existing.package, existing.version
                        ),
                    )
                    .at(source),
                );
            }
        }

        out
    }

    /// Insert a pin unless the key is already present.
    ///
    /// Returns the existing entry when the insert was rejected as a duplicate.
    pub fn insert(&mut self, package: &str, version: &str) -> Option<PinnedVersion> {
        let key = PackageKey::new(package);
        if let Some(existing) = self.entries.get(&key) {
            return Some(existing.clone());
        }
        self.entries.insert(
            key,
            PinnedVersion {
                package: package.trim().to_string(),
                version: version.trim().to_string(),
            },
        );
        None
    }

    pub fn get(&self, key: &PackageKey) -> Option<&PinnedVersion> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&PackageKey, &PinnedVersion)> {
        self.entries.iter()
    }
}

/// All references sharing one package key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageGroup {
    /// Every spelling of the id seen in references.
    pub spellings: BTreeSet<String>,
    /// Distinct `(project, version)` pairs, ordered by project then version.
    pub rows: BTreeSet<(String, String)>,
}

impl PackageGroup {
    /// Ordinal-smallest spelling, independent of input order.
    pub fn display_name(&self) -> &str {
        self.spellings.first().map(String::as_str).unwrap_or("")
    }

    /// Distinct project names, ordinal ascending.
    pub fn projects(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.rows.iter().map(|(p, _)| p.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Distinct non-blank versions, compared case-insensitively.
    pub fn distinct_versions(&self) -> BTreeSet<String> {
        self.rows
            .iter()
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_uppercase)
            .collect()
    }

    pub fn has_version_skew(&self) -> bool {
        self.distinct_versions().len() > 1
    }
}
