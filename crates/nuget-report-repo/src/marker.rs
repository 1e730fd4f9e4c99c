//! Format markers and adapter selection.

use crate::xml;
use anyhow::Context;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use nuget_report_types::AdapterKind;
use roxmltree::Document;

/// Read a project's format marker.
///
/// Order: `TargetFramework`, then the first entry of `TargetFrameworks`, then
/// `TargetFrameworkVersion`.
pub fn read_format_marker(doc: &Document<'_>) -> Option<String> {
    if let Some(tfm) = xml::first_text(doc, "TargetFramework") {
        return Some(tfm.to_string());
    }
    if let Some(first) = xml::first_text(doc, "TargetFrameworks")
        .and_then(|list| list.split(';').map(str::trim).find(|t| !t.is_empty()))
    {
        return Some(first.to_string());
    }
    xml::first_text(doc, "TargetFrameworkVersion").map(str::to_string)
}

struct AdapterRule {
    kind: AdapterKind,
    markers: GlobSet,
}

/// Ordered strategy table mapping format markers to extraction adapters.
pub struct AdapterTable {
    rules: Vec<AdapterRule>,
}

impl AdapterTable {
    /// Compile `(adapter, marker globs)` rules. Globs match case-insensitively.
    pub fn new(rules: &[(AdapterKind, Vec<String>)]) -> anyhow::Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for (kind, patterns) in rules {
            let mut b = GlobSetBuilder::new();
            for p in patterns {
                let glob = GlobBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| format!("invalid marker glob for {kind}: {p}"))?;
                b.add(glob);
            }
            compiled.push(AdapterRule {
                kind: *kind,
                markers: b.build().with_context(|| format!("compile marker globs for {kind}"))?,
            });
        }
        Ok(Self { rules: compiled })
    }

    /// First adapter whose globs match `marker`.
    pub fn select(&self, marker: &str) -> Option<AdapterKind> {
        let marker = marker.trim();
        self.rules
            .iter()
            .find(|r| r.markers.is_match(marker))
            .map(|r| r.kind)
    }
}
