use crate::props::VERSION_FILE_NAME;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use nuget_report_types::RepoPath;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Project files and the centralized version file found under a workspace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Discovery {
    /// `*.csproj` files, sorted by path.
    pub projects: Vec<RepoPath>,
    /// Shallowest `Directory.Packages.props`, ties broken by path.
    pub version_file: Option<RepoPath>,
}

/// Walk `repo_root` for project files and the centralized version file.
///
/// Directories matching any `exclude` glob (workspace-relative) are pruned without being descended
/// into, as is `.git`. Files matching a glob are skipped.
pub fn discover_workspace(repo_root: &Utf8Path, exclude: &[String]) -> anyhow::Result<Discovery> {
    let exclude_set = build_globset(exclude).context("compile exclude globset")?;

    let mut projects: Vec<RepoPath> = Vec::new();
    let mut version_files: Vec<RepoPath> = Vec::new();

    for abs in WalkDir::new(repo_root)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 {
                return true;
            }
            if e.file_name() == ".git" {
                return false;
            }
            match Utf8Path::from_path(e.path()) {
                Some(abs) => {
                    let rel = RepoPath::relative_to(abs, repo_root);
                    !is_excluded(&exclude_set, &rel, e.file_type().is_dir())
                }
                None => true,
            }
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
    {
        let rel = RepoPath::relative_to(&abs, repo_root);
        let name = rel.file_name();
        if is_project_file(name) {
            projects.push(rel);
        } else if name.eq_ignore_ascii_case(VERSION_FILE_NAME) {
            version_files.push(rel);
        }
    }

    // Stable order.
    projects.sort();
    projects.dedup();
    version_files.sort_by(|a, b| depth(a).cmp(&depth(b)).then_with(|| a.cmp(b)));

    Ok(Discovery {
        projects,
        version_file: version_files.into_iter().next(),
    })
}

/// `dir/**` style globs only match below the directory, so directories are also tried with a
/// trailing separator.
fn is_excluded(set: &GlobSet, rel: &RepoPath, is_dir: bool) -> bool {
    set.is_match(rel.as_str()) || (is_dir && set.is_match(format!("{}/", rel.as_str())))
}

fn is_project_file(name: &str) -> bool {
    Utf8Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csproj"))
}

fn depth(path: &RepoPath) -> usize {
    path.as_str().matches('/').count()
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p)?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
