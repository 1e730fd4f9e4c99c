//! Shared test utilities for the nuget-report workspace.
//!
//! [`WorkspaceFixture`] is a throwaway directory tree; the string builders produce the MSBuild and
//! NuGet files the loaders read.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary workspace directory, removed on drop.
pub struct WorkspaceFixture {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl WorkspaceFixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 temp dir");
        Self { _tmp: tmp, root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Write raw bytes to `rel`, creating parent directories.
    pub fn write_bytes(&self, rel: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.root.join(rel)).expect("read fixture file")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.root.join(rel).exists()
    }
}

impl Default for WorkspaceFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// SDK-style project with inline `PackageReference` versions. An empty version omits the attribute.
pub fn sdk_project(target_framework: &str, packages: &[(&str, &str)]) -> String {
    let mut items = String::new();
    for (id, version) in packages {
        if version.is_empty() {
            items.push_str(&format!("    <PackageReference Include=\"{id}\" />\n"));
        } else {
            items.push_str(&format!(
                "    <PackageReference Include=\"{id}\" Version=\"{version}\" />\n"
            ));
        }
    }
    format!(
        "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n    <TargetFramework>{target_framework}</TargetFramework>\n  </PropertyGroup>\n  <ItemGroup>\n{items}  </ItemGroup>\n</Project>\n"
    )
}

/// SDK-style project under central package management (references carry no version).
pub fn central_project(target_framework: &str, packages: &[&str]) -> String {
    let pairs: Vec<(&str, &str)> = packages.iter().map(|p| (*p, "")).collect();
    sdk_project(target_framework, &pairs)
}

/// Legacy (.NET Framework) project in the MSBuild 2003 namespace, e.g. `legacy_project("v4.8")`.
pub fn legacy_project(target_framework_version: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Project ToolsVersion=\"15.0\" xmlns=\"http://schemas.microsoft.com/developer/msbuild/2003\">\n  <PropertyGroup>\n    <OutputType>Library</OutputType>\n    <TargetFrameworkVersion>{target_framework_version}</TargetFrameworkVersion>\n  </PropertyGroup>\n  <ItemGroup>\n    <Compile Include=\"Class1.cs\" />\n  </ItemGroup>\n</Project>\n"
    )
}

/// UTF-16LE encoding with a byte order mark, as Visual Studio writes some project files.
pub fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut out = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

pub fn packages_config(packages: &[(&str, &str)]) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<packages>\n");
    for (id, version) in packages {
        out.push_str(&format!(
            "  <package id=\"{id}\" version=\"{version}\" targetFramework=\"net48\" />\n"
        ));
    }
    out.push_str("</packages>\n");
    out
}

pub fn directory_packages_props(packages: &[(&str, &str)]) -> String {
    let mut out = String::from(
        "<Project>\n  <PropertyGroup>\n    <ManagePackageVersionsCentrally>true</ManagePackageVersionsCentrally>\n  </PropertyGroup>\n  <ItemGroup>\n",
    );
    for (id, version) in packages {
        out.push_str(&format!(
            "    <PackageVersion Include=\"{id}\" Version=\"{version}\" />\n"
        ));
    }
    out.push_str("  </ItemGroup>\n</Project>\n");
    out
}
