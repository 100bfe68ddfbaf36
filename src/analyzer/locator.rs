//! Package Locator
//!
//! Picks the directory treated as the package root. A nested layout
//! (`src/<pkg>/`) wins over a flat one (`<pkg>/`); within each, candidates are
//! taken in file-name order so the choice does not depend on how the
//! filesystem happens to list entries.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::LayoutConfig;
use crate::types::{DocStubError, PackageRoot, Result};

pub struct PackageLocator<'a> {
    layout: &'a LayoutConfig,
}

impl<'a> PackageLocator<'a> {
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self { layout }
    }

    /// Find the package root under `project_dir`.
    pub fn locate(&self, project_dir: &Path) -> Result<PackageRoot> {
        let source_dir = project_dir.join(&self.layout.source_dir);

        if source_dir.is_dir() {
            if let Some(found) = sorted_children(&source_dir)?
                .into_iter()
                .find(|dir| self.is_package(dir))
            {
                debug!("Found nested layout package: {}", found.display());
                return Ok(PackageRoot::from_dir(found));
            }
            debug!(
                "No package under {}, trying flat layout",
                source_dir.display()
            );
        }

        sorted_children(project_dir)?
            .into_iter()
            .find(|dir| self.is_package(dir) && !self.is_excluded(dir))
            .map(|found| {
                debug!("Found flat layout package: {}", found.display());
                PackageRoot::from_dir(found)
            })
            .ok_or_else(|| DocStubError::package_not_found(project_dir))
    }

    fn is_package(&self, dir: &Path) -> bool {
        dir.is_dir() && dir.join(&self.layout.init_marker).is_file()
    }

    fn is_excluded(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.layout.excluded_dirs.iter().any(|d| d == name))
    }
}

/// Immediate children of `dir`, sorted by file name.
fn sorted_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_package(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("__init__.py"), "").unwrap();
    }

    #[test]
    fn test_prefers_src_layout() {
        let temp_dir = TempDir::new().unwrap();
        make_package(&temp_dir.path().join("flatpkg"));
        make_package(&temp_dir.path().join("src").join("nestedpkg"));

        let layout = LayoutConfig::default();
        let root = PackageLocator::new(&layout).locate(temp_dir.path()).unwrap();

        assert_eq!(root.name, "nestedpkg");
        assert!(root.path.is_dir());
    }

    #[test]
    fn test_flat_layout_skips_excluded() {
        let temp_dir = TempDir::new().unwrap();
        make_package(&temp_dir.path().join("docs"));
        make_package(&temp_dir.path().join("tests"));
        make_package(&temp_dir.path().join("zpkg"));

        let layout = LayoutConfig::default();
        let root = PackageLocator::new(&layout).locate(temp_dir.path()).unwrap();

        assert_eq!(root.name, "zpkg");
    }

    #[test]
    fn test_empty_src_falls_back_to_flat() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src").join("notapkg")).unwrap();
        make_package(&temp_dir.path().join("mypkg"));

        let layout = LayoutConfig::default();
        let root = PackageLocator::new(&layout).locate(temp_dir.path()).unwrap();

        assert_eq!(root.name, "mypkg");
    }

    #[test]
    fn test_first_candidate_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        make_package(&temp_dir.path().join("src").join("beta"));
        make_package(&temp_dir.path().join("src").join("alpha"));

        let layout = LayoutConfig::default();
        let root = PackageLocator::new(&layout).locate(temp_dir.path()).unwrap();

        assert_eq!(root.name, "alpha");
    }

    #[test]
    fn test_marker_directory_is_not_a_package() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("pkg").join("__init__.py")).unwrap();
        fs::write(temp_dir.path().join("setup.py"), "").unwrap();

        let layout = LayoutConfig::default();
        let err = PackageLocator::new(&layout)
            .locate(temp_dir.path())
            .unwrap_err();

        assert!(matches!(err, DocStubError::PackageNotFound { .. }));
    }

    #[test]
    fn test_no_package_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("scripts")).unwrap();

        let layout = LayoutConfig::default();
        let err = PackageLocator::new(&layout)
            .locate(temp_dir.path())
            .unwrap_err();

        assert!(matches!(err, DocStubError::PackageNotFound { .. }));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_custom_marker() {
        let temp_dir = TempDir::new().unwrap();
        let pkg = temp_dir.path().join("lib");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("mod.lua"), "").unwrap();

        let layout = LayoutConfig {
            init_marker: "mod.lua".to_string(),
            extension: "lua".to_string(),
            ..LayoutConfig::default()
        };
        let root = PackageLocator::new(&layout).locate(temp_dir.path()).unwrap();

        assert_eq!(root.name, "lib");
    }
}
