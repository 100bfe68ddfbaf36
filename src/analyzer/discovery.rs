//! Module Discovery
//!
//! Walks a package root and produces the dotted identifiers of every package
//! and source module under it. The walk is iterative and visits entries in
//! file-name order; the result is sorted once at the end.

use ignore::{DirEntry, WalkBuilder};
use std::path::Path;
use tracing::{debug, warn};

use super::filter::DiscoveryFilter;
use crate::config::LayoutConfig;
use crate::constants::layout::{CACHE_DIR_PREFIX, HIDDEN_PREFIX};
use crate::types::{ModuleId, PackageRoot, Result};

pub struct ModuleDiscovery<'a> {
    layout: &'a LayoutConfig,
    filter: DiscoveryFilter,
}

impl<'a> ModuleDiscovery<'a> {
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self {
            layout,
            filter: DiscoveryFilter::none(),
        }
    }

    pub fn with_filter(mut self, filter: DiscoveryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Discover all modules under `root`, sorted and de-duplicated.
    pub fn discover(&self, root: &PackageRoot) -> Result<Vec<ModuleId>> {
        let mut builder = WalkBuilder::new(&root.path);
        builder
            .hidden(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| !is_skipped_dir(entry));
        self.filter.configure(&mut builder);
        debug!(
            "Walking {} (gitignore: {})",
            root.path.display(),
            self.filter.respects_gitignore()
        );

        let mut modules = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();

            if file_type.is_dir() {
                if path.join(&self.layout.init_marker).is_file() {
                    modules.extend(dotted(root, path));
                }
            } else if path.is_file() {
                // Symlinked files resolve here; symlinked directories do not.
                if let Some(module) = self.source_module(root, path) {
                    modules.push(module);
                }
            }
        }

        modules.retain(|m| !self.filter.is_excluded(m));
        modules.sort();
        modules.dedup();

        debug!("Discovered {} modules in {}", modules.len(), root.name);
        Ok(modules)
    }

    fn source_module(&self, root: &PackageRoot, path: &Path) -> Option<ModuleId> {
        let name = path.file_name()?.to_str()?;
        if name == self.layout.init_marker {
            return None;
        }
        let ext = path.extension()?.to_str()?;
        if ext != self.layout.extension {
            return None;
        }
        let stem = path.file_stem()?.to_string_lossy();
        Some(dotted(root, path.parent()?)?.child(&stem))
    }
}

/// Hidden and bytecode-cache directories below the root are never entered.
fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with(HIDDEN_PREFIX) || name.starts_with(CACHE_DIR_PREFIX)
}

/// Dotted identifier of a directory inside the package root.
fn dotted(root: &PackageRoot, dir: &Path) -> Option<ModuleId> {
    let relative = dir.strip_prefix(&root.path).ok()?;
    Some(relative.components().fold(root.module_id(), |id, component| {
        id.child(&component.as_os_str().to_string_lossy())
    }))
}
