//! Configuration Types
//!
//! All configuration structures with defaults matching a conventional Python
//! project documented with mkdocs.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::constants::{layout, nav, pages};
use crate::types::{DocStubError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package layout detection
    pub layout: LayoutConfig,

    /// Module discovery filters
    pub discovery: DiscoveryConfig,

    /// Generated page output
    pub output: OutputConfig,

    /// Navigation patching
    pub nav: NavConfig,
}

impl Config {
    /// Validate configuration values.
    /// Returns `DocStubError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.layout.init_marker.trim().is_empty() {
            return Err(DocStubError::config("layout.init_marker must not be empty"));
        }

        let source_dir = Path::new(self.layout.source_dir.trim());
        if source_dir
            .components()
            .all(|c| matches!(c, Component::CurDir))
        {
            return Err(DocStubError::config(
                "layout.source_dir must name a directory below the project root",
            ));
        }

        if self.layout.extension.is_empty() || self.layout.extension.contains('.') {
            return Err(DocStubError::Config(format!(
                "layout.extension must be a bare extension like \"py\", got \"{}\"",
                self.layout.extension
            )));
        }

        if self.output.docs_dir.as_os_str().is_empty() {
            return Err(DocStubError::config("output.docs_dir must not be empty"));
        }

        if self.nav.file.as_os_str().is_empty() {
            return Err(DocStubError::config("nav.file must not be empty"));
        }

        Ok(())
    }

    /// Apply command-line overrides. Flags only ever switch features on.
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(docs_dir) = &overrides.docs_dir {
            self.output.docs_dir = docs_dir.clone();
        }
        if let Some(nav_file) = &overrides.nav_file {
            self.nav.file = nav_file.clone();
        }
        self.output.individual |= overrides.individual;
        self.nav.update |= overrides.update_nav;
    }
}

/// Values supplied on the command line, highest priority
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub individual: bool,
    pub update_nav: bool,
    pub docs_dir: Option<PathBuf>,
    pub nav_file: Option<PathBuf>,
}

// =============================================================================
// Layout Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory checked first for a nested layout
    pub source_dir: String,

    /// File marking a directory as a package
    pub init_marker: String,

    /// Source file extension without the dot
    pub extension: String,

    /// Directories skipped when searching a flat layout
    pub excluded_dirs: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source_dir: layout::SOURCE_DIR.to_string(),
            init_marker: layout::INIT_MARKER.to_string(),
            extension: layout::SOURCE_EXTENSION.to_string(),
            excluded_dirs: layout::EXCLUDED_DIRS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

// =============================================================================
// Discovery Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Glob patterns matched against dotted module identifiers
    pub exclude: Vec<String>,

    /// Skip paths ignored by the project's `.gitignore`
    pub respect_gitignore: bool,
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated pages
    pub docs_dir: PathBuf,

    /// Also write one page per module
    pub individual: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from(pages::DOCS_DIR),
            individual: false,
        }
    }
}

// =============================================================================
// Navigation Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Rewrite the navigation block
    pub update: bool,

    /// Site configuration file holding the navigation block
    pub file: PathBuf,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            update: false,
            file: PathBuf::from(nav::NAV_FILE),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
