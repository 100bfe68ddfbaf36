//! docstub - Markdown API Stub Generator
//!
//! Scans a project's source tree, finds its package, and writes markdown
//! stubs holding `::: module.name` directives for an mkdocs-style renderer.
//! Optionally rewrites the `nav:` block of the site configuration.
//!
//! ## Pipeline
//!
//! 1. [`PackageLocator`] picks the package root (`src/<pkg>` before `<pkg>`)
//! 2. [`ModuleDiscovery`] lists dotted module names under it
//! 3. [`DocEmitter`] renders `modules.md` and optional `api/<module>.md` pages
//! 4. [`NavPatcher`] rewrites the navigation block
//!
//! ## Quick Start
//!
//! ```ignore
//! use docstub::{Config, DocEmitter, ModuleDiscovery, PackageLocator};
//!
//! let config = Config::default();
//! let package = PackageLocator::new(&config.layout).locate(&project_dir)?;
//! let modules = ModuleDiscovery::new(&config.layout).discover(&package)?;
//! let emitter = DocEmitter::new(project_dir.join("docs"));
//! emitter.write(&emitter.plan(&modules, true))?;
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: package location and module discovery
//! - [`docs`]: page rendering and navigation patching
//! - [`config`]: layered configuration
//! - [`cli`]: command handlers and console output

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod docs;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{CliOverrides, Config, ConfigFormat, ConfigLoader};

// Error Types
pub use types::error::{DocStubError, Result, ResultExt};

// Domain Types
pub use types::{ModuleId, PackageRoot};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use analyzer::{DiscoveryFilter, ModuleDiscovery, PackageLocator};
pub use docs::{DocEmitter, DocPage, NavOutcome, NavPatcher, patch_nav};
