//! Source Tree Analyzer
//!
//! Locates the package root and discovers its modules:
//! - Package location (nested `src/` layout, then flat layout)
//! - Module discovery (explicit work-list walk)
//! - Optional `.gitignore` and glob filtering

pub mod discovery;
pub mod filter;
pub mod locator;

pub use discovery::ModuleDiscovery;
pub use filter::DiscoveryFilter;
pub use locator::PackageLocator;
