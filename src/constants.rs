//! Global Constants
//!
//! Fixed names and page text shared across the pipeline. Settings a user may
//! want to change live in `config` instead.

/// Package layout defaults
pub mod layout {
    /// Directory checked first for a nested ("src") layout
    pub const SOURCE_DIR: &str = "src";

    /// File whose presence marks a directory as an importable package
    pub const INIT_MARKER: &str = "__init__.py";

    /// Source file extension, without the leading dot
    pub const SOURCE_EXTENSION: &str = "py";

    /// Top-level directories never treated as the package in a flat layout
    pub const EXCLUDED_DIRS: &[&str] = &["tests", "docs", ".git", ".venv", "__pycache__"];

    /// Directory name prefix skipped while walking the package
    pub const CACHE_DIR_PREFIX: &str = "__pycache__";

    /// Directory name prefix marking hidden entries
    pub const HIDDEN_PREFIX: char = '.';
}

/// Generated page constants
pub mod pages {
    /// Default output directory for generated pages
    pub const DOCS_DIR: &str = "docs";

    /// Aggregate reference page file name
    pub const MODULES_PAGE: &str = "modules.md";

    /// Subdirectory of the docs dir holding one page per module
    pub const API_DIR: &str = "api";

    /// Title of the aggregate page
    pub const AGGREGATE_TITLE: &str = "API Reference";

    /// Intro sentence of the aggregate page
    pub const AGGREGATE_INTRO: &str =
        "This page contains the API reference for all modules in the project.";
}

/// Navigation patch constants
pub mod nav {
    /// Default site configuration file
    pub const NAV_FILE: &str = "mkdocs.yml";

    /// Key that opens the navigation block
    pub const MARKER: &str = "nav:";

    /// Home entry, always first
    pub const HOME_ENTRY: &str = "- Home: index.md";

    /// Group heading for per-module pages
    pub const MODULES_GROUP: &str = "- Modules:";

    /// Indentation step for generated entries
    pub const INDENT_STEP: usize = 2;
}

/// Configuration file names
pub mod config {
    /// Project config file in the working directory
    pub const PROJECT_FILE: &str = "docstub.toml";

    /// Global config file inside the user config directory
    pub const GLOBAL_FILE: &str = "config.toml";

    /// Environment variable prefix
    pub const ENV_PREFIX: &str = "DOCSTUB_";
}
