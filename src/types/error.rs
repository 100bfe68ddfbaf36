//! Unified Error Type System
//!
//! Centralized error type for the whole crate.
//!
//! ## Error Kinds
//!
//! - **PackageNotFound**: no package root could be located (user-facing)
//! - **Config**: configuration could not be loaded or failed validation
//! - **Pattern**: an exclusion glob in the configuration is malformed
//! - **Io / Yaml / Json**: system failures, propagated with full detail

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum DocStubError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("No package found in {}", dir.display())]
    PackageNotFound { dir: PathBuf },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid exclude pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

pub type Result<T> = std::result::Result<T, DocStubError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl DocStubError {
    /// Create a locator failure for the given search directory
    pub fn package_not_found(dir: impl Into<PathBuf>) -> Self {
        Self::PackageNotFound { dir: dir.into() }
    }

    /// Create a config error from any displayable message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Errors caused by the project layout or settings rather than the system.
    ///
    /// These are reported as a single clean line; everything else carries
    /// its full diagnostic chain.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::PackageNotFound { .. } | Self::Config(_) | Self::Pattern { .. }
        )
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Attach a config-level context message to an error
    fn config_context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn config_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| DocStubError::Config(format!("{}: {}", context.into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
