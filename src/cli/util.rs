//! CLI Common Utilities
//!
//! Path helpers shared by command handlers. Library code takes explicit
//! directories; only the CLI layer consults the process working directory.

use std::path::{Path, PathBuf};

use crate::types::Result;

/// Directory the tool operates on (the process working directory)
pub fn project_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Resolve a configured path against the project directory.
/// Absolute paths are returned unchanged.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve(Path::new("/work"), Path::new("docs")),
            PathBuf::from("/work/docs")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_absolute() {
        assert_eq!(
            resolve(Path::new("/work"), Path::new("/tmp/site")),
            PathBuf::from("/tmp/site")
        );
    }
}
