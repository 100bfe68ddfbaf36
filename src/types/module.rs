//! Module identifiers and package roots.

use std::fmt;
use std::path::PathBuf;

use super::utils::title_case;

/// Separator placed between dotted segments in page headings.
const HEADING_SEPARATOR: &str = " → ";

/// Dotted identifier of one discoverable module, e.g. `pkg.sub.mod`.
///
/// Ordering is lexicographic on the full dotted string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Extend this identifier with one more dotted segment.
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}.{}", self.0, segment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn last_segment(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// True when this identifier is the package itself or lives under it.
    pub fn is_within(&self, package: &str) -> bool {
        self.0 == package
            || self
                .0
                .strip_prefix(package)
                .is_some_and(|rest| rest.starts_with('.'))
    }

    /// File name of the individual page: dots become underscores, plus `.md`.
    pub fn page_file_name(&self) -> String {
        format!("{}.md", self.0.replace('.', "_"))
    }

    /// Heading used on the aggregate page, e.g. `Mypkg → Core`.
    pub fn heading_title(&self) -> String {
        title_case(&self.0.replace('.', HEADING_SEPARATOR))
    }

    /// Navigation title, derived from the last segment only.
    pub fn nav_title(&self) -> String {
        title_case(self.last_segment())
    }

    /// The `::: <id>` line consumed by the documentation renderer.
    pub fn directive(&self) -> String {
        format!("::: {}", self.0)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ModuleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ModuleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ModuleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Directory selected as the top of the scanned source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRoot {
    pub path: PathBuf,
    pub name: String,
}

impl PackageRoot {
    /// Build a root from a directory path; the package name is the final
    /// path component.
    pub fn from_dir(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    /// Identifier of the package itself.
    pub fn module_id(&self) -> ModuleId {
        ModuleId::new(self.name.clone())
    }
}
