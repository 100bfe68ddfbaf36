//! Navigation Patcher
//!
//! Rewrites the `nav:` block of a site configuration file by line and
//! indentation matching. The file is never parsed structurally; a YAML parse
//! is only used afterwards to warn when a patch breaks a previously valid file.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::nav::{HOME_ENTRY, INDENT_STEP, MARKER, MODULES_GROUP};
use crate::constants::pages::{AGGREGATE_TITLE, API_DIR, MODULES_PAGE};
use crate::types::{ModuleId, Result, indentation};

/// Line range of the navigation block, `start` being the marker line.
/// `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBlock {
    pub start: usize,
    pub end: usize,
    pub indent: usize,
}

/// Locate the navigation block in `lines`.
///
/// The block runs from the first line whose trimmed text starts with `nav:`
/// up to the last non-blank line before a line indented no deeper than the
/// marker. A `- ` item at exactly the marker's indentation still belongs to
/// the block, since YAML allows unindented sequences under a key.
pub fn find_nav_block(lines: &[&str]) -> Option<NavBlock> {
    let start = lines
        .iter()
        .position(|line| line.trim().starts_with(MARKER))?;
    let indent = indentation(lines[start]);

    let mut last = start;
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        let content = line.trim_start_matches([' ', '\t']);
        if content.trim().is_empty() {
            continue;
        }

        let depth = indentation(line);
        let is_item = content.starts_with("- ") || content.trim_end() == "-";
        if depth < indent || (depth == indent && !is_item) {
            break;
        }
        last = i;
    }

    Some(NavBlock {
        start,
        end: last + 1,
        indent,
    })
}

/// Build the replacement lines for a block whose marker is `marker_line`.
pub fn render_nav(marker_line: &str, modules: &[ModuleId], include_modules: bool) -> Vec<String> {
    let indent = indentation(marker_line);
    let pad = " ".repeat(indent + INDENT_STEP);
    let nested = " ".repeat(indent + 2 * INDENT_STEP);

    let mut lines = vec![
        normalize_marker(marker_line, indent),
        format!("{}{}", pad, HOME_ENTRY),
        format!("{}- {}: {}", pad, AGGREGATE_TITLE, MODULES_PAGE),
    ];

    if include_modules {
        lines.push(format!("{}{}", pad, MODULES_GROUP));
        for module in modules {
            lines.push(format!(
                "{}- {}: {}/{}",
                nested,
                module.nav_title(),
                API_DIR,
                module.page_file_name()
            ));
        }
    }

    lines
}

/// Drop an inline value such as `nav: []`, which cannot be followed by a
/// block sequence.
fn normalize_marker(marker_line: &str, indent: usize) -> String {
    let after = marker_line.trim_start()[MARKER.len()..].trim();
    if after.is_empty() || after.starts_with('#') {
        marker_line.to_string()
    } else {
        format!("{}{}", &marker_line[..indent], MARKER)
    }
}

/// Replace the navigation block in `text`. Returns `None` when the text has
/// no `nav:` marker.
///
/// Generated lines take the marker line's ending, so CRLF files stay CRLF.
pub fn patch_nav(text: &str, modules: &[ModuleId], include_modules: bool) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let block = find_nav_block(&lines)?;

    let (marker, cr) = match lines[block.start].strip_suffix('\r') {
        Some(marker) => (marker, "\r"),
        None => (lines[block.start], ""),
    };

    let mut out: Vec<String> = lines[..block.start].iter().map(|l| l.to_string()).collect();
    out.extend(
        render_nav(marker, modules, include_modules)
            .into_iter()
            .map(|line| line + cr),
    );
    out.extend(lines[block.end..].iter().map(|l| l.to_string()));

    Some(out.join("\n"))
}

/// True when `dir` exists and holds at least one entry.
pub fn has_api_pages(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

/// Result of a navigation update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Block rewritten and file saved
    Patched,
    /// Block already up to date; file left alone
    Unchanged,
    /// Configuration file does not exist
    MissingFile,
    /// File has no `nav:` line
    NoMarker,
}

impl std::fmt::Display for NavOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Patched => write!(f, "patched"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::MissingFile => write!(f, "missing file"),
            Self::NoMarker => write!(f, "no nav section"),
        }
    }
}

/// Planned change to the navigation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavUpdate {
    pub outcome: NavOutcome,
    /// New file content when the outcome is `Patched`
    pub content: Option<String>,
}

/// Applies `patch_nav` to a configuration file on disk
pub struct NavPatcher {
    nav_file: PathBuf,
}

impl NavPatcher {
    pub fn new<P: AsRef<Path>>(nav_file: P) -> Self {
        Self {
            nav_file: nav_file.as_ref().to_path_buf(),
        }
    }

    pub fn nav_file(&self) -> &Path {
        &self.nav_file
    }

    /// Compute the update without touching the file.
    pub fn plan(&self, modules: &[ModuleId], include_modules: bool) -> Result<NavUpdate> {
        if !self.nav_file.exists() {
            debug!("{} not found, skipping nav update", self.nav_file.display());
            return Ok(NavUpdate {
                outcome: NavOutcome::MissingFile,
                content: None,
            });
        }

        let original = fs::read_to_string(&self.nav_file)?;
        let Some(patched) = patch_nav(&original, modules, include_modules) else {
            debug!("No nav section in {}", self.nav_file.display());
            return Ok(NavUpdate {
                outcome: NavOutcome::NoMarker,
                content: None,
            });
        };

        if patched == original {
            return Ok(NavUpdate {
                outcome: NavOutcome::Unchanged,
                content: None,
            });
        }

        if serde_yaml::from_str::<serde_yaml::Value>(&original).is_ok()
            && let Err(err) = serde_yaml::from_str::<serde_yaml::Value>(&patched)
        {
            warn!(
                "Patched {} no longer parses as YAML: {}",
                self.nav_file.display(),
                err
            );
        }

        Ok(NavUpdate {
            outcome: NavOutcome::Patched,
            content: Some(patched),
        })
    }

    /// Rewrite the navigation block in place. No backup is kept.
    pub fn apply(&self, modules: &[ModuleId], include_modules: bool) -> Result<NavOutcome> {
        let update = self.plan(modules, include_modules)?;

        if let Some(content) = &update.content {
            fs::write(&self.nav_file, content)?;
            info!("Updated navigation in {}", self.nav_file.display());
        }

        Ok(update.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    const MKDOCS: &str = "site_name: Demo\n\
                          nav:\n  - Home: index.md\n  - Old: old.md\n\
                          theme:\n  name: material\n";

    fn modules(ids: &[&str]) -> Vec<ModuleId> {
        ids.iter().map(|id| ModuleId::from(*id)).collect()
    }

    #[test]
    fn test_find_block_top_level() {
        let lines: Vec<&str> = MKDOCS.split('\n').collect();
        let block = find_nav_block(&lines).unwrap();

        assert_eq!(block, NavBlock { start: 1, end: 4, indent: 0 });
    }

    #[test]
    fn test_find_block_to_end_of_file() {
        let lines = vec!["site_name: x", "nav:", "  - a: a.md", "  - b: b.md"];
        let block = find_nav_block(&lines).unwrap();

        assert_eq!(block.end, 4);
    }

    #[test]
    fn test_find_block_keeps_unindented_items() {
        let lines = vec!["nav:", "- a: a.md", "- b:", "  - c: c.md", "theme: x"];
        let block = find_nav_block(&lines).unwrap();

        assert_eq!(block.end, 4);
    }

    #[test]
    fn test_find_block_leaves_trailing_blank_lines() {
        let lines = vec!["nav:", "  - a: a.md", "", "  - b: b.md", "", "", "theme: x"];
        let block = find_nav_block(&lines).unwrap();

        assert_eq!(block.end, 4);
    }

    #[test]
    fn test_find_block_nested_marker() {
        let lines = vec!["extra:", "  nav:", "    - a: a.md", "  other: 1", "top: 2"];
        let block = find_nav_block(&lines).unwrap();

        assert_eq!(block, NavBlock { start: 1, end: 3, indent: 2 });
    }

    #[test]
    fn test_patch_without_modules() {
        let patched = patch_nav(MKDOCS, &modules(&["pkg.core"]), false).unwrap();

        assert_eq!(
            patched,
            "site_name: Demo\n\
             nav:\n  - Home: index.md\n  - API Reference: modules.md\n\
             theme:\n  name: material\n"
        );
    }

    #[test]
    fn test_patch_with_modules() {
        let patched = patch_nav(MKDOCS, &modules(&["pkg", "pkg.utils.helpers"]), true).unwrap();

        assert!(patched.contains("  - Modules:\n"));
        assert!(patched.contains("    - Pkg: api/pkg.md\n"));
        assert!(patched.contains("    - Helpers: api/pkg_utils_helpers.md\n"));
        assert!(patched.ends_with("theme:\n  name: material\n"));
    }

    #[test]
    fn test_patch_inline_marker() {
        let patched = patch_nav("nav: []\n", &[], false).unwrap();

        assert_eq!(
            patched,
            "nav:\n  - Home: index.md\n  - API Reference: modules.md\n"
        );
    }

    #[test]
    fn test_patch_is_idempotent() {
        let ids = modules(&["pkg", "pkg.core"]);
        let once = patch_nav(MKDOCS, &ids, true).unwrap();
        let twice = patch_nav(&once, &ids, true).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_patched_output_is_valid_yaml() {
        let ids = modules(&["pkg", "pkg.core"]);
        let patched = patch_nav(MKDOCS, &ids, true).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&patched).unwrap();
        let nav = value["nav"].as_sequence().unwrap();
        assert_eq!(nav.len(), 3);
        assert_eq!(nav[0]["Home"].as_str(), Some("index.md"));
        assert_eq!(nav[2]["Modules"][1]["Core"].as_str(), Some("api/pkg_core.md"));
    }

    #[test]
    fn test_patch_keeps_crlf_line_endings() {
        let text = "site_name: x\r\nnav:\r\n  - Old: old.md\r\ntheme: y\r\n";
        let patched = patch_nav(text, &[], false).unwrap();

        assert_eq!(
            patched,
            "site_name: x\r\nnav:\r\n  - Home: index.md\r\n  - API Reference: modules.md\r\n\
             theme: y\r\n"
        );
        assert_eq!(patch_nav(&patched, &[], false).unwrap(), patched);
    }

    #[test]
    fn test_patch_crlf_with_modules_and_inline_marker() {
        let ids = modules(&["pkg", "pkg.core"]);
        let once = patch_nav("site_name: x\r\nnav: []\r\n", &ids, true).unwrap();

        assert!(once.starts_with("site_name: x\r\nnav:\r\n"));
        assert!(once.contains("    - Core: api/pkg_core.md\r\n"));
        assert!(!once.replace("\r\n", "").contains('\n'));
        assert_eq!(patch_nav(&once, &ids, true).unwrap(), once);
    }

    #[test]
    fn test_no_marker() {
        assert!(patch_nav("site_name: Demo\ntheme: x\n", &[], true).is_none());
    }

    #[test]
    fn test_patcher_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let patcher = NavPatcher::new(temp_dir.path().join("mkdocs.yml"));

        assert_eq!(patcher.apply(&[], false).unwrap(), NavOutcome::MissingFile);
        assert!(!temp_dir.path().join("mkdocs.yml").exists());
    }

    #[test]
    fn test_patcher_no_marker_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mkdocs.yml");
        fs::write(&path, "site_name: Demo\n").unwrap();

        let outcome = NavPatcher::new(&path).apply(&[], true).unwrap();

        assert_eq!(outcome, NavOutcome::NoMarker);
        assert_eq!(fs::read_to_string(&path).unwrap(), "site_name: Demo\n");
    }

    #[test]
    fn test_patcher_writes_then_reports_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mkdocs.yml");
        fs::write(&path, MKDOCS).unwrap();
        let ids = modules(&["pkg.core"]);
        let patcher = NavPatcher::new(&path);

        assert_eq!(patcher.apply(&ids, true).unwrap(), NavOutcome::Patched);
        assert!(fs::read_to_string(&path).unwrap().contains("api/pkg_core.md"));
        assert_eq!(patcher.apply(&ids, true).unwrap(), NavOutcome::Unchanged);
    }

    #[test]
    fn test_plan_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mkdocs.yml");
        fs::write(&path, MKDOCS).unwrap();

        let update = NavPatcher::new(&path).plan(&modules(&["pkg"]), false).unwrap();

        assert_eq!(update.outcome, NavOutcome::Patched);
        assert!(update.content.is_some());
        assert_eq!(fs::read_to_string(&path).unwrap(), MKDOCS);
    }

    #[test]
    fn test_has_api_pages() {
        let temp_dir = TempDir::new().unwrap();
        let api = temp_dir.path().join("api");
        assert!(!has_api_pages(&api));

        fs::create_dir_all(&api).unwrap();
        assert!(!has_api_pages(&api));

        fs::write(api.join("pkg.md"), "").unwrap();
        assert!(has_api_pages(&api));
    }

    /// Lines that mention `nav` without opening a navigation block.
    fn near_miss_line() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("site_nav: x".to_string()),
            Just("# nav:".to_string()),
            Just("navigation: x".to_string()),
            Just("nav_title: y".to_string()),
            Just("extra_nav: []".to_string()),
            Just("  - nav.md".to_string()),
            Just(String::new()),
            "x[a-z_]{0,7}: [a-z. ]{0,12}",
            "  - [a-z]{1,6}: [a-z/]{1,8}\\.md",
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn text_without_marker_is_left_alone(
            lines in prop::collection::vec(near_miss_line(), 0..12),
            crlf in any::<bool>(),
        ) {
            let text = lines.join(if crlf { "\r\n" } else { "\n" });
            prop_assert!(patch_nav(&text, &[], true).is_none());

            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("mkdocs.yml");
            fs::write(&path, &text).unwrap();

            let outcome = NavPatcher::new(&path).apply(&modules(&["pkg"]), true).unwrap();
            prop_assert_eq!(outcome, NavOutcome::NoMarker);
            prop_assert_eq!(fs::read(&path).unwrap(), text.into_bytes());
        }
    }
}
