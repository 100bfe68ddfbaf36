//! Doc Page Emitter
//!
//! Renders the aggregate reference page and the optional per-module pages.
//! Rendering is pure; `write` performs the only filesystem access.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::pages::{AGGREGATE_INTRO, AGGREGATE_TITLE, API_DIR, MODULES_PAGE};
use crate::types::{ModuleId, Result};

/// A rendered page and the path it is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPage {
    pub path: PathBuf,
    pub content: String,
}

/// Generator for markdown stub pages
pub struct DocEmitter {
    docs_dir: PathBuf,
}

impl DocEmitter {
    pub fn new<P: AsRef<Path>>(docs_dir: P) -> Self {
        Self {
            docs_dir: docs_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the per-module pages
    pub fn api_dir(&self) -> PathBuf {
        self.docs_dir.join(API_DIR)
    }

    /// Every page for one run: the aggregate page, then per-module pages
    /// when `individual` is set.
    pub fn plan(&self, modules: &[ModuleId], individual: bool) -> Vec<DocPage> {
        let mut pages = vec![self.render_aggregate(modules)];
        if individual {
            pages.extend(self.render_individual(modules));
        }
        pages
    }

    /// Render `modules.md`: a title, an intro, then a heading and directive
    /// per module.
    pub fn render_aggregate(&self, modules: &[ModuleId]) -> DocPage {
        let mut lines = vec![
            format!("# {}", AGGREGATE_TITLE),
            String::new(),
            AGGREGATE_INTRO.to_string(),
            String::new(),
        ];

        for module in modules {
            lines.push(format!("## {}", module.heading_title()));
            lines.push(String::new());
            lines.push(module.directive());
            lines.push(String::new());
        }

        DocPage {
            path: self.docs_dir.join(MODULES_PAGE),
            content: lines.join("\n"),
        }
    }

    /// Render one page per module under `api/`.
    pub fn render_individual(&self, modules: &[ModuleId]) -> Vec<DocPage> {
        let api_dir = self.api_dir();

        modules
            .iter()
            .map(|module| DocPage {
                path: api_dir.join(module.page_file_name()),
                content: [
                    format!("# {}", module),
                    String::new(),
                    module.directive(),
                    String::new(),
                ]
                .join("\n"),
            })
            .collect()
    }

    /// Write pages, creating parent directories. Existing files are replaced.
    pub fn write(&self, pages: &[DocPage]) -> Result<()> {
        for page in pages {
            if let Some(parent) = page.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&page.path, &page.content)?;
            debug!("Wrote {}", page.path.display());
        }

        info!(
            "Wrote {} page(s) to {}",
            pages.len(),
            self.docs_dir.display()
        );
        Ok(())
    }
}
