use glob::Pattern;
use ignore::WalkBuilder;

use crate::config::DiscoveryConfig;
use crate::types::{DocStubError, ModuleId, Result};

/// Optional pruning applied during module discovery.
///
/// The default filter keeps everything.
#[derive(Default)]
pub struct DiscoveryFilter {
    respect_gitignore: bool,
    exclude: Vec<Pattern>,
}

impl DiscoveryFilter {
    /// A filter that keeps every path and identifier
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_config(config: &DiscoveryConfig) -> Result<Self> {
        Ok(Self {
            respect_gitignore: config.respect_gitignore,
            exclude: Self::compile(&config.exclude)?,
        })
    }

    fn compile(patterns: &[String]) -> Result<Vec<Pattern>> {
        patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| DocStubError::Pattern {
                    pattern: p.clone(),
                    message: e.msg.to_string(),
                })
            })
            .collect()
    }

    pub fn respects_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    /// Apply the ignore-file rules to a walker.
    ///
    /// When enabled, nested `.gitignore` files, `.git/info/exclude` and the
    /// global excludes file all apply, as do `.gitignore` files above the
    /// walk root. Outside a git repository the rules still apply.
    pub fn configure(&self, builder: &mut WalkBuilder) {
        let git = self.respect_gitignore;
        builder
            .git_ignore(git)
            .git_global(git)
            .git_exclude(git)
            .parents(git)
            .require_git(false)
            .ignore(false);
    }

    pub fn is_excluded(&self, module: &ModuleId) -> bool {
        self.exclude.iter().any(|p| p.matches(module.as_str()))
    }
}
