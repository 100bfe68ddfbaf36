//! Generate Command
//!
//! Locates the package, discovers its modules, writes the stub pages and
//! optionally patches the site navigation.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::analyzer::{DiscoveryFilter, ModuleDiscovery, PackageLocator};
use crate::cli::ui::Output;
use crate::cli::util::resolve;
use crate::config::Config;
use crate::docs::{DocEmitter, NavOutcome, NavPatcher, has_api_pages};
use crate::types::{ModuleId, Result};

/// Summary of one generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub package: String,
    pub modules: Vec<ModuleId>,
    /// Pages written, or that would be written in a dry run
    pub pages: Vec<PathBuf>,
    /// `None` when navigation updates were not requested
    pub nav: Option<NavOutcome>,
}

pub fn run(
    config: &Config,
    project_dir: &Path,
    dry_run: bool,
    output: &Output,
) -> Result<GenerationReport> {
    let package = PackageLocator::new(&config.layout).locate(project_dir)?;
    output.info(&format!("Found package: {}", package.name));

    let filter = DiscoveryFilter::from_config(&config.discovery)?;
    let modules = ModuleDiscovery::new(&config.layout)
        .with_filter(filter)
        .discover(&package)?;

    output.info(&format!("Discovered {} modules:", modules.len()));
    for module in &modules {
        output.item(module.as_str());
    }

    let emitter = DocEmitter::new(resolve(project_dir, &config.output.docs_dir));
    let pages = emitter.plan(&modules, config.output.individual);

    if dry_run {
        for page in &pages {
            output.info(&format!("Would write: {}", page.path.display()));
        }
    } else {
        emitter.write(&pages)?;
        if let Some(aggregate) = pages.first() {
            output.success(&format!("Generated: {}", aggregate.path.display()));
        }
        if config.output.individual {
            output.success(&format!(
                "Generated individual docs in: {}",
                emitter.api_dir().display()
            ));
        }
    }

    let nav = if config.nav.update {
        let patcher = NavPatcher::new(resolve(project_dir, &config.nav.file));
        let include_modules =
            has_api_pages(&emitter.api_dir()) || (dry_run && config.output.individual);

        let outcome = if dry_run {
            patcher.plan(&modules, include_modules)?.outcome
        } else {
            patcher.apply(&modules, include_modules)?
        };
        report_nav(output, patcher.nav_file(), outcome, dry_run);
        Some(outcome)
    } else {
        None
    };

    info!(
        package = %package.name,
        modules = modules.len(),
        pages = pages.len(),
        dry_run,
        "Generation finished"
    );

    Ok(GenerationReport {
        package: package.name,
        modules,
        pages: pages.into_iter().map(|p| p.path).collect(),
        nav,
    })
}

fn report_nav(output: &Output, nav_file: &Path, outcome: NavOutcome, dry_run: bool) {
    match outcome {
        NavOutcome::Patched if dry_run => {
            output.info(&format!("Would update navigation in: {}", nav_file.display()))
        }
        NavOutcome::Patched => {
            output.success(&format!("Updated navigation in: {}", nav_file.display()))
        }
        NavOutcome::Unchanged => {
            output.info(&format!("Navigation already up to date: {}", nav_file.display()))
        }
        NavOutcome::MissingFile => {
            output.warning(&format!("{} not found, navigation not updated", nav_file.display()))
        }
        NavOutcome::NoMarker => output.warning(&format!(
            "No nav section in {}, navigation not updated",
            nav_file.display()
        )),
    }
}
