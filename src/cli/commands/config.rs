//! Config Command
//!
//! Inspect and initialize docstub configuration.
//!
//! Usage:
//!   docstub config show [-f toml|json|yaml]
//!   docstub config path
//!   docstub config init [--force]

use std::path::Path;

use crate::cli::ui::Output;
use crate::config::{Config, ConfigFormat, ConfigLoader};
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(config: &Config, format: ConfigFormat) -> Result<()> {
    println!("{}", ConfigLoader::render(config, format)?);
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Write a default `docstub.toml` into the project directory
pub fn init(project_dir: &Path, force: bool, output: &Output) -> Result<()> {
    let path = ConfigLoader::init_project(project_dir, force)?;
    output.success("Initialized project configuration");
    output.item(&format!("Config: {}", path.display()));
    Ok(())
}
