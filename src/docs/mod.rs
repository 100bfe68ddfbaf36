//! Documentation Output
//!
//! - [`emitter`]: aggregate and per-module markdown stub pages
//! - [`nav`]: navigation block rewrite for the site configuration file

pub mod emitter;
pub mod nav;

pub use emitter::{DocEmitter, DocPage};
pub use nav::{NavOutcome, NavPatcher, NavUpdate, has_api_pages, patch_nav};
