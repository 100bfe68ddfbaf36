pub mod error;
pub mod module;
pub mod utils;

pub use error::{DocStubError, Result, ResultExt};
pub use module::{ModuleId, PackageRoot};
pub use utils::{indentation, title_case};
