mod error;
pub mod format;
mod identity;
mod inspect;
mod record;
mod walker;

pub use error::{InspectError, system_error_text};
pub use identity::{IdentitySource, SystemIdentities};
pub use inspect::{Inspector, inspect};
pub use record::{FileRecord, FileType};
pub use walker::{DirListing, list_current_directory, list_directory, list_directory_with};
