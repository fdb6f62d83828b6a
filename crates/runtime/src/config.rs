use std::path::Path;

pub const PROGRAM_NAME: &str = "myls";
pub const PROGRAM_LOG_LEVEL: &str = "MYLS_LOG_LEVEL";

/// Placeholder shown when a uid or gid has no entry in the identity database.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Directory listed when no paths are given on the command line.
pub fn current_dir_target() -> &'static Path {
    Path::new(".")
}
