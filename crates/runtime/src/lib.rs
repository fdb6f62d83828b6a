mod config;
pub mod logging;

pub use config::{NOT_AVAILABLE, PROGRAM_LOG_LEVEL, PROGRAM_NAME, current_dir_target};

pub use logging::init;
