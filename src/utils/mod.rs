pub mod config;
pub mod environment;
pub mod paths;

pub use config::Config;
pub use environment::get_worklog_dir;
pub use paths::{format_path_with_tilde, validate_file_size};
