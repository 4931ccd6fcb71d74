pub mod version;

use crate::domain::config::JobConfig;

pub use version::{framework_version, task_class_version};

pub fn get_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| JobConfig::UNKNOWN_HOSTNAME.to_string())
}

/// Make a string safe to pass through an environment variable
pub fn env_var_escape(value: &str) -> String {
    value.replace('"', "\\\"").replace('\'', "\\'")
}
