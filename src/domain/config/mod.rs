mod config_map;
mod job_config;

pub use config_map::Config;
pub use job_config::JobConfig;
