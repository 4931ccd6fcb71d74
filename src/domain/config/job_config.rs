pub struct JobConfig;

impl JobConfig {
    pub const APP_CLASS: &'static str = "app.class";
    pub const TASK_CLASS: &'static str = "task.class";
    pub const CONFIG_REWRITERS: &'static str = "job.config.rewriters";
    pub const REWRITER_SEPARATOR: char = ',';
    pub const FALLBACK_VERSION: &'static str = "0.0.1";
    pub const UNKNOWN_HOSTNAME: &'static str = "Unknown";

    // Environment overlay
    pub const ENV_PREFIX: &'static str = "HOSTPREP_";

    pub fn config_rewriter_class_key(name: &str) -> String {
        format!("job.config.rewriter.{}.class", name)
    }
}
