use crate::domain::config::{Config, JobConfig};
use crate::features::rewrite::ConfigRewriter;

/// Overlays `HOSTPREP_*` environment variables onto the configuration.
///
/// `HOSTPREP_JOB_NAME=wordcount` becomes `job.name = wordcount`.
pub struct EnvironmentConfigRewriter {
    vars: Vec<(String, String)>,
}

impl EnvironmentConfigRewriter {
    pub const CLASS_NAME: &'static str = "hostprep.EnvironmentConfigRewriter";

    /// Snapshots the process environment, skipping non-unicode entries
    pub fn new() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Default for EnvironmentConfigRewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigRewriter for EnvironmentConfigRewriter {
    fn rewrite(&self, name: &str, config: &Config) -> anyhow::Result<Config> {
        let mut rewritten = config.clone();
        for (var, value) in &self.vars {
            let Some(key) = env_var_to_key(var) else {
                continue;
            };
            log::debug!("Rewriter {} setting {} from environment", name, key);
            rewritten = rewritten.with(key, value.as_str());
        }
        Ok(rewritten)
    }
}

fn env_var_to_key(var: &str) -> Option<String> {
    let stripped = var.strip_prefix(JobConfig::ENV_PREFIX)?;
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.to_lowercase().replace('_', "."))
}
