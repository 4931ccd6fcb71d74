use crate::domain::config::{Config, JobConfig};
use crate::domain::errors::RewriteError;
use crate::features::rewrite::ClassCatalog;

/// Applies the rewriters named under `job.config.rewriters`, in list order
pub struct ConfigRewriteChain<'a, C: ClassCatalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: ClassCatalog + ?Sized> ConfigRewriteChain<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Runs every configured rewriter, each on the previous one's output.
    ///
    /// Without a rewriter list the input comes back unchanged. Names are split
    /// on `,` verbatim, so empty tokens are looked up like any other name.
    pub fn rewrite_all(&self, config: &Config) -> Result<Config, RewriteError> {
        let Some(rewriters) = config.config_rewriters() else {
            return Ok(config.clone());
        };

        rewriters
            .split(JobConfig::REWRITER_SEPARATOR)
            .try_fold(config.clone(), |current, name| self.apply_rewriter(&current, name))
    }

    /// Instantiates the rewriter configured for `name` and runs it once
    pub fn apply_rewriter(&self, config: &Config, name: &str) -> Result<Config, RewriteError> {
        let class = config
            .config_rewriter_class(name)
            .ok_or_else(|| RewriteError::MissingClass {
                name: name.to_string(),
            })?;

        let rewriter = self
            .catalog
            .instantiate(class)
            .map_err(|source| RewriteError::Instantiate {
                name: name.to_string(),
                class: class.to_string(),
                source,
            })?;

        log::info!("Re-writing config with {} ({})", name, class);
        rewriter
            .rewrite(name, config)
            .map_err(|source| RewriteError::Rewrite {
                name: name.to_string(),
                source,
            })
    }
}
