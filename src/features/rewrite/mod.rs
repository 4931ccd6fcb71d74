pub mod environment_rewriter;
pub mod registry;
pub mod rewrite_chain;

use crate::domain::config::Config;
use crate::domain::errors::CatalogError;

pub use environment_rewriter::EnvironmentConfigRewriter;
pub use registry::RewriterRegistry;
pub use rewrite_chain::ConfigRewriteChain;

/// A pluggable transformation applied to the configuration before startup
pub trait ConfigRewriter {
    fn rewrite(&self, name: &str, config: &Config) -> anyhow::Result<Config>;
}

/// Looks up implementations by class name
pub trait ClassCatalog {
    /// Builds a fresh rewriter for `class_name`
    fn instantiate(&self, class_name: &str) -> Result<Box<dyn ConfigRewriter>, CatalogError>;
    fn implementation_version(&self, class_name: &str) -> Result<Option<String>, CatalogError>;
}
