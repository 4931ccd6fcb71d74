pub mod domain;
pub mod features;
pub mod utils;

pub use domain::config::Config;
pub use domain::errors::{CatalogError, ResolutionError, RewriteError};
pub use features::resolver::{get_local_host, LocalHostResolver, NetworkProvider, SystemNetwork};
pub use features::rewrite::{ClassCatalog, ConfigRewriteChain, ConfigRewriter, RewriterRegistry};
