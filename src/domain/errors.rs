use std::io;
use thiserror::Error;

/// The OS network layer could not produce the data needed to pick a host address
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("error while getting localhost: could not determine default local address")]
    DefaultAddress(#[source] io::Error),
    #[error("error while getting localhost: hostname {0} resolves to no address")]
    NoAddressForHost(String),
    #[error("error while getting localhost: could not enumerate network interfaces")]
    Enumeration(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("unknown class {0}")]
    UnknownClass(String),
    #[error("class {0} is not a config rewriter")]
    NotARewriter(String),
}

/// A rewriter in the chain could not be found, built, or run
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("unable to find class config for config rewriter {name}")]
    MissingClass { name: String },
    #[error("unable to instantiate config rewriter {name} of class {class}")]
    Instantiate {
        name: String,
        class: String,
        #[source]
        source: CatalogError,
    },
    #[error("config rewriter {name} failed")]
    Rewrite {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

impl RewriteError {
    pub fn rewriter_name(&self) -> &str {
        match self {
            Self::MissingClass { name } => name,
            Self::Instantiate { name, .. } => name,
            Self::Rewrite { name, .. } => name,
        }
    }
}
