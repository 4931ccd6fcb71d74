use std::collections::HashMap;
use crate::domain::errors::CatalogError;
use crate::features::rewrite::{ClassCatalog, ConfigRewriter, EnvironmentConfigRewriter};

type RewriterFactory = Box<dyn Fn() -> Box<dyn ConfigRewriter>>;

struct Registration {
    factory: Option<RewriterFactory>,
    version: Option<String>,
}

/// In-process class catalog: class names mapped to rewriter factories and versions
#[derive(Default)]
pub struct RewriterRegistry {
    classes: HashMap<String, Registration>,
}

impl RewriterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the rewriters shipped in this crate
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_rewriter(
            EnvironmentConfigRewriter::CLASS_NAME,
            Some(env!("CARGO_PKG_VERSION")),
            || Box::new(EnvironmentConfigRewriter::new()) as Box<dyn ConfigRewriter>,
        );
        registry
    }

    pub fn register_rewriter<F>(&mut self, class_name: &str, version: Option<&str>, factory: F)
    where
        F: Fn() -> Box<dyn ConfigRewriter> + 'static,
    {
        self.classes.insert(
            class_name.to_string(),
            Registration {
                factory: Some(Box::new(factory)),
                version: version.map(str::to_string),
            },
        );
    }

    /// Registers a class that only carries version metadata, such as a task class
    pub fn register_class(&mut self, class_name: &str, version: Option<&str>) {
        self.classes.insert(
            class_name.to_string(),
            Registration {
                factory: None,
                version: version.map(str::to_string),
            },
        );
    }

    fn lookup(&self, class_name: &str) -> Result<&Registration, CatalogError> {
        self.classes
            .get(class_name)
            .ok_or_else(|| CatalogError::UnknownClass(class_name.to_string()))
    }
}

impl ClassCatalog for RewriterRegistry {
    fn instantiate(&self, class_name: &str) -> Result<Box<dyn ConfigRewriter>, CatalogError> {
        let factory = self
            .lookup(class_name)?
            .factory
            .as_ref()
            .ok_or_else(|| CatalogError::NotARewriter(class_name.to_string()))?;
        Ok(factory())
    }

    fn implementation_version(&self, class_name: &str) -> Result<Option<String>, CatalogError> {
        Ok(self.lookup(class_name)?.version.clone())
    }
}
