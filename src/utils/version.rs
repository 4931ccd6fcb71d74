use crate::domain::config::{Config, JobConfig};
use crate::features::rewrite::ClassCatalog;

pub fn framework_version() -> String {
    non_empty_version(option_env!("CARGO_PKG_VERSION")).unwrap_or_else(|| {
        log::warn!(
            "Unable to find implementation version in build metadata. Defaulting to {}",
            JobConfig::FALLBACK_VERSION
        );
        JobConfig::FALLBACK_VERSION.to_string()
    })
}

/// Version of the configured application class, or the task class when no
/// application class is set. Never fails; anything missing yields the fallback.
pub fn task_class_version<C: ClassCatalog + ?Sized>(config: &Config, catalog: &C) -> String {
    let Some(class) = config.app_class().or_else(|| config.task_class()) else {
        log::warn!(
            "Unable to find app class or task class. Defaulting to {}",
            JobConfig::FALLBACK_VERSION
        );
        return JobConfig::FALLBACK_VERSION.to_string();
    };

    match catalog.implementation_version(class) {
        Ok(version) => non_empty_version(version.as_deref())
            .unwrap_or_else(|| JobConfig::FALLBACK_VERSION.to_string()),
        Err(e) => {
            log::warn!(
                "Ran into error while trying to get version of {}: {}. Defaulting to {}",
                class,
                e,
                JobConfig::FALLBACK_VERSION
            );
            JobConfig::FALLBACK_VERSION.to_string()
        }
    }
}

fn non_empty_version(version: Option<&str>) -> Option<String> {
    version.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::rewrite::RewriterRegistry;

    fn catalog() -> RewriterRegistry {
        let mut registry = RewriterRegistry::new();
        registry.register_class("com.example.App", Some("2.1.0"));
        registry.register_class("com.example.Task", Some("1.4.0"));
        registry.register_class("com.example.Unversioned", None);
        registry
    }

    #[test]
    fn test_framework_version_is_package_version() {
        assert_eq!(framework_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_app_class_takes_precedence() {
        let config = Config::from_iter([
            ("app.class", "com.example.App"),
            ("task.class", "com.example.Task"),
        ]);
        assert_eq!(task_class_version(&config, &catalog()), "2.1.0");
    }

    #[test]
    fn test_task_class_used_without_app_class() {
        let config = Config::from_iter([("task.class", "com.example.Task")]);
        assert_eq!(task_class_version(&config, &catalog()), "1.4.0");
    }

    #[test]
    fn test_fallback_without_any_class() {
        assert_eq!(task_class_version(&Config::new(), &catalog()), "0.0.1");
    }

    #[test]
    fn test_fallback_for_unversioned_class() {
        let config = Config::from_iter([("app.class", "com.example.Unversioned")]);
        assert_eq!(task_class_version(&config, &catalog()), "0.0.1");
    }

    #[test]
    fn test_non_empty_version() {
        assert_eq!(non_empty_version(Some("1.4.0")), Some("1.4.0".to_string()));
        assert_eq!(non_empty_version(Some("")), None);
        assert_eq!(non_empty_version(None), None);
    }

    #[test]
    fn test_fallback_for_empty_version() {
        let mut registry = catalog();
        registry.register_class("com.example.Blank", Some(""));
        let config = Config::from_iter([("task.class", "com.example.Blank")]);
        assert_eq!(task_class_version(&config, &registry), "0.0.1");
    }

    #[test]
    fn test_fallback_for_unknown_class() {
        let config = Config::from_iter([("app.class", "com.example.Missing")]);
        assert_eq!(task_class_version(&config, &catalog()), "0.0.1");
    }
}
