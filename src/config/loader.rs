//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::RouteRegistry;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str, registry: &RouteRegistry) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config, registry).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path, registry: &RouteRegistry) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, registry)?;

    tracing::debug!(path = %path.display(), routes = config.routes.len(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::default_registry;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("", &default_registry()).unwrap();
        assert_eq!(config.navigation.not_found_path, "/404");
        assert_eq!(config.navigation.max_redirects, 16);
        assert_eq!(config.forms.password_min_length, 8);
        assert_eq!(config.forms.mismatch_error_key, "mismatch");
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_parse_routes() {
        let content = r#"
            [forms]
            password_min_length = 12

            [[routes]]
            path = "auth"
            load_children = "auth"

            [[routes]]
            path = "404"
            component = "not-found"
            title = "Page Not Found"

            [[routes]]
            path = "**"
            redirect_to = "404"
        "#;

        let config = parse_config(content, &default_registry()).unwrap();
        assert_eq!(config.forms.password_min_length, 12);
        assert_eq!(config.routes.len(), 3);
        assert_eq!(config.routes[2].redirect_to.as_deref(), Some("404"));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = parse_config("[navigation\n", &default_registry()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("does-not-exist.toml"), &default_registry()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
