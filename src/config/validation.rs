//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (routes reference registered views/tables)
//! - Check route table ordering (catch-all last)
//! - Validate value ranges (redirect limit, absolute fallback path, log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure: (AppConfig, RouteRegistry) → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use tracing::level_filters::LevelFilter;

use crate::config::schema::{AppConfig, RouteConfig};
use crate::routing::{PathMatch, RouteRegistry, CATCH_ALL};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("catch-all route in table '{table}' must be last (found at position {index})")]
    CatchAllNotLast { table: String, index: usize },

    #[error("route '{path}' redirects from an empty path and must use path_match = \"full\"")]
    EmptyRedirectNotFull { path: String },

    #[error("route path '{path}' must not start with '/'")]
    LeadingSlash { path: String },

    #[error("route '{path}' has no redirect, component or children")]
    NoTarget { path: String },

    #[error("route '{path}' cannot combine redirect_to with component or children")]
    RedirectWithTarget { path: String },

    #[error("route '{path}' cannot declare both children and load_children")]
    ChildrenAndLoadChildren { path: String },

    #[error("route '{path}' references unknown view '{name}'")]
    UnknownView { path: String, name: String },

    #[error("route '{path}' references unknown route table '{name}'")]
    UnknownTable { path: String, name: String },

    #[error("route '{path}' has an empty parameter segment")]
    EmptyParameter { path: String },

    #[error("'**' must be the whole path, found '{path}'")]
    MisplacedCatchAll { path: String },

    #[error("navigation.max_redirects must be greater than 0")]
    ZeroMaxRedirects,

    #[error("navigation.not_found_path '{0}' must be absolute")]
    RelativeNotFoundPath(String),

    #[error("forms.mismatch_error_key must not be empty")]
    EmptyErrorKey,

    #[error("observability.log_level '{0}' is not one of off, error, warn, info, debug, trace")]
    InvalidLogLevel(String),
}

/// Validate the configuration, collecting every error.
pub fn validate_config(config: &AppConfig, registry: &RouteRegistry) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.navigation.max_redirects == 0 {
        errors.push(ValidationError::ZeroMaxRedirects);
    }
    let not_found = &config.navigation.not_found_path;
    if !not_found.is_empty() && !not_found.starts_with('/') {
        errors.push(ValidationError::RelativeNotFoundPath(not_found.clone()));
    }
    if config.forms.mismatch_error_key.is_empty() {
        errors.push(ValidationError::EmptyErrorKey);
    }
    let log_level = &config.observability.log_level;
    if log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(log_level.clone()));
    }

    validate_table(&config.routes, "/", registry, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_table(routes: &[RouteConfig], table: &str, registry: &RouteRegistry, errors: &mut Vec<ValidationError>) {
    let last = routes.len().saturating_sub(1);
    for (index, route) in routes.iter().enumerate() {
        if route.path == CATCH_ALL && index != last {
            errors.push(ValidationError::CatchAllNotLast {
                table: table.to_string(),
                index,
            });
        }
        validate_route(route, registry, errors);

        if !route.children.is_empty() {
            let nested = format!("{}/{}", table.trim_end_matches('/'), route.path);
            validate_table(&route.children, &nested, registry, errors);
        }
    }
}

fn validate_route(route: &RouteConfig, registry: &RouteRegistry, errors: &mut Vec<ValidationError>) {
    let path = route.path.clone();

    if route.path.starts_with('/') {
        errors.push(ValidationError::LeadingSlash { path: path.clone() });
    }
    for segment in route.path.split('/') {
        if segment == ":" {
            errors.push(ValidationError::EmptyParameter { path: path.clone() });
        }
        if segment == CATCH_ALL && route.path != CATCH_ALL {
            errors.push(ValidationError::MisplacedCatchAll { path: path.clone() });
        }
    }

    let has_children = route.load_children.is_some() || !route.children.is_empty();
    let has_target = route.component.is_some() || has_children;

    match &route.redirect_to {
        Some(_) if has_target => errors.push(ValidationError::RedirectWithTarget { path: path.clone() }),
        Some(_) if route.path.is_empty() && route.path_match != PathMatch::Full => {
            errors.push(ValidationError::EmptyRedirectNotFull { path: path.clone() })
        }
        Some(_) => {}
        None if !has_target => errors.push(ValidationError::NoTarget { path: path.clone() }),
        None => {}
    }

    if route.load_children.is_some() && !route.children.is_empty() {
        errors.push(ValidationError::ChildrenAndLoadChildren { path: path.clone() });
    }
    if let Some(name) = &route.component {
        if !registry.has_view(name) {
            errors.push(ValidationError::UnknownView {
                path: path.clone(),
                name: name.clone(),
            });
        }
    }
    if let Some(name) = &route.load_children {
        if !registry.has_table(name) {
            errors.push(ValidationError::UnknownTable {
                path,
                name: name.clone(),
            });
        }
    }
}
