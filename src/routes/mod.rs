//! Application route declarations.
//!
//! # Layout
//! ```text
//! /auth            → lazy AUTH table (auth.rs)
//!     /login, /forgot-password, /reset-password
//!     ""           → redirect login (full)
//! /404             → not-found view
//! /**              → redirect 404
//! ```

pub mod app;
pub mod auth;

use crate::config::AppConfig;
use crate::routing::{LazyRoutes, LazyView, RouteRegistry, Router, RouterError};
use crate::views::{not_found::NOT_FOUND_VIEW, not_found_view, ViewDescriptor};

pub use app::app_routes;
pub use auth::auth_routes;

/// Registered name of the auth route table.
pub const AUTH_TABLE: &str = "auth";

/// Registry holding every view and table the application ships with.
pub fn default_registry() -> RouteRegistry {
    let mut registry = RouteRegistry::new();
    for name in [auth::LOGIN_VIEW, auth::FORGOT_PASSWORD_VIEW, auth::RESET_PASSWORD_VIEW] {
        registry.register_view(name, LazyView::new(move || ViewDescriptor::named(name)));
    }
    registry
        .register_view(NOT_FOUND_VIEW, LazyView::new(not_found_view))
        .register_table(AUTH_TABLE, LazyRoutes::new(auth_routes));
    registry
}

/// Build the router for a configuration: configured `[[routes]]` when
/// present, otherwise the built-in application table.
pub fn build_router(config: &AppConfig, registry: &RouteRegistry) -> Result<Router, RouterError> {
    let table = if config.routes.is_empty() {
        app_routes()
    } else {
        registry.build_table(&config.routes)?
    };

    tracing::debug!(entries = table.len(), configured = !config.routes.is_empty(), "Route table ready");
    Ok(Router::with_config(table, &config.navigation))
}
