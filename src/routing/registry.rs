//! Named views and route tables for configuration-driven routes.
//!
//! # Responsibilities
//! - Map view names to lazy views
//! - Map table names to lazy route tables
//! - Build a RouteTable from `[[routes]]` configuration
//!
//! Registered entries are shared by clone, so a view loaded through one
//! table stays loaded for every table that references it.

use std::collections::HashMap;

use crate::config::RouteConfig;
use crate::routing::lazy::{LazyRoutes, LazyView};
use crate::routing::route::{Route, RouteTable};
use crate::routing::router::RouterError;

#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    views: HashMap<String, LazyView>,
    tables: HashMap<String, LazyRoutes>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_view(&mut self, name: impl Into<String>, view: LazyView) -> &mut Self {
        self.views.insert(name.into(), view);
        self
    }

    pub fn register_table(&mut self, name: impl Into<String>, table: LazyRoutes) -> &mut Self {
        self.tables.insert(name.into(), table);
        self
    }

    pub fn view(&self, name: &str) -> Option<&LazyView> {
        self.views.get(name)
    }

    pub fn table(&self, name: &str) -> Option<&LazyRoutes> {
        self.tables.get(name)
    }

    pub fn has_view(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Build a table from configured routes.
    /// Names are resolved eagerly; the views and tables they point at stay lazy.
    pub fn build_table(&self, configs: &[RouteConfig]) -> Result<RouteTable, RouterError> {
        configs.iter().map(|config| self.build_route(config)).collect()
    }

    fn build_route(&self, config: &RouteConfig) -> Result<Route, RouterError> {
        let mut route = Route::new(config.path.clone()).path_match(config.path_match);

        if let Some(title) = &config.title {
            route = route.title(title.clone());
        }
        if let Some(target) = &config.redirect_to {
            route = route.redirect_to(target.clone());
        }
        if let Some(name) = &config.component {
            let view = self.view(name).ok_or_else(|| RouterError::UnknownView {
                path: config.path.clone(),
                name: name.clone(),
            })?;
            route = route.view(view.clone());
        }
        if let Some(name) = &config.load_children {
            let table = self.table(name).ok_or_else(|| RouterError::UnknownTable {
                path: config.path.clone(),
                name: name.clone(),
            })?;
            route = route.lazy_children(table.clone());
        } else if !config.children.is_empty() {
            route = route.children(self.build_table(&config.children)?);
        }

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::matcher::PathMatch;
    use crate::views::ViewDescriptor;

    fn registry() -> RouteRegistry {
        let mut registry = RouteRegistry::new();
        registry
            .register_view("home", LazyView::new(|| ViewDescriptor::named("home")))
            .register_table("settings", LazyRoutes::new(RouteTable::default));
        registry
    }

    #[test]
    fn test_build_table_from_config() {
        let configs = vec![
            RouteConfig {
                path: "home".to_string(),
                component: Some("home".to_string()),
                title: Some("Home".to_string()),
                ..RouteConfig::default()
            },
            RouteConfig {
                path: "settings".to_string(),
                load_children: Some("settings".to_string()),
                ..RouteConfig::default()
            },
            RouteConfig {
                path: "".to_string(),
                redirect_to: Some("home".to_string()),
                path_match: PathMatch::Full,
                ..RouteConfig::default()
            },
        ];

        let table = registry().build_table(&configs).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.routes()[0].get_title(), Some("Home"));
        assert!(table.routes()[1].get_children().is_some());
        assert_eq!(table.routes()[2].get_path_match(), PathMatch::Full);
    }

    #[test]
    fn test_unknown_view_rejected() {
        let configs = vec![RouteConfig {
            path: "reports".to_string(),
            component: Some("reports".to_string()),
            ..RouteConfig::default()
        }];

        let err = registry().build_table(&configs).unwrap_err();
        assert!(matches!(err, RouterError::UnknownView { name, .. } if name == "reports"));
    }
}
