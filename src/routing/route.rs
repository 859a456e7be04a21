//! Route entries and ordered route tables.

use std::sync::Arc;

use serde::Serialize;

use crate::routing::lazy::{LazyRoutes, LazyView};
use crate::routing::matcher::{PathMatch, PathPattern};
use crate::views::ViewDescriptor;

/// Nested routes below an entry.
#[derive(Debug, Clone)]
pub enum Children {
    Eager(Arc<RouteTable>),
    Lazy(LazyRoutes),
}

impl Children {
    /// Return the nested table, loading it if deferred.
    pub fn table(&self) -> Arc<RouteTable> {
        match self {
            Children::Eager(table) => table.clone(),
            Children::Lazy(lazy) => lazy.get(),
        }
    }

    fn loaded(&self) -> Option<Arc<RouteTable>> {
        match self {
            Children::Eager(table) => Some(table.clone()),
            Children::Lazy(lazy) if lazy.is_loaded() => Some(lazy.get()),
            Children::Lazy(_) => None,
        }
    }
}

/// A single path-to-destination mapping.
#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    pattern: PathPattern,
    path_match: PathMatch,
    title: Option<String>,
    redirect_to: Option<String>,
    view: Option<LazyView>,
    children: Option<Children>,
}

impl Route {
    /// Create an entry for `path` with no target yet.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            pattern: PathPattern::parse(&path),
            path,
            path_match: PathMatch::default(),
            title: None,
            redirect_to: None,
            view: None,
            children: None,
        }
    }

    /// Shorthand for a redirect entry.
    pub fn redirect(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(path).redirect_to(target)
    }

    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect_to = Some(target.into());
        self
    }

    pub fn path_match(mut self, path_match: PathMatch) -> Self {
        self.path_match = path_match;
        self
    }

    /// Require the pattern to consume the whole remaining URL.
    pub fn full(self) -> Self {
        self.path_match(PathMatch::Full)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn view(mut self, view: LazyView) -> Self {
        self.view = Some(view);
        self
    }

    /// Defer view creation until the entry is first activated.
    pub fn load_view<F>(self, factory: F) -> Self
    where
        F: Fn() -> ViewDescriptor + Send + Sync + 'static,
    {
        self.view(LazyView::new(factory))
    }

    pub fn children(mut self, table: RouteTable) -> Self {
        self.children = Some(Children::Eager(Arc::new(table)));
        self
    }

    pub fn lazy_children(mut self, routes: LazyRoutes) -> Self {
        self.children = Some(Children::Lazy(routes));
        self
    }

    /// Defer nested table creation until the parent segment matches.
    pub fn load_children<F>(self, factory: F) -> Self
    where
        F: Fn() -> RouteTable + Send + Sync + 'static,
    {
        self.lazy_children(LazyRoutes::new(factory))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn get_path_match(&self) -> PathMatch {
        self.path_match
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn get_redirect(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }

    pub fn get_view(&self) -> Option<&LazyView> {
        self.view.as_ref()
    }

    pub fn get_children(&self) -> Option<&Children> {
        self.children.as_ref()
    }

    /// Summarize the entry. Lazy children are only expanded when `expand`
    /// is set or they were already loaded.
    pub fn describe(&self, expand: bool) -> RouteSummary {
        let table = self
            .children
            .as_ref()
            .and_then(|children| if expand { Some(children.table()) } else { children.loaded() });
        let deferred_children = self.children.is_some() && table.is_none();

        RouteSummary {
            path: self.path.clone(),
            path_match: self.path_match,
            title: self.title.clone(),
            redirect_to: self.redirect_to.clone(),
            view: self.view.as_ref().map(|view| {
                if expand || view.is_loaded() {
                    view.get().name.clone()
                } else {
                    "(deferred)".to_string()
                }
            }),
            children: table.map(|table| table.describe(expand)),
            deferred_children,
        }
    }
}

/// An ordered list of route entries. First match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn describe(&self, expand: bool) -> Vec<RouteSummary> {
        self.routes.iter().map(|r| r.describe(expand)).collect()
    }
}

impl FromIterator<Route> for RouteTable {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Serializable view of a route entry (used by the CLI).
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub path: String,
    pub path_match: PathMatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteSummary>>,
    /// Set when the entry has a lazy table that has not been loaded.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deferred_children: bool,
}
