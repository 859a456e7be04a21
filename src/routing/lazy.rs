//! Deferred producers for route targets.
//!
//! # Design Decisions
//! - A lazy target is a zero-argument factory, not a value
//! - The factory runs at most once; the result is memoized on the entry
//! - Clones share the memoized cell, so a cloned table never reloads

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::routing::route::RouteTable;
use crate::views::ViewDescriptor;

/// A lazily produced view.
pub type LazyView = Lazy<ViewDescriptor>;

/// A lazily produced nested route table.
pub type LazyRoutes = Lazy<RouteTable>;

/// Memoizing wrapper around a factory.
pub struct Lazy<T> {
    factory: Arc<dyn Fn() -> T + Send + Sync>,
    cell: Arc<OnceLock<Arc<T>>>,
}

impl<T> Lazy<T> {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// Produce the value, running the factory on first use only.
    pub fn get(&self) -> Arc<T> {
        self.cell
            .get_or_init(|| {
                tracing::debug!(target_type = std::any::type_name::<T>(), "Loading deferred route target");
                Arc::new((self.factory)())
            })
            .clone()
    }

    /// Whether the factory has already run.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
            cell: self.cell.clone(),
        }
    }
}

impl<T> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
