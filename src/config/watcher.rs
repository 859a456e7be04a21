//! Configuration file watcher for hot reload.
//!
//! Only configurations that parse and validate against the route registry
//! reach the channel; a broken edit is logged and the running table stays.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::AppConfig;
use crate::routing::RouteRegistry;

/// Outcome of one reload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reload {
    /// New configuration sent to the receiver.
    Applied,
    /// File did not load or validate; nothing sent.
    Rejected,
    /// Receiver is gone; nothing left to notify.
    Closed,
}

/// Watches one configuration file and forwards validated reloads.
pub struct ConfigWatcher {
    path: PathBuf,
    registry: RouteRegistry,
    updates: mpsc::UnboundedSender<AppConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and the receiving end for validated configurations.
    pub fn new(path: &Path, registry: RouteRegistry) -> (Self, mpsc::UnboundedReceiver<AppConfig>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            registry,
            updates,
        };
        (watcher, rx)
    }

    /// Load the file once and forward it if valid.
    pub fn reload(&self) -> Reload {
        match load_config(&self.path, &self.registry) {
            Ok(config) => match self.updates.send(config) {
                Ok(()) => {
                    tracing::info!(path = %self.path.display(), "Configuration reloaded");
                    Reload::Applied
                }
                Err(_) => {
                    tracing::debug!(path = %self.path.display(), "Reload receiver dropped");
                    Reload::Closed
                }
            },
            Err(error) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %error,
                    "Configuration rejected, keeping current routes"
                );
                Reload::Rejected
            }
        }
    }

    /// Start watching. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    tracing::debug!(kind = ?event.kind, "Configuration file changed");
                    self.reload();
                }
                Ok(_) => {}
                Err(error) => tracing::error!(error = %error, "Configuration watch failed"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %path.display(), "Config watcher started");
        Ok(watcher)
    }
}
