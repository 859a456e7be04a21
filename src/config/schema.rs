//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section has defaults so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::forms::field_match::DEFAULT_ERROR_KEY;
use crate::routing::PathMatch;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Navigation settings (fallback path, redirect limit).
    pub navigation: NavigationConfig,

    /// Form validation settings.
    pub forms: FormsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Root route table. Empty means the built-in application routes.
    pub routes: Vec<RouteConfig>,
}

/// Navigation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Absolute path navigated to when nothing matches. Empty disables it.
    pub not_found_path: String,

    /// Maximum redirects followed in one navigation.
    pub max_redirects: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            not_found_path: "/404".to_string(),
            max_redirects: 16,
        }
    }
}

/// Form validation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Minimum password length on password forms.
    pub password_min_length: usize,

    /// Error key written when two fields must match but do not.
    pub mismatch_error_key: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            password_min_length: 8,
            mismatch_error_key: DEFAULT_ERROR_KEY.to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

/// A configured route entry.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RouteConfig {
    /// Path pattern, without a leading slash. `**` is the catch-all.
    pub path: String,

    /// `prefix` (default) or `full`.
    #[serde(default)]
    pub path_match: PathMatch,

    /// Display title.
    #[serde(default)]
    pub title: Option<String>,

    /// Redirect target. Absolute when it starts with `/`.
    #[serde(default)]
    pub redirect_to: Option<String>,

    /// Registered view name.
    #[serde(default)]
    pub component: Option<String>,

    /// Registered lazy route table name.
    #[serde(default)]
    pub load_children: Option<String>,

    /// Inline nested routes.
    #[serde(default)]
    pub children: Vec<RouteConfig>,
}
