//! Route lookup and navigation.
//!
//! # Responsibilities
//! - Walk route tables in declaration order
//! - Descend into nested (and lazily loaded) tables
//! - Apply redirects and restart from the root
//! - Return the matched chain or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Backtracking: a parent whose children all fail does not match
//! - Redirect count is bounded to break cycles
//! - `navigate` falls back to the not-found path; `recognize` never does

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use percent_encoding::percent_decode_str;
use serde::Serialize;
use url::Url;

use crate::config::NavigationConfig;
use crate::routing::route::RouteTable;
use crate::views::ViewDescriptor;

/// Base used to normalize paths.
const BASE_URL: &str = "http://localhost/";

/// Errors raised during route resolution.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("cannot match any routes for url '{0}'")]
    NoMatch(String),

    #[error("redirect limit of {limit} exceeded while navigating to '{url}'")]
    RedirectLoop { url: String, limit: usize },

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("route '{path}' references unknown view '{name}'")]
    UnknownView { path: String, name: String },

    #[error("route '{path}' references unknown route table '{name}'")]
    UnknownTable { path: String, name: String },
}

/// One matched entry in the resolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedRoute {
    /// The entry's path pattern.
    pub path: String,
    /// URL segments the entry consumed.
    pub segments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

/// Successful navigation result.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Final URL after redirects.
    pub url: String,
    /// URLs visited before each redirect, in order.
    pub redirects: Vec<String>,
    /// Matched entries from root to leaf.
    pub matched: Vec<MatchedRoute>,
    /// The activated view.
    pub view: ViewDescriptor,
    /// Deepest title along the chain.
    pub title: Option<String>,
    /// All captured parameters.
    pub params: BTreeMap<String, String>,
    /// True when the URL did not match and the not-found path was used.
    pub fallback: bool,
}

enum Outcome {
    Matched {
        chain: Vec<MatchedRoute>,
        view: Arc<ViewDescriptor>,
    },
    Redirect(Vec<String>),
}

/// Resolves URLs against a root route table.
#[derive(Debug, Clone)]
pub struct Router {
    root: Arc<RouteTable>,
    not_found_path: Option<String>,
    max_redirects: usize,
}

impl Router {
    /// Create a router with the default navigation settings.
    pub fn new(root: RouteTable) -> Self {
        Self::with_config(root, &NavigationConfig::default())
    }

    pub fn with_config(root: RouteTable, config: &NavigationConfig) -> Self {
        let not_found_path = Some(config.not_found_path.clone()).filter(|p| !p.is_empty());
        Self {
            root: Arc::new(root),
            not_found_path,
            max_redirects: config.max_redirects,
        }
    }

    /// Disable the not-found fallback; unmatched URLs become errors.
    pub fn without_fallback(mut self) -> Self {
        self.not_found_path = None;
        self
    }

    pub fn root(&self) -> &RouteTable {
        &self.root
    }

    /// Resolve `url`, redirecting to the not-found path when nothing matches.
    pub fn navigate(&self, url: &str) -> Result<Resolution, RouterError> {
        match self.recognize(url) {
            Err(RouterError::NoMatch(unmatched)) => {
                let Some(fallback) = &self.not_found_path else {
                    return Err(RouterError::NoMatch(unmatched));
                };
                tracing::warn!(url = %unmatched, fallback = %fallback, "No route matched, using not-found path");

                let mut resolution = self.recognize(fallback)?;
                resolution.redirects.insert(0, unmatched);
                resolution.fallback = true;
                Ok(resolution)
            }
            other => other,
        }
    }

    /// Resolve `url` strictly.
    pub fn recognize(&self, url: &str) -> Result<Resolution, RouterError> {
        let mut segments = normalize(url)?;
        let mut redirects = Vec::new();

        loop {
            let current = join_segments(&segments);
            match self.match_table(&self.root, &[], &segments, &BTreeMap::new()) {
                None => return Err(RouterError::NoMatch(current)),
                Some(Outcome::Redirect(next)) => {
                    if redirects.len() >= self.max_redirects {
                        return Err(RouterError::RedirectLoop {
                            url: url.to_string(),
                            limit: self.max_redirects,
                        });
                    }
                    tracing::debug!(from = %current, to = %join_segments(&next), "Applying redirect");
                    redirects.push(current);
                    segments = next;
                }
                Some(Outcome::Matched { chain, view }) => {
                    let title = chain.iter().rev().find_map(|m| m.title.clone());
                    let params = chain
                        .iter()
                        .flat_map(|m| m.params.iter().map(|(k, v)| (k.clone(), v.clone())))
                        .collect();

                    tracing::debug!(url = %current, view = %view.name, redirects = redirects.len(), "Route resolved");
                    return Ok(Resolution {
                        url: current,
                        redirects,
                        matched: chain,
                        view: view.as_ref().clone(),
                        title,
                        params,
                        fallback: false,
                    });
                }
            }
        }
    }

    fn match_table(
        &self,
        table: &RouteTable,
        parent: &[String],
        remaining: &[String],
        params: &BTreeMap<String, String>,
    ) -> Option<Outcome> {
        for route in table.routes() {
            let Some(m) = route.pattern().match_segments(remaining, route.get_path_match()) else {
                continue;
            };
            let (consumed, rest) = remaining.split_at(m.consumed);

            let mut merged = params.clone();
            merged.extend(m.params.iter().map(|(k, v)| (k.clone(), v.clone())));

            if let Some(target) = route.get_redirect() {
                return Some(Outcome::Redirect(build_redirect(target, parent, rest, &merged)));
            }

            let matched = MatchedRoute {
                path: route.path().to_string(),
                segments: consumed.to_vec(),
                title: route.get_title().map(String::from),
                params: m.params,
            };

            if let Some(children) = route.get_children() {
                let table = children.table();
                let mut child_parent = parent.to_vec();
                child_parent.extend_from_slice(consumed);

                match self.match_table(&table, &child_parent, rest, &merged) {
                    Some(Outcome::Matched { mut chain, view }) => {
                        chain.insert(0, matched);
                        return Some(Outcome::Matched { chain, view });
                    }
                    Some(redirect) => return Some(redirect),
                    None => {}
                }
            }

            if rest.is_empty() {
                if let Some(view) = route.get_view() {
                    return Some(Outcome::Matched {
                        chain: vec![matched],
                        view: view.get(),
                    });
                }
            }

            tracing::trace!(path = %route.path(), "Entry matched structurally but could not activate, backtracking");
        }
        None
    }
}

/// Reduce navigation input to decoded path segments.
///
/// Query and fragment are dropped and dot segments resolved. Input carrying
/// a scheme is not a path and is rejected, so a host can never be skipped
/// over; a leading `//` is just an empty segment.
fn normalize(input: &str) -> Result<Vec<String>, RouterError> {
    let invalid = |reason: String| RouterError::InvalidUrl {
        url: input.to_string(),
        reason,
    };

    if Url::parse(input).is_ok() {
        return Err(invalid("expected a path, found an absolute url".to_string()));
    }

    let path = input.split(|c| c == '?' || c == '#').next().unwrap_or_default();
    let mut url = Url::parse(BASE_URL).map_err(|e| invalid(e.to_string()))?;
    url.set_path(path);

    split_segments(url.path())
        .iter()
        .map(|segment| {
            percent_decode_str(segment)
                .decode_utf8()
                .map(Cow::into_owned)
                .map_err(|e| invalid(format!("segment '{}' is not valid UTF-8: {}", segment, e)))
        })
        .collect()
}

fn split_segments(path: &str) -> Vec<String> {
    path.split('/').filter(|s| !s.is_empty()).map(String::from).collect()
}

fn join_segments(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Build the redirect URL. Absolute targets replace the URL; relative ones
/// replace the current entry below `parent`. The unconsumed rest is kept.
fn build_redirect(
    target: &str,
    parent: &[String],
    rest: &[String],
    params: &BTreeMap<String, String>,
) -> Vec<String> {
    let substituted = split_segments(target).into_iter().map(|segment| {
        segment
            .strip_prefix(':')
            .and_then(|name| params.get(name).cloned())
            .unwrap_or(segment)
    });

    let mut segments: Vec<String> = if target.starts_with('/') {
        Vec::new()
    } else {
        parent.to_vec()
    };
    segments.extend(substituted);
    segments.extend_from_slice(rest);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::Route;

    fn view(name: &'static str) -> impl Fn() -> ViewDescriptor + Send + Sync + 'static {
        move || ViewDescriptor::named(name)
    }

    #[test]
    fn test_first_match_wins() {
        let router = Router::new(RouteTable::new(vec![
            Route::new("users").load_view(view("first")),
            Route::new("users").load_view(view("second")),
        ]));

        let res = router.recognize("/users").unwrap();
        assert_eq!(res.view.name, "first");
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        let router = Router::new(RouteTable::new(vec![Route::new("login").load_view(view("login"))]));

        let res = router.recognize("/login?returnUrl=%2Fhome#top").unwrap();
        assert_eq!(res.url, "/login");
        assert_eq!(res.view.name, "login");
    }

    #[test]
    fn test_leftover_segments_do_not_activate_leaf() {
        let router = Router::new(RouteTable::new(vec![Route::new("login").load_view(view("login"))]))
            .without_fallback();

        assert!(matches!(router.recognize("/login/extra"), Err(RouterError::NoMatch(_))));
    }

    #[test]
    fn test_backtracks_out_of_children() {
        let router = Router::new(RouteTable::new(vec![
            Route::new("admin").children(RouteTable::new(vec![Route::new("users").load_view(view("users"))])),
            Route::new("admin/settings").load_view(view("settings")),
        ]));

        let res = router.recognize("/admin/settings").unwrap();
        assert_eq!(res.view.name, "settings");
    }

    #[test]
    fn test_relative_redirect_keeps_parent() {
        let router = Router::new(RouteTable::new(vec![Route::new("auth").children(RouteTable::new(vec![
            Route::new("login").load_view(view("login")),
            Route::redirect("", "login").full(),
        ]))]));

        let res = router.recognize("/auth").unwrap();
        assert_eq!(res.url, "/auth/login");
        assert_eq!(res.redirects, vec!["/auth".to_string()]);
    }

    #[test]
    fn test_absolute_redirect_with_params() {
        let router = Router::new(RouteTable::new(vec![
            Route::redirect("legacy/:id", "/configs/:id").full(),
            Route::new("configs/:id").load_view(view("config")),
        ]));

        let res = router.recognize("/legacy/7").unwrap();
        assert_eq!(res.url, "/configs/7");
        assert_eq!(res.params.get("id").map(String::as_str), Some("7"));
    }

    #[test]
    fn test_redirect_loop_detected() {
        let router = Router::new(RouteTable::new(vec![
            Route::redirect("a", "/b"),
            Route::redirect("b", "/a"),
        ]));

        assert!(matches!(
            router.recognize("/a"),
            Err(RouterError::RedirectLoop { limit: 16, .. })
        ));
    }

    #[test]
    fn test_navigate_falls_back_to_not_found() {
        let router = Router::new(RouteTable::new(vec![
            Route::new("404").load_view(view("not-found")).title("Page Not Found"),
        ]));

        let res = router.navigate("/nowhere").unwrap();
        assert!(res.fallback);
        assert_eq!(res.url, "/404");
        assert_eq!(res.redirects, vec!["/nowhere".to_string()]);
        assert_eq!(res.title.as_deref(), Some("Page Not Found"));
    }

    #[test]
    fn test_navigate_without_fallback_errors() {
        let router = Router::new(RouteTable::default()).without_fallback();
        assert!(matches!(router.navigate("/x"), Err(RouterError::NoMatch(url)) if url == "/x"));
    }

    #[test]
    fn test_build_redirect() {
        let parent = vec!["auth".to_string()];
        let rest = vec!["extra".to_string()];
        let params = BTreeMap::new();

        let url = |target: &str, rest: &[String]| join_segments(&build_redirect(target, &parent, rest, &params));

        assert_eq!(url("login", &[]), "/auth/login");
        assert_eq!(url("/404", &[]), "/404");
        assert_eq!(url("login", &rest), "/auth/login/extra");
    }

    #[test]
    fn test_double_slash_keeps_first_segment() {
        let router = Router::new(RouteTable::new(vec![Route::new("auth").children(RouteTable::new(vec![
            Route::new("login").load_view(view("login")),
        ]))]))
        .without_fallback();

        let res = router.recognize("//auth/login").unwrap();
        assert_eq!(res.url, "/auth/login");
        assert_eq!(res.view.name, "login");
        assert!(res.redirects.is_empty());
    }

    #[test]
    fn test_scheme_and_host_rejected() {
        let router = Router::new(RouteTable::new(vec![Route::new("login").load_view(view("login"))]));

        for input in ["https://evil.example/login", "http://localhost/login", "javascript:alert(1)"] {
            assert!(
                matches!(router.navigate(input), Err(RouterError::InvalidUrl { ref url, .. }) if url == input),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_dot_segments_resolved() {
        let router = Router::new(RouteTable::new(vec![Route::new("login").load_view(view("login"))]));
        assert_eq!(router.recognize("/auth/../login").unwrap().url, "/login");
    }

    #[test]
    fn test_percent_encoded_segments_decoded() {
        let router = Router::new(RouteTable::new(vec![
            Route::new("login").load_view(view("login")),
            Route::new("configs/:id").load_view(view("config")),
        ]))
        .without_fallback();

        assert_eq!(router.recognize("/%6Cogin").unwrap().view.name, "login");

        let res = router.recognize("/configs/a b").unwrap();
        assert_eq!(res.params.get("id").map(String::as_str), Some("a b"));

        let res = router.recognize("/configs/a%2Fb").unwrap();
        assert_eq!(res.params.get("id").map(String::as_str), Some("a/b"));
        assert_eq!(res.matched[0].segments, vec!["configs".to_string(), "a/b".to_string()]);
    }

    #[test]
    fn test_invalid_utf8_segment_rejected() {
        let router = Router::new(RouteTable::new(vec![Route::new("login").load_view(view("login"))]));
        assert!(matches!(router.navigate("/%FF"), Err(RouterError::InvalidUrl { .. })));
    }
}
