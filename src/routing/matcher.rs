//! Route path matching.
//!
//! # Responsibilities
//! - Parse route path patterns into segments
//! - Match a pattern against the remaining URL segments
//! - Capture `:name` parameters
//!
//! # Design Decisions
//! - Segment matching is case-sensitive
//! - Empty pattern consumes nothing (matches everything under `prefix`)
//! - `**` consumes every remaining segment
//! - No regex to guarantee O(n) matching

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The catch-all path token.
pub const CATCH_ALL: &str = "**";

/// How much of the remaining URL a pattern must consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMatch {
    /// Pattern must be a prefix of the remaining segments.
    #[default]
    Prefix,
    /// Pattern must consume every remaining segment.
    Full,
}

/// A single pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    Empty,
    CatchAll,
    Segments(Vec<Segment>),
}

/// Result of a successful pattern match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentMatch {
    /// Number of URL segments consumed.
    pub consumed: usize,
    /// Parameters captured by `:name` segments.
    pub params: BTreeMap<String, String>,
}

impl PathPattern {
    /// Parse a route path. Leading/trailing slashes are ignored here;
    /// config validation rejects leading slashes before this point.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return PathPattern::Empty;
        }
        if trimmed == CATCH_ALL {
            return PathPattern::CatchAll;
        }

        let segments = trimmed
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
                _ => Segment::Literal(s.to_string()),
            })
            .collect();
        PathPattern::Segments(segments)
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, PathPattern::CatchAll)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PathPattern::Empty)
    }

    /// Match against the remaining URL segments.
    pub fn match_segments(&self, remaining: &[String], path_match: PathMatch) -> Option<SegmentMatch> {
        match self {
            PathPattern::CatchAll => Some(SegmentMatch {
                consumed: remaining.len(),
                params: BTreeMap::new(),
            }),
            PathPattern::Empty => match path_match {
                PathMatch::Full if !remaining.is_empty() => None,
                _ => Some(SegmentMatch::default()),
            },
            PathPattern::Segments(segments) => {
                if remaining.len() < segments.len() {
                    return None;
                }
                if path_match == PathMatch::Full && remaining.len() != segments.len() {
                    return None;
                }

                let mut params = BTreeMap::new();
                for (pattern, actual) in segments.iter().zip(remaining) {
                    match pattern {
                        Segment::Literal(expected) if expected == actual => {}
                        Segment::Literal(_) => return None,
                        Segment::Param(name) => {
                            params.insert(name.clone(), actual.clone());
                        }
                    }
                }

                Some(SegmentMatch {
                    consumed: segments.len(),
                    params,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(path: &str) -> Vec<String> {
        path.split('/').filter(|s| !s.is_empty()).map(String::from).collect()
    }

    #[test]
    fn test_literal_prefix_match() {
        let pattern = PathPattern::parse("auth");

        let m = pattern.match_segments(&segs("auth/login"), PathMatch::Prefix).unwrap();
        assert_eq!(m.consumed, 1);

        assert!(pattern.match_segments(&segs("auth/login"), PathMatch::Full).is_none());
        assert!(pattern.match_segments(&segs("Auth"), PathMatch::Prefix).is_none()); // Case sensitive
        assert!(pattern.match_segments(&segs("images"), PathMatch::Prefix).is_none());
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = PathPattern::parse("");

        assert!(pattern.match_segments(&[], PathMatch::Full).is_some());
        assert!(pattern.match_segments(&segs("login"), PathMatch::Full).is_none());

        let m = pattern.match_segments(&segs("login"), PathMatch::Prefix).unwrap();
        assert_eq!(m.consumed, 0);
    }

    #[test]
    fn test_catch_all_consumes_everything() {
        let pattern = PathPattern::parse("**");
        assert!(pattern.is_catch_all());

        let m = pattern.match_segments(&segs("a/b/c"), PathMatch::Prefix).unwrap();
        assert_eq!(m.consumed, 3);
    }

    #[test]
    fn test_param_capture() {
        let pattern = PathPattern::parse("configs/:id/edit");

        let m = pattern.match_segments(&segs("configs/42/edit"), PathMatch::Full).unwrap();
        assert_eq!(m.consumed, 3);
        assert_eq!(m.params.get("id").map(String::as_str), Some("42"));

        assert!(pattern.match_segments(&segs("configs/42/view"), PathMatch::Full).is_none());
    }

    #[test]
    fn test_bare_colon_is_literal() {
        assert_eq!(
            PathPattern::parse(":"),
            PathPattern::Segments(vec![Segment::Literal(":".to_string())])
        );
    }
}
