//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! URL (path, query, fragment)
//!     → router.rs (normalize, walk tables, apply redirects)
//!     → matcher.rs (match entry pattern against remaining segments)
//!     → lazy.rs (load nested tables / views on first activation)
//!     → Return: Resolution or NoMatch
//!
//! Table Construction:
//!     Rust declarations (crate::routes) or RouteConfig[] (registry.rs)
//!     → RouteTable (ordered, immutable)
//! ```
//!
//! # Design Decisions
//! - Tables are declared once, immutable at runtime
//! - No regex (segment matching only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod lazy;
pub mod matcher;
pub mod registry;
pub mod route;
pub mod router;

pub use lazy::{Lazy, LazyRoutes, LazyView};
pub use matcher::{PathMatch, PathPattern, CATCH_ALL};
pub use registry::RouteRegistry;
pub use route::{Children, Route, RouteSummary, RouteTable};
pub use router::{MatchedRoute, Resolution, Router, RouterError};
