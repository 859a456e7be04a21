//! Navigation and form-validation core for the switch admin front-end.
//!
//! - [`routing`]: ordered route tables, lazy sub-tables, redirects
//! - [`routes`]: the application's route declarations
//! - [`forms`]: form controls, group validators, the field-match validator
//! - [`views`]: view descriptors, including the not-found page

pub mod config;
pub mod forms;
pub mod observability;
pub mod routes;
pub mod routing;
pub mod views;

pub use config::AppConfig;
pub use forms::{match_fields, FieldMatch, FormControl, FormGroup};
pub use routing::{Resolution, Route, RouteTable, Router};
