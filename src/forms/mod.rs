//! Form state and validation.
//!
//! # Data Flow
//! ```text
//! FormGroup::set_value(name, value)
//!     → control.rs (store value, re-run the control's own validators)
//!     → group.rs (re-run every group validator with &mut FormGroup)
//!         → field_match.rs (compare two controls, mirror error into the matching control)
//!     → status(): Valid | Invalid
//! ```
//!
//! # Design Decisions
//! - The form context is an explicit table passed to group validators
//! - Control validators see only their own control, so scoped
//!   revalidation can never re-enter a group validator
//! - Values are JSON values; equality is exact (type and value)
//! - Error sets are ordered maps from error kind to metadata

pub mod control;
pub mod field_match;
pub mod group;
pub mod reset_password;
pub mod validators;

use std::collections::BTreeMap;

/// Per-control error set: error kind → metadata (`true` for plain flags).
pub type ValidationErrors = BTreeMap<String, serde_json::Value>;

pub use control::{FormControl, ValidatorFn};
pub use field_match::{match_fields, FieldMatch, DEFAULT_ERROR_KEY};
pub use group::{FormError, FormGroup, FormStatus, GroupValidator};
pub use reset_password::reset_password_form;

/// Build a single-entry error set `{ key: true }`.
pub fn flag(key: impl Into<String>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.insert(key.into(), serde_json::Value::Bool(true));
    errors
}
