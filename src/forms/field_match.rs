//! Cross-field equality validator.
//!
//! # Behavior
//! Each run:
//! 1. If the matching control carries `error_key`, remove exactly that key
//!    and revalidate the matching control against its own validators only
//! 2. Compare both values with exact JSON equality
//! 3. On mismatch, add `error_key: true` to the matching control (other
//!    keys untouched) and return `{ error_key: true }` for the group
//! 4. On match, return `None`
//!
//! A missing control is a configuration problem, not a validation failure:
//! it is logged and the validator passes.

use serde_json::Value;

use crate::forms::group::{FormGroup, GroupValidator};
use crate::forms::{flag, ValidationErrors};

/// Error key used when none is given.
pub const DEFAULT_ERROR_KEY: &str = "mismatch";

/// Requires `matching` to hold the same value as `control`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    control: String,
    matching: String,
    error_key: String,
}

/// Build a field-match validator with the default error key.
pub fn match_fields(control: impl Into<String>, matching: impl Into<String>) -> FieldMatch {
    FieldMatch::new(control, matching, DEFAULT_ERROR_KEY)
}

impl FieldMatch {
    pub fn new(control: impl Into<String>, matching: impl Into<String>, error_key: impl Into<String>) -> Self {
        Self {
            control: control.into(),
            matching: matching.into(),
            error_key: error_key.into(),
        }
    }

    /// Use a custom error key.
    pub fn error_key(mut self, key: impl Into<String>) -> Self {
        self.error_key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.error_key
    }

    /// Run the validator against the live form group.
    pub fn check(&self, group: &mut FormGroup) -> Option<ValidationErrors> {
        let primary = match (group.get(&self.control), group.contains(&self.matching)) {
            (Some(control), true) => control.value().clone(),
            _ => {
                tracing::warn!(
                    control = %self.control,
                    matching = %self.matching,
                    "Field match validator could not find controls, skipping"
                );
                return None;
            }
        };

        let matching = group.get_mut(&self.matching)?;
        if matching.clear_error(&self.error_key) {
            matching.update_value_and_validity();
        }

        if primary != *matching.value() {
            matching.set_error(self.error_key.clone(), Value::Bool(true));
            tracing::trace!(control = %self.control, matching = %self.matching, key = %self.error_key, "Fields do not match");
            return Some(flag(self.error_key.clone()));
        }

        None
    }
}

impl GroupValidator for FieldMatch {
    fn validate(&self, group: &mut FormGroup) -> Option<ValidationErrors> {
        self.check(group)
    }
}
