//! A single form control: value, error set and own validators.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::forms::ValidationErrors;

/// A validator attached to one control.
pub type ValidatorFn = Arc<dyn Fn(&FormControl) -> Option<ValidationErrors> + Send + Sync>;

#[derive(Clone)]
pub struct FormControl {
    value: Value,
    errors: ValidationErrors,
    validators: Vec<ValidatorFn>,
    /// Keys produced by the last run of the control's own validators.
    own_keys: BTreeSet<String>,
}

impl FormControl {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            errors: ValidationErrors::new(),
            validators: Vec::new(),
            own_keys: BTreeSet::new(),
        }
    }

    pub fn with_validator(mut self, validator: ValidatorFn) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replace the value without revalidating.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// The current error set, or `None` when the control is valid.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        if self.errors.is_empty() {
            None
        } else {
            Some(&self.errors)
        }
    }

    pub fn has_error(&self, key: &str) -> bool {
        self.errors.contains_key(key)
    }

    pub fn get_error(&self, key: &str) -> Option<&Value> {
        self.errors.get(key)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Set one error, keeping every other key.
    pub fn set_error(&mut self, key: impl Into<String>, metadata: Value) {
        self.errors.insert(key.into(), metadata);
    }

    /// Merge an error set into the control's errors.
    pub fn merge_errors(&mut self, errors: ValidationErrors) {
        self.errors.extend(errors);
    }

    /// Remove one error. Returns whether it was present.
    pub fn clear_error(&mut self, key: &str) -> bool {
        self.own_keys.remove(key);
        self.errors.remove(key).is_some()
    }

    /// Re-run this control's own validators.
    ///
    /// Errors from the previous run are replaced; errors set from outside
    /// (group validators, server feedback) are kept.
    pub fn update_value_and_validity(&mut self) {
        let fresh: ValidationErrors = self
            .validators
            .iter()
            .filter_map(|validator| validator(self))
            .flatten()
            .collect();

        for key in std::mem::take(&mut self.own_keys) {
            self.errors.remove(&key);
        }
        self.own_keys = fresh.keys().cloned().collect();
        self.errors.extend(fresh);
    }
}

impl fmt::Debug for FormControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormControl")
            .field("value", &self.value)
            .field("errors", &self.errors)
            .field("validators", &self.validators.len())
            .finish()
    }
}
