//! Form groups: named controls plus group-level validators.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::forms::control::FormControl;
use crate::forms::ValidationErrors;

/// Errors raised by form operations.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("form has no control named '{0}'")]
    UnknownControl(String),
}

/// Validity of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormStatus {
    Valid,
    Invalid,
}

/// A validator that sees, and may mutate, the whole group.
pub trait GroupValidator: Send + Sync + fmt::Debug {
    /// Validate the group. The returned errors belong to the group itself.
    fn validate(&self, group: &mut FormGroup) -> Option<ValidationErrors>;
}

/// Named controls in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FormGroup {
    controls: Vec<(String, FormControl)>,
    validators: Vec<Arc<dyn GroupValidator>>,
    errors: ValidationErrors,
}

impl FormGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(mut self, name: impl Into<String>, control: FormControl) -> Self {
        self.add_control(name, control);
        self
    }

    pub fn with_validator(mut self, validator: impl GroupValidator + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Add a control, replacing any existing control with the same name.
    pub fn add_control(&mut self, name: impl Into<String>, control: FormControl) {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => *existing = control,
            None => self.controls.push((name, control)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FormControl> {
        self.controls.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormControl> {
        self.controls.iter_mut().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn controls(&self) -> impl Iterator<Item = (&str, &FormControl)> {
        self.controls.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Update one control, revalidate it, then run the group validators.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<(), FormError> {
        let control = self
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownControl(name.to_string()))?;
        control.set_value(value);
        control.update_value_and_validity();

        self.run_group_validators();
        Ok(())
    }

    /// Revalidate every control, then the group.
    pub fn update_value_and_validity(&mut self) {
        for (_, control) in &mut self.controls {
            control.update_value_and_validity();
        }
        self.run_group_validators();
    }

    fn run_group_validators(&mut self) {
        let validators = self.validators.clone();
        let mut errors = ValidationErrors::new();
        for validator in &validators {
            if let Some(found) = validator.validate(self) {
                errors.extend(found);
            }
        }
        self.errors = errors;
    }

    /// Group-level errors, or `None` when there are none.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        if self.errors.is_empty() {
            None
        } else {
            Some(&self.errors)
        }
    }

    pub fn status(&self) -> FormStatus {
        if self.errors.is_empty() && self.controls.iter().all(|(_, c)| c.is_valid()) {
            FormStatus::Valid
        } else {
            FormStatus::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status() == FormStatus::Valid
    }

    /// Control values as a JSON object.
    pub fn value(&self) -> Value {
        let map: Map<String, Value> = self
            .controls
            .iter()
            .map(|(n, c)| (n.clone(), c.value().clone()))
            .collect();
        Value::Object(map)
    }

    /// Snapshot of every error set, for display or logging.
    pub fn error_report(&self) -> Value {
        let controls: Map<String, Value> = self
            .controls
            .iter()
            .filter_map(|(n, c)| c.errors().map(|e| (n.clone(), serde_json::json!(e))))
            .collect();
        serde_json::json!({
            "status": self.status(),
            "errors": self.errors(),
            "controls": controls,
        })
    }
}
