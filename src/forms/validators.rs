//! Built-in control validators.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::forms::control::{FormControl, ValidatorFn};
use crate::forms::{flag, ValidationErrors};

/// Fails on `null`, empty strings and empty arrays.
pub fn required() -> ValidatorFn {
    Arc::new(|control: &FormControl| is_empty(control.value()).then(|| flag("required")))
}

/// Fails when a non-empty value is shorter than `min`.
pub fn min_length(min: usize) -> ValidatorFn {
    Arc::new(move |control: &FormControl| {
        let actual = length(control.value())?;
        (actual > 0 && actual < min).then(|| length_error("minlength", min, actual))
    })
}

/// Fails when a value is longer than `max`.
pub fn max_length(max: usize) -> ValidatorFn {
    Arc::new(move |control: &FormControl| {
        let actual = length(control.value())?;
        (actual > max).then(|| length_error("maxlength", max, actual))
    })
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(a) => Some(a.len()),
        _ => None,
    }
}

fn length_error(key: &str, required: usize, actual: usize) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.insert(
        key.to_string(),
        json!({ "requiredLength": required, "actualLength": actual }),
    );
    errors
}
