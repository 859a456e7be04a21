//! The reset-password form.

use crate::config::FormsConfig;
use crate::forms::field_match::FieldMatch;
use crate::forms::{validators, FormControl, FormGroup};

pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

/// Build the reset-password form with both fields empty and validated.
pub fn reset_password_form(config: &FormsConfig) -> FormGroup {
    let password = FormControl::new("")
        .with_validator(validators::required())
        .with_validator(validators::min_length(config.password_min_length));
    let confirm = FormControl::new("").with_validator(validators::required());

    let mut form = FormGroup::new()
        .with_control(PASSWORD, password)
        .with_control(CONFIRM_PASSWORD, confirm)
        .with_validator(FieldMatch::new(PASSWORD, CONFIRM_PASSWORD, config.mismatch_error_key.clone()));
    form.update_value_and_validity();
    form
}
