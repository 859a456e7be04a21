//! Shared helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::Value;
use switch_admin_ui::forms::{FormControl, FormGroup};
use switch_admin_ui::routing::{LazyRoutes, Route, RouteTable};
use switch_admin_ui::views::ViewDescriptor;

/// A two-field form with the given values and no validators.
#[allow(dead_code)]
pub fn password_form(password: Value, confirm: Value) -> FormGroup {
    FormGroup::new()
        .with_control("password", FormControl::new(password))
        .with_control("confirmPassword", FormControl::new(confirm))
}

/// A lazy table that counts how many times its factory ran.
#[allow(dead_code)]
pub fn counting_table(routes: fn() -> Vec<Route>) -> (LazyRoutes, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let lazy = LazyRoutes::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        RouteTable::new(routes())
    });
    (lazy, calls)
}

#[allow(dead_code)]
pub fn named(name: &'static str) -> impl Fn() -> ViewDescriptor + Send + Sync + 'static {
    move || ViewDescriptor::named(name)
}
