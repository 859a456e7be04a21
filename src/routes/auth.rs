//! Routes under `/auth`.

use crate::routing::{Route, RouteTable};
use crate::views::ViewDescriptor;

pub const LOGIN_VIEW: &str = "login";
pub const FORGOT_PASSWORD_VIEW: &str = "forgot-password";
pub const RESET_PASSWORD_VIEW: &str = "reset-password";

pub fn auth_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::new("login")
            .load_view(|| ViewDescriptor::named(LOGIN_VIEW))
            .title("Login"),
        Route::new("forgot-password")
            .load_view(|| ViewDescriptor::named(FORGOT_PASSWORD_VIEW))
            .title("Password Recovery"),
        Route::new("reset-password")
            .load_view(|| ViewDescriptor::named(RESET_PASSWORD_VIEW))
            .title("Reset Password"),
        Route::redirect("", "login").full(),
    ])
}
