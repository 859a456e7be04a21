//! The "page not found" view.

use crate::views::ViewDescriptor;

/// View name registered for the not-found page.
pub const NOT_FOUND_VIEW: &str = "not-found";

/// Build the not-found view: a heading, a short explanation and a way home.
pub fn not_found_view() -> ViewDescriptor {
    ViewDescriptor::named(NOT_FOUND_VIEW)
        .with_heading("Page Not Found")
        .with_message("The page you are looking for does not exist or has been moved.")
        .with_link("Back to home", "/")
}
