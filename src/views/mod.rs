//! View descriptors.
//!
//! A route resolves to a [`ViewDescriptor`] rather than to rendered output.
//! Rendering belongs to whatever front-end hosts the navigation core; this
//! crate only decides *which* view is active.

pub mod not_found;

use serde::{Deserialize, Serialize};

pub use not_found::not_found_view;

/// A navigable link shown by a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewLink {
    pub label: String,
    pub href: String,
}

/// Identifies the view a route activates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDescriptor {
    /// Stable view identifier (e.g. `login`).
    pub name: String,

    /// Optional heading displayed by the view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Optional body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Links offered by the view.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ViewLink>,
}

impl ViewDescriptor {
    /// A bare view with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            heading: None,
            message: None,
            links: Vec::new(),
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.links.push(ViewLink {
            label: label.into(),
            href: href.into(),
        });
        self
    }
}
