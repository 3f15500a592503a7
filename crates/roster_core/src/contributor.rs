//! Contributor records.

use serde::Serialize;

use crate::Category;

/// One person on the roster.
///
/// Optional fields are either `Some` non-blank text or `None`; the setters
/// collapse blank input to `None` so an empty string never counts as present.
///
/// # Example
///
/// ```rust
/// use roster_core::{Category, Contributor};
///
/// let alex = Contributor::new("Alex Chen", Category::CoreDeveloper)
///     .github("AlexChen")
///     .email("alex.chen@softwaresforall.eu.cc");
///
/// assert_eq!(alex.github_url().as_deref(), Some("https://github.com/AlexChen"));
/// assert!(alex.twitter_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contributor {
    /// Display name, unique within a roster by convention
    pub name: String,

    /// Role on the project
    pub category: Category,

    /// GitHub handle
    pub github: Option<String>,

    /// Twitter handle
    pub twitter: Option<String>,

    /// Contact email address
    pub email: Option<String>,

    /// Short biography
    pub bio: Option<String>,
}

impl Contributor {
    /// Creates a record with only the required fields set.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            github: None,
            twitter: None,
            email: None,
            bio: None,
        }
    }

    /// Sets the GitHub handle.
    pub fn github(mut self, handle: impl Into<String>) -> Self {
        self.github = present(handle);
        self
    }

    /// Sets the Twitter handle.
    pub fn twitter(mut self, handle: impl Into<String>) -> Self {
        self.twitter = present(handle);
        self
    }

    /// Sets the contact email address.
    pub fn email(mut self, address: impl Into<String>) -> Self {
        self.email = present(address);
        self
    }

    /// Sets the biography.
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = present(bio);
        self
    }

    pub fn github_url(&self) -> Option<String> {
        self.github
            .as_ref()
            .map(|handle| format!("https://github.com/{handle}"))
    }

    pub fn twitter_url(&self) -> Option<String> {
        self.twitter
            .as_ref()
            .map(|handle| format!("https://twitter.com/{handle}"))
    }

    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|address| format!("mailto:{address}"))
    }

    /// Whether any of the link-bearing fields is populated.
    pub fn has_links(&self) -> bool {
        self.github.is_some() || self.twitter.is_some() || self.email.is_some()
    }
}

fn present(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
