//! Shared data models for login rows
//!
//! This module contains the snapshot a hosting list hands to each row
//! when it is bound, together with the field kinds a row can display.

pub mod field;

use serde::{Deserialize, Serialize};

pub use field::*;

/// A login entry as displayed by a single list row
///
/// Supplied by the hosting list every time a row is bound. The presenter
/// only reads it; it never owns or mutates the record behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoginDisplayItem {
    /// Website the login belongs to
    pub hostname: String,

    /// Account name for the login
    pub username: String,

    /// Whether the password is currently shown in plaintext
    pub is_password_visible: bool,
}

impl LoginDisplayItem {
    /// Create a display item from owned parts
    pub fn new(hostname: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            username: username.into(),
            is_password_visible: false,
        }
    }

    /// Create a display item from optional parts
    ///
    /// Missing values render as empty strings rather than failing.
    pub fn from_parts(hostname: Option<&str>, username: Option<&str>) -> Self {
        Self::new(hostname.unwrap_or_default(), username.unwrap_or_default())
    }

    /// Set whether the password is shown in plaintext
    pub fn with_password_visible(mut self, visible: bool) -> Self {
        self.is_password_visible = visible;
        self
    }
}
