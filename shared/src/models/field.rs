//! Field kinds and display helpers for login rows
//!
//! A row's description field shows either a website, a username or a
//! password. The kind decides which contextual actions apply and how the
//! value may be written to logs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of field a row is currently displaying
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Password field (sensitive)
    Password,

    /// Website/URL field
    Website,

    /// Username/login field
    Username,
}

impl FieldKind {
    /// Parse a field kind from its stored field-type name
    ///
    /// Accepts the names used by credential records (`password`, `url`,
    /// `website`, `username`, `email`), case insensitive. Anything else
    /// is not a field kind a row knows how to act on.
    pub fn parse(name: &str) -> Option<FieldKind> {
        match name.trim().to_lowercase().as_str() {
            "password" => Some(FieldKind::Password),
            "url" | "website" | "hostname" => Some(FieldKind::Website),
            "username" | "email" | "login" => Some(FieldKind::Username),
            _ => None,
        }
    }

    /// Get the display name for this field kind
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::Password => "Password",
            FieldKind::Website => "Website",
            FieldKind::Username => "Username",
        }
    }

    /// Check if this field kind contains sensitive data
    pub fn is_sensitive(&self) -> bool {
        matches!(self, FieldKind::Password)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Utility functions for field values
pub struct FieldUtils;

impl FieldUtils {
    /// Longest value written to logs before truncation
    const MAX_LOG_LENGTH: usize = 50;

    /// Replace every character of `text` with `mask_char`
    pub fn mask_text(text: &str, mask_char: char) -> String {
        std::iter::repeat(mask_char)
            .take(text.chars().count())
            .collect()
    }

    /// Sanitize a field value for logging
    pub fn sanitize_for_log(text: &str, secure: bool) -> String {
        if secure {
            "[hidden]".to_string()
        } else if text.chars().count() > Self::MAX_LOG_LENGTH {
            let head: String = text.chars().take(Self::MAX_LOG_LENGTH - 3).collect();
            format!("{head}...")
        } else {
            text.to_string()
        }
    }
}
