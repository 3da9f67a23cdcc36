//! Collaborator interface answered by a row's owner

use crate::models::{FieldKind, LoginDisplayItem};

/// Callbacks and capability queries a presenter delegates to its owner
///
/// Queries answering `None` fall back to the permissive default.
pub trait LoginCellDelegate {
    /// The user chose "Open & Fill" on a website field
    fn on_open_and_fill(&mut self, item: &LoginDisplayItem);

    /// Hand text to the platform clipboard
    fn on_copy(&mut self, text: &str);

    /// Whether return should be accepted while editing the description
    fn should_accept_return_key(&self) -> Option<bool> {
        None
    }

    /// Kind of field the row is displaying
    fn current_field_kind(&self) -> Option<FieldKind> {
        None
    }
}
