//! Contextual menu actions for login rows

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::FieldKind;

/// An action offered in a row's contextual menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContextAction {
    Copy,
    Reveal,
    Hide,
    OpenAndFill,
}

impl ContextAction {
    /// All actions in menu order
    pub const ALL: [ContextAction; 4] = [
        ContextAction::Copy,
        ContextAction::Reveal,
        ContextAction::Hide,
        ContextAction::OpenAndFill,
    ];

    /// Menu item title
    pub fn title(&self) -> &'static str {
        match self {
            ContextAction::Copy => "Copy",
            ContextAction::Reveal => "Reveal",
            ContextAction::Hide => "Hide",
            ContextAction::OpenAndFill => "Open & Fill",
        }
    }

    fn bit(self) -> u8 {
        match self {
            ContextAction::Copy => 1,
            ContextAction::Reveal => 1 << 1,
            ContextAction::Hide => 1 << 2,
            ContextAction::OpenAndFill => 1 << 3,
        }
    }
}

impl fmt::Display for ContextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A set of contextual actions, iterated in menu order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const EMPTY: ActionSet = ActionSet(0);

    pub fn with(self, action: ContextAction) -> Self {
        ActionSet(self.0 | action.bit())
    }

    pub fn contains(&self, action: ContextAction) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = ContextAction> + '_ {
        ContextAction::ALL
            .into_iter()
            .filter(move |action| self.contains(*action))
    }
}

impl FromIterator<ContextAction> for ActionSet {
    fn from_iter<I: IntoIterator<Item = ContextAction>>(iter: I) -> Self {
        iter.into_iter().fold(ActionSet::EMPTY, ActionSet::with)
    }
}

/// Actions permitted for a field of the given kind
///
/// Reveal and Hide are mutually exclusive: a masked password can only be
/// revealed, a revealed one can only be hidden.
pub fn permitted_actions(field_kind: Option<FieldKind>, secure_display: bool) -> ActionSet {
    match field_kind {
        Some(FieldKind::Password) if secure_display => {
            ActionSet::EMPTY.with(ContextAction::Copy).with(ContextAction::Reveal)
        }
        Some(FieldKind::Password) => {
            ActionSet::EMPTY.with(ContextAction::Copy).with(ContextAction::Hide)
        }
        Some(FieldKind::Website) => ActionSet::EMPTY
            .with(ContextAction::Copy)
            .with(ContextAction::OpenAndFill),
        Some(FieldKind::Username) => ActionSet::EMPTY.with(ContextAction::Copy),
        None => ActionSet::EMPTY,
    }
}
