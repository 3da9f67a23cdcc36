//! Display and edit state of a single login row

use serde::{Deserialize, Serialize};

/// Which sub-elements a row shows
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CellStyle {
    /// Icon, highlighted label and description
    #[default]
    IconAndBothLabels,

    /// Highlighted label and description, no icon
    NoIconAndBothLabels,

    /// Icon and description only
    IconAndDescriptionLabel,
}

impl CellStyle {
    /// Whether the icon occupies space in this style
    pub fn shows_icon(&self) -> bool {
        !matches!(self, CellStyle::NoIconAndBothLabels)
    }

    /// Whether the highlighted label occupies space in this style
    pub fn shows_highlighted_label(&self) -> bool {
        !matches!(self, CellStyle::IconAndDescriptionLabel)
    }
}

/// Complete presentation state of a row
///
/// Only the presenter mutates this; hosts read it through
/// [`LoginCellPresenter::state`](super::LoginCellPresenter::state).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CellState {
    pub style: CellStyle,

    /// The description field is being edited
    pub editing_description: bool,

    /// The containing list is in edit mode
    pub showing_indent: bool,

    pub selected: bool,

    /// The description is rendered masked
    pub secure_display: bool,
}

impl CellState {
    /// Create a default state with the given style
    pub fn with_style(style: CellStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Clear every flag, keeping the style
    pub fn reset(&mut self) {
        *self = Self::with_style(self.style);
    }
}
