//! Presentation constants for login rows
//!
//! Dimensions, colors, fonts, asset names and animation timing used when
//! deriving a row's layout. Hosts inject one of these into each presenter
//! instead of reading global constant tables.

use serde::{Deserialize, Serialize};

/// Complete configuration for a login row
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CellConfig {
    /// Geometry of the row's sub-elements
    pub layout: LayoutConfig,

    /// Colors and fonts
    pub theme: ThemeConfig,

    /// Image asset names
    pub assets: AssetConfig,

    /// Animation timing
    pub animation: AnimationConfig,
}

/// Geometry settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between the row edges, the icon and the label stack
    pub horizontal_margin: f32,

    /// Side of the square icon
    pub icon_size: f32,

    /// Content shift while the containing list is in edit mode
    pub indent_width: f32,

    /// Extra leading offset of the label stack while editing the
    /// description of an icon-less row
    pub editing_description_indent: f32,

    /// Height of the highlighted (username) row
    pub highlighted_row_height: f32,

    /// Height of the description row
    pub description_row_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let horizontal_margin = 14.0;
        let icon_size = 34.0;
        Self {
            horizontal_margin,
            icon_size,
            indent_width: 44.0,
            editing_description_indent: icon_size + horizontal_margin,
            highlighted_row_height: 15.0,
            description_row_height: 20.0,
        }
    }
}

/// Color and font settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Highlighted label color
    pub highlighted_text_color: String,

    /// Highlighted label color while the description is being edited
    pub highlighted_editing_text_color: String,

    /// Description text color
    pub description_text_color: String,

    /// Highlighted label font size in points
    pub highlighted_font_size: f32,

    /// Description font size in points
    pub description_font_size: f32,

    /// Character used to mask secure text
    pub mask_char: char,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            highlighted_text_color: "#0a84ff".to_string(),
            highlighted_editing_text_color: "#6d6d72".to_string(),
            description_text_color: "#000000".to_string(),
            highlighted_font_size: 12.0,
            description_font_size: 16.0,
            mask_char: '•',
        }
    }
}

/// Image asset names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    /// Indent affordance image for a selected row
    pub selected_indent_asset: String,

    /// Indent affordance image for an unselected row
    pub unselected_indent_asset: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            selected_indent_asset: "loginSelected".to_string(),
            unselected_indent_asset: "loginUnselected".to_string(),
        }
    }
}

/// Animation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of the edit-mode indent transition in seconds
    pub indent_animation_duration_secs: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            indent_animation_duration_secs: 0.2,
        }
    }
}
