//! Layout derivation for login rows
//!
//! [`compute_layout`] maps a row's state to the frames of its
//! sub-elements. It reads nothing but its arguments, so the same inputs
//! always produce the same descriptor. Rendering the descriptor is left to
//! the toolkit adapter.

use serde::{Deserialize, Serialize};

use super::state::{CellState, CellStyle};
use crate::config::LayoutConfig;

/// Width and height of a row
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A frame in row coordinates
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rect, clamping negative extents to zero
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// A collapsed rect at the given origin
    pub fn zero_at(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    fn offset_x(self, dx: f32) -> Self {
        Self { x: self.x + dx, ..self }
    }
}

/// Derived frames for every sub-element of a row
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LayoutDescriptor {
    /// Horizontal shift applied to the content area
    pub content_offset: f32,

    pub icon: Rect,

    pub highlighted_label: Rect,

    pub description: Rect,

    /// Checkmark region, present only while the list is in edit mode
    pub indent_affordance: Option<Rect>,
}

impl LayoutDescriptor {
    /// Frame enclosing both labels
    pub fn label_stack(&self) -> Rect {
        let x = self.highlighted_label.x.min(self.description.x);
        let y = self.highlighted_label.y.min(self.description.y);
        let max_x = self.highlighted_label.max_x().max(self.description.max_x());
        let max_y = self.highlighted_label.max_y().max(self.description.max_y());
        Rect::new(x, y, max_x - x, max_y - y)
    }
}

/// Derive the frames of a row's sub-elements
pub fn compute_layout(state: &CellState, config: &LayoutConfig, bounds: Size) -> LayoutDescriptor {
    let margin = config.horizontal_margin;
    let stack_height = config.highlighted_row_height + config.description_row_height;
    let stack_y = (bounds.height - stack_height) / 2.0;

    let icon = if state.style.shows_icon() {
        let y = (bounds.height - config.icon_size) / 2.0;
        Rect::new(margin, y, config.icon_size, config.icon_size)
    } else {
        Rect::zero_at(margin, bounds.height / 2.0)
    };

    let stack_x = match state.style {
        CellStyle::NoIconAndBothLabels if state.editing_description => {
            margin + config.editing_description_indent
        }
        CellStyle::NoIconAndBothLabels => margin,
        CellStyle::IconAndBothLabels | CellStyle::IconAndDescriptionLabel => icon.max_x() + margin,
    };
    let stack_width = bounds.width - margin - stack_x;

    let (highlighted_label, description) = if state.style.shows_highlighted_label() {
        (
            Rect::new(stack_x, stack_y, stack_width, config.highlighted_row_height),
            Rect::new(
                stack_x,
                stack_y + config.highlighted_row_height,
                stack_width,
                config.description_row_height,
            ),
        )
    } else {
        (
            Rect::zero_at(stack_x, stack_y),
            Rect::new(stack_x, stack_y, stack_width, stack_height),
        )
    };

    let (content_offset, indent_affordance) = if state.showing_indent {
        (
            config.indent_width,
            Some(Rect::new(0.0, 0.0, config.indent_width, bounds.height)),
        )
    } else {
        (0.0, None)
    };

    LayoutDescriptor {
        content_offset,
        icon: icon.offset_x(content_offset),
        highlighted_label: highlighted_label.offset_x(content_offset),
        description: description.offset_x(content_offset),
        indent_affordance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size {
        width: 320.0,
        height: 58.0,
    };

    fn all_states() -> Vec<CellState> {
        let styles = [
            CellStyle::IconAndBothLabels,
            CellStyle::NoIconAndBothLabels,
            CellStyle::IconAndDescriptionLabel,
        ];
        let mut states = Vec::new();
        for style in styles {
            for bits in 0..16u8 {
                states.push(CellState {
                    style,
                    editing_description: bits & 1 != 0,
                    showing_indent: bits & 2 != 0,
                    selected: bits & 4 != 0,
                    secure_display: bits & 8 != 0,
                });
            }
        }
        states
    }

    #[test]
    fn test_layout_is_deterministic() {
        let config = LayoutConfig::default();
        for state in all_states() {
            let first = compute_layout(&state, &config, BOUNDS);
            let second = compute_layout(&state, &config, BOUNDS);
            assert_eq!(first, second, "layout changed for {state:?}");
        }
    }

    #[test]
    fn test_icon_and_both_labels() {
        let config = LayoutConfig::default();
        let layout = compute_layout(&CellState::default(), &config, BOUNDS);

        assert_eq!(layout.icon, Rect::new(14.0, 12.0, 34.0, 34.0));
        assert_eq!(layout.highlighted_label.x, 62.0);
        assert_eq!(layout.highlighted_label.width, 320.0 - 14.0 - 62.0);
        assert_eq!(layout.highlighted_label.height, 15.0);
        assert_eq!(layout.description.y, layout.highlighted_label.max_y());
        assert_eq!(layout.description.height, 20.0);
        assert_eq!(layout.content_offset, 0.0);
        assert_eq!(layout.indent_affordance, None);
    }

    #[test]
    fn test_description_only_spans_stack() {
        let config = LayoutConfig::default();
        let stack_height = config.highlighted_row_height + config.description_row_height;

        for state in all_states()
            .into_iter()
            .filter(|s| s.style == CellStyle::IconAndDescriptionLabel)
        {
            let layout = compute_layout(&state, &config, BOUNDS);
            assert!(layout.highlighted_label.is_empty());
            assert_eq!(layout.highlighted_label.width, 0.0);
            assert_eq!(layout.highlighted_label.height, 0.0);
            assert_eq!(layout.description.height, stack_height);
            assert_eq!(layout.label_stack(), layout.description);
        }
    }

    #[test]
    fn test_editing_indent_only_without_icon() {
        let config = LayoutConfig::default();

        for state in all_states().into_iter().filter(|s| !s.editing_description) {
            let editing = CellState {
                editing_description: true,
                ..state
            };
            let before = compute_layout(&state, &config, BOUNDS);
            let after = compute_layout(&editing, &config, BOUNDS);

            if state.style == CellStyle::NoIconAndBothLabels {
                assert_eq!(
                    after.description.x - before.description.x,
                    config.editing_description_indent
                );
                assert_eq!(
                    after.highlighted_label.x - before.highlighted_label.x,
                    config.editing_description_indent
                );
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_no_icon_collapses_icon() {
        let config = LayoutConfig::default();
        let state = CellState::with_style(CellStyle::NoIconAndBothLabels);
        let layout = compute_layout(&state, &config, BOUNDS);

        assert!(layout.icon.is_empty());
        assert_eq!(layout.highlighted_label.x, config.horizontal_margin);
    }

    #[test]
    fn test_indent_shifts_content() {
        let config = LayoutConfig::default();
        let plain = compute_layout(&CellState::default(), &config, BOUNDS);
        let indented = compute_layout(
            &CellState {
                showing_indent: true,
                ..CellState::default()
            },
            &config,
            BOUNDS,
        );

        assert_eq!(indented.content_offset, 44.0);
        assert_eq!(indented.icon.x, plain.icon.x + 44.0);
        assert_eq!(indented.description.x, plain.description.x + 44.0);
        assert_eq!(
            indented.indent_affordance,
            Some(Rect::new(0.0, 0.0, 44.0, 58.0))
        );
    }

    #[test]
    fn test_narrow_bounds_clamp_to_zero() {
        let config = LayoutConfig::default();
        let layout = compute_layout(&CellState::default(), &config, Size::new(40.0, 10.0));
        assert_eq!(layout.description.width, 0.0);
        assert_eq!(layout.highlighted_label.width, 0.0);
    }
}
