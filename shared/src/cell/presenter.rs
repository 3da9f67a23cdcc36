//! Presenter for a single login row
//!
//! Holds the row's display and edit state, re-derives its layout whenever a
//! layout-relevant value changes, and routes contextual actions to the
//! row's owner.

use std::fmt;
use std::time::Duration;

use super::actions::{permitted_actions, ActionSet, ContextAction};
use super::animation::IndentTransition;
use super::delegate::LoginCellDelegate;
use super::layout::{compute_layout, LayoutDescriptor, Size};
use super::state::{CellState, CellStyle};
use crate::config::CellConfig;
use crate::models::{FieldKind, FieldUtils, LoginDisplayItem};

/// Display state and derived layout of one login row
///
/// Owned by the row showing it. Call [`prepare_for_reuse`] when the row is
/// recycled for another record.
///
/// [`prepare_for_reuse`]: LoginCellPresenter::prepare_for_reuse
pub struct LoginCellPresenter {
    config: CellConfig,
    bounds: Size,
    state: CellState,
    item: LoginDisplayItem,
    highlighted_text: String,
    description_text: String,
    layout: LayoutDescriptor,
    layout_generation: u64,
    indent_transition: Option<IndentTransition>,
    delegate: Option<Box<dyn LoginCellDelegate>>,
}

impl LoginCellPresenter {
    /// Create a presenter for a row of the given size
    pub fn new(config: CellConfig, bounds: Size) -> Self {
        let state = CellState::default();
        let layout = compute_layout(&state, &config.layout, bounds);
        Self {
            config,
            bounds,
            state,
            item: LoginDisplayItem::default(),
            highlighted_text: String::new(),
            description_text: String::new(),
            layout,
            layout_generation: 0,
            indent_transition: None,
            delegate: None,
        }
    }

    /// Attach the row's owner
    pub fn with_delegate(mut self, delegate: Box<dyn LoginCellDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn set_delegate(&mut self, delegate: Option<Box<dyn LoginCellDelegate>>) {
        self.delegate = delegate;
    }

    /// Bind a login to a list row: username above, hostname below
    ///
    /// The hostname is never masked, whatever the row showed before.
    pub fn bind(&mut self, item: LoginDisplayItem) {
        self.highlighted_text = item.username.clone();
        self.description_text = item.hostname.clone();
        self.item = item;
        self.set_secure_display(false);
        tracing::debug!("Bound row to {}", self.item.hostname);
    }

    /// Bind one field of a login to a detail row
    ///
    /// The field name goes in the highlighted label and the value in the
    /// description. Passwords are masked unless the item says they are
    /// visible.
    pub fn bind_field(&mut self, item: LoginDisplayItem, kind: FieldKind, value: &str) {
        self.highlighted_text = kind.display_name().to_string();
        self.description_text = value.to_string();
        let secure = kind.is_sensitive() && !item.is_password_visible;
        self.item = item;
        self.set_secure_display(secure);
        tracing::debug!(
            "Bound {} field: {}",
            kind,
            FieldUtils::sanitize_for_log(value, kind.is_sensitive())
        );
    }

    /// Replace both label texts; missing values render as empty strings
    pub fn set_texts(&mut self, highlighted: Option<&str>, description: Option<&str>) {
        self.highlighted_text = highlighted.unwrap_or_default().to_string();
        self.description_text = description.unwrap_or_default().to_string();
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.recompute_layout();
        }
    }

    pub fn set_style(&mut self, style: CellStyle) {
        if self.state.style == style {
            return;
        }
        tracing::debug!("Row style {:?} -> {:?}", self.state.style, style);
        self.state.style = style;
        self.recompute_layout();
    }

    /// Start or stop editing the description field
    ///
    /// Only rows without an icon move their labels while editing; other
    /// styles keep their layout.
    pub fn set_editing_description(&mut self, editing: bool) {
        if self.state.editing_description == editing {
            return;
        }
        self.state.editing_description = editing;
        if self.state.style == CellStyle::NoIconAndBothLabels {
            self.recompute_layout();
        }
    }

    /// Show or hide the edit-mode indent
    ///
    /// With `animated`, a transition from the previous offset to the new one
    /// is recorded for the host to play. Without it the offset applies at
    /// once and any pending transition is dropped.
    pub fn set_showing_indent(&mut self, showing: bool, animated: bool) {
        if self.state.showing_indent == showing {
            return;
        }

        let from = self.layout.content_offset;
        self.state.showing_indent = showing;
        self.recompute_layout();

        self.indent_transition = animated.then(|| {
            IndentTransition::with_secs(
                from,
                self.layout.content_offset,
                self.config.animation.indent_animation_duration_secs,
            )
        });
        tracing::debug!("Indent shown={} animated={}", showing, animated);
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.state.selected = selected;
    }

    /// Render the description masked or in plaintext
    pub fn set_secure_display(&mut self, secure: bool) {
        self.state.secure_display = secure;
    }

    /// Clear per-record state before the row shows another record
    ///
    /// The style, configuration, bounds and delegate are kept.
    pub fn prepare_for_reuse(&mut self) {
        self.state.reset();
        self.item = LoginDisplayItem::default();
        self.highlighted_text.clear();
        self.description_text.clear();
        self.indent_transition = None;
        self.recompute_layout();
    }

    fn recompute_layout(&mut self) {
        self.layout = compute_layout(&self.state, &self.config.layout, self.bounds);
        self.layout_generation += 1;
    }

    pub fn state(&self) -> &CellState {
        &self.state
    }

    pub fn config(&self) -> &CellConfig {
        &self.config
    }

    pub fn item(&self) -> &LoginDisplayItem {
        &self.item
    }

    /// Last derived layout
    pub fn layout(&self) -> &LayoutDescriptor {
        &self.layout
    }

    /// Number of times the layout has been re-derived
    pub fn layout_generation(&self) -> u64 {
        self.layout_generation
    }

    pub fn indent_transition(&self) -> Option<&IndentTransition> {
        self.indent_transition.as_ref()
    }

    /// Content offset the host should draw `elapsed` after the last toggle
    pub fn content_offset_at(&self, elapsed: Duration) -> f32 {
        match &self.indent_transition {
            Some(transition) => transition.offset_at(elapsed),
            None => self.layout.content_offset,
        }
    }

    pub fn highlighted_text(&self) -> &str {
        &self.highlighted_text
    }

    /// Description in plaintext, regardless of masking
    pub fn description_text(&self) -> &str {
        &self.description_text
    }

    /// Description as it should be drawn
    pub fn display_description(&self) -> String {
        if self.state.secure_display {
            FieldUtils::mask_text(&self.description_text, self.config.theme.mask_char)
        } else {
            self.description_text.clone()
        }
    }

    /// Whether the description field accepts input
    pub fn description_interactive(&self) -> bool {
        self.state.editing_description
    }

    pub fn highlighted_text_color(&self) -> &str {
        if self.state.editing_description {
            &self.config.theme.highlighted_editing_text_color
        } else {
            &self.config.theme.highlighted_text_color
        }
    }

    /// Image for the indent affordance
    pub fn indent_asset(&self) -> &str {
        if self.state.selected {
            &self.config.assets.selected_indent_asset
        } else {
            &self.config.assets.unselected_indent_asset
        }
    }

    /// Accessible label of the row
    ///
    /// Derived from the current texts; there is no way to set it. Secure
    /// rows expose only the highlighted text so the password is never read
    /// out.
    pub fn accessibility_label(&self) -> String {
        if self.state.secure_display {
            self.highlighted_text.clone()
        } else {
            format!("{}, {}", self.highlighted_text, self.description_text)
        }
    }

    /// Field kind reported by the delegate
    pub fn field_kind(&self) -> Option<FieldKind> {
        self.delegate
            .as_ref()
            .and_then(|delegate| delegate.current_field_kind())
    }

    /// Contextual actions for the field currently displayed
    pub fn permitted_actions(&self) -> ActionSet {
        permitted_actions(self.field_kind(), self.state.secure_display)
    }

    /// Run a contextual action
    ///
    /// Returns `false` and leaves state unchanged when the action is not
    /// permitted for the current field.
    pub fn perform_action(&mut self, action: ContextAction) -> bool {
        if !self.permitted_actions().contains(action) {
            tracing::debug!("Ignoring {} on {:?} field", action, self.field_kind());
            return false;
        }

        match action {
            ContextAction::Copy => {
                if let Some(delegate) = self.delegate.as_mut() {
                    delegate.on_copy(&self.description_text);
                }
            }
            ContextAction::Reveal => self.set_secure_display(false),
            ContextAction::Hide => self.set_secure_display(true),
            ContextAction::OpenAndFill => {
                if let Some(delegate) = self.delegate.as_mut() {
                    delegate.on_open_and_fill(&self.item);
                }
            }
        }

        tracing::debug!("Performed {}", action);
        true
    }

    /// Handle return while editing the description
    ///
    /// Accepted unless the delegate declines. Accepting ends editing.
    pub fn handle_return_key(&mut self) -> bool {
        let accept = self
            .delegate
            .as_ref()
            .and_then(|delegate| delegate.should_accept_return_key())
            .unwrap_or(true);

        if accept {
            self.set_editing_description(false);
        }
        accept
    }
}

impl fmt::Debug for LoginCellPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCellPresenter")
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("layout_generation", &self.layout_generation)
            .field("has_delegate", &self.delegate.is_some())
            .finish_non_exhaustive()
    }
}
