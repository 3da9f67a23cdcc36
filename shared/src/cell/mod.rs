//! Login row presentation
//!
//! A [`LoginCellPresenter`] owns the display and edit state of one row and
//! derives a toolkit-independent [`LayoutDescriptor`] from it. Drawing the
//! descriptor, the clipboard and navigation are left to the host, reached
//! through [`LoginCellDelegate`].

pub mod actions;
pub mod animation;
pub mod delegate;
pub mod layout;
pub mod presenter;
pub mod state;

pub use actions::{permitted_actions, ActionSet, ContextAction};
pub use animation::{ease_in_out, IndentTransition};
pub use delegate::LoginCellDelegate;
pub use layout::{compute_layout, LayoutDescriptor, Rect, Size};
pub use presenter::LoginCellPresenter;
pub use state::{CellState, CellStyle};
