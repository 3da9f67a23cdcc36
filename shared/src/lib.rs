//! Login row presentation library
//!
//! This crate contains the presentation core for rows of a login list:
//! the state a row holds, the layout derived from it, and the contextual
//! actions it offers. Rendering is left to the host toolkit.
//!
//! # Features
//!
//! - **Presenter**: Display/edit state and layout derivation for one row
//! - **Actions**: Copy, reveal, hide and open-and-fill gating per field kind
//! - **Configuration**: Injected dimensions, colors and assets, loadable from YAML
//! - **Logging**: `tracing` setup with sanitization of sensitive values
//!
//! # Usage
//!
//! ```rust
//! use logincell_shared::cell::{CellStyle, LoginCellPresenter, Size};
//! use logincell_shared::config::CellConfig;
//! use logincell_shared::models::LoginDisplayItem;
//!
//! let mut presenter = LoginCellPresenter::new(CellConfig::default(), Size::new(320.0, 58.0));
//! presenter.bind(LoginDisplayItem::new("example.com", "alice"));
//! presenter.set_style(CellStyle::IconAndBothLabels);
//!
//! assert_eq!(presenter.accessibility_label(), "alice, example.com");
//! assert_eq!(presenter.layout().icon.width, 34.0);
//! ```

pub mod cell;
pub mod config;
pub mod logging;
pub mod models;

// Re-export commonly used types for convenience
pub use cell::{
    compute_layout, permitted_actions, ActionSet, CellState, CellStyle, ContextAction,
    IndentTransition, LayoutDescriptor, LoginCellDelegate, LoginCellPresenter, Rect, Size,
};
pub use config::CellConfig;
pub use models::{FieldKind, FieldUtils, LoginDisplayItem};

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types used throughout the library
pub mod error {
    use thiserror::Error;

    /// Common error type for shared library operations
    #[derive(Error, Debug)]
    pub enum SharedError {
        #[error("Configuration error: {message}")]
        Config { message: String },

        #[error("Serialization error: {message}")]
        Serialization { message: String },

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    /// Result type alias for shared library operations
    pub type SharedResult<T> = Result<T, SharedError>;
}

pub use error::{SharedError, SharedResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(VERSION.starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::Config {
            message: "layout.icon_size must be a non-negative number, got -1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: layout.icon_size must be a non-negative number, got -1"
        );

        let io: SharedError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(io.to_string().starts_with("IO error"));
    }
}
