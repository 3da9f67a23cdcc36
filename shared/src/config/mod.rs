//! Configuration for login row presentation
//!
//! Hosts either build a [`CellConfig`] in code or load one from a YAML
//! file. A missing file yields the defaults; a present but malformed file
//! is an error.

pub mod cell_config;

pub use cell_config::*;

use std::path::Path;

use crate::error::{SharedError, SharedResult};

impl CellConfig {
    /// Parse configuration from a YAML document
    ///
    /// Keys that are not present keep their default values.
    pub fn from_yaml_str(yaml: &str) -> SharedResult<Self> {
        let config: CellConfig =
            serde_yaml::from_str(yaml).map_err(|e| SharedError::Serialization {
                message: format!("Failed to parse config YAML: {e}"),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    ///
    /// If the file doesn't exist, the default configuration is returned.
    pub fn load(path: impl AsRef<Path>) -> SharedResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        tracing::debug!("Loaded cell config from {}", path.display());
        Ok(config)
    }

    /// Serialize configuration to YAML
    pub fn to_yaml_string(&self) -> SharedResult<String> {
        serde_yaml::to_string(self).map_err(|e| SharedError::Serialization {
            message: format!("Failed to serialize config: {e}"),
        })
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> SharedResult<()> {
        self.validate()?;
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    /// Check that every dimension and duration is finite and non-negative
    pub fn validate(&self) -> SharedResult<()> {
        let layout = &self.layout;
        let values = [
            ("layout.horizontal_margin", layout.horizontal_margin),
            ("layout.icon_size", layout.icon_size),
            ("layout.indent_width", layout.indent_width),
            (
                "layout.editing_description_indent",
                layout.editing_description_indent,
            ),
            (
                "layout.highlighted_row_height",
                layout.highlighted_row_height,
            ),
            (
                "layout.description_row_height",
                layout.description_row_height,
            ),
            (
                "theme.highlighted_font_size",
                self.theme.highlighted_font_size,
            ),
            (
                "theme.description_font_size",
                self.theme.description_font_size,
            ),
        ];

        let values = values
            .into_iter()
            .map(|(name, value)| (name, f64::from(value)))
            .chain([(
                "animation.indent_animation_duration_secs",
                self.animation.indent_animation_duration_secs,
            )]);

        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(SharedError::Config {
                    message: format!("{name} must be a non-negative number, got {value}"),
                });
            }
        }

        Ok(())
    }
}
