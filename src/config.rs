//! Markup and timing configuration for the DOM binding.

use crate::error::CarouselError;
use crate::window::ThumbnailWindow;

/// Markup and timing settings for binding a carousel to a document.
///
/// Defaults match the stock chart carousel markup. With the `serde`
/// feature every field is optional when deserializing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    pub slide_selector: String,
    pub thumbnail_selector: String,
    pub button_selector: String,
    pub total_selector: String,
    pub current_selector: String,
    /// Class toggled on the active thumbnail
    pub active_class: String,
    /// Attribute on control buttons naming their direction
    pub direction_attribute: String,
    /// Attribute value that marks the "previous" button
    pub previous_value: String,
    /// Thumbnails visible at once
    pub window_size: usize,
    pub fade_ms: u32,
    pub scroll_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide_selector: ".chartSlide".into(),
            thumbnail_selector: ".chartThumbSlide".into(),
            button_selector: ".carousel-button".into(),
            total_selector: ".carousel-length".into(),
            current_selector: ".carousel-current".into(),
            active_class: "isActive".into(),
            direction_attribute: "data-direction".into(),
            previous_value: "previous".into(),
            window_size: 4,
            fade_ms: 400,
            scroll_ms: 400,
        }
    }
}

impl CarouselConfig {
    /// Parse a carousel config from a TOML string.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.window_size == 0 {
            return Err(CarouselError::InvalidConfig {
                field: "window_size",
                reason: "must be at least 1",
            });
        }

        let required = [
            ("slide_selector", &self.slide_selector),
            ("thumbnail_selector", &self.thumbnail_selector),
            ("button_selector", &self.button_selector),
            ("total_selector", &self.total_selector),
            ("current_selector", &self.current_selector),
            ("active_class", &self.active_class),
            ("direction_attribute", &self.direction_attribute),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CarouselError::InvalidConfig {
                    field,
                    reason: "must not be empty",
                });
            }
        }
        Ok(())
    }

    /// Build the thumbnail window policy for this config.
    pub fn thumbnail_window(&self) -> ThumbnailWindow {
        ThumbnailWindow::new(self.window_size)
    }
}
