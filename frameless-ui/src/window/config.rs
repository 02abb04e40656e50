//! Window configuration types

use serde::Deserialize;

use crate::controller::ResizeConfig;

/// Default height of the title-bar drag region in logical pixels.
pub(super) const DEFAULT_TITLE_BAR_HEIGHT: f64 = 32.0;

/// Configuration for creating a frameless window.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width of the window in logical pixels.
    pub width: u32,
    /// Initial height of the window in logical pixels.
    pub height: u32,
    /// Smallest width the resize handlers will produce, in logical pixels.
    pub min_width: u32,
    /// Smallest height the resize handlers will produce, in logical pixels.
    pub min_height: u32,
    /// Window title (not visible for borderless windows).
    pub title: String,
    /// Whether the window should always stay on top.
    pub always_on_top: bool,
    /// Height of the drag region along the top of the window. 0 disables it.
    pub title_bar_height: f64,
    /// Resize bands and mode flags.
    pub resize: ResizeConfig,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            min_width: 200,
            min_height: 150,
            title: "Frameless".to_string(),
            always_on_top: false,
            title_bar_height: DEFAULT_TITLE_BAR_HEIGHT,
            resize: ResizeConfig::default(),
        }
    }
}

impl WindowConfig {
    /// Clamp the initial size so it never starts below the minimum.
    pub(super) fn initial_size(&self) -> (u32, u32) {
        (self.width.max(self.min_width), self.height.max(self.min_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_size_respects_minimum() {
        let config = WindowConfig {
            width: 100,
            height: 900,
            min_width: 300,
            min_height: 200,
            ..Default::default()
        };
        assert_eq!(config.initial_size(), (300, 900));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: WindowConfig = toml::from_str(
            r#"
            title = "Notes"
            min_width = 320

            [resize]
            resizable_area = 6
            vertical_resizeable = false
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Notes");
        assert_eq!(config.min_width, 320);
        assert_eq!(config.width, 800);
        assert_eq!(config.title_bar_height, DEFAULT_TITLE_BAR_HEIGHT);
        assert_eq!(config.resize.resizable_area, 6);
        assert!(!config.resize.vertical_resizeable);
        assert!(config.resize.draggable);
    }
}
