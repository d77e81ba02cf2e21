use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scroller::EasingType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scroller: ScrollerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scroller: ScrollerConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollerConfig {
    /// Fling friction coefficient, roughly 0.0-1.0; 0 disables deceleration
    /// so flings run forever
    #[serde(default = "default_friction")]
    pub friction: f32,
    /// Display density used to derive the fling deceleration
    #[serde(default = "default_pixels_per_inch")]
    pub pixels_per_inch: f32,
    /// Easing curve for timed scrolls; omit to use the built-in
    /// viscous fluid curve
    #[serde(default)]
    pub easing: Option<EasingType>,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            friction: default_friction(),
            pixels_per_inch: default_pixels_per_inch(),
            easing: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Animation tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Width of one gallery card in terminal columns
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    /// Number of cards in the wrapping gallery
    #[serde(default = "default_item_count")]
    pub item_count: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            card_width: default_card_width(),
            item_count: default_item_count(),
        }
    }
}

fn default_friction() -> f32 {
    0.015
}

fn default_pixels_per_inch() -> f32 {
    160.0
}

fn default_tick_rate_ms() -> u64 {
    16
}

fn default_card_width() -> u16 {
    18
}

fn default_item_count() -> usize {
    12
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/whirl/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("whirl")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!((config.scroller.friction - 0.015).abs() < 1e-6);
        assert!((config.scroller.pixels_per_inch - 160.0).abs() < 1e-6);
        assert!(config.scroller.easing.is_none());
        assert_eq!(config.ui.tick_rate_ms, 16);
        assert_eq!(config.ui.item_count, 12);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [scroller]
            friction = 0.0
            easing = "cubic"
            "#,
        )
        .unwrap();
        assert_eq!(config.scroller.friction, 0.0);
        assert_eq!(config.scroller.easing, Some(EasingType::Cubic));
        // Unspecified sections fall back to defaults.
        assert_eq!(config.ui.card_width, 18);
    }
}
