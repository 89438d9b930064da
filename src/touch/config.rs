use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GamepadError, Result};

/// Highest screen density accepted, in pixels per inch
pub const MAX_DPI: f32 = 4096.0;

/// Upper bound for any menu panel dimension, in pixels
pub const MAX_MENU_EXTENT: i32 = 4096;

/// Tunables for the virtual gamepad, usually read from a TOML file.
///
/// ```toml
/// dead_zone_ratio = 0.25
/// dpi = 320.0
///
/// [menu_panel]
/// top_margin = 40
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamepadConfig {
    /// Fraction of the direction pad radius treated as dead zone
    pub dead_zone_ratio: f32,
    /// Screen density; when set, sizes follow physical inches instead of the
    /// screen's shorter side
    pub dpi: Option<f32>,
    pub menu_panel: MenuPanelConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuPanelConfig {
    pub top_margin: i32,
    pub button_spacing: i32,
    pub button_width: i32,
    pub button_height: i32,
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            dead_zone_ratio: 0.2,
            dpi: None,
            menu_panel: MenuPanelConfig::default(),
        }
    }
}

impl Default for MenuPanelConfig {
    fn default() -> Self {
        Self {
            top_margin: 30,
            button_spacing: 4,
            button_width: 64,
            button_height: 62,
        }
    }
}

impl GamepadConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GamepadConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading gamepad config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.dead_zone_ratio) {
            return Err(GamepadError::InvalidDeadZone(self.dead_zone_ratio));
        }
        if let Some(dpi) = self.dpi {
            if !dpi.is_finite() || dpi <= 0.0 || dpi > MAX_DPI {
                return Err(GamepadError::InvalidDpi(dpi));
            }
        }
        self.menu_panel.validate()
    }
}

impl MenuPanelConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("button_width", self.button_width, 1),
            ("button_height", self.button_height, 1),
            ("top_margin", self.top_margin, 0),
            ("button_spacing", self.button_spacing, 0),
        ];
        for (field, value, min) in fields {
            if !(min..=MAX_MENU_EXTENT).contains(&value) {
                return Err(GamepadError::InvalidMenuPanel { field, value });
            }
        }
        Ok(())
    }
}
