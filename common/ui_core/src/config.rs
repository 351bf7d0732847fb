// Theme switcher configuration, defaults match the stock page markup
// and the pico.css style rules keyed on `data-theme`.

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Attribute set on `<html>`.
    pub root_attribute: String,
    /// `localStorage` key holding the chosen scheme.
    pub storage_key: String,
    /// Element id of the checkbox driving the switch.
    pub toggle_id: String,
    /// Check or uncheck the toggle to match the scheme picked at startup.
    pub sync_toggle: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            root_attribute: "data-theme".into(),
            storage_key: "picoPreferredColorScheme".into(),
            toggle_id: "theme-toggle".into(),
            sync_toggle: true,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid theme configuration")]
    Json(#[from] serde_json::Error),
}

impl ThemeConfig {
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

use serde::Deserialize;
