//! Page behavior configuration.
//!
//! Every field has a default matching the site's stock markup, so a page
//! without an inline config blob behaves exactly like one with `{}`. The host
//! reads the blob from `<script type="application/json" id="postpage-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    COPY_REVERT_DELAY_MS, DEEP_LINK_OPEN_DELAY_MS, LABEL_WHEN_DARK, LABEL_WHEN_LIGHT, THEME_STORAGE_KEY,
};
use crate::error::ConfigError;

/// Element id of the optional inline JSON config blob.
pub const CONFIG_ELEMENT_ID: &str = "postpage-config";

/// CSS selectors used to discover page elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub blocks: String,
    pub block_body: String,
    pub block_summary: String,
    pub theme_toggle: String,
    pub themed_icons: String,
    /// Controls that copy a deep link when clicked.
    pub copy_triggers: String,
    /// Buttons whose inner image shows the copy/check icon.
    pub copy_icon_buttons: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            blocks: ".posts details".into(),
            block_body: ".post-body".into(),
            block_summary: "summary".into(),
            theme_toggle: "[data-theme-toggle]".into(),
            themed_icons: "[data-icon-light][data-icon-dark]".into(),
            copy_triggers: "[data-copy]".into(),
            copy_icon_buttons: ".copy-btn".into(),
        }
    }
}

/// Toggle control labels, keyed by the theme currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleLabels {
    pub when_dark: String,
    pub when_light: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self { when_dark: LABEL_WHEN_DARK.into(), when_light: LABEL_WHEN_LIGHT.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub labels: ToggleLabels,
    pub storage_key: String,
    pub deep_link_delay_ms: u32,
    pub copy_revert_ms: u32,
    /// `log` level filter name (`"error"` .. `"trace"`).
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            labels: ToggleLabels::default(),
            storage_key: THEME_STORAGE_KEY.into(),
            deep_link_delay_ms: DEEP_LINK_OPEN_DELAY_MS,
            copy_revert_ms: COPY_REVERT_DELAY_MS,
            log_level: "info".into(),
        }
    }
}

impl PageConfig {
    /// Parse and validate config from a JSON document. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }
        if self.selectors.blocks.trim().is_empty() {
            return Err(ConfigError::Invalid("selectors.blocks must not be empty".into()));
        }
        if self.log_level.trim().parse::<log::Level>().is_err() {
            return Err(ConfigError::Invalid(format!("unknown log_level: {}", self.log_level)));
        }
        Ok(())
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }
}
