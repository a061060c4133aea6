//! Admin Configuration
//!
//! Read from the `data-admin-config` JSON attribute on `<body>`.

use serde::Deserialize;

use crate::error::ConfigError;

const CONFIG_ATTRIBUTE: &str = "data-admin-config";

/// Tuning for menu positioning and drag interaction
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PositionerConfig {
    /// Gap used past the list boundaries and for the first item
    pub spacing: i32,
    /// A gap is split only when strictly larger than this
    pub min_split_gap: i32,
    pub drag_threshold_px: i32,
    pub auto_scroll_margin_px: f64,
    pub auto_scroll_step_px: f64,
}

impl Default for PositionerConfig {
    fn default() -> Self {
        Self {
            spacing: 10,
            min_split_gap: 2,
            drag_threshold_px: 5,
            auto_scroll_margin_px: 40.0,
            auto_scroll_step_px: 12.0,
        }
    }
}

impl PositionerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_split_gap < 1 {
            return Err(ConfigError::Invalid("min_split_gap must be at least 1".to_string()));
        }
        if self.spacing <= self.min_split_gap {
            return Err(ConfigError::Invalid(format!(
                "spacing ({}) must exceed min_split_gap ({})",
                self.spacing, self.min_split_gap
            )));
        }
        if self.drag_threshold_px < 0 {
            return Err(ConfigError::Invalid("drag_threshold_px must not be negative".to_string()));
        }
        if self.auto_scroll_step_px <= 0.0 {
            return Err(ConfigError::Invalid("auto_scroll_step_px must be positive".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Base URL of the REST backend
    pub api_base: String,
    pub positioner: PositionerConfig,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            positioner: PositionerConfig::default(),
        }
    }
}

impl AdminConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AdminConfig = serde_json::from_str(json)?;
        config.positioner.validate()?;
        Ok(config)
    }

    /// Load from the document, falling back to defaults
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute(CONFIG_ATTRIBUTE));

        match raw {
            None => AdminConfig::default(),
            Some(json) => AdminConfig::from_json(&json).unwrap_or_else(|e| {
                log::error!("[Config] {}, using defaults", e);
                AdminConfig::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AdminConfig::from_json(r#"{"positioner": {"spacing": 100}}"#).unwrap();
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.positioner.spacing, 100);
        assert_eq!(config.positioner.min_split_gap, 2);
    }

    #[test]
    fn test_spacing_must_exceed_split_gap() {
        let err = AdminConfig::from_json(r#"{"positioner": {"spacing": 2}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = AdminConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
