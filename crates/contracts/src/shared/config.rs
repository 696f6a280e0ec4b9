//! Site configuration.
//!
//! Every section has defaults matching the production site, so a partial (or
//! empty) TOML document is valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub logging: LoggingConfig,
    pub theme: ThemeConfig,
    pub careers: CareersConfig,
    pub counter: CounterConfig,
    pub team: TeamConfig,
    pub menu: MenuConfig,
    pub pointer: PointerConfig,
    pub circle_text: CircleTextConfig,
    pub inline_slider: InlineSliderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "color-theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareersConfig {
    pub container_id: String,
    pub default_tab: String,
    /// Query parameter carrying the active tab, e.g. `?tab=Apply`.
    pub query_param: String,
}

impl Default for CareersConfig {
    fn default() -> Self {
        Self {
            container_id: "tab-content-container".to_string(),
            default_tab: "Overview".to_string(),
            query_param: "tab".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Number of increments a counter needs to reach its target.
    pub steps: u64,
    pub tick_ms: u32,
    /// Visible fraction of the section that starts the count.
    pub threshold: f64,
    pub stagger_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            tick_ms: 20,
            threshold: 0.17,
            stagger_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    /// Delay before the details panel shows the newly selected member.
    pub swap_ms: u32,
    /// Time after the swap during which further clicks are ignored.
    pub settle_ms: u32,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            swap_ms: 300,
            settle_ms: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub desktop_min_width: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            desktop_min_width: 768,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    pub min_width: u32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self { min_width: 1024 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleTextConfig {
    pub spacing_deg: f64,
}

impl Default for CircleTextConfig {
    fn default() -> Self {
        Self { spacing_deg: 10.3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineSliderConfig {
    pub interval_ms: u32,
    pub step_px: u32,
}

impl Default for InlineSliderConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            step_px: 100,
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid {
                field: "logging.level",
                reason: format!("unknown level '{}'", self.logging.level),
            });
        }
        if self.counter.steps == 0 {
            return Err(ConfigError::Invalid {
                field: "counter.steps",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.counter.threshold) {
            return Err(ConfigError::Invalid {
                field: "counter.threshold",
                reason: format!("{} is outside 0..=1", self.counter.threshold),
            });
        }
        if self.careers.container_id.is_empty() {
            return Err(ConfigError::Invalid {
                field: "careers.container_id",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.theme.storage_key, "color-theme");
        assert_eq!(config.careers.container_id, "tab-content-container");
        assert_eq!(config.counter.tick_ms, 20);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [counter]
            tick_ms = 40

            [careers]
            default_tab = "Apply"
            "#,
        )
        .unwrap();
        assert_eq!(config.counter.tick_ms, 40);
        assert_eq!(config.counter.steps, 100);
        assert_eq!(config.careers.default_tab, "Apply");
        assert_eq!(config.careers.query_param, "tab");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = SiteConfig::from_toml_str("[counter]\nsteps = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "counter.steps", .. }));

        let err = SiteConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "logging.level", .. }));

        let err = SiteConfig::from_toml_str("[counter\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
