use crate::errors::{SymptomError, SymptomResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Endpoint of the classification backend
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/check-symptoms";

/// Which completion may write to the results area when queries overlap
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Every completion writes; whichever response arrives last is displayed.
    #[default]
    LastArrival,
    /// Only the most recently issued query may write; older completions are dropped.
    LatestIssued,
}

/// Pointer tilt and glare parameters for interactive cards
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TiltConfig {
    pub max_rotation_deg: f64,
    pub glare_falloff: f64,
    pub perspective_px: f64,
    pub hover_scale: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_rotation_deg: 10.0,
            glare_falloff: 1.5,
            perspective_px: 1000.0,
            hover_scale: 1.02,
        }
    }
}

/// Timing of the periodic hero re-animation, in milliseconds
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct HeroConfig {
    pub initial_delay_ms: u64,
    pub interval_ms: u64,
    pub active_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 2_000,
            interval_ms: 10_000,
            active_ms: 1_000,
        }
    }
}

impl HeroConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn active_for(&self) -> Duration {
        Duration::from_millis(self.active_ms)
    }
}

/// Configuration for the symptom query UI
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub endpoint: String,
    pub escape_html: bool,
    pub overlap: OverlapPolicy,
    pub log_level: Option<String>,
    pub scroll_gutter_px: f64,
    pub tilt: TiltConfig,
    pub hero: HeroConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            escape_html: true,
            overlap: OverlapPolicy::default(),
            log_level: None,
            scroll_gutter_px: 8.0,
            tilt: TiltConfig::default(),
            hero: HeroConfig::default(),
        }
    }
}

impl UiConfig {
    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> SymptomResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SymptomError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| SymptomError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    /// Saves configuration to a file
    pub fn save_to_file(&self, path: &Path) -> SymptomResult<()> {
        let content = toml::to_string(self).map_err(|e| {
            SymptomError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SymptomError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        fs::write(path, content).map_err(|e| {
            SymptomError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Merges this config with another, preferring every value of `other`
    /// that differs from the built-in default.
    pub fn merge(&self, other: &Self) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: overlay(&defaults.endpoint, &self.endpoint, &other.endpoint),
            escape_html: overlay(&defaults.escape_html, &self.escape_html, &other.escape_html),
            overlap: overlay(&defaults.overlap, &self.overlap, &other.overlap),
            log_level: other.log_level.clone().or_else(|| self.log_level.clone()),
            scroll_gutter_px: overlay(
                &defaults.scroll_gutter_px,
                &self.scroll_gutter_px,
                &other.scroll_gutter_px,
            ),
            tilt: TiltConfig {
                max_rotation_deg: overlay(
                    &defaults.tilt.max_rotation_deg,
                    &self.tilt.max_rotation_deg,
                    &other.tilt.max_rotation_deg,
                ),
                glare_falloff: overlay(
                    &defaults.tilt.glare_falloff,
                    &self.tilt.glare_falloff,
                    &other.tilt.glare_falloff,
                ),
                perspective_px: overlay(
                    &defaults.tilt.perspective_px,
                    &self.tilt.perspective_px,
                    &other.tilt.perspective_px,
                ),
                hover_scale: overlay(
                    &defaults.tilt.hover_scale,
                    &self.tilt.hover_scale,
                    &other.tilt.hover_scale,
                ),
            },
            hero: HeroConfig {
                initial_delay_ms: overlay(
                    &defaults.hero.initial_delay_ms,
                    &self.hero.initial_delay_ms,
                    &other.hero.initial_delay_ms,
                ),
                interval_ms: overlay(
                    &defaults.hero.interval_ms,
                    &self.hero.interval_ms,
                    &other.hero.interval_ms,
                ),
                active_ms: overlay(
                    &defaults.hero.active_ms,
                    &self.hero.active_ms,
                    &other.hero.active_ms,
                ),
            },
        }
    }
}

fn overlay<T: Clone + PartialEq>(default: &T, base: &T, over: &T) -> T {
    if over != default {
        over.clone()
    } else {
        base.clone()
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> SymptomResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        SymptomError::ConfigError("Could not determine home directory".to_string())
    })?;

    Ok(home_dir.join(".config").join(app_name))
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> SymptomResult<PathBuf> {
    let config_dir = get_default_config_dir(app_name)?;
    Ok(config_dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = UiConfig::load_from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/check-symptoms");
        assert_eq!(config.overlap, OverlapPolicy::LastArrival);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            overlap = "latest-issued"
            escape_html = false

            [hero]
            interval_ms = 5000
            "#,
        )
        .unwrap();

        let config = UiConfig::load_from_file(&path).unwrap();
        assert_eq!(config.overlap, OverlapPolicy::LatestIssued);
        assert!(!config.escape_html);
        assert_eq!(config.hero.interval(), Duration::from_secs(5));
        assert_eq!(config.hero.initial_delay(), Duration::from_secs(2));
        assert_eq!(config.tilt, TiltConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "overlap = \"first-wins\"").unwrap();

        let err = UiConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SymptomError::ConfigError(_)));
    }

    #[test]
    fn test_merge_prefers_non_default_overrides() {
        let base = UiConfig {
            endpoint: "http://10.0.0.5:8000/check-symptoms".to_string(),
            log_level: Some("info".to_string()),
            hero: HeroConfig {
                initial_delay_ms: 500,
                ..HeroConfig::default()
            },
            ..UiConfig::default()
        };
        let overrides = UiConfig {
            overlap: OverlapPolicy::LatestIssued,
            hero: HeroConfig {
                interval_ms: 4_000,
                ..HeroConfig::default()
            },
            ..UiConfig::default()
        };

        let merged = base.merge(&overrides);
        assert_eq!(merged.endpoint, "http://10.0.0.5:8000/check-symptoms");
        assert_eq!(merged.log_level.as_deref(), Some("info"));
        assert_eq!(merged.overlap, OverlapPolicy::LatestIssued);
        assert_eq!(merged.hero.initial_delay_ms, 500);
        assert_eq!(merged.hero.interval_ms, 4_000);
        assert_eq!(merged.tilt, TiltConfig::default());
    }

    #[test]
    fn test_merge_with_defaults_is_identity() {
        let base = UiConfig {
            escape_html: false,
            scroll_gutter_px: 16.0,
            ..UiConfig::default()
        };
        assert_eq!(base.merge(&UiConfig::default()), base);
        assert_eq!(UiConfig::default().merge(&base), base);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = UiConfig {
            scroll_gutter_px: 12.0,
            log_level: Some("debug".to_string()),
            ..UiConfig::default()
        };

        config.save_to_file(&path).unwrap();
        assert_eq!(UiConfig::load_from_file(&path).unwrap(), config);
    }
}
