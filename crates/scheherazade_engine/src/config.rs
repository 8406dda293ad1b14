//! Engine configuration.
//!
//! TOML-based configuration with bundled defaults (include_str! from
//! scheherazade.toml), optional user overrides (./scheherazade.toml or
//! ~/.config/scheherazade/scheherazade.toml), and automatic merging with
//! user values taking precedence.

use crate::RetryPolicy;
use config::{Config, File, FileFormat};
use scheherazade_error::{ConfigError, ScheherazadeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../scheherazade.toml");

/// Sampling settings for each kind of backend call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Token budget for chapter prose
    #[serde(default = "default_chapter_max_tokens")]
    pub chapter_max_tokens: u32,
    /// Temperature for chapter prose
    #[serde(default = "default_chapter_temperature")]
    pub chapter_temperature: f32,
    /// Token budget for arc briefs
    #[serde(default = "default_brief_max_tokens")]
    pub brief_max_tokens: u32,
    /// Temperature for arc briefs
    #[serde(default = "default_brief_temperature")]
    pub brief_temperature: f32,
    /// Token budget for window compression summaries
    #[serde(default = "default_summary_max_tokens")]
    pub summary_max_tokens: u32,
    /// Temperature for window compression; low, it is a faithful summary
    #[serde(default = "default_summary_temperature")]
    pub summary_temperature: f32,
    /// Token budget for the recap fallback call
    #[serde(default = "default_recap_max_tokens")]
    pub recap_max_tokens: u32,
}

fn default_chapter_max_tokens() -> u32 {
    2000
}
fn default_chapter_temperature() -> f32 {
    0.8
}
fn default_brief_max_tokens() -> u32 {
    400
}
fn default_brief_temperature() -> f32 {
    0.7
}
fn default_summary_max_tokens() -> u32 {
    300
}
fn default_summary_temperature() -> f32 {
    0.3
}
fn default_recap_max_tokens() -> u32 {
    200
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            chapter_max_tokens: default_chapter_max_tokens(),
            chapter_temperature: default_chapter_temperature(),
            brief_max_tokens: default_brief_max_tokens(),
            brief_temperature: default_brief_temperature(),
            summary_max_tokens: default_summary_max_tokens(),
            summary_temperature: default_summary_temperature(),
            recap_max_tokens: default_recap_max_tokens(),
        }
    }
}

/// Engine configuration.
///
/// # Examples
///
/// ```
/// use scheherazade_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.recap_window, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Verbatim recaps kept before compression (K)
    #[serde(default = "default_recap_window")]
    pub recap_window: usize,
    /// Upper bound on chapters per advance call
    #[serde(default = "default_max_batch")]
    pub max_batch: u32,
    /// Backend retry policy
    #[serde(default)]
    pub retry: RetryPolicy,
    /// Sampling settings
    #[serde(default)]
    pub generation: GenerationSettings,
}

fn default_recap_window() -> usize {
    10
}

fn default_max_batch() -> u32 {
    50
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recap_window: default_recap_window(),
            max_batch: default_max_batch(),
            retry: RetryPolicy::default(),
            generation: GenerationSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from bundled defaults merged with user overrides.
    ///
    /// Sources, later ones taking precedence:
    /// 1. bundled defaults
    /// 2. `<config dir>/scheherazade/scheherazade.toml`
    /// 3. `./scheherazade.toml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or the merged
    /// values fail validation.
    pub fn load() -> ScheherazadeResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("scheherazade").join("scheherazade.toml");
            if user_path.exists() {
                debug!(path = %user_path.display(), "Merging user configuration");
                builder = builder.add_source(File::from(user_path));
            }
        }

        let local_path = Path::new("scheherazade.toml");
        if local_path.exists() {
            debug!(path = %local_path.display(), "Merging local configuration");
            builder = builder.add_source(File::from(local_path.to_path_buf()));
        }

        let merged = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {e}")))?;

        let config: EngineConfig = merged
            .get("engine")
            .map_err(|e| ConfigError::new(format!("Failed to parse [engine] section: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the merged values.
    pub fn validate(&self) -> ScheherazadeResult<()> {
        if self.recap_window == 0 {
            return Err(ConfigError::new("recap_window must be at least 1").into());
        }
        if self.max_batch == 0 || self.max_batch > 50 {
            return Err(ConfigError::new(format!(
                "max_batch must be in 1..=50, got {}",
                self.max_batch
            ))
            .into());
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::new("retry.max_attempts must be at least 1").into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let merged = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap();
        let config: EngineConfig = merged.get("engine").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn zero_window_fails_validation() {
        let config = EngineConfig {
            recap_window: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_batch_fails_validation() {
        let config = EngineConfig {
            max_batch: 51,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
