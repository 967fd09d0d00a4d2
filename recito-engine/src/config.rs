//! Engine configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use recito_align::DEFAULT_MATCH_THRESHOLD;

/// How the host's speech provider delivers transcript updates.
///
/// This only governs how the session's display transcript is kept
/// (replaced vs appended); the aligner always receives exactly the words
/// of each update, however the host derived them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptMode {
    /// Each update carries the whole transcript so far (typical provider
    /// behavior)
    #[default]
    Cumulative,
    /// Each update carries only newly recognized words
    Incremental,
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to configuration file
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Minimum similarity (0–100) for a spoken token to confirm a target
    /// word
    pub match_threshold: u8,

    /// Transcript delivery semantics of the host's provider
    pub transcript_mode: TranscriptMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            config_path: Self::default_config_path(),
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            transcript_mode: TranscriptMode::default(),
        }
    }
}

impl EngineConfig {
    /// Set the match threshold
    pub fn match_threshold(mut self, threshold: u8) -> Self {
        self.match_threshold = threshold;
        self
    }

    /// Set the transcript delivery mode
    pub fn transcript_mode(mut self, mode: TranscriptMode) -> Self {
        self.transcript_mode = mode;
        self
    }

    /// Load configuration from file, or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let mut config: EngineConfig =
                toml::from_str(&contents).context("Failed to parse config file")?;

            config.config_path = config_path;
            Ok(config)
        } else {
            let config = Self::default();
            config.save().context("Failed to save default config")?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&self.config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recito")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.match_threshold, 60);
        assert_eq!(config.transcript_mode, TranscriptMode::Cumulative);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .match_threshold(75)
            .transcript_mode(TranscriptMode::Incremental);
        assert_eq!(config.match_threshold, 75);
        assert_eq!(config.transcript_mode, TranscriptMode::Incremental);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::default()
            .match_threshold(80)
            .transcript_mode(TranscriptMode::Incremental);

        let contents = toml::to_string_pretty(&config).unwrap();
        assert!(contents.contains("match_threshold = 80"));
        assert!(contents.contains("transcript_mode = \"incremental\""));

        let parsed: EngineConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.match_threshold, 80);
        assert_eq!(parsed.transcript_mode, TranscriptMode::Incremental);
    }
}
