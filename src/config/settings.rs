//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// ffmpeg audio extraction settings
    #[serde(default)]
    pub ffmpeg: FfmpegSettings,

    /// Audio chunking settings
    #[serde(default)]
    pub chunking: ChunkingSettings,

    /// Whisper transcription settings
    #[serde(default)]
    pub whisper: WhisperSettings,

    /// Summarization settings
    #[serde(default)]
    pub summary: SummarySettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Data directory for models and intermediate files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FfmpegSettings {
    /// ffmpeg binary to invoke (name on PATH or absolute path)
    #[serde(default = "default_ffmpeg_binary")]
    pub binary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingSettings {
    /// Whether to split audio into chunks before transcription
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Length of each chunk window in seconds
    #[serde(default = "default_chunk_secs")]
    pub chunk_secs: f64,

    /// Overlap between consecutive windows in seconds (must be < chunk_secs)
    #[serde(default = "default_overlap_secs")]
    pub overlap_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperSettings {
    /// Whisper model to use (tiny, base, small, medium, large)
    #[serde(default = "default_model")]
    pub model: String,

    /// Path to model files directory
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Language for transcription (empty = auto-detect)
    #[serde(default)]
    pub language: String,

    /// Enable translation to English during transcription
    #[serde(default)]
    pub translate: bool,

    /// Number of threads for inference (0 = auto)
    #[serde(default)]
    pub threads: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySettings {
    /// Summarization provider (leading, frequency, combined, gemini)
    #[serde(default = "default_summary_provider")]
    pub provider: String,

    /// Maximum number of bullet points in the notes
    #[serde(default = "default_max_points")]
    pub max_points: usize,

    /// API key (for the gemini provider and translation)
    #[serde(default)]
    pub api_key: String,

    /// Model name (for the gemini provider)
    #[serde(default = "default_summary_model")]
    pub model: String,

    /// API endpoint (for local/custom providers)
    #[serde(default)]
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory where pipeline outputs are written
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

// Default value functions

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "recap", "recap")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/recap"))
}

fn default_models_dir() -> PathBuf {
    let mut dir = default_data_dir();
    dir.push("models");
    dir
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ffmpeg_binary() -> String {
    "ffmpeg".to_string()
}

fn default_true() -> bool {
    true
}

fn default_chunk_secs() -> f64 {
    30.0
}

fn default_overlap_secs() -> f64 {
    5.0
}

fn default_model() -> String {
    "tiny".to_string()
}

fn default_summary_provider() -> String {
    "combined".to_string()
}

fn default_max_points() -> usize {
    5
}

fn default_summary_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Default for FfmpegSettings {
    fn default() -> Self {
        Self {
            binary: default_ffmpeg_binary(),
        }
    }
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            chunk_secs: default_chunk_secs(),
            overlap_secs: default_overlap_secs(),
        }
    }
}

impl Default for WhisperSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            models_dir: default_models_dir(),
            language: String::new(),
            translate: false,
            threads: 0,
        }
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            provider: default_summary_provider(),
            max_points: default_max_points(),
            api_key: String::new(),
            model: default_summary_model(),
            endpoint: String::new(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            ffmpeg: FfmpegSettings::default(),
            chunking: ChunkingSettings::default(),
            whisper: WhisperSettings::default(),
            summary: SummarySettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.summary.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("RECAP_GEMINI_API_KEY") {
                if !key.trim().is_empty() {
                    self.summary.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "recap", "recap")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Ensure all required directories exist
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.general.data_dir)?;
        std::fs::create_dir_all(&self.whisper.models_dir)?;
        Ok(())
    }

    /// Get the path to a whisper model file
    pub fn model_path(&self) -> PathBuf {
        self.whisper
            .models_dir
            .join(format!("ggml-{}.bin", self.whisper.model))
    }
}
