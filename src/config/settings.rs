//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AppPaths;
use crate::transcript::{FILLER_PHRASES, KEY_TERMS};

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Configuration values that cannot drive the pipeline.  Raised by the
/// consuming constructors rather than at load time, so a config file with a
/// bad chunking section still supports an analysis-only run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A zero bucket width cannot floor offsets into windows.
    #[error("bucket width must be at least 1 second")]
    ZeroBucketWidth,
    /// An overlap at or above the chunk size would stall the chunk window.
    #[error("chunk overlap ({overlap}) must be smaller than chunk size ({chunk_size})")]
    OverlapTooLarge { chunk_size: usize, overlap: usize },
}

// ---------------------------------------------------------------------------
// PathsConfig
// ---------------------------------------------------------------------------

/// Workspace directories, resolved relative to the working directory unless
/// absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory of raw transcripts, one `.txt` file per producer session.
    pub transcripts_dir: PathBuf,
    /// Output directory for normalized transcripts.
    pub preprocessed_dir: PathBuf,
    /// Output directory for summarizer reports.
    pub reports_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            transcripts_dir: "./transcripts".into(),
            preprocessed_dir: "./preprocessed_transcripts".into(),
            reports_dir: "./analysis_results".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisConfig
// ---------------------------------------------------------------------------

/// Settings for the temporal analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Width of one aggregation window in seconds.  Must be at least 1.
    pub bucket_width_secs: u32,
    /// How many of the most active buckets the run highlights.
    pub top_buckets: usize,
    /// Filler phrases dropped by the noise filter (whole line, compared
    /// case-insensitively).
    pub filler_phrases: Vec<String>,
    /// Production vocabulary that marks a line as interesting (whole word,
    /// compared case-insensitively).
    pub key_terms: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bucket_width_secs: 30,
            top_buckets: 3,
            filler_phrases: FILLER_PHRASES.iter().map(|p| p.to_string()).collect(),
            key_terms: KEY_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// ChunkingConfig
// ---------------------------------------------------------------------------

/// Settings for splitting normalized transcripts into summarizer windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Words per chunk.
    pub chunk_size: usize,
    /// Words shared between consecutive chunks.  Must stay below
    /// `chunk_size`.
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 200,
        }
    }
}

// ---------------------------------------------------------------------------
// SummarizerConfig
// ---------------------------------------------------------------------------

/// Settings for the remote summarization service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Whether summaries are generated at all.  Off by default; analysis and
    /// preprocessing never need the network.
    pub enabled: bool,
    /// Base URL of the API endpoint.
    ///
    /// - Ollama default: `http://localhost:11434`
    /// - OpenAI: `https://api.openai.com`
    pub base_url: String,
    /// API key — `None` for local providers.
    pub api_key: Option<String>,
    /// Model identifier sent to the API (e.g. `"mistral"`, `"gpt-4o-mini"`).
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).  Lower = more deterministic.
    pub temperature: f32,
    /// Maximum seconds to wait for a summary.  Chunks run to ~1000 words,
    /// so this sits well above an interactive timeout.
    pub timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://localhost:11434".into(),
            api_key: None,
            model: "mistral".into(),
            temperature: 0.3,
            timeout_secs: 60,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use session_miner::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Workspace directories.
    pub paths: PathsConfig,
    /// Temporal analysis settings.
    pub analysis: AnalysisConfig,
    /// Chunking settings for summarizer input.
    pub chunking: ChunkingConfig,
    /// Remote summarizer settings.
    pub summarizer: SummarizerConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
