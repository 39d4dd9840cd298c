//! Configuration module for session-miner.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for each pipeline
//! stage, `AppPaths` for the cross-platform settings location, TOML
//! persistence via `AppConfig::load` / `AppConfig::save`, and `ConfigError`
//! for values the pipeline constructors reject.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{
    AnalysisConfig, AppConfig, ChunkingConfig, ConfigError, PathsConfig, SummarizerConfig,
};
