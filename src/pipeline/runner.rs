//! Pipeline runners — drive whole transcript directories through the
//! per-line analysis flow and the whole-document preprocessing flow.
//!
//! # Analysis flow
//!
//! ```text
//! transcripts/*.txt  (one file per producer session)
//!   └─▶ parse_timestamp_line        malformed line → skip
//!         └─▶ NoiseFilter           filler / too short → skip
//!               └─▶ KeywordExtractor   no vocabulary hit → skip
//!                     └─▶ TimeBucketAggregator.record(producer, offset, line)
//! ```
//!
//! # Preprocessing flow
//!
//! ```text
//! transcripts/*.txt ─▶ TextNormalizer.normalize ─▶ preprocessed/<same name>
//! ```
//!
//! A single unreadable file never aborts a run: the failure is logged,
//! recorded in the summary and the walk continues.  Only failing to list
//! the directory itself is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::analysis::TimeBucketAggregator;
use crate::config::{AppConfig, ConfigError};
use crate::preprocess::TextNormalizer;
use crate::transcript::{parse_timestamp_line, KeywordExtractor, NoiseFilter};

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// I/O failures raised while walking transcript directories.
///
/// Every variant names the path it failed on so a run summary stays
/// meaningful without extra context.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A transcript file could not be read (missing, unreadable, not UTF-8).
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file or directory could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The transcript directory itself could not be listed.
    #[error("failed to list {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Run summaries
// ---------------------------------------------------------------------------

/// Outcome of one analysis run over a directory.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files fully ingested.
    pub files_processed: usize,
    /// Matched lines recorded into the aggregator, across all files.
    pub lines_recorded: usize,
    /// Per-file failures; the files were skipped but the run continued.
    pub failures: Vec<PipelineError>,
}

/// Outcome of one preprocessing run over a directory.
#[derive(Debug, Default)]
pub struct PreprocessSummary {
    /// Normalized files written, in input order.
    pub written: Vec<PathBuf>,
    /// Per-file failures; the files were skipped but the run continued.
    pub failures: Vec<PipelineError>,
}

// ---------------------------------------------------------------------------
// TranscriptAnalyzer
// ---------------------------------------------------------------------------

/// Drives the per-line analysis flow and owns its accumulated state.
///
/// Create with [`TranscriptAnalyzer::from_config`], feed it files or whole
/// directories, then read the results from [`aggregator`](Self::aggregator)
/// or take them with [`into_aggregator`](Self::into_aggregator) once
/// ingestion is done.
///
/// ```rust,no_run
/// use session_miner::config::AppConfig;
/// use session_miner::pipeline::TranscriptAnalyzer;
///
/// let config = AppConfig::default();
/// let mut analyzer = TranscriptAnalyzer::from_config(&config).unwrap();
/// let summary = analyzer
///     .process_directory(&config.paths.transcripts_dir)
///     .unwrap();
///
/// println!("{} matched lines", summary.lines_recorded);
/// print!("{}", analyzer.aggregator().temporal_report().render());
/// ```
pub struct TranscriptAnalyzer {
    noise: NoiseFilter,
    keywords: KeywordExtractor,
    aggregator: TimeBucketAggregator,
}

impl TranscriptAnalyzer {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Build an analyzer from application config (phrase table, vocabulary
    /// and bucket width all come from the `[analysis]` section).
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            noise: NoiseFilter::with_phrases(config.analysis.filler_phrases.iter().cloned()),
            keywords: KeywordExtractor::with_terms(config.analysis.key_terms.iter().cloned()),
            aggregator: TimeBucketAggregator::new(config.analysis.bucket_width_secs)?,
        })
    }

    /// Build an analyzer with the built-in tables and the given bucket width.
    pub fn new(bucket_width_secs: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            noise: NoiseFilter::new(),
            keywords: KeywordExtractor::new(),
            aggregator: TimeBucketAggregator::new(bucket_width_secs)?,
        })
    }

    // -----------------------------------------------------------------------
    // Ingestion
    // -----------------------------------------------------------------------

    /// Feed one raw line for `producer` through parse → noise → keyword.
    /// Returns `true` when the line was recorded.
    pub fn process_line(&mut self, producer: &str, line: &str) -> bool {
        let Some(parsed) = parse_timestamp_line(line) else {
            return false;
        };
        if self.noise.is_noise(&parsed.text) {
            return false;
        }
        let Some(matched) = self.keywords.extract(&parsed.text) else {
            return false;
        };
        self.aggregator
            .record(producer, parsed.offset_seconds, matched);
        true
    }

    /// Ingest a whole transcript file.  The producer name is the file stem,
    /// so `stimming - live set.txt` yields producer `stimming - live set`.
    pub fn process_file(&mut self, path: &Path) -> Result<usize, PipelineError> {
        let producer = producer_name(path);
        let content = fs::read_to_string(path).map_err(|source| PipelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut recorded = 0;
        for line in content.split('\n') {
            if self.process_line(&producer, line) {
                recorded += 1;
            }
        }
        log::debug!("analysis: {} → {} matched lines", path.display(), recorded);
        Ok(recorded)
    }

    /// Ingest every `.txt` file in `dir`, in sorted filename order.
    ///
    /// Unreadable files are logged, recorded in the summary and skipped;
    /// an unlistable directory is returned as an error.
    pub fn process_directory(&mut self, dir: &Path) -> Result<RunSummary, PipelineError> {
        let mut summary = RunSummary::default();
        for path in list_transcripts(dir)? {
            match self.process_file(&path) {
                Ok(recorded) => {
                    summary.files_processed += 1;
                    summary.lines_recorded += recorded;
                }
                Err(e) => {
                    log::warn!("analysis: skipping transcript: {e}");
                    summary.failures.push(e);
                }
            }
        }
        log::info!(
            "analysis: {} files, {} matched lines, {} failures",
            summary.files_processed,
            summary.lines_recorded,
            summary.failures.len()
        );
        Ok(summary)
    }

    // -----------------------------------------------------------------------
    // Results
    // -----------------------------------------------------------------------

    /// The accumulated aggregation state.
    pub fn aggregator(&self) -> &TimeBucketAggregator {
        &self.aggregator
    }

    /// Consume the analyzer and hand over the aggregation state.
    pub fn into_aggregator(self) -> TimeBucketAggregator {
        self.aggregator
    }
}

// ---------------------------------------------------------------------------
// Preprocessing runner
// ---------------------------------------------------------------------------

/// Normalize every `.txt` file from `input_dir` into `output_dir`, keeping
/// filenames.  The output directory is created if missing.
///
/// Per-file failures are logged, recorded and skipped, matching
/// [`TranscriptAnalyzer::process_directory`].
pub fn preprocess_directory(
    input_dir: &Path,
    output_dir: &Path,
    normalizer: &TextNormalizer,
) -> Result<PreprocessSummary, PipelineError> {
    fs::create_dir_all(output_dir).map_err(|source| PipelineError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut summary = PreprocessSummary::default();
    for path in list_transcripts(input_dir)? {
        match preprocess_file(&path, output_dir, normalizer) {
            Ok(written) => summary.written.push(written),
            Err(e) => {
                log::warn!("preprocess: skipping transcript: {e}");
                summary.failures.push(e);
            }
        }
    }
    log::info!(
        "preprocess: {} files written, {} failures",
        summary.written.len(),
        summary.failures.len()
    );
    Ok(summary)
}

/// Normalize one file into `output_dir` under the same filename.
fn preprocess_file(
    path: &Path,
    output_dir: &Path,
    normalizer: &TextNormalizer,
) -> Result<PathBuf, PipelineError> {
    let content = fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let normalized = normalizer.normalize(&content);

    let file_name = path.file_name().unwrap_or(path.as_os_str());
    let out_path = output_dir.join(file_name);
    fs::write(&out_path, normalized).map_err(|source| PipelineError::Write {
        path: out_path.clone(),
        source,
    })?;

    log::debug!("preprocess: {} → {}", path.display(), out_path.display());
    Ok(out_path)
}

// ---------------------------------------------------------------------------
// Directory listing
// ---------------------------------------------------------------------------

/// The `.txt` entries of `dir`, sorted by filename so runs are
/// deterministic regardless of filesystem enumeration order.
fn list_transcripts(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let entries = fs::read_dir(dir).map_err(|source| PipelineError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PipelineError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Producer name for a transcript path: the filename without its extension.
fn producer_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
