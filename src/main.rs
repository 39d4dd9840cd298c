//! Application entry point — session-miner.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Resolve the transcripts directory (optional positional override).
//! 4. Analysis pass — ingest every `.txt` file, print the temporal report,
//!    the most active periods and the per-producer patterns.
//! 5. Preprocessing pass — write a normalized copy of every transcript.
//! 6. Summaries (when enabled) — chunk each normalized file and send the
//!    chunks to the remote summarizer on a tokio runtime.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use session_miner::{
    analysis::{format_clock, TimeBucketAggregator},
    config::AppConfig,
    pipeline::{preprocess_directory, TranscriptAnalyzer},
    preprocess::{Chunker, TextNormalizer},
    summarize::{ApiSummarizer, Summarizer, EXCERPT_INSTRUCTIONS},
};

// ---------------------------------------------------------------------------
// Report printing
// ---------------------------------------------------------------------------

/// How many actions to show per producer in the pattern listing.
const PATTERN_PREVIEW: usize = 3;

fn print_analysis(aggregator: &TimeBucketAggregator, top_buckets: usize) {
    let report = aggregator.temporal_report();
    if report.is_empty() {
        println!("No matched lines; nothing to report.");
        return;
    }

    println!("\nTemporal Analysis of Producer Actions:");
    print!("{}", report.render());

    println!("\nMost Active Time Periods:");
    for row in report.top_n(top_buckets) {
        println!("{:>5}  {:>5}  {}", row.clock, row.count, row.sample);
    }

    println!("\nProducer Patterns:");
    for producer in aggregator.producers() {
        let patterns = aggregator.producer_patterns(producer);
        println!("{} ({} actions)", producer, patterns.len());
        for (bucket, text) in patterns.iter().take(PATTERN_PREVIEW) {
            println!("  {:>5}  {}", format_clock(*bucket), text);
        }
    }
}

// ---------------------------------------------------------------------------
// Remote summaries
// ---------------------------------------------------------------------------

/// Chunk every normalized transcript and collect per-chunk summaries into
/// one report file per transcript under the reports directory.
///
/// A failed chunk is logged and dropped from the report; a transcript whose
/// chunks all fail produces no report file.
fn run_summaries(config: &AppConfig, normalized: &[PathBuf]) -> anyhow::Result<()> {
    let chunker = Chunker::new(config.chunking.chunk_size, config.chunking.overlap)?;
    fs::create_dir_all(&config.paths.reports_dir)?;

    // 2 workers: one summary in flight, one free for the runtime itself
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let summarizer: Arc<dyn Summarizer> =
        Arc::new(ApiSummarizer::from_config(&config.summarizer));

    for path in normalized {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("summaries: skipping {}: {e}", path.display());
                continue;
            }
        };

        let mut sections = Vec::new();
        for (index, chunk) in chunker.chunks(&content).enumerate() {
            match rt.block_on(summarizer.summarize(&chunk.text(), EXCERPT_INSTRUCTIONS)) {
                Ok(summary) => sections.push(summary),
                Err(e) => {
                    log::warn!(
                        "summaries: chunk {} of {} failed: {e}",
                        index,
                        path.display()
                    );
                }
            }
        }

        if sections.is_empty() {
            log::warn!("summaries: nothing usable for {}", path.display());
            continue;
        }

        let file_name = path.file_name().unwrap_or(path.as_os_str());
        let out_path = config.paths.reports_dir.join(file_name);
        fs::write(&out_path, sections.join("\n\n"))?;
        log::info!("summaries: wrote {}", out_path.display());
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("session-miner starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Transcripts directory — first positional argument overrides config
    let transcripts_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.paths.transcripts_dir.clone());
    log::info!("reading transcripts from {}", transcripts_dir.display());

    // 4. Analysis pass
    let mut analyzer = TranscriptAnalyzer::from_config(&config)?;
    let analysis = analyzer.process_directory(&transcripts_dir)?;
    let aggregator = analyzer.into_aggregator();
    print_analysis(&aggregator, config.analysis.top_buckets);
    println!(
        "\nAnalyzed {} producers across {} transcripts",
        aggregator.producer_count(),
        analysis.files_processed
    );

    // 5. Preprocessing pass
    let normalizer = TextNormalizer::new();
    let preprocess = preprocess_directory(
        &transcripts_dir,
        &config.paths.preprocessed_dir,
        &normalizer,
    )?;

    // 6. Remote summaries (optional)
    if config.summarizer.enabled {
        run_summaries(&config, &preprocess.written)?;
    } else {
        log::debug!("summarizer disabled; skipping report generation");
    }

    let failures = analysis.failures.len() + preprocess.failures.len();
    if failures > 0 {
        log::warn!("{failures} transcript(s) could not be processed; see warnings above");
    }

    Ok(())
}
