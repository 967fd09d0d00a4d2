//! Recito demo driver - read-aloud practice over stdin transcripts
//!
//! Stands in for a host application: picks a scenario and language from the
//! built-in catalog, then treats each stdin line as one transcript event
//! from a speech provider and renders the per-word progress the engine
//! reports. EOF ends the attempt.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

use recito_align::TargetWord;
use recito_engine::{Engine, EngineConfig, EngineEvent, TranscriptMode};
use recito_scenarios::catalog;

#[derive(Parser, Debug)]
#[command(name = "recito", version, about = "Read-aloud pronunciation practice")]
struct Cli {
    /// Scenario id (see --list)
    #[arg(long, default_value = "introduction")]
    scenario: String,

    /// Language code (see --list)
    #[arg(long, default_value = "es-ES")]
    language: String,

    /// Override the configured match threshold (1-100)
    #[arg(long)]
    threshold: Option<u8>,

    /// Emit machine-readable JSON events instead of rendered progress
    #[arg(long)]
    json: bool,

    /// List scenarios and languages, then exit
    #[arg(long)]
    list: bool,
}

fn print_catalog() {
    println!("Languages:");
    for lang in catalog().languages() {
        println!("  {:6}  {}", lang.code, lang.label);
    }
    println!("Scenarios:");
    for scenario in catalog().scenarios() {
        println!("  {:14}  {} - {}", scenario.id, scenario.title, scenario.description);
    }
}

fn render_words(words: &[TargetWord], cursor: usize) -> String {
    words
        .iter()
        .map(|w| {
            if w.completed() {
                format!("✓{}", w.raw_text)
            } else if w.index == cursor {
                format!("▶{}", w.raw_text)
            } else {
                w.raw_text.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    if cli.list {
        print_catalog();
        return Ok(());
    }

    let mut config = EngineConfig::load().context("Failed to load configuration")?;
    if let Some(threshold) = cli.threshold {
        config = config.match_threshold(threshold);
    }
    // Each stdin line is one utterance, so the transcript accumulates.
    config = config.transcript_mode(TranscriptMode::Incremental);

    let scenario = catalog()
        .find(&cli.scenario)
        .with_context(|| format!("Unknown scenario '{}' (try --list)", cli.scenario))?;
    let Some(paragraph) = scenario.paragraph(&cli.language) else {
        bail!("Scenario '{}' has no content for '{}' (try --list)", scenario.id, cli.language);
    };

    let mut engine = Engine::new(config).context("Failed to initialize engine")?;
    let id = engine
        .start_attempt(paragraph, &cli.language)
        .context("Failed to start attempt")?;

    info!("🎙️ {} [{}]", scenario.title, cli.language);
    if cli.json {
        let total_words = engine.target_words(id)?.len();
        let event = EngineEvent::AttemptStarted {
            attempt_id: id,
            language: cli.language.clone(),
            total_words,
            timestamp: Utc::now(),
        };
        print!("{}", event.to_json_line()?);
    } else {
        println!("Read aloud:\n  {}", paragraph);
        if let Some(guide) = scenario.transliteration(&cli.language) {
            println!("Sounds like:\n  {}", guide);
        }
        println!("(type what was heard, one utterance per line; Ctrl-D to finish)");
    }

    // Provider-callback simulation: stdin lines flow through a channel to
    // the processing loop, the way capture callbacks feed the pipeline.
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    while let Some(line) = rx.recv().await {
        let summary = engine.on_transcript(id, &line)?;

        if cli.json {
            print!("{}", EngineEvent::progress(id, &summary).to_json_line()?);
        } else {
            println!("  {}", render_words(engine.target_words(id)?, summary.cursor));
            println!(
                "  {}% ({}/{})",
                summary.percentage, summary.completed_count, summary.total_count
            );
        }

        if summary.completed_count == summary.total_count {
            info!("🎉 Paragraph complete");
            break;
        }
    }

    engine.end_attempt(id)?;
    let report = engine.get_progress(id)?;

    if cli.json {
        let event = EngineEvent::AttemptStopped {
            attempt_id: id,
            timestamp: Utc::now(),
        };
        print!("{}", event.to_json_line()?);
    } else {
        println!(
            "Final: {}% ({}/{} words)",
            report.percentage, report.completed_count, report.total_count
        );
    }

    Ok(())
}
