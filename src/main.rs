use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use score_analyzer::config::{AnalyzerSettings, CliConfig, FileConfig, LoggingLevel};
use score_analyzer::recommend::{self, parse_progression, CatalogEntry};
use score_analyzer::{analyze, DegreeMapping, ScoreData};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(version, about = "Chord-progression analysis for track scores")]
struct CliArgs {
    /// Path to a TOML config file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Default log level, LOG_LEVEL takes precedence when set.
    #[clap(long, default_value = "info")]
    pub logging_level: LoggingLevel,

    /// Numbering of named chord roots.
    #[clap(long, default_value = "diatonic")]
    pub degree_mapping: DegreeMapping,

    /// Quick similarity a track must exceed to be suggested as similar.
    #[clap(long, default_value_t = 0.7)]
    pub quick_threshold: f64,

    /// Minimum progression score for search results.
    #[clap(long, default_value_t = 0.3)]
    pub min_score: f64,

    /// Maximum number of search results.
    #[clap(long, default_value_t = 20)]
    pub max_results: usize,

    /// Maximum duration difference, in seconds, for similar-duration tracks.
    #[clap(long, default_value_t = 30)]
    pub duration_range_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Computes reward, relative chords and harmonic summary of a score
    /// submission (JSON file).
    Analyze {
        #[clap(value_parser = parse_path)]
        submission: PathBuf,
    },

    /// Scores a comma separated query progression against a candidate one.
    Compare { query: String, candidate: String },

    /// Searches a catalog (JSON file) for tracks matching a progression.
    Search {
        #[clap(value_parser = parse_path)]
        catalog: PathBuf,
        progression: String,
    },

    /// Shows the tracks related to a catalog track.
    Similar {
        #[clap(value_parser = parse_path)]
        catalog: PathBuf,
        track_id: String,
    },
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let catalog = recommend::parse_catalog(&read_file(path)?)
        .with_context(|| format!("Failed to parse catalog: {:?}", path))?;
    info!("Loaded catalog of {} tracks from {:?}", catalog.len(), path);
    Ok(catalog)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        logging_level: cli_args.logging_level,
        degree_mapping: cli_args.degree_mapping,
        quick_threshold: cli_args.quick_threshold,
        min_score: cli_args.min_score,
        max_results: cli_args.max_results,
        duration_range_secs: cli_args.duration_range_secs,
    };
    let settings = AnalyzerSettings::resolve(&cli_config, file_config)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(settings.logging_level.level_filter().into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    match cli_args.command {
        Command::Analyze { submission } => {
            let score = ScoreData::from_json(&read_file(&submission)?)
                .with_context(|| format!("Failed to parse submission: {:?}", submission))?;
            print_json(&analyze(&score, settings.degree_mapping))
        }
        Command::Compare { query, candidate } => {
            let query = parse_progression(&query)?;
            let candidate = parse_progression(&candidate)?;
            print_json(&settings.progression.scorer().compare(&query, &candidate))
        }
        Command::Search {
            catalog,
            progression,
        } => {
            let query = parse_progression(&progression)?;
            let catalog = load_catalog(&catalog)?;
            print_json(&recommend::search_progressions(
                &query,
                &catalog,
                &settings.progression,
            ))
        }
        Command::Similar { catalog, track_id } => {
            let catalog = load_catalog(&catalog)?;
            match recommend::related_tracks(
                &track_id,
                &catalog,
                &settings.similarity,
                &settings.relations,
            ) {
                Some(related) => print_json(&related),
                None => bail!("Track {} not found in catalog", track_id),
            }
        }
    }
}
