mod file_config;

pub use file_config::{
    AnalysisConfig, FileConfig, ProgressionConfig, RelationsConfig, SimilarityConfig,
};

use crate::similarity::{
    ProgressionScorer, ProgressionWeights, DEFAULT_MAX_SEQUENCE_LEN, DEFAULT_QUICK_WINDOW,
};
use crate::theory::DegreeMapping;
use anyhow::{bail, Result};
use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

/// Verbosity of the analyzer's own logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LoggingLevel {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LoggingLevel::Error => LevelFilter::ERROR,
            LoggingLevel::Warn => LevelFilter::WARN,
            LoggingLevel::Info => LevelFilter::INFO,
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub logging_level: LoggingLevel,
    pub degree_mapping: DegreeMapping,
    pub quick_threshold: f64,
    pub min_score: f64,
    pub max_results: usize,
    pub duration_range_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            logging_level: LoggingLevel::default(),
            degree_mapping: DegreeMapping::default(),
            quick_threshold: SimilaritySettings::default().quick_threshold,
            min_score: ProgressionSettings::default().min_score,
            max_results: ProgressionSettings::default().max_results,
            duration_range_secs: RelationSettings::default().duration_range_secs,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    pub logging_level: LoggingLevel,
    pub degree_mapping: DegreeMapping,

    // Feature settings (with defaults)
    pub similarity: SimilaritySettings,
    pub progression: ProgressionSettings,
    pub relations: RelationSettings,
}

impl AnalyzerSettings {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or(cli.logging_level);

        let analysis_file = file.analysis.unwrap_or_default();
        let degree_mapping = match analysis_file.degree_mapping {
            Some(s) => match parse_degree_mapping(&s) {
                Some(mapping) => mapping,
                None => bail!("Unknown degree_mapping in config file: {}", s),
            },
            None => cli.degree_mapping,
        };

        // Similarity settings - merge file config with defaults
        let sim_defaults = SimilaritySettings::default();
        let sim_file = file.similarity.unwrap_or_default();
        let similarity = SimilaritySettings {
            quick_window: sim_file.quick_window.unwrap_or(sim_defaults.quick_window),
            quick_threshold: sim_file.quick_threshold.unwrap_or(cli.quick_threshold),
            max_candidates: sim_file.max_candidates.unwrap_or(sim_defaults.max_candidates),
            max_similar: sim_file.max_similar.unwrap_or(sim_defaults.max_similar),
        };

        let prog_defaults = ProgressionSettings::default();
        let prog_file = file.progression.unwrap_or_default();
        let progression = ProgressionSettings {
            max_sequence_len: prog_file
                .max_sequence_len
                .unwrap_or(prog_defaults.max_sequence_len),
            min_score: prog_file.min_score.unwrap_or(cli.min_score),
            max_results: prog_file.max_results.unwrap_or(cli.max_results),
            weights: ProgressionWeights {
                lcs: prog_file.lcs_weight.unwrap_or(prog_defaults.weights.lcs),
                consecutive: prog_file
                    .consecutive_weight
                    .unwrap_or(prog_defaults.weights.consecutive),
                exact: prog_file.exact_weight.unwrap_or(prog_defaults.weights.exact),
                contained: prog_file
                    .contained_weight
                    .unwrap_or(prog_defaults.weights.contained),
            },
        };

        let relations_file = file.relations.unwrap_or_default();
        let relations = RelationSettings {
            duration_range_secs: relations_file
                .duration_range_secs
                .unwrap_or(cli.duration_range_secs),
        };

        if similarity.quick_window == 0 {
            bail!("similarity.quick_window must be greater than 0");
        }
        if !(0.0..=1.0).contains(&similarity.quick_threshold) {
            bail!(
                "similarity.quick_threshold must be within 0.0 and 1.0, got {}",
                similarity.quick_threshold
            );
        }
        if progression.max_sequence_len == 0 {
            bail!("progression.max_sequence_len must be greater than 0");
        }
        if !(0.0..=1.0).contains(&progression.min_score) {
            bail!(
                "progression.min_score must be within 0.0 and 1.0, got {}",
                progression.min_score
            );
        }
        let weights = &progression.weights;
        if [weights.lcs, weights.consecutive, weights.exact, weights.contained]
            .iter()
            .any(|weight| !weight.is_finite() || *weight < 0.0)
        {
            bail!("progression weights must be non-negative, got {:?}", weights);
        }

        Ok(Self {
            logging_level,
            degree_mapping,
            similarity,
            progression,
            relations,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SimilaritySettings {
    pub quick_window: usize,
    /// Candidates must score strictly above this.
    pub quick_threshold: f64,
    pub max_candidates: usize,
    pub max_similar: usize,
}

impl Default for SimilaritySettings {
    fn default() -> Self {
        Self {
            quick_window: DEFAULT_QUICK_WINDOW,
            quick_threshold: 0.7,
            max_candidates: 100,
            max_similar: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProgressionSettings {
    pub max_sequence_len: usize,
    pub min_score: f64,
    pub max_results: usize,
    pub weights: ProgressionWeights,
}

impl Default for ProgressionSettings {
    fn default() -> Self {
        Self {
            max_sequence_len: DEFAULT_MAX_SEQUENCE_LEN,
            min_score: 0.3,
            max_results: 20,
            weights: ProgressionWeights::default(),
        }
    }
}

impl ProgressionSettings {
    pub fn scorer(&self) -> ProgressionScorer {
        ProgressionScorer::new(self.weights, self.max_sequence_len)
    }
}

#[derive(Debug, Clone)]
pub struct RelationSettings {
    pub duration_range_secs: u64,
}

impl Default for RelationSettings {
    fn default() -> Self {
        Self {
            duration_range_secs: 30,
        }
    }
}

/// Parses a logging level string into LoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<LoggingLevel> {
    LoggingLevel::from_str(s, true).ok()
}

/// Accepts both the TOML spelling (`chromatic_mod_seven`) and the CLI one.
fn parse_degree_mapping(s: &str) -> Option<DegreeMapping> {
    DegreeMapping::from_str(&s.replace('_', "-"), true).ok()
}
