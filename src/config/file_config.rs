use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub logging_level: Option<String>,

    // Feature configs
    pub analysis: Option<AnalysisConfig>,
    pub similarity: Option<SimilarityConfig>,
    pub progression: Option<ProgressionConfig>,
    pub relations: Option<RelationsConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Degree numbering of named roots: "diatonic" or "chromatic_mod_seven"
    pub degree_mapping: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct SimilarityConfig {
    pub quick_window: Option<usize>,
    pub quick_threshold: Option<f64>,
    pub max_candidates: Option<usize>,
    pub max_similar: Option<usize>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ProgressionConfig {
    pub max_sequence_len: Option<usize>,
    pub min_score: Option<f64>,
    pub max_results: Option<usize>,
    // Component weights
    pub lcs_weight: Option<f64>,
    pub consecutive_weight: Option<f64>,
    pub exact_weight: Option<f64>,
    pub contained_weight: Option<f64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct RelationsConfig {
    pub duration_range_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
