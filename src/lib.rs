//! Score Analyzer Library
//!
//! Chord-progression analysis for hand-annotated track scores: submission
//! rewards, scale-degree mapping, chord-sequence similarity and the catalog
//! recommendations built on them.

pub mod analysis;
pub mod config;
pub mod error;
pub mod recommend;
pub mod score;
pub mod similarity;
pub mod theory;

// Re-export commonly used types for convenience
pub use analysis::{analyze, HarmonicSummary, SubmissionAnalysis};
pub use config::{AnalyzerSettings, CliConfig, FileConfig, LoggingLevel};
pub use error::{AnalyzerError, AnalyzerResult};
pub use recommend::{CatalogEntry, TrackFacts};
pub use score::{Reward, ScoreData, ScoreRecord, ScoreStatus};
pub use similarity::{progression_similarity, quick_chord_similarity, ProgressionScorer};
pub use theory::{relative_chords, DegreeMapping};
