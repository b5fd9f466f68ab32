use thiserror::Error;

/// Errors surfaced by the analyzer.
///
/// Malformed musical content (unknown roots, missing keys, empty sections)
/// is never an error: it is skipped or defaulted. Only payloads whose shape
/// cannot be interpreted at all end up here.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Invalid score submission: {0}")]
    InvalidSubmission(#[from] serde_json::Error),

    #[error("Invalid chord sequence: {0}")]
    InvalidChordSequence(String),
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
