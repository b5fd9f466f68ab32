//! Chord-sequence similarity.
//!
//! Two scorers coexist: the weighted progression scorer used for search, and
//! a cheaper windowed comparison used to gate similar-track suggestions.

pub mod quick;
pub mod sequence;
pub mod weighted;

pub use quick::{quick_chord_similarity, DEFAULT_QUICK_WINDOW};
pub use weighted::{
    progression_similarity, ProgressionMatch, ProgressionScorer, ProgressionWeights,
    DEFAULT_MAX_SEQUENCE_LEN,
};
