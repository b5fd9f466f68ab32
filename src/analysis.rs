//! One-shot analysis of a score submission.
//!
//! Derived data (reward, relative chords, harmonic summary) is always
//! recomputed from the raw chords, keys and sections. Nothing derived is ever
//! patched in place.

use crate::score::{reward_for, RelativeChordEntry, Reward, Scale, ScoreData};
use crate::theory::{chord_names, relative_chords_for, DegreeMapping};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-track harmonic facts, as shown next to a track and used for
/// progression search and structure matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HarmonicSummary {
    pub key: Option<String>,
    pub scale: Option<Scale>,
    pub chords: Vec<String>,
    pub sections: Vec<String>,
}

impl HarmonicSummary {
    pub fn from_score(score: &ScoreData) -> Self {
        let key = score.active_key();
        Self {
            key: key.and_then(|key| key.tonic.clone()),
            scale: key.and_then(|key| key.scale),
            chords: chord_names(&score.chords),
            sections: score
                .sections
                .iter()
                .filter(|section| !section.name.is_empty())
                .map(|section| section.name.clone())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionAnalysis {
    pub reward: Reward,
    pub relative_chords: Vec<RelativeChordEntry>,
    pub summary: HarmonicSummary,
}

pub fn analyze(score: &ScoreData, mapping: DegreeMapping) -> SubmissionAnalysis {
    let analysis = SubmissionAnalysis {
        reward: reward_for(score),
        relative_chords: relative_chords_for(score, mapping),
        summary: HarmonicSummary::from_score(score),
    };
    debug!(
        "Analyzed submission: {} notes, {} chords, {} sections, reward {}",
        score.notes.len(),
        score.chords.len(),
        score.sections.len(),
        analysis.reward
    );
    analysis
}

/// Overwrites `relative_chords` from the raw data and returns the reward.
pub fn refresh_derived(score: &mut ScoreData, mapping: DegreeMapping) -> Reward {
    score.relative_chords = relative_chords_for(score, mapping);
    reward_for(score)
}
