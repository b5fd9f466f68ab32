//! Scale-degree analysis of chord roots, grouped by song section.
//!
//! Every chord root is mapped to a degree in `1..=7` relative to the active
//! key. The output is always in range, whatever the chromatic input.

use super::pitch::{pitch_index, pitch_table, MAJOR_PITCH_CLASSES};
use crate::score::{ChordEvent, ChordRoot, Key, RelativeChordEntry, Scale, ScoreData, Section};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Default tonic used when the submitted tonic is not a known spelling.
const FALLBACK_TONIC: &str = "C";

/// Degree of each semitone above the tonic. Chromatic notes read as the
/// scale degree just below them.
const MAJOR_DEGREES: [u8; 12] = [1, 1, 2, 2, 3, 4, 4, 5, 5, 6, 6, 7];
const MINOR_DEGREES: [u8; 12] = [1, 1, 2, 3, 3, 4, 4, 5, 6, 6, 7, 7];

/// How a named root is turned into a degree.
///
/// Integer roots are already scale slots and are only shifted by the tonic,
/// identically in both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DegreeMapping {
    /// Semitone distance from the tonic, looked up in the major or natural
    /// minor degree table. G in C major is 5.
    #[default]
    Diatonic,
    /// `(root_index - tonic_index) mod 7 + 1` over the pitch table, the
    /// numbering stored by older score records. G in C major is 1.
    ChromaticModSeven,
}

/// Index of the tonic in the sharp-spelled table.
///
/// The lookup always goes through the major table, whatever the mode. Flat
/// spellings such as `"Eb"` therefore fall back to C.
pub fn tonic_index(tonic: &str) -> usize {
    match pitch_index(&MAJOR_PITCH_CLASSES, tonic) {
        Some(index) => index,
        None => {
            warn!(
                "Invalid tonic {} for major pitch table, defaulting to {}",
                tonic, FALLBACK_TONIC
            );
            pitch_index(&MAJOR_PITCH_CLASSES, FALLBACK_TONIC).unwrap_or(0)
        }
    }
}

/// Scale degree of a single root, or `None` when a named root is unknown to
/// the pitch table of `scale`.
pub fn relative_degree(
    root: &ChordRoot,
    tonic_index: usize,
    scale: Scale,
    mapping: DegreeMapping,
) -> Option<u8> {
    let tonic = tonic_index as i64;
    match root {
        // reduced first, any i64 is a valid slot
        ChordRoot::Slot(slot) => Some(((slot.rem_euclid(7) - 1 + tonic).rem_euclid(7) + 1) as u8),
        ChordRoot::Name(name) => {
            let root_index = pitch_index(pitch_table(scale), name)? as i64;
            let degree = match mapping {
                DegreeMapping::Diatonic => {
                    let semitones = (root_index - tonic).rem_euclid(12) as usize;
                    match scale {
                        Scale::Major => MAJOR_DEGREES[semitones],
                        Scale::Minor => MINOR_DEGREES[semitones],
                    }
                }
                DegreeMapping::ChromaticModSeven => ((root_index - tonic).rem_euclid(7) + 1) as u8,
            };
            Some(degree)
        }
    }
}

/// Beat at which `section` ends: the start of the nearest section that begins
/// strictly later, or unbounded.
fn section_end(section: &Section, sections: &[Section]) -> f64 {
    sections
        .iter()
        .map(|other| other.beat)
        .filter(|beat| *beat > section.beat)
        .fold(f64::INFINITY, f64::min)
}

fn dedup_in_order(degrees: Vec<u8>) -> Vec<u8> {
    let mut unique = Vec::with_capacity(degrees.len());
    for degree in degrees {
        if !unique.contains(&degree) {
            unique.push(degree);
        }
    }
    unique
}

/// Relative chord numbers per section.
///
/// Returns an empty list when there are no chords or no key. Sections whose
/// window holds no resolvable chord are omitted.
pub fn relative_chords(
    chords: &[ChordEvent],
    key: Option<&Key>,
    sections: &[Section],
    mapping: DegreeMapping,
) -> Vec<RelativeChordEntry> {
    let key = match key {
        Some(key) if !chords.is_empty() && !key.is_empty() => key,
        _ => {
            warn!("Missing chords or key in score data");
            return Vec::new();
        }
    };

    let tonic_index = tonic_index(key.tonic_or_default());
    let scale = key.scale_or_default();

    let mut entries = Vec::new();
    for section in sections {
        let end = section_end(section, sections);

        let degrees: Vec<u8> = chords
            .iter()
            .filter(|chord| section.beat <= chord.beat && chord.beat < end)
            .filter_map(|chord| {
                let root = chord.root.clone().unwrap_or(ChordRoot::Slot(1));
                let degree = relative_degree(&root, tonic_index, scale, mapping);
                if degree.is_none() {
                    debug!("Invalid root {:?} for scale, skipping", root);
                }
                degree
            })
            .collect();

        let unique = dedup_in_order(degrees);
        if !unique.is_empty() {
            entries.push(RelativeChordEntry {
                section: section.name.clone(),
                chords: unique,
            });
        }
    }

    info!("Calculated relative chords for {} sections", entries.len());
    entries
}

pub fn relative_chords_for(score: &ScoreData, mapping: DegreeMapping) -> Vec<RelativeChordEntry> {
    relative_chords(&score.chords, score.active_key(), &score.sections, mapping)
}
