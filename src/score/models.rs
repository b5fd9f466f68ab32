//! Score submission models.
//!
//! A score is a hand-annotated transcription of a track: notes, chord
//! events, key signatures and section boundaries, plus the derived
//! relative-chord numbers computed from them.

use crate::error::AnalyzerResult;
use serde::{de, Deserialize, Deserializer, Serialize};

// =============================================================================
// Chord events
// =============================================================================

/// Root of a chord as submitted by the annotator.
///
/// Either a 1-based scale slot (integer) or a pitch-class name such as `"Eb"`.
/// Slots written as whole-number floats (`5.0`) are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChordRoot {
    Slot(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for ChordRoot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRoot {
            Slot(i64),
            Number(f64),
            Name(String),
        }

        match RawRoot::deserialize(deserializer)? {
            RawRoot::Slot(slot) => Ok(ChordRoot::Slot(slot)),
            RawRoot::Number(number)
                if number.fract() == 0.0
                    && number >= i64::MIN as f64
                    && number < i64::MAX as f64 =>
            {
                Ok(ChordRoot::Slot(number as i64))
            }
            RawRoot::Number(number) => Err(de::Error::custom(format!(
                "chord root {number} is not a whole number"
            ))),
            RawRoot::Name(name) => Ok(ChordRoot::Name(name)),
        }
    }
}

/// Chord quality, either the numeric code used by the editor (5 = major,
/// 3 = minor) or a symbolic name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChordQuality {
    Code(i64),
    Symbol(String),
}

impl ChordQuality {
    pub const MAJOR: ChordQuality = ChordQuality::Code(5);
    pub const MINOR: ChordQuality = ChordQuality::Code(3);

    pub fn is_minor(&self) -> bool {
        match self {
            ChordQuality::Code(code) => *code == 3,
            ChordQuality::Symbol(symbol) => {
                matches!(symbol.as_str(), "m" | "min" | "minor")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChordEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<ChordRoot>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<ChordQuality>,
    #[serde(default)]
    pub suspensions: Vec<i64>,
    #[serde(default)]
    pub beat: f64,
}

impl ChordEvent {
    pub fn new(root: ChordRoot, quality: ChordQuality, beat: f64) -> Self {
        Self {
            root: Some(root),
            quality: Some(quality),
            suspensions: Vec::new(),
            beat,
        }
    }

    pub fn with_suspensions(mut self, suspensions: Vec<i64>) -> Self {
        self.suspensions = suspensions;
        self
    }
}

// =============================================================================
// Keys and sections
// =============================================================================

/// Mode of a key. Anything that is not literally `"major"` is read as minor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Scale {
    Major,
    Minor,
}

impl From<String> for Scale {
    fn from(value: String) -> Self {
        if value == "major" {
            Scale::Major
        } else {
            Scale::Minor
        }
    }
}

impl Scale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Key {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tonic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

impl Key {
    pub fn new(tonic: &str, scale: Scale) -> Self {
        Self {
            tonic: Some(tonic.to_string()),
            scale: Some(scale),
        }
    }

    /// An empty key object carries no information and counts as no key.
    pub fn is_empty(&self) -> bool {
        self.tonic.is_none() && self.scale.is_none()
    }

    pub fn tonic_or_default(&self) -> &str {
        self.tonic.as_deref().unwrap_or("C")
    }

    pub fn scale_or_default(&self) -> Scale {
        self.scale.unwrap_or(Scale::Major)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub beat: f64,
}

impl Section {
    pub fn new(name: &str, beat: f64) -> Self {
        Self {
            name: name.to_string(),
            beat,
        }
    }
}

/// Scale degrees of the chords played in one section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeChordEntry {
    pub section: String,
    pub chords: Vec<u8>,
}

// =============================================================================
// Submission
// =============================================================================

/// Raw score payload plus its derived `relative_chords`.
///
/// `relative_chords` is never taken from the client: it is overwritten every
/// time derived fields are recomputed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreData {
    #[serde(default)]
    pub notes: Vec<serde_json::Value>,
    #[serde(default)]
    pub chords: Vec<ChordEvent>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub keys: Vec<Key>,
    #[serde(default)]
    pub relative_chords: Vec<RelativeChordEntry>,
}

impl ScoreData {
    pub fn from_json(json: &str) -> AnalyzerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The first key is authoritative; an empty first key means no key.
    pub fn active_key(&self) -> Option<&Key> {
        self.keys.first().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyzerError;

    #[test]
    fn test_parse_full_submission() {
        let json = r#"{
            "notes": [{"pitch": 60}, {"pitch": 64}],
            "chords": [
                {"root": 1, "type": 5, "beat": 0},
                {"root": "G", "type": 3, "suspensions": [4], "beat": 4.5}
            ],
            "sections": [{"name": "Verse", "beat": 0}],
            "keys": [{"tonic": "C", "scale": "major"}]
        }"#;

        let score = ScoreData::from_json(json).unwrap();
        assert_eq!(score.notes.len(), 2);
        assert_eq!(score.chords.len(), 2);
        assert_eq!(score.chords[0].root, Some(ChordRoot::Slot(1)));
        assert_eq!(score.chords[1].root, Some(ChordRoot::Name("G".to_string())));
        assert_eq!(score.chords[1].quality, Some(ChordQuality::MINOR));
        assert_eq!(score.chords[1].suspensions, vec![4]);
        assert_eq!(score.chords[1].beat, 4.5);
        assert_eq!(score.sections[0], Section::new("Verse", 0.0));
        assert_eq!(score.active_key(), Some(&Key::new("C", Scale::Major)));
        assert!(score.relative_chords.is_empty());
    }

    #[test]
    fn test_whole_number_float_roots_are_slots() {
        let json = r#"{"chords": [{"root": 5.0, "type": 5}, {"root": -2.0}, {"root": 7}]}"#;
        let score = ScoreData::from_json(json).unwrap();
        assert_eq!(score.chords[0].root, Some(ChordRoot::Slot(5)));
        assert_eq!(score.chords[1].root, Some(ChordRoot::Slot(-2)));
        assert_eq!(score.chords[2].root, Some(ChordRoot::Slot(7)));
    }

    #[test]
    fn test_fractional_root_is_rejected() {
        let json = r#"{"chords": [{"root": 5.5, "type": 5}]}"#;
        assert!(matches!(
            ScoreData::from_json(json),
            Err(AnalyzerError::InvalidSubmission(_))
        ));

        let json = r#"{"chords": [{"root": 1e300}]}"#;
        assert!(ScoreData::from_json(json).is_err());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let score = ScoreData::from_json("{}").unwrap();
        assert!(score.notes.is_empty());
        assert!(score.chords.is_empty());
        assert!(score.sections.is_empty());
        assert!(score.active_key().is_none());

        let chord: ChordEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(chord.root, None);
        assert_eq!(chord.quality, None);
        assert_eq!(chord.beat, 0.0);
    }

    #[test]
    fn test_non_numeric_beat_is_rejected() {
        let json = r#"{"chords": [{"root": 1, "type": 5, "beat": "four"}]}"#;
        let result = ScoreData::from_json(json);
        assert!(matches!(result, Err(AnalyzerError::InvalidSubmission(_))));
    }

    #[test]
    fn test_empty_first_key_counts_as_no_key() {
        let json = r#"{"keys": [{}, {"tonic": "D", "scale": "minor"}]}"#;
        let score = ScoreData::from_json(json).unwrap();
        assert!(score.active_key().is_none());
    }

    #[test]
    fn test_unknown_scale_reads_as_minor() {
        let key: Key = serde_json::from_str(r#"{"tonic": "A", "scale": "dorian"}"#).unwrap();
        assert_eq!(key.scale, Some(Scale::Minor));

        let key: Key = serde_json::from_str(r#"{"tonic": "A"}"#).unwrap();
        assert_eq!(key.scale_or_default(), Scale::Major);
    }

    #[test]
    fn test_quality_minor_detection() {
        assert!(ChordQuality::MINOR.is_minor());
        assert!(!ChordQuality::MAJOR.is_minor());
        assert!(ChordQuality::Symbol("min".to_string()).is_minor());
        assert!(!ChordQuality::Symbol("maj7".to_string()).is_minor());
    }

    #[test]
    fn test_serialization_keeps_type_field_name() {
        let chord = ChordEvent::new(ChordRoot::Slot(2), ChordQuality::MINOR, 8.0);
        let json = serde_json::to_value(&chord).unwrap();
        assert_eq!(json["type"], 3);
        assert_eq!(json["root"], 2);
        assert_eq!(json["beat"], 8.0);
    }
}
