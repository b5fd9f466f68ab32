//! Pitch-class tables and chord display names.

use crate::score::{ChordEvent, ChordRoot, Scale};
use tracing::debug;

/// Sharp spellings, used for major keys and for tonic lookup.
pub const MAJOR_PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings for the black keys, used for minor keys.
pub const MINOR_PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

pub fn pitch_table(scale: Scale) -> &'static [&'static str; 12] {
    match scale {
        Scale::Major => &MAJOR_PITCH_CLASSES,
        Scale::Minor => &MINOR_PITCH_CLASSES,
    }
}

pub fn pitch_index(table: &[&str; 12], name: &str) -> Option<usize> {
    table.iter().position(|candidate| *candidate == name)
}

/// Display name of a single chord, e.g. `"Am"` or `"Fsus4"`.
///
/// Integer roots must be in 1..=12. String roots are accepted when they are a
/// spelling from either pitch table.
pub fn chord_name(chord: &ChordEvent) -> Option<String> {
    let root_name = match chord.root.as_ref() {
        Some(ChordRoot::Slot(slot)) if (1..=12).contains(slot) => {
            MAJOR_PITCH_CLASSES[(*slot - 1) as usize].to_string()
        }
        Some(ChordRoot::Name(name))
            if pitch_index(&MAJOR_PITCH_CLASSES, name).is_some()
                || pitch_index(&MINOR_PITCH_CLASSES, name).is_some() =>
        {
            name.clone()
        }
        _ => {
            debug!("Chord without a nameable root: {:?}", chord);
            return None;
        }
    };

    let mut suffix = String::new();
    if chord.quality.as_ref().is_some_and(|quality| quality.is_minor()) {
        suffix.push('m');
    }
    if let Some(first) = chord.suspensions.first() {
        suffix.push_str(&format!("sus{first}"));
    }

    Some(format!("{root_name}{suffix}"))
}

/// Distinct chord names in order of first appearance.
pub fn chord_names(chords: &[ChordEvent]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in chords.iter().filter_map(chord_name) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ChordQuality;

    fn chord(root: i64, quality: i64) -> ChordEvent {
        ChordEvent::new(ChordRoot::Slot(root), ChordQuality::Code(quality), 0.0)
    }

    #[test]
    fn test_pitch_lookup() {
        assert_eq!(pitch_index(&MAJOR_PITCH_CLASSES, "C"), Some(0));
        assert_eq!(pitch_index(&MAJOR_PITCH_CLASSES, "G"), Some(7));
        assert_eq!(pitch_index(&MAJOR_PITCH_CLASSES, "Eb"), None);
        assert_eq!(pitch_index(&MINOR_PITCH_CLASSES, "Eb"), Some(3));
        assert_eq!(pitch_table(Scale::Minor)[10], "Bb");
    }

    #[test]
    fn test_chord_name_from_slots() {
        assert_eq!(chord_name(&chord(1, 5)), Some("C".to_string()));
        assert_eq!(chord_name(&chord(10, 3)), Some("Am".to_string()));
        assert_eq!(chord_name(&chord(2, 5)), Some("C#".to_string()));
        assert_eq!(
            chord_name(&chord(6, 5).with_suspensions(vec![4, 2])),
            Some("Fsus4".to_string())
        );
    }

    #[test]
    fn test_chord_name_rejects_out_of_range_roots() {
        assert_eq!(chord_name(&chord(0, 5)), None);
        assert_eq!(chord_name(&chord(13, 5)), None);

        let unknown = ChordEvent::new(
            ChordRoot::Name("H".to_string()),
            ChordQuality::MAJOR,
            0.0,
        );
        assert_eq!(chord_name(&unknown), None);

        let rootless: ChordEvent = serde_json::from_str(r#"{"type": 5}"#).unwrap();
        assert_eq!(chord_name(&rootless), None);
    }

    #[test]
    fn test_chord_name_from_pitch_names() {
        let chord = ChordEvent::new(
            ChordRoot::Name("Bb".to_string()),
            ChordQuality::Symbol("minor".to_string()),
            0.0,
        );
        assert_eq!(chord_name(&chord), Some("Bbm".to_string()));
    }

    #[test]
    fn test_unknown_quality_has_no_suffix() {
        assert_eq!(chord_name(&chord(8, 7)), Some("G".to_string()));
    }

    #[test]
    fn test_chord_names_are_distinct_in_order() {
        let chords = vec![chord(1, 5), chord(8, 5), chord(1, 5), chord(10, 3), chord(8, 5)];
        assert_eq!(chord_names(&chords), vec!["C", "G", "Am"]);
    }
}
