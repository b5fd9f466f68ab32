//! Cheap pairwise chord similarity used to gate "similar tracks".

use crate::score::ChordEvent;

pub const DEFAULT_QUICK_WINDOW: usize = 10;

/// Fraction of aligned positions, among the first `window` chords of each
/// list, where root and type are both equal. The denominator is the longer of
/// the two cut lists.
pub fn quick_chord_similarity(
    chords1: &[ChordEvent],
    chords2: &[ChordEvent],
    window: usize,
) -> f64 {
    let first = &chords1[..chords1.len().min(window)];
    let second = &chords2[..chords2.len().min(window)];

    if first.is_empty() || second.is_empty() {
        return 0.0;
    }

    let matches = first
        .iter()
        .zip(second)
        .filter(|(a, b)| a.root == b.root && a.quality == b.quality)
        .count();

    matches as f64 / first.len().max(second.len()) as f64
}
