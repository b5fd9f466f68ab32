//! Shared constants for end-to-end tests
//!
//! When test data changes (track IDs, progressions, etc.), update only this
//! file.
#![allow(dead_code)]

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// "Four Chords" - C G Am F in C major, 3:20, 2011
pub const TRACK_POP_ID: &str = "track-pop";

/// "Four Chords Again" - same opening and structure, 3:35, 2011
pub const TRACK_POP_TWIN_ID: &str = "track-pop-twin";

/// "Blue Walk" - a minor blues in A, 5:00, 1964
pub const TRACK_BLUES_ID: &str = "track-blues";

/// "Borrowed Time" - shares half of the pop opening, 3:00, 2012
pub const TRACK_PARTIAL_ID: &str = "track-partial";

/// "Liner Notes" - no score submitted yet
pub const TRACK_UNSCORED_ID: &str = "track-unscored";

// ============================================================================
// Progressions
// ============================================================================

pub const POP_PROGRESSION: &str = "C,G,Am,F";

pub const DISJOINT_PROGRESSION: &str = "D,E,Bm";

// ============================================================================
// Reference submission
// ============================================================================

pub const REFERENCE_NOTES: usize = 250;
pub const REFERENCE_CHORDS: usize = 120;
pub const REFERENCE_SECTIONS: usize = 4;

/// Reward of the reference submission, as serialized
pub const REFERENCE_REWARD: &str = "38.00";
