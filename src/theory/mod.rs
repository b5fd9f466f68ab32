//! Music theory helpers: pitch-class tables, chord names and scale degrees.

pub mod pitch;
pub mod relative;

pub use pitch::{chord_name, chord_names};
pub use relative::{relative_chords, relative_chords_for, DegreeMapping};
