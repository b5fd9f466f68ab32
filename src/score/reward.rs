//! Monetary reward for a score submission.
//!
//! Amounts are kept as whole cents so that sums over many scores never drift.

use super::models::ScoreData;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Reward per full hundred notes.
pub const NOTE_BLOCK_REWARD: u64 = 10;
pub const NOTE_BLOCK_SIZE: usize = 100;

/// Reward per full fifty chords.
pub const CHORD_BLOCK_REWARD: u64 = 5;
pub const CHORD_BLOCK_SIZE: usize = 50;

/// Reward per section.
pub const SECTION_REWARD: u64 = 2;

/// Non-negative fixed-point amount with two decimal places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reward {
    cents: u64,
}

impl Reward {
    pub const ZERO: Reward = Reward { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn from_units(units: u64) -> Self {
        Self {
            cents: units.saturating_mul(100),
        }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Parses `"12"`, `"12.5"` or `"12.50"`. More than two decimals is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (units, fraction) = match s.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (s, ""),
        };
        if units.is_empty() || fraction.len() > 2 {
            return None;
        }
        if !units.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
        let units: u64 = units.parse().ok()?;
        let fraction_cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().ok()? * 10,
            _ => fraction.parse().ok()?,
        };
        Some(Self {
            cents: units.checked_mul(100)?.checked_add(fraction_cents)?,
        })
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Add for Reward {
    type Output = Reward;

    fn add(self, rhs: Reward) -> Reward {
        Reward {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

/// Saturates at zero, amounts are never negative.
impl Sub for Reward {
    type Output = Reward;

    fn sub(self, rhs: Reward) -> Reward {
        Reward {
            cents: self.cents.saturating_sub(rhs.cents),
        }
    }
}

impl Sum for Reward {
    fn sum<I: Iterator<Item = Reward>>(iter: I) -> Self {
        iter.fold(Reward::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Reward> for Reward {
    fn sum<I: Iterator<Item = &'a Reward>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// Serialized as a decimal string ("38.00") to keep the exact value on the wire.
impl Serialize for Reward {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Reward {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Reward::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid reward amount: {raw}")))
    }
}

/// `floor(notes/100)*10 + floor(chords/50)*5 + sections*2`.
pub fn calculate_reward(note_count: usize, chord_count: usize, section_count: usize) -> Reward {
    let note_reward = (note_count / NOTE_BLOCK_SIZE) as u64 * NOTE_BLOCK_REWARD;
    let chord_reward = (chord_count / CHORD_BLOCK_SIZE) as u64 * CHORD_BLOCK_REWARD;
    let section_reward = (section_count as u64).saturating_mul(SECTION_REWARD);

    Reward::from_units(note_reward)
        + Reward::from_units(chord_reward)
        + Reward::from_units(section_reward)
}

pub fn reward_for(score: &ScoreData) -> Reward {
    calculate_reward(score.notes.len(), score.chords.len(), score.sections.len())
}
