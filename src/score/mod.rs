//! Score submissions: the data model, the reward paid for a submission and
//! the review and payment lifecycle of a submitted score.

mod models;
pub mod reward;
pub mod review;

pub use models::{
    ChordEvent, ChordQuality, ChordRoot, Key, RelativeChordEntry, Scale, ScoreData, Section,
};
pub use review::{ReviewError, RewardStats, ScoreRecord, ScoreStatus};
pub use reward::{calculate_reward, reward_for, Reward};
