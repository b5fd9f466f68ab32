//! Review and payment lifecycle of a submitted score.
//!
//! A score starts `PENDING`, is reviewed exactly once into `APPROVED` or
//! `REJECTED`, and an approved score can be paid out once.

use super::models::ScoreData;
use super::reward::{reward_for, Reward};
use crate::analysis::refresh_derived;
use crate::theory::DegreeMapping;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreStatus {
    Pending,
    Approved, // terminal
    Rejected, // terminal
}

impl ScoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreStatus::Pending => "PENDING",
            ScoreStatus::Approved => "APPROVED",
            ScoreStatus::Rejected => "REJECTED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(ScoreStatus::Pending),
            "APPROVED" => Some(ScoreStatus::Approved),
            "REJECTED" => Some(ScoreStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Score {0} has already been reviewed")]
    NotPending(u64),

    #[error("Invalid review decision: {0}")]
    InvalidDecision(String),

    #[error("Score {0} is not approved")]
    NotApproved(u64),

    #[error("Score {0} has already been paid")]
    AlreadyPaid(u64),
}

/// A submitted score with its review and payment state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: u64,
    pub track_id: String,
    pub user: String,
    pub score_data: ScoreData,
    pub status: ScoreStatus,
    pub reviewer: Option<String>,
    pub review_comments: Option<String>,
    pub reward: Reward,
    pub is_paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
}

impl ScoreRecord {
    /// Derived fields are recomputed from the raw data, whatever the client sent.
    pub fn submit(
        id: u64,
        track_id: &str,
        user: &str,
        mut score_data: ScoreData,
        mapping: DegreeMapping,
    ) -> Self {
        let reward = refresh_derived(&mut score_data, mapping);
        info!(
            "Score {} submitted for track {} by {}, reward {}",
            id, track_id, user, reward
        );
        Self {
            id,
            track_id: track_id.to_string(),
            user: user.to_string(),
            score_data,
            status: ScoreStatus::Pending,
            reviewer: None,
            review_comments: None,
            reward,
            is_paid: false,
            paid_at: None,
        }
    }

    pub fn update_score_data(&mut self, score_data: ScoreData, mapping: DegreeMapping) {
        self.score_data = score_data;
        self.reward = refresh_derived(&mut self.score_data, mapping);
    }

    pub fn review(
        &mut self,
        reviewer: &str,
        decision: &str,
        comments: Option<&str>,
    ) -> Result<(), ReviewError> {
        if self.status != ScoreStatus::Pending {
            return Err(ReviewError::NotPending(self.id));
        }
        let status = match ScoreStatus::from_str(decision) {
            Some(status @ (ScoreStatus::Approved | ScoreStatus::Rejected)) => status,
            _ => return Err(ReviewError::InvalidDecision(decision.to_string())),
        };

        self.status = status;
        self.reviewer = Some(reviewer.to_string());
        self.review_comments = comments.map(str::to_string);
        if status == ScoreStatus::Approved {
            self.reward = reward_for(&self.score_data);
        }

        info!("Score {} reviewed by {}: {}", self.id, reviewer, status.as_str());
        Ok(())
    }

    pub fn mark_paid(&mut self, now: DateTime<Utc>) -> Result<(), ReviewError> {
        if self.status != ScoreStatus::Approved {
            return Err(ReviewError::NotApproved(self.id));
        }
        if self.is_paid {
            return Err(ReviewError::AlreadyPaid(self.id));
        }
        self.is_paid = true;
        self.paid_at = Some(now);
        info!("Score {} paid {} at {}", self.id, self.reward, now.to_rfc3339());
        Ok(())
    }
}

/// Upload counts and reward totals for a set of scores, typically one user's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardStats {
    pub total_uploaded: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    pub total_reward: Reward,
    pub paid_reward: Reward,
    pub unpaid_reward: Reward,
}

impl RewardStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ScoreRecord>,
    {
        let mut stats = RewardStats::default();
        for record in records {
            stats.total_uploaded += 1;
            match record.status {
                ScoreStatus::Pending => stats.pending += 1,
                ScoreStatus::Rejected => stats.rejected += 1,
                ScoreStatus::Approved => {
                    stats.approved += 1;
                    stats.total_reward = stats.total_reward + record.reward;
                    if record.is_paid {
                        stats.paid_reward = stats.paid_reward + record.reward;
                    }
                }
            }
        }
        stats.unpaid_reward = stats.total_reward - stats.paid_reward;
        stats
    }
}
