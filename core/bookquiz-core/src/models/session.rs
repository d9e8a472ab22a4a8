use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::question::GameMode;

/// Items per pack.
pub const QUIZ_COUNT: usize = 10;
pub const STARTING_LIVES: u32 = 3;
/// Reward multiplier applied to the score of a completed pack.
pub const WIN_MULTIPLIER: u64 = 3;
/// Upper bound on a configured pack size.
pub const MAX_PACK_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Intro,
    Question,
    Feedback,
    Win,
    Lose,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Win | Phase::Lose)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Question => "question",
            Phase::Feedback => "feedback",
            Phase::Win => "win",
            Phase::Lose => "lose",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRules {
    pub pack_size: usize,
    pub starting_lives: u32,
    pub win_multiplier: u64,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            pack_size: QUIZ_COUNT,
            starting_lives: STARTING_LIVES,
            win_multiplier: WIN_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("pack size must be between 1 and {max}, got {got}")]
    PackSize { got: usize, max: usize },
    #[error("a session needs at least one life")]
    NoLives,
}

impl SessionRules {
    /// A session built from rules that pass this check always reaches `Win` or `Lose`.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.pack_size == 0 || self.pack_size > MAX_PACK_SIZE {
            return Err(RulesError::PackSize {
                got: self.pack_size,
                max: MAX_PACK_SIZE,
            });
        }
        if self.starting_lives == 0 {
            return Err(RulesError::NoLives);
        }
        Ok(())
    }

    pub fn win_reward(&self, score: u32) -> u64 {
        u64::from(score) * self.win_multiplier
    }

    pub fn lose_reward(&self, score: u32) -> u64 {
        u64::from(score)
    }
}

/// Result of a `select`, `confirm`, `start` or `restart` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied(Phase),
    /// The call was not valid in the current phase and changed nothing.
    Ignored,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RewardReceipt {
    Credited {
        amount: u64,
        balance: u64,
        granted_at: DateTime<Utc>,
    },
    Failed {
        amount: u64,
        error: String,
    },
}

impl RewardReceipt {
    pub fn is_credited(&self) -> bool {
        matches!(self, RewardReceipt::Credited { .. })
    }
}

/// Read-only view of a session handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot<C> {
    pub session_id: String,
    pub mode: GameMode,
    pub phase: Phase,
    pub answered_count: usize,
    pub pack_size: usize,
    pub lives: u32,
    pub score: u32,
    pub selected: Option<C>,
    pub last_outcome: Option<bool>,
    pub reward_granted: bool,
    pub started_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExitSummary {
    pub session_id: String,
    pub mode: GameMode,
    pub phase: Phase,
    pub score: u32,
    /// True when the player left before reaching a terminal phase.
    pub abandoned: bool,
}
