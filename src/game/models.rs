use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::catalog::Item;

/// Number of rounds in one session
pub const TOTAL_ROUNDS: u32 = 20;

/// Number of candidates offered per round (target + distractors)
pub const CANDIDATES_PER_ROUND: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GamePhase {
    Start,
    Playing,
    Result,
}

/// Difficulty band derived from the round number.
/// Later bands mix in distractors that share tags with the target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DifficultyTier {
    Warmup,
    Intermediate,
    Expert,
}

impl DifficultyTier {
    pub fn for_round(round: u32) -> Self {
        match round {
            0..=7 => DifficultyTier::Warmup,
            8..=14 => DifficultyTier::Intermediate,
            _ => DifficultyTier::Expert,
        }
    }

    /// How many distractors should come from the similar pool
    pub fn similar_quota(self) -> usize {
        match self {
            DifficultyTier::Warmup => 0,
            DifficultyTier::Intermediate => 1,
            DifficultyTier::Expert => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub target: Item,
    pub candidates: Vec<Item>,
    pub tier: DifficultyTier,
}

impl Round {
    pub fn new(number: u32, target: Item, candidates: Vec<Item>) -> Self {
        Self {
            number,
            target,
            candidates,
            tier: DifficultyTier::for_round(number),
        }
    }

    pub fn candidate(&self, item_id: &str) -> Option<&Item> {
        self.candidates.iter().find(|item| item.id == item_id)
    }
}

/// One answered round. Never mutated after it is appended to the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub target: Item,
    pub selected: Item,
    pub is_correct: bool,
    pub round: u32,
}

/// Emitted when a session enters the result phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
    pub rounds_played: u32,
}
