use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter};

use crate::catalog::Item;

/// Tag dimensions tracked in the post-game breakdown
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TagDimension {
    Type,
    Style,
}

impl TagDimension {
    pub fn value_of(self, item: &Item) -> &str {
        match self {
            TagDimension::Type => &item.tags.kind,
            TagDimension::Style => &item.tags.style,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub correct: u32,
    pub total: u32,
}

impl CategoryStats {
    pub fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    /// Fewer than half of the attempts were correct
    pub fn needs_practice(&self) -> bool {
        self.total > 0 && self.correct * 2 < self.total
    }

    /// The `limit` categories with the most attempts, ties by name.
    /// Display helper; the report itself keeps every category.
    pub fn top_by_total(
        categories: &BTreeMap<String, CategoryStats>,
        limit: usize,
    ) -> Vec<(&str, CategoryStats)> {
        let mut sorted: Vec<(&str, CategoryStats)> = categories
            .iter()
            .map(|(name, stats)| (name.as_str(), *stats))
            .collect();
        sorted.sort_by(|(_, a), (_, b)| b.total.cmp(&a.total));
        sorted.truncate(limit);
        sorted
    }
}

/// Five ordered performance tiers, best first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Rating {
    TypographyGenius,
    Excellent,
    Good,
    RoomToGrow,
    KeepLearning,
}

impl Rating {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Rating::TypographyGenius,
            75..=89 => Rating::Excellent,
            60..=74 => Rating::Good,
            40..=59 => Rating::RoomToGrow,
            _ => Rating::KeepLearning,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::TypographyGenius => "Typography genius!",
            Rating::Excellent => "Excellent knowledge!",
            Rating::Good => "Good result!",
            Rating::RoomToGrow => "Room to grow!",
            Rating::KeepLearning => "Keep learning!",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Rating::TypographyGenius => "🏆",
            Rating::Excellent => "🌟",
            Rating::Good => "👍",
            Rating::RoomToGrow => "📚",
            Rating::KeepLearning => "💪",
        }
    }
}

/// Advisory hint for a category the player struggled with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub dimension: TagDimension,
    pub value: String,
    pub stats: CategoryStats,
}

impl Recommendation {
    pub fn message(&self) -> String {
        format!(
            "Study typefaces with {} \"{}\" to improve your results",
            self.dimension, self.value
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub score: u32,
    pub rounds: u32,
    pub percentage: u32,
    pub rating: Rating,
    pub by_type: BTreeMap<String, CategoryStats>,
    pub by_style: BTreeMap<String, CategoryStats>,
    pub recommendations: Vec<Recommendation>,
}

impl GameReport {
    pub fn categories(&self, dimension: TagDimension) -> &BTreeMap<String, CategoryStats> {
        match dimension {
            TagDimension::Type => &self.by_type,
            TagDimension::Style => &self.by_style,
        }
    }

    pub fn share_text(&self) -> String {
        format!(
            "I scored {} of {} ({}%) in Font Game! {}",
            self.score,
            self.rounds,
            self.percentage,
            self.rating.emoji()
        )
    }
}
