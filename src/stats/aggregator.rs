use std::collections::BTreeMap;

use strum::IntoEnumIterator;
use tracing::debug;

use super::models::{CategoryStats, GameReport, Rating, Recommendation, TagDimension};
use crate::game::AnswerRecord;

/// `score / rounds` as a whole percentage, halves rounded up
pub fn percentage(score: u32, rounds: u32) -> u32 {
    if rounds == 0 {
        return 0;
    }
    (score * 200 + rounds) / (rounds * 2)
}

/// Correct/total counts per tag value for one dimension
pub fn breakdown(
    history: &[AnswerRecord],
    dimension: TagDimension,
) -> BTreeMap<String, CategoryStats> {
    let mut categories: BTreeMap<String, CategoryStats> = BTreeMap::new();
    for record in history {
        categories
            .entry(dimension.value_of(&record.target).to_string())
            .or_default()
            .record(record.is_correct);
    }
    categories
}

/// Builds the end-of-game report from the full answer history
pub fn aggregate(history: &[AnswerRecord]) -> GameReport {
    let score = history.iter().filter(|record| record.is_correct).count() as u32;
    let rounds = history.len() as u32;
    let percentage = percentage(score, rounds);

    let by_type = breakdown(history, TagDimension::Type);
    let by_style = breakdown(history, TagDimension::Style);

    let recommendations: Vec<Recommendation> = TagDimension::iter()
        .flat_map(|dimension| {
            let categories = match dimension {
                TagDimension::Type => &by_type,
                TagDimension::Style => &by_style,
            };
            categories
                .iter()
                .filter(|(_, stats)| stats.needs_practice())
                .map(move |(value, stats)| Recommendation {
                    dimension,
                    value: value.clone(),
                    stats: *stats,
                })
        })
        .collect();

    debug!(
        score,
        rounds,
        percentage,
        recommendation_count = recommendations.len(),
        "Game report aggregated"
    );

    GameReport {
        score,
        rounds,
        percentage,
        rating: Rating::from_percentage(percentage),
        by_type,
        by_style,
        recommendations,
    }
}
