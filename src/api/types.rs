use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Item;
use crate::game::{DifficultyTier, GamePhase, GameSession};
use crate::scores::TimeWindow;
use crate::stats::{self, CategoryStats, GameReport, Rating};

/// Number of style categories shown in the results breakdown
pub const TOP_STYLES: usize = 5;

#[derive(Debug, Deserialize, Serialize)]
pub struct AnswerRequest {
    pub item_id: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub window: TimeWindow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameResponse {
    pub game_id: Uuid,
    pub game: GameView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateView {
    pub id: String,
    pub name: String,
}

/// What the question card renders: sample glyphs set in the target typeface.
/// `font_family` is the target's name; clients render with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecimenView {
    pub letter: Option<String>,
    pub font_family: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub number: u32,
    pub tier: DifficultyTier,
    pub specimen: SpecimenView,
    pub candidates: Vec<CandidateView>,
}

/// Revealed once the round is answered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerView {
    pub selected_id: String,
    pub is_correct: bool,
    pub target: Item,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryView {
    pub name: String,
    pub correct: u32,
    pub total: u32,
}

impl CategoryView {
    fn new(name: &str, stats: CategoryStats) -> Self {
        Self {
            name: name.to_string(),
            correct: stats.correct,
            total: stats.total,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportView {
    pub score: u32,
    pub rounds: u32,
    pub percentage: u32,
    pub rating: Rating,
    pub rating_label: String,
    pub rating_emoji: String,
    pub types: Vec<CategoryView>,
    pub top_styles: Vec<CategoryView>,
    pub recommendations: Vec<String>,
    pub share_text: String,
}

impl From<&GameReport> for ReportView {
    fn from(report: &GameReport) -> Self {
        Self {
            score: report.score,
            rounds: report.rounds,
            percentage: report.percentage,
            rating: report.rating,
            rating_label: report.rating.label().to_string(),
            rating_emoji: report.rating.emoji().to_string(),
            types: report
                .by_type
                .iter()
                .map(|(name, stats)| CategoryView::new(name, *stats))
                .collect(),
            top_styles: CategoryStats::top_by_total(&report.by_style, TOP_STYLES)
                .into_iter()
                .map(|(name, stats)| CategoryView::new(name, stats))
                .collect(),
            recommendations: report.recommendations.iter().map(|r| r.message()).collect(),
            share_text: report.share_text(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    pub phase: GamePhase,
    pub round: u32,
    pub total_rounds: u32,
    pub score: u32,
    pub best_score: Option<u32>,
    pub question: Option<QuestionView>,
    pub answer: Option<AnswerView>,
    pub report: Option<ReportView>,
}

impl From<&GameSession> for GameView {
    fn from(session: &GameSession) -> Self {
        let in_play = session.phase() == GamePhase::Playing;

        let question = session
            .current_round()
            .filter(|_| in_play)
            .map(|round| QuestionView {
                number: round.number,
                tier: round.tier,
                specimen: SpecimenView {
                    letter: round.target.letter.clone(),
                    font_family: round.target.name.clone(),
                },
                candidates: round
                    .candidates
                    .iter()
                    .map(|item| CandidateView {
                        id: item.id.clone(),
                        name: item.name.clone(),
                    })
                    .collect(),
            });

        let answer = session
            .current_answer()
            .filter(|_| in_play)
            .map(|record| AnswerView {
                selected_id: record.selected.id.clone(),
                is_correct: record.is_correct,
                target: record.target.clone(),
            });

        let report = (session.phase() == GamePhase::Result)
            .then(|| ReportView::from(&stats::aggregate(session.history())));

        Self {
            phase: session.phase(),
            round: session.round_number(),
            total_rounds: session.total_rounds(),
            score: session.score(),
            best_score: session.best_score(),
            question,
            answer,
            report,
        }
    }
}
