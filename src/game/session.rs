//! Game session state machine.
//!
//! A [`GameSession`] is a plain value. Every transition consumes the current
//! value and returns the next one, so the machine can be driven and inspected
//! without any presentation layer. Operations that are not valid in the
//! current state return the session unchanged.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::models::{AnswerRecord, GameOver, GamePhase, Round, TOTAL_ROUNDS};
use super::selector;
use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    phase: GamePhase,
    total_rounds: u32,
    round_number: u32,
    current_round: Option<Round>,
    score: u32,
    history: Vec<AnswerRecord>,
    best_score: Option<u32>,
    used_targets: HashSet<String>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(TOTAL_ROUNDS)
    }
}

impl GameSession {
    pub fn new(total_rounds: u32) -> Self {
        Self {
            phase: GamePhase::Start,
            total_rounds,
            round_number: 0,
            current_round: None,
            score: 0,
            history: Vec::new(),
            best_score: None,
            used_targets: HashSet::new(),
        }
    }

    pub fn with_best_score(mut self, best_score: Option<u32>) -> Self {
        self.best_score = best_score;
        self
    }

    /// Raises the known best score; lower values are ignored
    pub fn record_best_score(mut self, score: u32) -> Self {
        if self.best_score.map_or(true, |best| score > best) {
            self.best_score = Some(score);
        }
        self
    }

    /// Resets score, rounds and history and deals round 1.
    /// An empty catalog ends the game immediately.
    pub fn start<R: Rng + ?Sized>(self, catalog: &Catalog, rng: &mut R) -> Self {
        let mut session = Self::new(self.total_rounds).with_best_score(self.best_score);
        session.phase = GamePhase::Playing;
        session.round_number = 1;

        match selector::next_round(1, &session.used_targets, catalog, rng) {
            Some(round) => {
                session.used_targets.insert(round.target.id.clone());
                session.current_round = Some(round);
                info!(total_rounds = session.total_rounds, "Game started");
            }
            None => {
                info!("Catalog is empty, ending game before the first round");
                session.round_number = 0;
                session.phase = GamePhase::Result;
            }
        }

        session
    }

    pub fn restart<R: Rng + ?Sized>(self, catalog: &Catalog, rng: &mut R) -> Self {
        self.start(catalog, rng)
    }

    /// Records the player's choice for the current round.
    ///
    /// Ignored outside the playing phase, once the round has been answered,
    /// or when `choice_id` is not one of the offered candidates.
    pub fn submit_answer(mut self, choice_id: &str) -> Self {
        if self.phase != GamePhase::Playing || self.is_round_resolved() {
            debug!(choice_id, "Ignoring answer outside an open round");
            return self;
        }

        let Some(round) = &self.current_round else {
            return self;
        };
        let Some(selected) = round.candidate(choice_id) else {
            debug!(
                choice_id,
                round = round.number,
                "Ignoring answer that is not a candidate"
            );
            return self;
        };

        let is_correct = selected.id == round.target.id;
        let record = AnswerRecord {
            target: round.target.clone(),
            selected: selected.clone(),
            is_correct,
            round: round.number,
        };

        if is_correct {
            self.score += 1;
        }
        self.history.push(record);

        debug!(
            round = self.round_number,
            is_correct,
            score = self.score,
            "Answer recorded"
        );

        self
    }

    /// Moves past a resolved round: deals the next one, or enters the result
    /// phase after the last round (or when no untargeted item is left).
    /// The returned [`GameOver`] is present only on the transition into
    /// the result phase.
    pub fn advance<R: Rng + ?Sized>(
        mut self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> (Self, Option<GameOver>) {
        if self.phase != GamePhase::Playing || !self.is_round_resolved() {
            debug!(
                round = self.round_number,
                "Ignoring advance before the round is answered"
            );
            return (self, None);
        }

        if self.round_number < self.total_rounds {
            let next_number = self.round_number + 1;
            if let Some(round) =
                selector::next_round(next_number, &self.used_targets, catalog, rng)
            {
                self.used_targets.insert(round.target.id.clone());
                self.round_number = next_number;
                self.current_round = Some(round);
                return (self, None);
            }
            info!(
                round = self.round_number,
                "No untargeted items left, ending game early"
            );
        }

        self.phase = GamePhase::Result;
        let game_over = GameOver {
            score: self.score,
            rounds_played: self.history.len() as u32,
        };
        info!(
            score = game_over.score,
            rounds_played = game_over.rounds_played,
            "Game finished"
        );

        (self, Some(game_over))
    }

    /// True once the current round has an answer record
    pub fn is_round_resolved(&self) -> bool {
        self.round_number > 0 && self.history.len() as u32 >= self.round_number
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    /// The answer given in the current round, if any
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        if self.is_round_resolved() {
            self.history.last()
        } else {
            None
        }
    }
}
