#![allow(dead_code)] // Test utilities may not all be used in every test

use uuid::Uuid;

use fontgame::{GameService, GameSession};

// ============================================================================
// Game Actions
// ============================================================================

/// Answer the current round with the target
pub async fn answer_correctly(service: &GameService, game_id: Uuid) -> GameSession {
    let session = service.get_game(game_id).await.expect("game should exist");
    let target_id = session
        .current_round()
        .expect("game should have a round")
        .target
        .id
        .clone();

    service
        .submit_answer(game_id, &target_id)
        .await
        .expect("answer should be accepted")
}

/// Answer the current round with the first candidate that is not the target
pub async fn answer_wrong(service: &GameService, game_id: Uuid) -> GameSession {
    let session = service.get_game(game_id).await.expect("game should exist");
    let round = session.current_round().expect("game should have a round");
    let wrong_id = round
        .candidates
        .iter()
        .find(|item| item.id != round.target.id)
        .expect("round should have a distractor")
        .id
        .clone();

    service
        .submit_answer(game_id, &wrong_id)
        .await
        .expect("answer should be accepted")
}
