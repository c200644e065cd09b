use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::models::{LeaderboardEntry, ScoreRecord, TimeWindow};

pub const LEADERBOARD_SIZE: usize = 20;

/// Best score per player within `window`, highest first, capped at
/// [`LEADERBOARD_SIZE`]. Ties go to the player with fewer games, then by name.
pub fn aggregate_leaderboard(
    records: &[ScoreRecord],
    window: TimeWindow,
    now: DateTime<Utc>,
) -> Vec<LeaderboardEntry> {
    let since = window.since(now);
    let mut by_player: HashMap<&str, (LeaderboardEntry, DateTime<Utc>)> = HashMap::new();

    for record in records
        .iter()
        .filter(|record| since.map_or(true, |since| record.created_at >= since))
    {
        by_player
            .entry(record.player_id.as_str())
            .and_modify(|(entry, latest)| {
                entry.best_score = entry.best_score.max(record.score);
                entry.games_played += 1;
                if record.created_at >= *latest {
                    entry.display_name = record.display_name.clone();
                    *latest = record.created_at;
                }
            })
            .or_insert_with(|| {
                (
                    LeaderboardEntry {
                        player_id: record.player_id.clone(),
                        display_name: record.display_name.clone(),
                        best_score: record.score,
                        games_played: 1,
                    },
                    record.created_at,
                )
            });
    }

    let mut entries: Vec<LeaderboardEntry> =
        by_player.into_values().map(|(entry, _)| entry).collect();
    entries.sort_by(|a, b| {
        b.best_score
            .cmp(&a.best_score)
            .then(a.games_played.cmp(&b.games_played))
            .then_with(|| a.display_name.cmp(&b.display_name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    entries.truncate(LEADERBOARD_SIZE);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(player: &str, score: u32, days_ago: i64, now: DateTime<Utc>) -> ScoreRecord {
        ScoreRecord {
            player_id: player.to_string(),
            display_name: format!("{player}-name"),
            score,
            total_rounds: 20,
            correct_answers: score,
            created_at: now - Duration::days(days_ago),
        }
    }

    #[test]
    fn keeps_best_score_and_counts_games_per_player() {
        let now = Utc::now();
        let records = vec![
            record("alice", 12, 1, now),
            record("bob", 15, 2, now),
            record("alice", 18, 3, now),
            record("alice", 9, 4, now),
        ];

        let board = aggregate_leaderboard(&records, TimeWindow::All, now);

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].player_id, "alice");
        assert_eq!(board[0].best_score, 18);
        assert_eq!(board[0].games_played, 3);
        assert_eq!(board[1].player_id, "bob");
        assert_eq!(board[1].games_played, 1);
    }

    #[test]
    fn filters_by_time_window() {
        let now = Utc::now();
        let records = vec![
            record("alice", 20, 40, now),
            record("alice", 10, 10, now),
            record("bob", 14, 3, now),
        ];

        let week = aggregate_leaderboard(&records, TimeWindow::Week, now);
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].player_id, "bob");

        let month = aggregate_leaderboard(&records, TimeWindow::Month, now);
        assert_eq!(month[0].player_id, "bob");
        assert_eq!(month[1].best_score, 10);

        let all = aggregate_leaderboard(&records, TimeWindow::All, now);
        assert_eq!(all[0].best_score, 20);
    }

    #[test]
    fn truncates_to_top_twenty() {
        let now = Utc::now();
        let records: Vec<ScoreRecord> = (0..30)
            .map(|i| record(&format!("player-{i:02}"), i, 0, now))
            .collect();

        let board = aggregate_leaderboard(&records, TimeWindow::All, now);

        assert_eq!(board.len(), LEADERBOARD_SIZE);
        assert_eq!(board[0].best_score, 29);
        assert_eq!(board[19].best_score, 10);
        assert!(board.windows(2).all(|w| w[0].best_score >= w[1].best_score));
    }

    #[test]
    fn ties_prefer_fewer_games() {
        let now = Utc::now();
        let records = vec![
            record("alice", 15, 1, now),
            record("alice", 11, 2, now),
            record("bob", 15, 1, now),
        ];

        let board = aggregate_leaderboard(&records, TimeWindow::All, now);

        assert_eq!(board[0].player_id, "bob");
    }
}
