use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

const ANONYMOUS: &str = "Anonymous";

/// Signed-in player as supplied by the external identity provider.
/// `id` is an opaque key; the other fields only feed the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub id: String,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl PlayerIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            email: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn display_name(&self) -> String {
        display_name_for(self.username.as_deref(), self.email.as_deref())
    }
}

/// Username if present, else the local part of the email, else "Anonymous"
pub fn display_name_for(username: Option<&str>, email: Option<&str>) -> String {
    fn pick(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    if let Some(username) = pick(username) {
        return username.split('@').next().unwrap_or(username).to_string();
    }
    if let Some(email) = pick(email) {
        return email.split('@').next().unwrap_or(email).to_string();
    }
    ANONYMOUS.to_string()
}

/// One finished game as stored by the persistence gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player_id: String,
    pub display_name: String,
    pub score: u32,
    pub total_rounds: u32,
    pub correct_answers: u32,
    pub created_at: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(identity: &PlayerIdentity, score: u32, total_rounds: u32) -> Self {
        Self {
            player_id: identity.id.clone(),
            display_name: identity.display_name(),
            score,
            total_rounds,
            correct_answers: score,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub display_name: String,
    pub best_score: u32,
    pub games_played: u32,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    All,
    Week,
    Month,
}

impl TimeWindow {
    /// Earliest timestamp included in the window, `None` for all time
    pub fn since(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TimeWindow::All => None,
            TimeWindow::Week => Some(now - Duration::days(7)),
            TimeWindow::Month => Some(now - Duration::days(30)),
        }
    }
}
