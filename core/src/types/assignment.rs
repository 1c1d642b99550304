use crate::dates::parse_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A referee assignment as served by the backend search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: Uuid,
    #[serde(default)]
    pub status: AssignmentStatus,
    /// Referee position on the crew, e.g. "HEAD" or "AR1".
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub compensation_cents: Option<i64>,
    #[serde(default)]
    pub game: Option<Game>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    #[default]
    Open,
    Accepted,
    Declined,
    Validated,
    Exchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    /// Kickoff as the backend sent it. May be absent or malformed; read it
    /// through [`Assignment::game_starts_at`].
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
}

impl Assignment {
    /// Parsed kickoff time, `None` when the game or its timestamp is absent
    /// or unparseable.
    pub fn game_starts_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.game.as_ref()?.starts_at.as_deref()?;
        parse_date(raw)
    }

    /// Kickoff with an epoch fallback, for ordering. Assignments without a
    /// usable date sort as the oldest possible item.
    pub fn effective_game_time(&self) -> DateTime<Utc> {
        self.game_starts_at().unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}
