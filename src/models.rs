use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The closed set of moods a user can log. Every component (validation,
/// aggregation, display) goes through this one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Okay,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Angry, Mood::Okay];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Okay => "Okay",
        }
    }

    pub fn parse(value: &str) -> Option<Mood> {
        Mood::ALL.iter().copied().find(|mood| mood.as_str() == value)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User fields safe for client responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MoodEntry {
    pub id: i64,
    pub user_id: i64,
    pub mood: Mood,
    pub note: Option<String>,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub mood: String,
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub message: String,
    pub entry: MoodEntry,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub entries: Vec<MoodEntry>,
    #[serde(rename = "totalCount")]
    pub total_count: i64,
    #[serde(rename = "currentPage")]
    pub current_page: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    /// The server's current calendar day. Clients use this to decide whether
    /// an entry belongs to today instead of re-deriving the day from
    /// timestamps with their own clock.
    pub today: NaiveDate,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MoodCounts {
    #[serde(rename = "Happy")]
    pub happy: i64,
    #[serde(rename = "Sad")]
    pub sad: i64,
    #[serde(rename = "Angry")]
    pub angry: i64,
    #[serde(rename = "Okay")]
    pub okay: i64,
}

impl MoodCounts {
    pub fn get_mut(&mut self, mood: Mood) -> &mut i64 {
        match mood {
            Mood::Happy => &mut self.happy,
            Mood::Sad => &mut self.sad,
            Mood::Angry => &mut self.angry,
            Mood::Okay => &mut self.okay,
        }
    }

    pub fn total(&self) -> i64 {
        self.happy + self.sad + self.angry + self.okay
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    #[serde(rename = "moodCounts")]
    pub mood_counts: MoodCounts,
}
