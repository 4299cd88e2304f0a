use crate::errors::{AppError, FieldError};
use crate::models::{EntryRequest, ListQuery, ListResponse, Mood, MoodCounts, MoodEntry};
use crate::stats;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

const NOTE_MAX_CHARS: usize = 150;
const DEFAULT_PAGE_SIZE: i64 = 10;

const DUPLICATE_TODAY: &str =
    "You have already logged your mood for today. You can edit your existing entry.";
const ENTRY_NOT_FOUND: &str = "Mood entry not found";

/// Checks the request shape and normalizes it: the mood string must name one
/// of the four categories, and an empty note collapses to no note.
fn validate_entry(payload: &EntryRequest) -> Result<(Mood, Option<String>), AppError> {
    let mut errors = Vec::new();

    let mood = Mood::parse(&payload.mood);
    if mood.is_none() {
        errors.push(FieldError::new("mood", "Invalid mood selection"));
    }

    let note = payload.note.as_deref().filter(|note| !note.is_empty());
    if let Some(note) = note {
        if note.chars().count() > NOTE_MAX_CHARS {
            errors.push(FieldError::new("note", "Note must be 150 characters or less"));
        }
    }

    match mood {
        Some(mood) if errors.is_empty() => Ok((mood, note.map(str::to_string))),
        _ => Err(AppError::validation(errors)),
    }
}

/// Creates today's entry. The `(user_id, entry_date)` uniqueness constraint
/// is the duplicate check, so two concurrent creates cannot both land.
pub async fn create_entry(
    pool: &SqlitePool,
    today: NaiveDate,
    user_id: i64,
    payload: &EntryRequest,
) -> Result<MoodEntry, AppError> {
    let (mood, note) = validate_entry(payload)?;
    let now = Utc::now();

    let result = sqlx::query_as::<_, MoodEntry>(
        "INSERT INTO mood_entries (user_id, mood, note, entry_date, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?) RETURNING *",
    )
    .bind(user_id)
    .bind(mood)
    .bind(note.as_deref())
    .bind(today)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await;

    match result {
        Ok(entry) => Ok(entry),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Err(AppError::duplicate(DUPLICATE_TODAY))
        }
        Err(err) => Err(err.into()),
    }
}

/// Lists the caller's entries, most recent first. An out-of-range page comes
/// back as an empty slice rather than an error.
pub async fn list_entries(
    pool: &SqlitePool,
    user_id: i64,
    query: &ListQuery,
    today: NaiveDate,
) -> Result<ListResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.filter(|limit| *limit > 0).unwrap_or(DEFAULT_PAGE_SIZE);
    let offset = (page - 1) * limit;

    let entries = sqlx::query_as::<_, MoodEntry>(
        "SELECT * FROM mood_entries WHERE user_id = ?
         ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mood_entries WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    Ok(ListResponse {
        entries,
        total_count,
        current_page: page,
        total_pages: (total_count + limit - 1) / limit,
        today,
    })
}

/// Overwrites mood and note on an entry the caller owns. Existence and
/// ownership are checked in the same predicate, so a foreign entry is
/// indistinguishable from a missing one.
pub async fn update_entry(
    pool: &SqlitePool,
    user_id: i64,
    id: i64,
    payload: &EntryRequest,
) -> Result<MoodEntry, AppError> {
    let (mood, note) = validate_entry(payload)?;

    sqlx::query_as::<_, MoodEntry>(
        "UPDATE mood_entries SET mood = ?, note = ?, updated_at = ?
         WHERE id = ? AND user_id = ? RETURNING *",
    )
    .bind(mood)
    .bind(note.as_deref())
    .bind(Utc::now())
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(ENTRY_NOT_FOUND))
}

pub async fn delete_entry(pool: &SqlitePool, user_id: i64, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM mood_entries WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found(ENTRY_NOT_FOUND));
    }
    Ok(())
}

/// Counts the caller's entries per mood over the trailing seven days.
pub async fn weekly_analytics(pool: &SqlitePool, user_id: i64) -> Result<MoodCounts, AppError> {
    let rows = sqlx::query_as::<_, (Mood, i64)>(
        "SELECT mood, COUNT(*) FROM mood_entries
         WHERE user_id = ? AND created_at >= ? GROUP BY mood",
    )
    .bind(user_id)
    .bind(stats::weekly_cutoff(Utc::now()))
    .fetch_all(pool)
    .await?;

    Ok(stats::fold_mood_counts(&rows))
}
