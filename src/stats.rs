use crate::models::{Mood, MoodCounts};
use chrono::{DateTime, Duration, Utc};

/// Start of the trailing seven-day analytics window. Entries with
/// `created_at >= cutoff` are counted; the boundary itself is inclusive.
pub fn weekly_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(7)
}

/// Folds grouped rows into a count per mood. Moods with no entries stay at
/// zero, so the result always carries all four keys.
pub fn fold_mood_counts(rows: &[(Mood, i64)]) -> MoodCounts {
    let mut counts = MoodCounts::default();
    for (mood, count) in rows {
        *counts.get_mut(*mood) += count;
    }
    counts
}
