use crate::models::HistoryEntry;

/// Case-insensitive substring filter over the history list. Matches against
/// the excuse text and the workout type; a blank query matches nothing.
pub fn filter_history<'a>(history: &'a [HistoryEntry], query: &str) -> Vec<&'a HistoryEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    history
        .iter()
        .filter(|entry| {
            entry.excuse.to_lowercase().contains(&needle)
                || entry.workout_type.to_lowercase().contains(&needle)
        })
        .collect()
}
