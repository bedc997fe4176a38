use crate::models::{HistoryEntry, Intensity};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Ordered excuse history (newest first) plus the derived streak counter.
/// The streak counts consecutive calendar days with at least one recorded
/// excuse, ending on the most recent recorded day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExcuseLog {
    pub entries: Vec<HistoryEntry>,
    pub streak: u32,
}

impl ExcuseLog {
    pub fn new(entries: Vec<HistoryEntry>, streak: u32) -> Self {
        Self { entries, streak }
    }

    /// Records an excuse generated on `today`. A second excuse on the same
    /// day replaces the latest entry instead of appending, and leaves the
    /// streak untouched. A one-day gap extends the streak; anything else
    /// (empty history, larger gap, unparseable stored date) restarts it at 1.
    pub fn add_excuse(
        &mut self,
        today: NaiveDate,
        excuse: String,
        workout_type: String,
        duration: Option<u32>,
        intensity: Option<Intensity>,
    ) {
        let entry = HistoryEntry {
            date: today.format("%Y-%m-%d").to_string(),
            excuse,
            workout_type,
            saved: false,
            duration,
            intensity,
        };

        match self.entries.first() {
            Some(latest) if latest.date == entry.date => {
                self.entries[0] = entry;
            }
            Some(latest) if entry_date(latest) == Some(today - Duration::days(1)) => {
                self.streak += 1;
                self.entries.insert(0, entry);
            }
            _ => {
                self.streak = 1;
                self.entries.insert(0, entry);
            }
        }
    }

    /// Flips `saved` on every entry matching both fields. Returns how many
    /// entries were flipped; zero means the toggle was a no-op.
    pub fn toggle_saved(&mut self, date: &str, excuse: &str) -> usize {
        let mut updated = 0;
        for entry in &mut self.entries {
            if entry.date == date && entry.excuse == excuse {
                entry.saved = !entry.saved;
                updated += 1;
            }
        }
        updated
    }

    pub fn saved_excuses(&self) -> Vec<HistoryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.saved)
            .cloned()
            .collect()
    }

    pub fn distinct_workouts(&self) -> usize {
        distinct_workout_count(&self.entries)
    }
}

pub fn distinct_workout_count(entries: &[HistoryEntry]) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for entry in entries {
        if !seen.contains(&entry.workout_type.as_str()) {
            seen.push(&entry.workout_type);
        }
    }
    seen.len()
}

pub fn entry_date(entry: &HistoryEntry) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d").ok()
}
