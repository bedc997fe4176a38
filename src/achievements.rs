use crate::history::{distinct_workout_count, entry_date};
use crate::models::{HistoryEntry, Intensity};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Beginner,
    Intermediate,
    Expert,
}

impl AchievementCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

type Condition = fn(&[HistoryEntry], u32, NaiveDate) -> bool;
type Progress = fn(&[HistoryEntry], u32, NaiveDate) -> f64;

pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    condition: Condition,
    progress: Progress,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementStatus {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub earned: bool,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementReport {
    pub achievements: Vec<AchievementStatus>,
    pub earned_count: usize,
    pub total_count: usize,
    pub overall_progress: f64,
}

fn intense_count(history: &[HistoryEntry]) -> usize {
    history
        .iter()
        .filter(|entry| entry.intensity == Some(Intensity::Intense))
        .count()
}

fn entries_in_trailing_week(history: &[HistoryEntry], today: NaiveDate) -> usize {
    let cutoff = today - Duration::days(7);
    history
        .iter()
        .filter(|entry| entry_date(entry).is_some_and(|date| date > cutoff))
        .count()
}

fn ratio_progress(value: usize, target: usize) -> f64 {
    (value as f64 / target as f64 * 100.0).clamp(0.0, 100.0)
}

static CATALOG: &[Achievement] = &[
    Achievement {
        id: "first-excuse",
        title: "Beginner Procrastinator",
        description: "Generated your first excuse",
        category: AchievementCategory::Beginner,
        condition: |history, _, _| !history.is_empty(),
        progress: |history, _, _| ratio_progress(history.len(), 1),
    },
    Achievement {
        id: "streak-3",
        title: "Consistency is Key",
        description: "Maintained a 3-day excuse streak",
        category: AchievementCategory::Beginner,
        condition: |_, streak, _| streak >= 3,
        progress: |_, streak, _| ratio_progress(streak as usize, 3),
    },
    Achievement {
        id: "variety",
        title: "Creative Mind",
        description: "Used excuses for 4 different workout types",
        category: AchievementCategory::Intermediate,
        condition: |history, _, _| distinct_workout_count(history) >= 4,
        progress: |history, _, _| ratio_progress(distinct_workout_count(history), 4),
    },
    Achievement {
        id: "master",
        title: "Excuse Master",
        description: "Generated 10 different excuses",
        category: AchievementCategory::Intermediate,
        condition: |history, _, _| history.len() >= 10,
        progress: |history, _, _| ratio_progress(history.len(), 10),
    },
    Achievement {
        id: "intense",
        title: "High Intensity Avoider",
        description: "Skipped 5 intense workouts",
        category: AchievementCategory::Expert,
        condition: |history, _, _| intense_count(history) >= 5,
        progress: |history, _, _| ratio_progress(intense_count(history), 5),
    },
    Achievement {
        id: "dedication",
        title: "Dedicated Avoider",
        description: "Skipped a 60+ minute workout",
        category: AchievementCategory::Intermediate,
        condition: |history, _, _| history.iter().any(|e| e.duration.unwrap_or(0) >= 60),
        progress: |history, _, _| {
            if history.iter().any(|e| e.duration.unwrap_or(0) >= 60) {
                100.0
            } else {
                0.0
            }
        },
    },
    Achievement {
        id: "weekly-master",
        title: "Weekly Champion",
        description: "Generated 7 excuses in a single week",
        category: AchievementCategory::Expert,
        condition: |history, _, today| entries_in_trailing_week(history, today) >= 7,
        progress: |history, _, today| ratio_progress(entries_in_trailing_week(history, today), 7),
    },
    Achievement {
        id: "marathon-skipper",
        title: "Marathon Skipper",
        description: "Avoided a 120+ minute workout",
        category: AchievementCategory::Expert,
        condition: |history, _, _| history.iter().any(|e| e.duration.unwrap_or(0) >= 120),
        progress: |history, _, _| {
            if history.iter().any(|e| e.duration.unwrap_or(0) >= 120) {
                100.0
            } else {
                0.0
            }
        },
    },
    Achievement {
        id: "variety-master",
        title: "Variety Master",
        description: "Used all available workout types",
        category: AchievementCategory::Expert,
        condition: |history, _, _| distinct_workout_count(history) >= 6,
        progress: |history, _, _| ratio_progress(distinct_workout_count(history), 6),
    },
];

pub fn catalog() -> &'static [Achievement] {
    CATALOG
}

/// Evaluates the catalog against a history snapshot. The aggregate counts
/// and overall percentage always cover the full catalog; `category` only
/// narrows the per-achievement listing.
pub fn evaluate_at(
    today: NaiveDate,
    history: &[HistoryEntry],
    streak: u32,
    category: Option<AchievementCategory>,
) -> AchievementReport {
    let earned_count = CATALOG
        .iter()
        .filter(|a| (a.condition)(history, streak, today))
        .count();
    let total_count = CATALOG.len();

    let achievements = CATALOG
        .iter()
        .filter(|a| category.is_none_or(|wanted| a.category == wanted))
        .map(|a| AchievementStatus {
            id: a.id,
            title: a.title,
            description: a.description,
            category: a.category,
            earned: (a.condition)(history, streak, today),
            progress: (a.progress)(history, streak, today),
        })
        .collect();

    AchievementReport {
        achievements,
        earned_count,
        total_count,
        overall_progress: ratio_progress(earned_count, total_count),
    }
}
