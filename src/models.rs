use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Intense,
}

impl Intensity {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "moderate" => Some(Self::Moderate),
            "intense" => Some(Self::Intense),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub excuse: String,
    pub workout_type: String,
    #[serde(default)]
    pub saved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Achievement,
    Streak,
    Milestone,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub timestamp: i64,
    pub read: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub workout_type: Option<String>,
    pub duration: Option<u32>,
    pub intensity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutDetails {
    pub workout_type: String,
    pub duration_minutes: u32,
    pub intensity: Intensity,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub excuse: String,
    pub counter_motivation: String,
    pub workout_details: WorkoutDetails,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
    pub streak: u32,
}

#[derive(Debug, Deserialize)]
pub struct ToggleSavedRequest {
    pub date: String,
    pub excuse: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleSavedResponse {
    pub updated: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Debug, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub excuses: usize,
}

#[derive(Debug, Serialize)]
pub struct DurationPoint {
    pub date: String,
    pub avg_duration: u32,
}

#[derive(Debug, Serialize)]
pub struct DistributionPoint {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub streak: u32,
    pub total_excuses: usize,
    pub unique_workouts: usize,
    pub avg_duration_minutes: u32,
    pub top_workout: Option<String>,
    pub last_7_days: Vec<DailyPoint>,
    pub duration_trend: Vec<DurationPoint>,
    pub workout_distribution: Vec<DistributionPoint>,
    pub intensity_distribution: Vec<DistributionPoint>,
}
