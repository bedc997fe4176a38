use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationToggles {
    #[serde(default = "default_true")]
    pub achievements: bool,
    #[serde(default = "default_true")]
    pub streaks: bool,
}

impl Default for NotificationToggles {
    fn default() -> Self {
        Self {
            achievements: true,
            streaks: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default = "default_workouts")]
    pub favorite_workouts: Vec<String>,
    #[serde(default = "default_excuse_types")]
    pub preferred_excuse_types: Vec<String>,
    #[serde(default)]
    pub notifications: NotificationToggles,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            nickname: String::new(),
            avatar_url: None,
            favorite_workouts: default_workouts(),
            preferred_excuse_types: default_excuse_types(),
            notifications: NotificationToggles::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
    pub favorite_workouts: Option<Vec<String>>,
    pub preferred_excuse_types: Option<Vec<String>>,
    pub notifications: Option<NotificationToggles>,
}

impl Preferences {
    /// Shallow-merges present fields. The two list fields must stay
    /// non-empty, so an emptying replacement is discarded and the previous
    /// value kept.
    pub fn update(&mut self, update: PreferencesUpdate) {
        if let Some(nickname) = update.nickname {
            self.nickname = nickname;
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(workouts) = update.favorite_workouts {
            if !workouts.is_empty() {
                self.favorite_workouts = workouts;
            }
        }
        if let Some(excuse_types) = update.preferred_excuse_types {
            if !excuse_types.is_empty() {
                self.preferred_excuse_types = excuse_types;
            }
        }
        if let Some(notifications) = update.notifications {
            self.notifications = notifications;
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_workouts() -> Vec<String> {
    ["running", "weightlifting", "yoga", "swimming", "cycling", "HIIT"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_excuse_types() -> Vec<String> {
    ["creative", "humorous", "professional", "weather-related", "technical"]
        .into_iter()
        .map(String::from)
        .collect()
}
