use crate::errors::AppError;
use crate::history::ExcuseLog;
use crate::models::{HistoryEntry, Notification};
use crate::notifications::NotificationCenter;
use crate::preferences::Preferences;
use crate::state::AppData;
use serde::{de::DeserializeOwned, Serialize};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const HISTORY_FILE: &str = "history.json";
pub const STREAK_FILE: &str = "streak.json";
pub const NOTIFICATIONS_FILE: &str = "notifications.json";
pub const PREFERENCES_FILE: &str = "preferences.json";

pub fn resolve_data_dir() -> PathBuf {
    match env::var("APP_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from("data"),
    }
}

/// Reads one storage key. A missing or malformed file degrades to the
/// default value; parse failures are logged but never surfaced.
async fn load_key<T>(dir: &Path, file: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match fs::read(dir.join(file)).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {file}: {err}");
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {file}: {err}");
            T::default()
        }
    }
}

async fn persist_key<T: Serialize>(dir: &Path, file: &str, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value).map_err(AppError::internal)?;
    fs::write(dir.join(file), payload).await?;
    Ok(())
}

pub async fn load_app_data(dir: &Path) -> AppData {
    let entries: Vec<HistoryEntry> = load_key(dir, HISTORY_FILE).await;
    let streak: u32 = load_key(dir, STREAK_FILE).await;
    let notifications: Vec<Notification> = load_key(dir, NOTIFICATIONS_FILE).await;
    let preferences: Preferences = load_key(dir, PREFERENCES_FILE).await;

    AppData {
        log: ExcuseLog::new(entries, streak),
        notifications: NotificationCenter::new(notifications),
        preferences,
    }
}

pub async fn persist_history(dir: &Path, log: &ExcuseLog) -> Result<(), AppError> {
    persist_key(dir, HISTORY_FILE, &log.entries).await?;
    persist_key(dir, STREAK_FILE, &log.streak).await?;
    Ok(())
}

pub async fn persist_notifications(
    dir: &Path,
    center: &NotificationCenter,
) -> Result<(), AppError> {
    persist_key(dir, NOTIFICATIONS_FILE, &center.notifications).await
}

pub async fn persist_preferences(dir: &Path, preferences: &Preferences) -> Result<(), AppError> {
    persist_key(dir, PREFERENCES_FILE, preferences).await
}
