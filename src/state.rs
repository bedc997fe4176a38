use crate::history::ExcuseLog;
use crate::notifications::NotificationCenter;
use crate::preferences::Preferences;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// The whole persisted aggregate. Mutated only while the state lock is
/// held, and persisted key-by-key before the lock is released.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub log: ExcuseLog,
    pub notifications: NotificationCenter,
    pub preferences: Preferences,
}

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, data: AppData) -> Self {
        Self {
            data_dir,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
