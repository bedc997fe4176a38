pub mod achievements;
pub mod app;
pub mod errors;
pub mod excuses;
pub mod handlers;
pub mod history;
pub mod models;
pub mod notifications;
pub mod preferences;
pub mod search;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::{AppData, AppState};
pub use storage::{load_app_data, resolve_data_dir};
