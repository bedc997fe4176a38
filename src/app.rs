use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/generate-excuse", post(handlers::generate_excuse))
        .route("/api/history", get(handlers::get_history))
        .route("/api/history/saved", get(handlers::get_saved_excuses))
        .route("/api/history/toggle-saved", post(handlers::toggle_saved))
        .route("/api/search", get(handlers::search))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/achievements", get(handlers::get_achievements))
        .route(
            "/api/notifications",
            get(handlers::get_notifications).delete(handlers::clear_notifications),
        )
        .route(
            "/api/notifications/:id/read",
            post(handlers::mark_notification_read),
        )
        .route(
            "/api/notifications/read-all",
            post(handlers::mark_all_notifications_read),
        )
        .route(
            "/api/preferences",
            get(handlers::get_preferences).put(handlers::update_preferences),
        )
        .with_state(state)
}
