use crate::achievements::{self, AchievementCategory, AchievementReport};
use crate::errors::AppError;
use crate::excuses;
use crate::models::{
    GenerateRequest, GenerateResponse, HistoryEntry, HistoryResponse, NotificationsResponse,
    SearchResponse, StatsResponse, ToggleSavedRequest, ToggleSavedResponse, WorkoutDetails,
};
use crate::notifications::{crossed_milestones, MilestoneSnapshot};
use crate::preferences::{Preferences, PreferencesUpdate};
use crate::search::filter_history;
use crate::state::AppState;
use crate::stats::build_stats;
use crate::storage::{persist_history, persist_notifications, persist_preferences};
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::info;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(
        &today().format("%Y-%m-%d").to_string(),
        &data.preferences.nickname,
        data.log.streak,
        data.log.entries.len(),
        data.notifications.unread_count(),
    ))
}

pub async fn generate_excuse(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = excuses::validate(payload)?;
    let (excuse, counter_motivation) = excuses::generate(&request)?;

    let mut data = state.data.lock().await;
    let before = MilestoneSnapshot::capture(&data.log);
    data.log.add_excuse(
        today(),
        excuse.clone(),
        request.workout_type.clone(),
        Some(request.duration),
        Some(request.intensity),
    );
    let after = MilestoneSnapshot::capture(&data.log);

    let fired = crossed_milestones(&before, &after);
    for draft in &fired {
        info!("milestone crossed: {}", draft.title);
        data.notifications.add(draft.clone());
    }

    persist_history(&state.data_dir, &data.log).await?;
    if !fired.is_empty() {
        persist_notifications(&state.data_dir, &data.notifications).await?;
    }

    Ok(Json(GenerateResponse {
        excuse,
        counter_motivation,
        workout_details: WorkoutDetails {
            workout_type: request.workout_type,
            duration_minutes: request.duration,
            intensity: request.intensity,
        },
        streak: data.log.streak,
    }))
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let data = state.data.lock().await;
    Json(HistoryResponse {
        entries: data.log.entries.clone(),
        streak: data.log.streak,
    })
}

pub async fn get_saved_excuses(State(state): State<AppState>) -> Json<Vec<HistoryEntry>> {
    let data = state.data.lock().await;
    Json(data.log.saved_excuses())
}

pub async fn toggle_saved(
    State(state): State<AppState>,
    Json(payload): Json<ToggleSavedRequest>,
) -> Result<Json<ToggleSavedResponse>, AppError> {
    let mut data = state.data.lock().await;
    let updated = data.log.toggle_saved(&payload.date, &payload.excuse);
    if updated > 0 {
        persist_history(&state.data_dir, &data.log).await?;
    }
    Ok(Json(ToggleSavedResponse { updated }))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let data = state.data.lock().await;
    let results: Vec<HistoryEntry> = filter_history(&data.log.entries, &params.q)
        .into_iter()
        .cloned()
        .collect();
    Json(SearchResponse {
        query: params.q,
        count: results.len(),
        results,
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let data = state.data.lock().await;
    Json(build_stats(&data.log))
}

#[derive(Debug, Deserialize)]
pub struct AchievementParams {
    category: Option<String>,
}

pub async fn get_achievements(
    State(state): State<AppState>,
    Query(params): Query<AchievementParams>,
) -> Result<Json<AchievementReport>, AppError> {
    let category = match params.category.as_deref() {
        None | Some("all") => None,
        Some(raw) => Some(
            AchievementCategory::parse(raw)
                .ok_or_else(|| AppError::bad_request("Invalid achievement category"))?,
        ),
    };

    let data = state.data.lock().await;
    Ok(Json(achievements::evaluate_at(
        today(),
        &data.log.entries,
        data.log.streak,
        category,
    )))
}

pub async fn get_notifications(State(state): State<AppState>) -> Json<NotificationsResponse> {
    let data = state.data.lock().await;
    Json(NotificationsResponse {
        notifications: data.notifications.notifications.clone(),
        unread_count: data.notifications.unread_count(),
    })
}

pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NotificationsResponse>, AppError> {
    let mut data = state.data.lock().await;
    if data.notifications.mark_as_read(&id) {
        persist_notifications(&state.data_dir, &data.notifications).await?;
    }
    Ok(Json(NotificationsResponse {
        notifications: data.notifications.notifications.clone(),
        unread_count: data.notifications.unread_count(),
    }))
}

pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
) -> Result<Json<NotificationsResponse>, AppError> {
    let mut data = state.data.lock().await;
    data.notifications.mark_all_as_read();
    persist_notifications(&state.data_dir, &data.notifications).await?;
    Ok(Json(NotificationsResponse {
        notifications: data.notifications.notifications.clone(),
        unread_count: 0,
    }))
}

pub async fn clear_notifications(
    State(state): State<AppState>,
) -> Result<Json<NotificationsResponse>, AppError> {
    let mut data = state.data.lock().await;
    data.notifications.clear();
    persist_notifications(&state.data_dir, &data.notifications).await?;
    Ok(Json(NotificationsResponse {
        notifications: Vec::new(),
        unread_count: 0,
    }))
}

pub async fn get_preferences(State(state): State<AppState>) -> Json<Preferences> {
    let data = state.data.lock().await;
    Json(data.preferences.clone())
}

pub async fn update_preferences(
    State(state): State<AppState>,
    Json(payload): Json<PreferencesUpdate>,
) -> Result<Json<Preferences>, AppError> {
    let mut data = state.data.lock().await;
    data.preferences.update(payload);
    persist_preferences(&state.data_dir, &data.preferences).await?;
    Ok(Json(data.preferences.clone()))
}
