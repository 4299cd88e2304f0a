use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{
    AnalyticsResponse, EntryRequest, EntryResponse, ListQuery, ListResponse, MessageResponse,
};
use crate::service;
use crate::state::AppState;
use crate::ui;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn create_mood(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<EntryRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), AppError> {
    let entry = service::create_entry(&state.pool, state.config.today(), user.id, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(EntryResponse {
            message: "Mood entry created successfully".to_string(),
            entry,
        }),
    ))
}

pub async fn list_moods(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>, AppError> {
    let page = service::list_entries(&state.pool, user.id, &query, state.config.today()).await?;
    Ok(Json(page))
}

pub async fn update_mood(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let entry = service::update_entry(&state.pool, user.id, id, &payload).await?;
    Ok(Json(EntryResponse {
        message: "Mood entry updated successfully".to_string(),
        entry,
    }))
}

pub async fn delete_mood(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    service::delete_entry(&state.pool, user.id, id).await?;
    Ok(Json(MessageResponse {
        message: "Mood entry deleted successfully".to_string(),
    }))
}

pub async fn analytics(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let mood_counts = service::weekly_analytics(&state.pool, user.id).await?;
    Ok(Json(AnalyticsResponse { mood_counts }))
}
