use crate::errors::AppError;
use crate::models::{ChecklistResponse, ToggleRequest};
use crate::progress::build_checklist;
use crate::schedule::date_key;
use crate::state::AppState;
use crate::storage::persist_checked;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let checked = state.checked.lock().await;
    Html(render_index(&build_checklist(&state.schedule, &checked)))
}

pub async fn get_checklist(
    State(state): State<AppState>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let checked = state.checked.lock().await;
    Ok(Json(build_checklist(&state.schedule, &checked)))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let key = parse_day_key(&payload.date)?;
    let response = apply_toggle(&state, &key).await?;
    Ok(Json(response))
}

pub async fn toggle_form(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Redirect, AppError> {
    let key = parse_day_key(&date)?;
    apply_toggle(&state, &key).await?;
    Ok(Redirect::to("/"))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<ChecklistResponse>, AppError> {
    let mut checked = state.checked.lock().await;
    checked.clear();
    persist_checked(&state.data_path, &checked).await?;
    Ok(Json(build_checklist(&state.schedule, &checked)))
}

async fn apply_toggle(state: &AppState, key: &str) -> Result<ChecklistResponse, AppError> {
    let mut checked = state.checked.lock().await;
    checked.toggle(key);
    persist_checked(&state.data_path, &checked).await?;
    Ok(build_checklist(&state.schedule, &checked))
}

// Identifiers must round-trip as ISO dates; dates outside the schedule are
// accepted and stay inert.
fn parse_day_key(raw: &str) -> Result<String, AppError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be formatted YYYY-MM-DD"))?;
    Ok(date_key(date))
}
