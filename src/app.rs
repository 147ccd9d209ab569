use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/toggle/:date", post(handlers::toggle_form))
        .route("/api/checklist", get(handlers::get_checklist))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
