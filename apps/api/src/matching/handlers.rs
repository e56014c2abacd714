//! Axum route handlers for the Matching API (student variant only).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::matching::matchmaker::run_match;
use crate::matching::models::{Match, MatchOutcome};
use crate::profiles::models::Role;
use crate::state::AppState;

/// POST /api/v1/matches
///
/// Sends the full roster to the completion service and applies the reply.
/// Always 200: failures come back as `status: "failed"` with the previous
/// match set untouched.
pub async fn handle_run_match(State(state): State<AppState>) -> Json<MatchOutcome> {
    Json(run_match(&state).await)
}

/// GET /api/v1/matches
pub async fn handle_list_matches(State(state): State<AppState>) -> Json<Vec<Match>> {
    let matches = state.matches.read().await.all().to_vec();
    Json(matches)
}

/// DELETE /api/v1/matches
pub async fn handle_clear_matches(State(state): State<AppState>) -> StatusCode {
    let mut matches = state.matches.write().await;
    if !matches.is_empty() {
        info!("Cleared match set ({} matches)", matches.len());
    }
    matches.clear();
    StatusCode::NO_CONTENT
}

/// GET /api/v1/matches/:role/:id
///
/// First match referencing the profile, or `null` when the card is not highlighted.
pub async fn handle_match_for_profile(
    State(state): State<AppState>,
    Path((role, id)): Path<(Role, u32)>,
) -> Json<Option<Match>> {
    let found = state.matches.read().await.for_profile(role, id).cloned();
    Json(found)
}
