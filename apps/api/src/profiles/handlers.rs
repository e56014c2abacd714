//! Axum route handlers for the Roster API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::profiles::models::{is_known_sport, Draft, Profile, Role, SPORTS};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddProfileRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub sport: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub title: String,
    pub content: String,
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/sports
pub async fn handle_list_sports() -> Json<&'static [&'static str]> {
    Json(SPORTS)
}

/// GET /api/v1/roster/:role/profiles
///
/// Newest first. Each profile carries the color of the first match that
/// references it, if any.
pub async fn handle_list_profiles(
    State(state): State<AppState>,
    Path(role): Path<Role>,
) -> Json<Vec<Profile>> {
    let rosters = state.rosters.read().await;
    let matches = state.matches.read().await;

    let profiles = rosters
        .get(role)
        .list()
        .iter()
        .map(|p| Profile {
            color: matches.color_for(role, p.id).map(str::to_string),
            ..p.clone()
        })
        .collect();

    Json(profiles)
}

/// POST /api/v1/roster/:role/profiles
pub async fn handle_add_profile(
    State(state): State<AppState>,
    Path(role): Path<Role>,
    Json(req): Json<AddProfileRequest>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    require_text("title", &req.title)?;
    require_text("content", &req.content)?;
    if !is_known_sport(&req.sport) {
        return Err(AppError::Validation(format!(
            "sport '{}' is not one of the offered sports",
            req.sport
        )));
    }

    let profile = state
        .rosters
        .write()
        .await
        .get_mut(role)
        .add(&req.title, &req.content, &req.sport);

    info!("Added {role} profile {} ('{}')", profile.id, profile.title);
    Ok((StatusCode::CREATED, Json(profile)))
}

/// DELETE /api/v1/roster/:role/profiles
///
/// Empties the roster, its draft and its selection. Matches are left alone.
pub async fn handle_reset_roster(
    State(state): State<AppState>,
    Path(role): Path<Role>,
) -> StatusCode {
    let mut rosters = state.rosters.write().await;
    let store = rosters.get_mut(role);
    if store.is_empty() {
        debug!("{role} roster already empty");
    } else {
        info!("Reset {role} roster ({} profiles)", store.len());
    }
    store.reset();
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/roster/:role/profiles/:id
///
/// Unknown ids are a silent no-op. Matches referencing the profile are kept
/// unless `CASCADE_MATCH_DELETES` is set.
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path((role, id)): Path<(Role, u32)>,
) -> StatusCode {
    let mut rosters = state.rosters.write().await;
    if rosters.get_mut(role).delete(id).is_none() {
        return StatusCode::NO_CONTENT;
    }

    if state.config.cascade_match_deletes {
        let dropped = state.matches.write().await.remove_for(role, id);
        info!("Deleted {role} profile {id}; dropped {dropped} matches");
    } else {
        info!("Deleted {role} profile {id}");
    }

    StatusCode::NO_CONTENT
}

/// POST /api/v1/roster/:role/profiles/:id/select
///
/// Marks the profile for editing and seeds the draft from it.
pub async fn handle_select_profile(
    State(state): State<AppState>,
    Path((role, id)): Path<(Role, u32)>,
) -> Result<Json<Profile>, AppError> {
    let selected = state.rosters.write().await.get_mut(role).select(id);
    selected
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("{role} profile {id} not found")))
}

/// PUT /api/v1/roster/:role/profiles/:id
///
/// Returns the updated profile, or `null` when `id` is not the current
/// selection. Input is only validated once the selection matches.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path((role, id)): Path<(Role, u32)>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<Option<Profile>>, AppError> {
    let mut rosters = state.rosters.write().await;
    let store = rosters.get_mut(role);
    if store.selected() != Some(id) {
        debug!("Update of {role} profile {id} ignored: not selected");
        return Ok(Json(None));
    }

    require_text("title", &req.title)?;
    require_text("content", &req.content)?;

    let updated = store.update(id, &req.title, &req.content);
    Ok(Json(updated))
}

/// DELETE /api/v1/roster/:role/selection
pub async fn handle_cancel_selection(
    State(state): State<AppState>,
    Path(role): Path<Role>,
) -> StatusCode {
    state.rosters.write().await.get_mut(role).cancel();
    StatusCode::NO_CONTENT
}

/// GET /api/v1/roster/:role/draft
pub async fn handle_get_draft(
    State(state): State<AppState>,
    Path(role): Path<Role>,
) -> Json<Draft> {
    let draft = state.rosters.read().await.get(role).draft().clone();
    Json(draft)
}

/// PUT /api/v1/roster/:role/draft
pub async fn handle_put_draft(
    State(state): State<AppState>,
    Path(role): Path<Role>,
    Json(draft): Json<Draft>,
) -> Json<Draft> {
    state
        .rosters
        .write()
        .await
        .get_mut(role)
        .set_draft(draft.clone());
    Json(draft)
}
