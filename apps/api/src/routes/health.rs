use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Liveness plus the running variant and current roster and match counts.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let (students, mentors) = {
        let rosters = state.rosters.read().await;
        (rosters.students.len(), rosters.mentors.len())
    };
    let matches = state.matches.read().await.len();

    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "variant": state.config.variant,
        "completion_configured": state.llm.is_some(),
        "profiles": { "students": students, "mentors": mentors },
        "matches": matches,
    }))
}
