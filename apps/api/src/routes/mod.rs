pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::config::AppVariant;
use crate::matching::handlers as matching;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

/// Builds the router for the configured variant. The coach variant gets the
/// edit flow (select / update / cancel); the student variant gets matching.
pub fn build_router(state: AppState) -> Router {
    let router: Router<AppState> = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/sports", get(profiles::handle_list_sports))
        .route(
            "/api/v1/roster/:role/profiles",
            get(profiles::handle_list_profiles)
                .post(profiles::handle_add_profile)
                .delete(profiles::handle_reset_roster),
        )
        .route(
            "/api/v1/roster/:role/draft",
            get(profiles::handle_get_draft).put(profiles::handle_put_draft),
        );

    let router = match state.config.variant {
        AppVariant::Coach => router
            .route(
                "/api/v1/roster/:role/profiles/:id",
                put(profiles::handle_update_profile).delete(profiles::handle_delete_profile),
            )
            .route(
                "/api/v1/roster/:role/profiles/:id/select",
                post(profiles::handle_select_profile),
            )
            .route(
                "/api/v1/roster/:role/selection",
                delete(profiles::handle_cancel_selection),
            ),
        AppVariant::Student => router
            .route(
                "/api/v1/roster/:role/profiles/:id",
                delete(profiles::handle_delete_profile),
            )
            .route(
                "/api/v1/matches",
                get(matching::handle_list_matches)
                    .post(matching::handle_run_match)
                    .delete(matching::handle_clear_matches),
            )
            .route(
                "/api/v1/matches/:role/:id",
                get(matching::handle_match_for_profile),
            ),
    };

    router.with_state(state)
}
