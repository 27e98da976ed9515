use axum::{
    Router, middleware,
    routing::{delete, post},
};

use super::handlers::{attest, confirm_scores, remove_participant};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .route("/:participant_id/attest", post(attest))
        .route("/:participant_id/confirm-scores", post(confirm_scores))
        .route("/:participant_id", delete(remove_participant))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
