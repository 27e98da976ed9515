use axum::{
    Router, middleware,
    routing::{delete, put},
};

use super::handlers::{delete_score, submit_scores};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .route("/:participant_id/scores", put(submit_scores))
        .route("/:participant_id/scores/:hole_number", delete(delete_score))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
