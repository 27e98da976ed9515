use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{
    attach_publication, create_round, get_scorecard, invite_player, list_rounds,
    update_round_status,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_round))
        .route("/:round_id/status", put(update_round_status))
        .route("/:round_id/publication", post(attach_publication))
        .route("/:round_id/participants", post(invite_player))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_rounds))
        .route("/:round_id/scorecard", get(get_scorecard))
        .merge(protected)
}
