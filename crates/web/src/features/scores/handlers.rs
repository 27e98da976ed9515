use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::{
    participant::{ParticipantResponse, TotalsResponse},
    score::{SubmitScoresRequest, SubmitScoresResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CallerId;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    put,
    path = "/api/participants/{participant_id}/scores",
    params(
        ("participant_id" = Uuid, Path, description = "Participant ID")
    ),
    request_body = SubmitScoresRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Per-entry outcomes and recomputed totals", body = SubmitScoresResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller may not write to this card"),
        (status = 404, description = "Participant not found")
    ),
    tag = "scores"
)]
pub async fn submit_scores(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
    caller: CallerId,
    Json(req): Json<SubmitScoresRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let outcome =
        services::submit_scores(state.db.pool(), participant_id, caller.0, &req.entries).await?;

    let response = SubmitScoresResponse {
        results: outcome.results,
        totals: TotalsResponse::from(&outcome.participant),
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/participants/{participant_id}/scores/{hole_number}",
    params(
        ("participant_id" = Uuid, Path, description = "Participant ID"),
        ("hole_number" = i16, Path, description = "Hole number")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Entry removed, totals rederived", body = ParticipantResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller may not write to this card"),
        (status = 404, description = "No entry for that hole")
    ),
    tag = "scores"
)]
pub async fn delete_score(
    State(state): State<AppState>,
    Path((participant_id, hole_number)): Path<(Uuid, i16)>,
    caller: CallerId,
) -> Result<Response, WebError> {
    let participant =
        services::delete_score(state.db.pool(), participant_id, caller.0, hole_number).await?;

    Ok(Json(ParticipantResponse::from(participant)).into_response())
}
