use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::participant::{AttestRequest, ParticipantResponse};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::auth::CallerId;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/participants/{participant_id}/attest",
    params(
        ("participant_id" = Uuid, Path, description = "Participant ID")
    ),
    request_body = AttestRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Attestation recorded", body = ParticipantResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only the invited player may attest"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn attest(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
    caller: CallerId,
    Json(req): Json<AttestRequest>,
) -> Result<Response, WebError> {
    let participant = services::attest(
        state.db.pool(),
        state.notifier.as_ref(),
        participant_id,
        caller.0,
        req.decision,
    )
    .await?;

    Ok(Json(ParticipantResponse::from(participant)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/participants/{participant_id}/confirm-scores",
    params(
        ("participant_id" = Uuid, Path, description = "Participant ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Card confirmed", body = ParticipantResponse),
        (status = 400, description = "Participant has not confirmed the invitation"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only the participant may confirm their card"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn confirm_scores(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
    caller: CallerId,
) -> Result<Response, WebError> {
    let participant = services::confirm_scores(state.db.pool(), participant_id, caller.0).await?;

    Ok(Json(ParticipantResponse::from(participant)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/participants/{participant_id}",
    params(
        ("participant_id" = Uuid, Path, description = "Participant ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Participant removed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only the organizer may remove participants")
    ),
    tag = "participants"
)]
pub async fn remove_participant(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
    caller: CallerId,
) -> Result<Response, WebError> {
    services::remove_participant(state.db.pool(), participant_id, caller.0).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
