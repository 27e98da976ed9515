use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::{
    participant::{InvitePlayerRequest, ParticipantResponse},
    round::{AttachPublicationRequest, CreateRoundRequest, RoundResponse, UpdateRoundStatusRequest},
    scorecard::ScorecardResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CallerId;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/rounds",
    request_body = CreateRoundRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Round created successfully", body = RoundResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "rounds"
)]
pub async fn create_round(
    State(state): State<AppState>,
    caller: CallerId,
    Json(req): Json<CreateRoundRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let round = services::create_round(state.db.pool(), caller.0, &req).await?;

    Ok((StatusCode::CREATED, Json(RoundResponse::from(round))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rounds",
    responses(
        (status = 200, description = "Rounds the caller organizes or plays in", body = Vec<RoundResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "rounds"
)]
pub async fn list_rounds(
    State(state): State<AppState>,
    caller: CallerId,
) -> Result<Json<Vec<RoundResponse>>, WebError> {
    let rounds = services::list_rounds(state.db.pool(), caller.0).await?;

    let response: Vec<RoundResponse> = rounds.into_iter().map(RoundResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/rounds/{round_id}/scorecard",
    params(
        ("round_id" = Uuid, Path, description = "Round ID")
    ),
    responses(
        (status = 200, description = "Scorecard with rows for every participant", body = ScorecardResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Round is private"),
        (status = 404, description = "Round not found")
    ),
    tag = "rounds"
)]
pub async fn get_scorecard(
    State(state): State<AppState>,
    Path(round_id): Path<Uuid>,
    caller: CallerId,
) -> Result<Response, WebError> {
    let scorecard =
        services::get_scorecard(state.db.pool(), state.identity.as_ref(), round_id, caller.0)
            .await?;

    Ok(Json(scorecard).into_response())
}

#[utoipa::path(
    put,
    path = "/api/rounds/{round_id}/status",
    params(
        ("round_id" = Uuid, Path, description = "Round ID")
    ),
    request_body = UpdateRoundStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Round status updated", body = RoundResponse),
        (status = 400, description = "Transition not allowed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only the organizer may change the status"),
        (status = 404, description = "Round not found")
    ),
    tag = "rounds"
)]
pub async fn update_round_status(
    State(state): State<AppState>,
    Path(round_id): Path<Uuid>,
    caller: CallerId,
    Json(req): Json<UpdateRoundStatusRequest>,
) -> Result<Response, WebError> {
    let round = services::set_round_status(
        state.db.pool(),
        state.notifier.as_ref(),
        round_id,
        caller.0,
        req.status,
    )
    .await?;

    Ok(Json(RoundResponse::from(round)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/rounds/{round_id}/publication",
    params(
        ("round_id" = Uuid, Path, description = "Round ID")
    ),
    request_body = AttachPublicationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Publication reference stored", body = RoundResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only the organizer may attach a publication"),
        (status = 404, description = "Round not found")
    ),
    tag = "rounds"
)]
pub async fn attach_publication(
    State(state): State<AppState>,
    Path(round_id): Path<Uuid>,
    caller: CallerId,
    Json(req): Json<AttachPublicationRequest>,
) -> Result<Response, WebError> {
    let round =
        services::attach_publication(state.db.pool(), round_id, caller.0, req.post_id).await?;

    Ok(Json(RoundResponse::from(round)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/rounds/{round_id}/participants",
    params(
        ("round_id" = Uuid, Path, description = "Round ID")
    ),
    request_body = InvitePlayerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Player invited", body = ParticipantResponse),
        (status = 400, description = "Player does not exist"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only the organizer may invite players"),
        (status = 404, description = "Round not found"),
        (status = 409, description = "Player is already on the roster")
    ),
    tag = "rounds"
)]
pub async fn invite_player(
    State(state): State<AppState>,
    Path(round_id): Path<Uuid>,
    caller: CallerId,
    Json(req): Json<InvitePlayerRequest>,
) -> Result<Response, WebError> {
    let participant = services::invite_player(
        state.db.pool(),
        state.identity.as_ref(),
        state.notifier.as_ref(),
        round_id,
        caller.0,
        &req,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ParticipantResponse::from(participant)),
    )
        .into_response())
}
