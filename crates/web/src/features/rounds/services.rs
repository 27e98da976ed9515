use sqlx::PgPool;
use storage::{
    collaborators::{IdentityProvider, NotificationDispatcher},
    dto::{
        participant::InvitePlayerRequest, round::CreateRoundRequest, scorecard::ScorecardResponse,
    },
    error::Result,
    models::{Participant, Round, RoundStatus},
    services,
};
use uuid::Uuid;

/// Register a new round for the calling organizer
pub async fn create_round(
    pool: &PgPool,
    organizer_id: Uuid,
    req: &CreateRoundRequest,
) -> Result<Round> {
    services::rounds::create_round(pool, organizer_id, req).await
}

/// List rounds the caller organizes or plays in
pub async fn list_rounds(pool: &PgPool, player_id: Uuid) -> Result<Vec<Round>> {
    services::rounds::list_rounds_for_player(pool, player_id).await
}

/// Move a round through its lifecycle
pub async fn set_round_status(
    pool: &PgPool,
    notifier: &dyn NotificationDispatcher,
    round_id: Uuid,
    caller_id: Uuid,
    status: RoundStatus,
) -> Result<Round> {
    services::rounds::set_round_status(pool, notifier, round_id, caller_id, status).await
}

/// Link the scorecard to a shared post
pub async fn attach_publication(
    pool: &PgPool,
    round_id: Uuid,
    caller_id: Uuid,
    post_id: Uuid,
) -> Result<Round> {
    services::rounds::attach_publication(pool, round_id, caller_id, post_id).await
}

/// Invite a player onto the roster
pub async fn invite_player(
    pool: &PgPool,
    identity: &dyn IdentityProvider,
    notifier: &dyn NotificationDispatcher,
    round_id: Uuid,
    caller_id: Uuid,
    req: &InvitePlayerRequest,
) -> Result<Participant> {
    services::roster::invite_player(pool, identity, notifier, round_id, caller_id, req).await
}

/// Assemble the read-only scorecard view
pub async fn get_scorecard(
    pool: &PgPool,
    identity: &dyn IdentityProvider,
    round_id: Uuid,
    caller_id: Uuid,
) -> Result<ScorecardResponse> {
    services::scorecard::get_scorecard(pool, identity, round_id, caller_id).await
}
