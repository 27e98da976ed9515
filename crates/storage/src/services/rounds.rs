use sqlx::PgPool;
use uuid::Uuid;

use crate::collaborators::{NotificationDispatcher, ScorecardEvent, emit_or_log};
use crate::dto::round::CreateRoundRequest;
use crate::error::{Result, StorageError};
use crate::models::{Round, RoundStatus};
use crate::repository::round::RoundRepository;
use crate::services::access::{self, AccessContext, Action};

pub async fn create_round(
    pool: &PgPool,
    organizer_id: Uuid,
    req: &CreateRoundRequest,
) -> Result<Round> {
    RoundRepository::new(pool).create(organizer_id, req).await
}

pub async fn list_rounds_for_player(pool: &PgPool, player_id: Uuid) -> Result<Vec<Round>> {
    RoundRepository::new(pool).list_for_player(player_id).await
}

/// Move a round through its lifecycle. Setting the status it already has
/// is a no-op; anything else must be a legal transition. Completing or
/// cancelling notifies the roster.
pub async fn set_round_status(
    pool: &PgPool,
    notifier: &dyn NotificationDispatcher,
    round_id: Uuid,
    caller_id: Uuid,
    new_status: RoundStatus,
) -> Result<Round> {
    let rounds = RoundRepository::new(pool);
    let round = rounds.find_by_id(round_id).await?;

    access::authorize(
        Action::SetRoundStatus,
        caller_id,
        &AccessContext {
            round: &round,
            participant: None,
        },
    )?;

    if round.status == new_status {
        return Ok(round);
    }

    if !round.status.can_transition_to(new_status) {
        return Err(StorageError::Validation(format!(
            "a {} round cannot move to {}",
            round.status.as_str(),
            new_status.as_str()
        )));
    }

    let updated = rounds.set_status(round_id, new_status).await?;

    match updated.status {
        RoundStatus::Completed => {
            emit_or_log(notifier, ScorecardEvent::round_completed(&updated)).await;
        }
        RoundStatus::Cancelled => {
            emit_or_log(notifier, ScorecardEvent::round_cancelled(&updated)).await;
        }
        RoundStatus::Active => {}
    }

    Ok(updated)
}

/// Store the opaque reference to a post the finished scorecard was shared
/// as. The engine keeps the link only; the post itself lives with the
/// publication service.
pub async fn attach_publication(
    pool: &PgPool,
    round_id: Uuid,
    caller_id: Uuid,
    post_id: Uuid,
) -> Result<Round> {
    let rounds = RoundRepository::new(pool);
    let round = rounds.find_by_id(round_id).await?;

    access::authorize(
        Action::AttachPublication,
        caller_id,
        &AccessContext {
            round: &round,
            participant: None,
        },
    )?;

    rounds.attach_publication(round_id, post_id).await
}
