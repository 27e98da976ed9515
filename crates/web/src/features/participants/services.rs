use sqlx::PgPool;
use storage::{
    collaborators::NotificationDispatcher,
    error::Result,
    models::{AttestDecision, Participant},
    services,
};
use uuid::Uuid;

/// Record the caller's answer to a roster invitation
pub async fn attest(
    pool: &PgPool,
    notifier: &dyn NotificationDispatcher,
    participant_id: Uuid,
    caller_id: Uuid,
    decision: AttestDecision,
) -> Result<Participant> {
    services::roster::attest(pool, notifier, participant_id, caller_id, decision).await
}

/// Mark the caller's finished card as confirmed
pub async fn confirm_scores(
    pool: &PgPool,
    participant_id: Uuid,
    caller_id: Uuid,
) -> Result<Participant> {
    services::roster::confirm_scores(pool, participant_id, caller_id).await
}

/// Drop a participant from the roster
pub async fn remove_participant(pool: &PgPool, participant_id: Uuid, caller_id: Uuid) -> Result<()> {
    services::roster::remove_participant(pool, participant_id, caller_id).await
}
