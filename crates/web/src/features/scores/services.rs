use sqlx::PgPool;
use storage::{
    dto::score::ScoreEntry,
    error::Result,
    models::Participant,
    services::{self, scoring::BatchOutcome},
};
use uuid::Uuid;

/// Apply a batch of hole entries to a participant's card
pub async fn submit_scores(
    pool: &PgPool,
    participant_id: Uuid,
    caller_id: Uuid,
    entries: &[ScoreEntry],
) -> Result<BatchOutcome> {
    services::scoring::submit_scores(pool, participant_id, caller_id, entries).await
}

/// Remove one hole entry and rederive the totals
pub async fn delete_score(
    pool: &PgPool,
    participant_id: Uuid,
    caller_id: Uuid,
    hole_number: i16,
) -> Result<Participant> {
    services::scoring::delete_score(pool, participant_id, caller_id, hole_number).await
}
