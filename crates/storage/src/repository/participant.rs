use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{AttestationStatus, Participant, ScoreEntryAuthority};
use crate::services::totals::ParticipantTotals;

/// Repository for Participant database operations
pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        round_id: Uuid,
        player_id: Uuid,
        entry_authority: ScoreEntryAuthority,
    ) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO round_participants (round_id, player_id, entry_authority)
            VALUES ($1, $2, $3)
            RETURNING participant_id, round_id, player_id, status, entry_authority, responded_at,
                      scores_confirmed, total_strokes, strokes_to_par, holes_completed,
                      last_score_update, created_at
            "#,
        )
        .bind(round_id)
        .bind(player_id)
        .bind(entry_authority)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            // Handle unique constraint violations for (round_id, player_id)
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "Player is already on this round's roster".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(participant)
    }

    pub async fn find_by_id(&self, participant_id: Uuid) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, round_id, player_id, status, entry_authority, responded_at,
                   scores_confirmed, total_strokes, strokes_to_par, holes_completed,
                   last_score_update, created_at
            FROM round_participants
            WHERE participant_id = $1
            "#,
        )
        .bind(participant_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    pub async fn find_by_round_and_player(
        &self,
        round_id: Uuid,
        player_id: Uuid,
    ) -> Result<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, round_id, player_id, status, entry_authority, responded_at,
                   scores_confirmed, total_strokes, strokes_to_par, holes_completed,
                   last_score_update, created_at
            FROM round_participants
            WHERE round_id = $1 AND player_id = $2
            "#,
        )
        .bind(round_id)
        .bind(player_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(participant)
    }

    pub async fn list_for_round(&self, round_id: Uuid) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, round_id, player_id, status, entry_authority, responded_at,
                   scores_confirmed, total_strokes, strokes_to_par, holes_completed,
                   last_score_update, created_at
            FROM round_participants
            WHERE round_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(round_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Decide a pending invitation. Guarded on the current status so two
    /// racing calls cannot both record a transition; `None` means the row
    /// was no longer pending.
    pub async fn set_attestation(
        &self,
        participant_id: Uuid,
        status: AttestationStatus,
    ) -> Result<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE round_participants
            SET status = $1, responded_at = now()
            WHERE participant_id = $2 AND status = 'pending'
            RETURNING participant_id, round_id, player_id, status, entry_authority, responded_at,
                      scores_confirmed, total_strokes, strokes_to_par, holes_completed,
                      last_score_update, created_at
            "#,
        )
        .bind(status)
        .bind(participant_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(participant)
    }

    pub async fn set_scores_confirmed(&self, participant_id: Uuid) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE round_participants
            SET scores_confirmed = true
            WHERE participant_id = $1
            RETURNING participant_id, round_id, player_id, status, entry_authority, responded_at,
                      scores_confirmed, total_strokes, strokes_to_par, holes_completed,
                      last_score_update, created_at
            "#,
        )
        .bind(participant_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    /// Ledger rows cascade with the roster row.
    pub async fn delete(&self, participant_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM round_participants
            WHERE participant_id = $1
            "#,
        )
        .bind(participant_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Lock the roster row for the rest of the transaction. Score writers
    /// take this lock first so concurrent submissions for the same
    /// participant serialize instead of interleaving with the recompute.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        participant_id: Uuid,
    ) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, round_id, player_id, status, entry_authority, responded_at,
                   scores_confirmed, total_strokes, strokes_to_par, holes_completed,
                   last_score_update, created_at
            FROM round_participants
            WHERE participant_id = $1
            FOR UPDATE
            "#,
        )
        .bind(participant_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    /// Persist aggregation output. The derived columns are written here and
    /// nowhere else.
    pub async fn store_totals(
        conn: &mut PgConnection,
        participant_id: Uuid,
        totals: &ParticipantTotals,
    ) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE round_participants
            SET total_strokes = $1, strokes_to_par = $2, holes_completed = $3,
                last_score_update = now()
            WHERE participant_id = $4
            RETURNING participant_id, round_id, player_id, status, entry_authority, responded_at,
                      scores_confirmed, total_strokes, strokes_to_par, holes_completed,
                      last_score_update, created_at
            "#,
        )
        .bind(totals.total_strokes)
        .bind(totals.strokes_to_par)
        .bind(totals.holes_completed)
        .bind(participant_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }
}
