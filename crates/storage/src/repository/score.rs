use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::score::ScoreEntry;
use crate::error::{Result, StorageError};
use crate::models::HoleScore;

/// Repository for HoleScore database operations
pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All ledger rows for a round, card order. Used by the scorecard view.
    pub async fn list_for_round(&self, round_id: Uuid) -> Result<Vec<HoleScore>> {
        let scores = sqlx::query_as::<_, HoleScore>(
            r#"
            SELECT hs.score_id, hs.participant_id, hs.hole_number, hs.strokes, hs.putts,
                   hs.fairway_hit, hs.green_in_regulation, hs.entered_by, hs.created_at, hs.updated_at
            FROM hole_scores hs
            JOIN round_participants rp ON rp.participant_id = hs.participant_id
            WHERE rp.round_id = $1
            ORDER BY hs.participant_id, hs.hole_number
            "#,
        )
        .bind(round_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// Write one hole. A second write for the same hole replaces the first,
    /// so resubmitting a batch is safe.
    pub async fn upsert(
        conn: &mut PgConnection,
        participant_id: Uuid,
        entry: &ScoreEntry,
        entered_by: Uuid,
    ) -> Result<HoleScore> {
        let score = sqlx::query_as::<_, HoleScore>(
            r#"
            INSERT INTO hole_scores (participant_id, hole_number, strokes, putts, fairway_hit,
                                     green_in_regulation, entered_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (participant_id, hole_number)
            DO UPDATE SET
                strokes = EXCLUDED.strokes,
                putts = EXCLUDED.putts,
                fairway_hit = EXCLUDED.fairway_hit,
                green_in_regulation = EXCLUDED.green_in_regulation,
                entered_by = EXCLUDED.entered_by,
                updated_at = now()
            RETURNING score_id, participant_id, hole_number, strokes, putts, fairway_hit,
                      green_in_regulation, entered_by, created_at, updated_at
            "#,
        )
        .bind(participant_id)
        .bind(entry.hole_number)
        .bind(entry.strokes)
        .bind(entry.putts)
        .bind(entry.fairway_hit)
        .bind(entry.green_in_regulation)
        .bind(entered_by)
        .fetch_one(&mut *conn)
        .await?;

        Ok(score)
    }

    pub async fn delete(
        conn: &mut PgConnection,
        participant_id: Uuid,
        hole_number: i16,
    ) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM hole_scores
            WHERE participant_id = $1 AND hole_number = $2
            "#,
        )
        .bind(participant_id)
        .bind(hole_number)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn list_for_participant(
        conn: &mut PgConnection,
        participant_id: Uuid,
    ) -> Result<Vec<HoleScore>> {
        let scores = sqlx::query_as::<_, HoleScore>(
            r#"
            SELECT score_id, participant_id, hole_number, strokes, putts, fairway_hit,
                   green_in_regulation, entered_by, created_at, updated_at
            FROM hole_scores
            WHERE participant_id = $1
            ORDER BY hole_number
            "#,
        )
        .bind(participant_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(scores)
    }
}
