use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::round::CreateRoundRequest;
use crate::error::{Result, StorageError};
use crate::models::{Round, RoundStatus};

/// Repository for Round database operations
pub struct RoundRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RoundRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, organizer_id: Uuid, req: &CreateRoundRequest) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(
            r#"
            INSERT INTO rounds (organizer_id, course_name, hole_count, environment, par_per_hole, is_public)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING round_id, organizer_id, course_name, hole_count, environment, par_per_hole,
                      status, is_public, published_post_id, created_at, updated_at
            "#,
        )
        .bind(organizer_id)
        .bind(&req.course_name)
        .bind(req.hole_count)
        .bind(req.environment)
        .bind(req.par_per_hole)
        .bind(req.is_public)
        .fetch_one(self.pool)
        .await?;

        Ok(round)
    }

    pub async fn find_by_id(&self, round_id: Uuid) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(
            r#"
            SELECT round_id, organizer_id, course_name, hole_count, environment, par_per_hole,
                   status, is_public, published_post_id, created_at, updated_at
            FROM rounds
            WHERE round_id = $1
            "#,
        )
        .bind(round_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(round)
    }

    /// Same lookup for use inside an open transaction.
    pub async fn find_by_id_in(conn: &mut PgConnection, round_id: Uuid) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(
            r#"
            SELECT round_id, organizer_id, course_name, hole_count, environment, par_per_hole,
                   status, is_public, published_post_id, created_at, updated_at
            FROM rounds
            WHERE round_id = $1
            "#,
        )
        .bind(round_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(round)
    }

    /// Rounds the player organizes or is rostered on, newest first.
    pub async fn list_for_player(&self, player_id: Uuid) -> Result<Vec<Round>> {
        let rounds = sqlx::query_as::<_, Round>(
            r#"
            SELECT DISTINCT r.round_id, r.organizer_id, r.course_name, r.hole_count, r.environment,
                   r.par_per_hole, r.status, r.is_public, r.published_post_id, r.created_at, r.updated_at
            FROM rounds r
            LEFT JOIN round_participants rp ON rp.round_id = r.round_id
            WHERE r.organizer_id = $1 OR rp.player_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(player_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rounds)
    }

    pub async fn set_status(&self, round_id: Uuid, status: RoundStatus) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(
            r#"
            UPDATE rounds
            SET status = $1, updated_at = now()
            WHERE round_id = $2
            RETURNING round_id, organizer_id, course_name, hole_count, environment, par_per_hole,
                      status, is_public, published_post_id, created_at, updated_at
            "#,
        )
        .bind(status)
        .bind(round_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(round)
    }

    pub async fn attach_publication(&self, round_id: Uuid, post_id: Uuid) -> Result<Round> {
        let round = sqlx::query_as::<_, Round>(
            r#"
            UPDATE rounds
            SET published_post_id = $1, updated_at = now()
            WHERE round_id = $2
            RETURNING round_id, organizer_id, course_name, hole_count, environment, par_per_hole,
                      status, is_public, published_post_id, created_at, updated_at
            "#,
        )
        .bind(post_id)
        .bind(round_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(round)
    }
}
