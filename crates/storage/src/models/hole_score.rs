use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One scoring unit on a participant's card. At most one row exists per
/// participant and hole; writes go through an upsert keyed on that pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HoleScore {
    pub score_id: Uuid,
    pub participant_id: Uuid,
    pub hole_number: i16,
    pub strokes: i16,
    pub putts: Option<i16>,
    pub fairway_hit: Option<bool>,
    pub green_in_regulation: Option<bool>,
    pub entered_by: Uuid,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
