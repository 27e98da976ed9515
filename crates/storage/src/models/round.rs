use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RoundStatus {
    Active,
    Completed,
    Cancelled,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Active => "active",
            RoundStatus::Completed => "completed",
            RoundStatus::Cancelled => "cancelled",
        }
    }

    /// Cancelling is allowed from any state and is terminal. Completing is
    /// only allowed for an active round. No transition re-opens a round.
    pub fn can_transition_to(&self, next: RoundStatus) -> bool {
        matches!(
            (self, next),
            (RoundStatus::Active, RoundStatus::Completed)
                | (RoundStatus::Active | RoundStatus::Completed, RoundStatus::Cancelled)
        )
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RoundEnvironment {
    #[default]
    Outdoor,
    Indoor,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Round {
    pub round_id: Uuid,
    pub organizer_id: Uuid,
    pub course_name: String,
    pub hole_count: i16,
    pub environment: RoundEnvironment,
    pub par_per_hole: Option<Decimal>,
    pub status: RoundStatus,
    pub is_public: bool,
    pub published_post_id: Option<Uuid>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_round_can_complete() {
        assert!(RoundStatus::Active.can_transition_to(RoundStatus::Completed));
    }

    #[test]
    fn test_any_open_round_can_cancel() {
        assert!(RoundStatus::Active.can_transition_to(RoundStatus::Cancelled));
        assert!(RoundStatus::Completed.can_transition_to(RoundStatus::Cancelled));
    }

    #[test]
    fn test_cancelled_is_terminal() {
        assert!(!RoundStatus::Cancelled.can_transition_to(RoundStatus::Active));
        assert!(!RoundStatus::Cancelled.can_transition_to(RoundStatus::Completed));
        assert!(!RoundStatus::Cancelled.can_transition_to(RoundStatus::Cancelled));
    }

    #[test]
    fn test_completed_round_cannot_reopen() {
        assert!(!RoundStatus::Completed.can_transition_to(RoundStatus::Active));
    }
}
