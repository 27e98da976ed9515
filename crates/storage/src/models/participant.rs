use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum AttestationStatus {
    Pending,
    Confirmed,
    Declined,
}

impl AttestationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttestationStatus::Pending => "pending",
            AttestationStatus::Confirmed => "confirmed",
            AttestationStatus::Declined => "declined",
        }
    }
}

/// An invitee's answer to the invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttestDecision {
    Confirmed,
    Declined,
}

impl AttestDecision {
    pub fn as_status(&self) -> AttestationStatus {
        match self {
            AttestDecision::Confirmed => AttestationStatus::Confirmed,
            AttestDecision::Declined => AttestationStatus::Declined,
        }
    }
}

/// Outcome of applying an attest decision to the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttestTransition {
    Changed(AttestationStatus),
    Unchanged(AttestationStatus),
}

impl AttestationStatus {
    /// A pending invitation moves to the decided state. Confirmed and
    /// declined are terminal: repeating the call is a no-op that reports
    /// the current state instead of failing, so invitees can retry safely.
    pub fn apply(&self, decision: AttestDecision) -> AttestTransition {
        match self {
            AttestationStatus::Pending => AttestTransition::Changed(decision.as_status()),
            current => AttestTransition::Unchanged(*current),
        }
    }
}

/// Who is allowed to originate this participant's scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ScoreEntryAuthority {
    Organizer,
    Player,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub participant_id: Uuid,
    pub round_id: Uuid,
    pub player_id: Uuid,
    pub status: AttestationStatus,
    pub entry_authority: ScoreEntryAuthority,
    pub responded_at: Option<chrono::NaiveDateTime>,
    pub scores_confirmed: bool,
    pub total_strokes: i32,
    pub strokes_to_par: Option<i32>,
    pub holes_completed: i32,
    pub last_score_update: Option<chrono::NaiveDateTime>,
    pub created_at: chrono::NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_moves_to_confirmed() {
        let transition = AttestationStatus::Pending.apply(AttestDecision::Confirmed);
        assert_eq!(
            transition,
            AttestTransition::Changed(AttestationStatus::Confirmed)
        );
    }

    #[test]
    fn test_pending_moves_to_declined() {
        let transition = AttestationStatus::Pending.apply(AttestDecision::Declined);
        assert_eq!(
            transition,
            AttestTransition::Changed(AttestationStatus::Declined)
        );
    }

    #[test]
    fn test_repeated_attest_is_a_no_op() {
        let transition = AttestationStatus::Confirmed.apply(AttestDecision::Confirmed);
        assert_eq!(
            transition,
            AttestTransition::Unchanged(AttestationStatus::Confirmed)
        );
    }

    #[test]
    fn test_attest_cannot_flip_a_decided_entry() {
        let transition = AttestationStatus::Declined.apply(AttestDecision::Confirmed);
        assert_eq!(
            transition,
            AttestTransition::Unchanged(AttestationStatus::Declined)
        );

        let transition = AttestationStatus::Confirmed.apply(AttestDecision::Declined);
        assert_eq!(
            transition,
            AttestTransition::Unchanged(AttestationStatus::Confirmed)
        );
    }
}
