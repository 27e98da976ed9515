use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{AttestDecision, AttestationStatus, Participant, ScoreEntryAuthority};

/// Request payload for inviting a player onto a round
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvitePlayerRequest {
    pub player_id: Uuid,

    /// Defaults to the player entering their own scores.
    pub entry_authority: Option<ScoreEntryAuthority>,
}

/// Request payload for answering an invitation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttestRequest {
    pub decision: AttestDecision,
}

/// Aggregated scoring state as last persisted for a participant
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalsResponse {
    pub total_strokes: i32,
    pub strokes_to_par: Option<i32>,
    pub holes_completed: i32,
    pub last_score_update: Option<chrono::NaiveDateTime>,
}

impl From<&Participant> for TotalsResponse {
    fn from(participant: &Participant) -> Self {
        Self {
            total_strokes: participant.total_strokes,
            strokes_to_par: participant.strokes_to_par,
            holes_completed: participant.holes_completed,
            last_score_update: participant.last_score_update,
        }
    }
}

/// Response containing participant details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub participant_id: Uuid,
    pub round_id: Uuid,
    pub player_id: Uuid,
    pub status: AttestationStatus,
    pub entry_authority: ScoreEntryAuthority,
    pub responded_at: Option<chrono::NaiveDateTime>,
    pub scores_confirmed: bool,
    pub totals: TotalsResponse,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        let totals = TotalsResponse::from(&participant);

        Self {
            participant_id: participant.participant_id,
            round_id: participant.round_id,
            player_id: participant.player_id,
            status: participant.status,
            entry_authority: participant.entry_authority,
            responded_at: participant.responded_at,
            scores_confirmed: participant.scores_confirmed,
            totals,
            created_at: participant.created_at,
        }
    }
}
