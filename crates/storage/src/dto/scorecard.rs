use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::participant::TotalsResponse;
use super::round::RoundResponse;
use crate::collaborators::PlayerProfile;
use crate::models::{AttestationStatus, HoleScore, Participant, ScoreEntryAuthority};

/// One ledger row as rendered on the card
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HoleScoreResponse {
    pub hole_number: i16,
    pub strokes: i16,
    pub putts: Option<i16>,
    pub fairway_hit: Option<bool>,
    pub green_in_regulation: Option<bool>,
    pub entered_by: Uuid,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<HoleScore> for HoleScoreResponse {
    fn from(score: HoleScore) -> Self {
        Self {
            hole_number: score.hole_number,
            strokes: score.strokes,
            putts: score.putts,
            fairway_hit: score.fairway_hit,
            green_in_regulation: score.green_in_regulation,
            entered_by: score.entered_by,
            updated_at: score.updated_at,
        }
    }
}

/// One participant's column on the scorecard: identity, attestation state,
/// persisted totals and the per-hole rows behind them
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantCard {
    pub participant_id: Uuid,
    pub player_id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub status: AttestationStatus,
    pub entry_authority: ScoreEntryAuthority,
    pub scores_confirmed: bool,
    pub totals: TotalsResponse,
    pub scores: Vec<HoleScoreResponse>,
}

impl ParticipantCard {
    pub fn assemble(
        participant: Participant,
        profile: PlayerProfile,
        scores: Vec<HoleScore>,
    ) -> Self {
        let totals = TotalsResponse::from(&participant);

        Self {
            participant_id: participant.participant_id,
            player_id: participant.player_id,
            display_name: profile.display_name,
            avatar_url: profile.avatar_url,
            status: participant.status,
            entry_authority: participant.entry_authority,
            scores_confirmed: participant.scores_confirmed,
            totals,
            scores: scores.into_iter().map(HoleScoreResponse::from).collect(),
        }
    }
}

/// The composite read view other subsystems consume. Totals are reported
/// exactly as persisted; this view never recomputes them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScorecardResponse {
    pub round: RoundResponse,
    pub participants: Vec<ParticipantCard>,
}
