use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::participant::TotalsResponse;

/// One hole's figures as submitted by a writer. Range checks happen per
/// entry inside the engine so one bad hole cannot sink the rest of the
/// batch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreEntry {
    pub hole_number: i16,
    pub strokes: i16,
    pub putts: Option<i16>,
    pub fairway_hit: Option<bool>,
    pub green_in_regulation: Option<bool>,
}

/// Request payload for submitting a batch of hole scores
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitScoresRequest {
    #[validate(length(min = 1, max = 18, message = "A batch carries between 1 and 18 entries"))]
    pub entries: Vec<ScoreEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Applied,
    Rejected,
}

/// Per-entry outcome of a batch submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryOutcome {
    pub hole_number: i16,
    pub status: EntryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EntryOutcome {
    pub fn applied(hole_number: i16) -> Self {
        Self {
            hole_number,
            status: EntryStatus::Applied,
            reason: None,
        }
    }

    pub fn rejected(hole_number: i16, reason: String) -> Self {
        Self {
            hole_number,
            status: EntryStatus::Rejected,
            reason: Some(reason),
        }
    }
}

/// Response for a batch submission: one outcome per entry in input order,
/// plus the totals recomputed from whatever subset was applied
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitScoresResponse {
    pub results: Vec<EntryOutcome>,
    pub totals: TotalsResponse,
}
