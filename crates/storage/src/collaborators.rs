//! Seams to the two neighbouring services the scorecard engine talks to.
//!
//! The engine never speaks HTTP itself; the `connectors` crate provides the
//! concrete clients and the web layer wires them in at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Participant, Round};

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Unexpected status {status} from {service} service")]
    UnexpectedStatus { service: &'static str, status: u16 },

    #[error("Malformed response from {service} service: {detail}")]
    Decode {
        service: &'static str,
        detail: String,
    },
}

/// Public profile of a player as the identity service reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: Uuid,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl PlayerProfile {
    /// Stand-in used when the identity service cannot be reached while
    /// assembling a scorecard.
    pub fn placeholder(player_id: Uuid) -> Self {
        let mut short = player_id.simple().to_string();
        short.truncate(8);

        Self {
            player_id,
            display_name: format!("player-{short}"),
            avatar_url: None,
        }
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn exists(&self, player_id: Uuid) -> Result<bool, CollaboratorError>;

    async fn describe(&self, player_id: Uuid) -> Result<PlayerProfile, CollaboratorError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorecardEventKind {
    ParticipantInvited,
    ParticipantConfirmed,
    ParticipantDeclined,
    RoundCompleted,
    RoundCancelled,
}

impl ScorecardEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScorecardEventKind::ParticipantInvited => "participant_invited",
            ScorecardEventKind::ParticipantConfirmed => "participant_confirmed",
            ScorecardEventKind::ParticipantDeclined => "participant_declined",
            ScorecardEventKind::RoundCompleted => "round_completed",
            ScorecardEventKind::RoundCancelled => "round_cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScorecardEvent {
    pub event_type: ScorecardEventKind,
    pub round_id: Uuid,
    pub organizer_id: Uuid,
    pub participant_id: Option<Uuid>,
    pub player_id: Option<Uuid>,
}

impl ScorecardEvent {
    pub fn participant_invited(round: &Round, participant: &Participant) -> Self {
        Self::for_participant(ScorecardEventKind::ParticipantInvited, round, participant)
    }

    pub fn participant_confirmed(round: &Round, participant: &Participant) -> Self {
        Self::for_participant(ScorecardEventKind::ParticipantConfirmed, round, participant)
    }

    pub fn participant_declined(round: &Round, participant: &Participant) -> Self {
        Self::for_participant(ScorecardEventKind::ParticipantDeclined, round, participant)
    }

    pub fn round_completed(round: &Round) -> Self {
        Self::for_round(ScorecardEventKind::RoundCompleted, round)
    }

    pub fn round_cancelled(round: &Round) -> Self {
        Self::for_round(ScorecardEventKind::RoundCancelled, round)
    }

    fn for_participant(kind: ScorecardEventKind, round: &Round, participant: &Participant) -> Self {
        Self {
            event_type: kind,
            round_id: round.round_id,
            organizer_id: round.organizer_id,
            participant_id: Some(participant.participant_id),
            player_id: Some(participant.player_id),
        }
    }

    fn for_round(kind: ScorecardEventKind, round: &Round) -> Self {
        Self {
            event_type: kind,
            round_id: round.round_id,
            organizer_id: round.organizer_id,
            participant_id: None,
            player_id: None,
        }
    }
}

#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn emit(&self, event: ScorecardEvent) -> Result<(), CollaboratorError>;
}

/// Notification delivery is best effort. A failed dispatch is logged and the
/// triggering operation still succeeds.
pub async fn emit_or_log(dispatcher: &dyn NotificationDispatcher, event: ScorecardEvent) {
    let kind = event.event_type;

    if let Err(error) = dispatcher.emit(event).await {
        tracing::warn!(event = kind.as_str(), %error, "notification dispatch failed");
    }
}
