use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::collaborators::{IdentityProvider, PlayerProfile};
use crate::dto::round::RoundResponse;
use crate::dto::scorecard::{ParticipantCard, ScorecardResponse};
use crate::error::Result;
use crate::models::HoleScore;
use crate::repository::participant::ParticipantRepository;
use crate::repository::round::RoundRepository;
use crate::repository::score::ScoreRepository;
use crate::services::access::{self, AccessContext, Action};

/// Assemble the scorecard view: round, roster, per-hole rows and the
/// totals exactly as last persisted. This is a pure read; it never
/// recomputes.
///
/// Identity lookups are display-only, so an unreachable identity service
/// degrades to placeholder names instead of failing the read.
pub async fn get_scorecard(
    pool: &PgPool,
    identity: &dyn IdentityProvider,
    round_id: Uuid,
    caller_id: Uuid,
) -> Result<ScorecardResponse> {
    let round = RoundRepository::new(pool).find_by_id(round_id).await?;

    let participants_repo = ParticipantRepository::new(pool);
    let caller_entry = participants_repo
        .find_by_round_and_player(round_id, caller_id)
        .await?;

    access::authorize(
        Action::ViewScorecard,
        caller_id,
        &AccessContext {
            round: &round,
            participant: caller_entry.as_ref(),
        },
    )?;

    let participants = participants_repo.list_for_round(round_id).await?;
    let all_scores = ScoreRepository::new(pool).list_for_round(round_id).await?;

    let mut scores_by_participant: HashMap<Uuid, Vec<HoleScore>> = HashMap::new();
    for score in all_scores {
        scores_by_participant
            .entry(score.participant_id)
            .or_default()
            .push(score);
    }

    let mut cards = Vec::with_capacity(participants.len());

    for participant in participants {
        let profile = match identity.describe(participant.player_id).await {
            Ok(profile) => profile,
            Err(error) => {
                tracing::warn!(
                    player_id = %participant.player_id,
                    %error,
                    "identity lookup failed, rendering placeholder"
                );
                PlayerProfile::placeholder(participant.player_id)
            }
        };

        let scores = scores_by_participant
            .remove(&participant.participant_id)
            .unwrap_or_default();

        cards.push(ParticipantCard::assemble(participant, profile, scores));
    }

    Ok(ScorecardResponse {
        round: RoundResponse::from(round),
        participants: cards,
    })
}
