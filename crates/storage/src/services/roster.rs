use sqlx::PgPool;
use uuid::Uuid;

use crate::collaborators::{IdentityProvider, NotificationDispatcher, ScorecardEvent, emit_or_log};
use crate::dto::participant::InvitePlayerRequest;
use crate::error::{Result, StorageError};
use crate::models::{
    AttestDecision, AttestTransition, AttestationStatus, Participant, ScoreEntryAuthority,
};
use crate::repository::participant::ParticipantRepository;
use crate::repository::round::RoundRepository;
use crate::services::access::{self, AccessContext, Action};

/// Put a player on the roster with a pending invitation. The player must
/// be known to the identity service; a player can only appear once per
/// round.
pub async fn invite_player(
    pool: &PgPool,
    identity: &dyn IdentityProvider,
    notifier: &dyn NotificationDispatcher,
    round_id: Uuid,
    caller_id: Uuid,
    req: &InvitePlayerRequest,
) -> Result<Participant> {
    let round = RoundRepository::new(pool).find_by_id(round_id).await?;

    access::authorize(
        Action::InviteParticipant,
        caller_id,
        &AccessContext {
            round: &round,
            participant: None,
        },
    )?;

    if !identity.exists(req.player_id).await? {
        return Err(StorageError::Validation(format!(
            "player {} does not exist",
            req.player_id
        )));
    }

    let entry_authority = req.entry_authority.unwrap_or(ScoreEntryAuthority::Player);
    let participant = ParticipantRepository::new(pool)
        .insert(round_id, req.player_id, entry_authority)
        .await?;

    emit_or_log(notifier, ScorecardEvent::participant_invited(&round, &participant)).await;

    Ok(participant)
}

/// Record the invitee's decision. Confirmed and declined are terminal;
/// repeating the call reports the current state without emitting another
/// event, and two racing calls record exactly one transition.
pub async fn attest(
    pool: &PgPool,
    notifier: &dyn NotificationDispatcher,
    participant_id: Uuid,
    caller_id: Uuid,
    decision: AttestDecision,
) -> Result<Participant> {
    let participants = ParticipantRepository::new(pool);
    let participant = participants.find_by_id(participant_id).await?;
    let round = RoundRepository::new(pool)
        .find_by_id(participant.round_id)
        .await?;

    access::authorize(
        Action::Attest,
        caller_id,
        &AccessContext {
            round: &round,
            participant: Some(&participant),
        },
    )?;

    match participant.status.apply(decision) {
        AttestTransition::Unchanged(_) => Ok(participant),
        AttestTransition::Changed(next) => {
            match participants.set_attestation(participant_id, next).await? {
                Some(updated) => {
                    let event = match updated.status {
                        AttestationStatus::Declined => {
                            ScorecardEvent::participant_declined(&round, &updated)
                        }
                        _ => ScorecardEvent::participant_confirmed(&round, &updated),
                    };
                    emit_or_log(notifier, event).await;

                    Ok(updated)
                }
                // Lost a race against another attest call; report whatever
                // that call recorded.
                None => participants.find_by_id(participant_id).await,
            }
        }
    }
}

/// One-way acknowledgement that the player has reviewed scores entered on
/// their behalf. Requires a confirmed attestation; repeating it is a
/// no-op. It never blocks later corrections.
pub async fn confirm_scores(
    pool: &PgPool,
    participant_id: Uuid,
    caller_id: Uuid,
) -> Result<Participant> {
    let participants = ParticipantRepository::new(pool);
    let participant = participants.find_by_id(participant_id).await?;
    let round = RoundRepository::new(pool)
        .find_by_id(participant.round_id)
        .await?;

    access::authorize(
        Action::ConfirmScores,
        caller_id,
        &AccessContext {
            round: &round,
            participant: Some(&participant),
        },
    )?;

    if participant.status != AttestationStatus::Confirmed {
        return Err(StorageError::Validation(
            "scores can only be confirmed after attesting to the round".to_string(),
        ));
    }

    if participant.scores_confirmed {
        return Ok(participant);
    }

    participants.set_scores_confirmed(participant_id).await
}

/// Drop a participant and their ledger rows. Removing someone who is
/// already gone succeeds quietly.
pub async fn remove_participant(
    pool: &PgPool,
    participant_id: Uuid,
    caller_id: Uuid,
) -> Result<()> {
    let participants = ParticipantRepository::new(pool);

    let participant = match participants.find_by_id(participant_id).await {
        Ok(participant) => participant,
        Err(StorageError::NotFound) => return Ok(()),
        Err(e) => return Err(e),
    };

    let round = RoundRepository::new(pool)
        .find_by_id(participant.round_id)
        .await?;

    access::authorize(
        Action::RemoveParticipant,
        caller_id,
        &AccessContext {
            round: &round,
            participant: Some(&participant),
        },
    )?;

    participants.delete(participant_id).await?;

    Ok(())
}
