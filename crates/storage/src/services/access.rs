use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{AttestationStatus, Participant, Round, RoundStatus};

/// Every mutating operation the engine exposes, plus the scorecard read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InviteParticipant,
    Attest,
    RemoveParticipant,
    MutateScores,
    ConfirmScores,
    SetRoundStatus,
    AttachPublication,
    ViewScorecard,
}

/// What the gate sees: the round, and the roster row the action targets.
/// For `ViewScorecard` the row is the caller's own entry if they have one.
pub struct AccessContext<'a> {
    pub round: &'a Round,
    pub participant: Option<&'a Participant>,
}

/// The authorization matrix, consulted at the top of every operation.
///
/// Two writer roles exist: the organizer, and the player owning a roster
/// row. A cancelled round freezes all of its child records; only the
/// status operation itself and reads get past that freeze, and the status
/// transition rules keep a cancelled round terminal. A completed round
/// still accepts score corrections.
pub fn authorize(action: Action, caller_id: Uuid, ctx: &AccessContext<'_>) -> Result<()> {
    let round = ctx.round;

    if round.status == RoundStatus::Cancelled
        && !matches!(action, Action::ViewScorecard | Action::SetRoundStatus)
    {
        return Err(StorageError::AccessDenied(
            "round is cancelled and its records are frozen",
        ));
    }

    let is_organizer = caller_id == round.organizer_id;
    let is_own_row = ctx
        .participant
        .is_some_and(|participant| participant.player_id == caller_id);

    match action {
        Action::InviteParticipant
        | Action::RemoveParticipant
        | Action::SetRoundStatus
        | Action::AttachPublication => {
            if is_organizer {
                Ok(())
            } else {
                Err(StorageError::AccessDenied(
                    "only the round organizer may do this",
                ))
            }
        }

        Action::Attest | Action::ConfirmScores => {
            if is_own_row {
                Ok(())
            } else {
                Err(StorageError::AccessDenied(
                    "only the invited player may respond for their own entry",
                ))
            }
        }

        Action::MutateScores => {
            let Some(participant) = ctx.participant else {
                return Err(StorageError::AccessDenied(
                    "scores can only target a rostered participant",
                ));
            };

            if participant.status != AttestationStatus::Confirmed {
                return Err(StorageError::AccessDenied(
                    "participant has not confirmed playing this round",
                ));
            }

            if is_organizer || participant.player_id == caller_id {
                Ok(())
            } else {
                Err(StorageError::AccessDenied(
                    "only the organizer or the player may write these scores",
                ))
            }
        }

        Action::ViewScorecard => {
            if is_organizer || round.is_public || is_own_row {
                Ok(())
            } else {
                Err(StorageError::AccessDenied(
                    "this scorecard is not publicly visible",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoundEnvironment, ScoreEntryAuthority};

    fn round(organizer_id: Uuid, status: RoundStatus, is_public: bool) -> Round {
        let now = chrono::Utc::now().naive_utc();

        Round {
            round_id: Uuid::new_v4(),
            organizer_id,
            course_name: "Heath Nine".to_string(),
            hole_count: 9,
            environment: RoundEnvironment::Outdoor,
            par_per_hole: None,
            status,
            is_public,
            published_post_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn participant(player_id: Uuid, status: AttestationStatus) -> Participant {
        Participant {
            participant_id: Uuid::new_v4(),
            round_id: Uuid::new_v4(),
            player_id,
            status,
            entry_authority: ScoreEntryAuthority::Player,
            responded_at: None,
            scores_confirmed: false,
            total_strokes: 0,
            strokes_to_par: None,
            holes_completed: 0,
            last_score_update: None,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_only_the_organizer_manages_the_roster_and_round() {
        let organizer = Uuid::new_v4();
        let player = Uuid::new_v4();
        let r = round(organizer, RoundStatus::Active, false);
        let p = participant(player, AttestationStatus::Confirmed);

        for action in [
            Action::InviteParticipant,
            Action::RemoveParticipant,
            Action::SetRoundStatus,
            Action::AttachPublication,
        ] {
            let ctx = AccessContext {
                round: &r,
                participant: Some(&p),
            };
            assert!(authorize(action, organizer, &ctx).is_ok());
            assert!(authorize(action, player, &ctx).is_err());
            assert!(authorize(action, Uuid::new_v4(), &ctx).is_err());
        }
    }

    #[test]
    fn test_only_the_invited_player_attests_and_confirms() {
        let organizer = Uuid::new_v4();
        let player = Uuid::new_v4();
        let r = round(organizer, RoundStatus::Active, false);
        let p = participant(player, AttestationStatus::Pending);
        let ctx = AccessContext {
            round: &r,
            participant: Some(&p),
        };

        for action in [Action::Attest, Action::ConfirmScores] {
            assert!(authorize(action, player, &ctx).is_ok());
            assert!(authorize(action, organizer, &ctx).is_err());
            assert!(authorize(action, Uuid::new_v4(), &ctx).is_err());
        }
    }

    #[test]
    fn test_both_writer_roles_may_mutate_a_confirmed_card() {
        let organizer = Uuid::new_v4();
        let player = Uuid::new_v4();
        let r = round(organizer, RoundStatus::Active, false);
        let p = participant(player, AttestationStatus::Confirmed);
        let ctx = AccessContext {
            round: &r,
            participant: Some(&p),
        };

        assert!(authorize(Action::MutateScores, organizer, &ctx).is_ok());
        assert!(authorize(Action::MutateScores, player, &ctx).is_ok());
        assert!(authorize(Action::MutateScores, Uuid::new_v4(), &ctx).is_err());
    }

    #[test]
    fn test_scores_require_confirmed_attestation() {
        let organizer = Uuid::new_v4();
        let player = Uuid::new_v4();
        let r = round(organizer, RoundStatus::Active, false);

        for status in [AttestationStatus::Pending, AttestationStatus::Declined] {
            let p = participant(player, status);
            let ctx = AccessContext {
                round: &r,
                participant: Some(&p),
            };
            assert!(authorize(Action::MutateScores, organizer, &ctx).is_err());
            assert!(authorize(Action::MutateScores, player, &ctx).is_err());
        }
    }

    #[test]
    fn test_cancelled_round_freezes_child_mutation() {
        let organizer = Uuid::new_v4();
        let player = Uuid::new_v4();
        let r = round(organizer, RoundStatus::Cancelled, true);
        let p = participant(player, AttestationStatus::Confirmed);

        for action in [
            Action::InviteParticipant,
            Action::Attest,
            Action::RemoveParticipant,
            Action::MutateScores,
            Action::ConfirmScores,
            Action::AttachPublication,
        ] {
            let ctx = AccessContext {
                round: &r,
                participant: Some(&p),
            };
            assert!(authorize(action, organizer, &ctx).is_err());
            assert!(authorize(action, player, &ctx).is_err());
        }
    }

    #[test]
    fn test_cancelled_round_still_answers_status_and_reads() {
        let organizer = Uuid::new_v4();
        let r = round(organizer, RoundStatus::Cancelled, true);
        let ctx = AccessContext {
            round: &r,
            participant: None,
        };

        assert!(authorize(Action::SetRoundStatus, organizer, &ctx).is_ok());
        assert!(authorize(Action::ViewScorecard, Uuid::new_v4(), &ctx).is_ok());
    }

    #[test]
    fn test_completed_round_still_accepts_corrections() {
        let organizer = Uuid::new_v4();
        let player = Uuid::new_v4();
        let r = round(organizer, RoundStatus::Completed, false);
        let p = participant(player, AttestationStatus::Confirmed);
        let ctx = AccessContext {
            round: &r,
            participant: Some(&p),
        };

        assert!(authorize(Action::MutateScores, organizer, &ctx).is_ok());
        assert!(authorize(Action::MutateScores, player, &ctx).is_ok());
    }

    #[test]
    fn test_scorecard_visibility() {
        let organizer = Uuid::new_v4();
        let player = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let hidden = round(organizer, RoundStatus::Active, false);
        let p = participant(player, AttestationStatus::Pending);

        let ctx = AccessContext {
            round: &hidden,
            participant: None,
        };
        assert!(authorize(Action::ViewScorecard, organizer, &ctx).is_ok());
        assert!(authorize(Action::ViewScorecard, stranger, &ctx).is_err());

        let ctx = AccessContext {
            round: &hidden,
            participant: Some(&p),
        };
        assert!(authorize(Action::ViewScorecard, player, &ctx).is_ok());

        let public = round(organizer, RoundStatus::Active, true);
        let ctx = AccessContext {
            round: &public,
            participant: None,
        };
        assert!(authorize(Action::ViewScorecard, stranger, &ctx).is_ok());
    }
}
