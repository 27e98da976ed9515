use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::score::{EntryOutcome, ScoreEntry};
use crate::error::Result;
use crate::models::{Participant, Round, RoundEnvironment};
use crate::repository::participant::ParticipantRepository;
use crate::repository::round::RoundRepository;
use crate::repository::score::ScoreRepository;
use crate::services::access::{self, AccessContext, Action};
use crate::services::totals;

const MAX_STROKES: i16 = 15;

/// What a batch submission hands back: one outcome per entry in input
/// order, and the participant row carrying the recomputed totals.
#[derive(Debug)]
pub struct BatchOutcome {
    pub results: Vec<EntryOutcome>,
    pub participant: Participant,
}

/// Apply a batch of hole entries for one participant.
///
/// Everything happens in one transaction with the roster row locked, so
/// the organizer and the player can write at the same time without losing
/// each other's updates. Entries are validated and upserted independently;
/// a bad hole is reported in the result list and the rest still land.
/// Totals are recomputed from the full ledger before the commit, making
/// the whole write-and-recompute visible atomically.
pub async fn submit_scores(
    pool: &PgPool,
    participant_id: Uuid,
    origin_id: Uuid,
    entries: &[ScoreEntry],
) -> Result<BatchOutcome> {
    let mut tx = pool.begin().await?;

    let participant = ParticipantRepository::find_for_update(&mut tx, participant_id).await?;
    let round = RoundRepository::find_by_id_in(&mut tx, participant.round_id).await?;

    access::authorize(
        Action::MutateScores,
        origin_id,
        &AccessContext {
            round: &round,
            participant: Some(&participant),
        },
    )?;

    let mut results = Vec::with_capacity(entries.len());
    let mut applied_any = false;

    for entry in entries {
        match validate_entry(&round, entry) {
            Ok(()) => {
                ScoreRepository::upsert(&mut tx, participant_id, entry, origin_id).await?;
                applied_any = true;
                results.push(EntryOutcome::applied(entry.hole_number));
            }
            Err(reason) => results.push(EntryOutcome::rejected(entry.hole_number, reason)),
        }
    }

    let participant = if applied_any {
        totals::recompute_and_store(&mut tx, participant_id, round.par_per_hole).await?
    } else {
        participant
    };

    tx.commit().await?;

    Ok(BatchOutcome {
        results,
        participant,
    })
}

/// Remove one hole from the card and recompute, atomically. Deleting a
/// hole that was never entered is NotFound; nothing is written in that
/// case.
pub async fn delete_score(
    pool: &PgPool,
    participant_id: Uuid,
    caller_id: Uuid,
    hole_number: i16,
) -> Result<Participant> {
    let mut tx = pool.begin().await?;

    let participant = ParticipantRepository::find_for_update(&mut tx, participant_id).await?;
    let round = RoundRepository::find_by_id_in(&mut tx, participant.round_id).await?;

    access::authorize(
        Action::MutateScores,
        caller_id,
        &AccessContext {
            round: &round,
            participant: Some(&participant),
        },
    )?;

    ScoreRepository::delete(&mut tx, participant_id, hole_number).await?;

    let participant =
        totals::recompute_and_store(&mut tx, participant_id, round.par_per_hole).await?;

    tx.commit().await?;

    Ok(participant)
}

fn validate_entry(round: &Round, entry: &ScoreEntry) -> std::result::Result<(), String> {
    if entry.hole_number < 1 || entry.hole_number > round.hole_count {
        return Err(format!(
            "hole {} is out of range for a {} hole round",
            entry.hole_number, round.hole_count
        ));
    }

    if entry.strokes < 1 || entry.strokes > MAX_STROKES {
        return Err(format!(
            "strokes must be between 1 and {MAX_STROKES}, got {}",
            entry.strokes
        ));
    }

    if let Some(putts) = entry.putts
        && (putts < 0 || putts > entry.strokes)
    {
        return Err(format!(
            "putts must be between 0 and the {} strokes taken, got {putts}",
            entry.strokes
        ));
    }

    if entry.fairway_hit.is_some() && round.environment == RoundEnvironment::Indoor {
        return Err("fairway tracking does not apply to an indoor round".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{HoleScore, RoundStatus};
    use crate::services::totals::compute_totals;

    fn round(hole_count: i16, environment: RoundEnvironment) -> Round {
        let now = chrono::Utc::now().naive_utc();

        Round {
            round_id: Uuid::new_v4(),
            organizer_id: Uuid::new_v4(),
            course_name: "Westway Par 3".to_string(),
            hole_count,
            environment,
            par_per_hole: Some(Decimal::from(4)),
            status: RoundStatus::Active,
            is_public: false,
            published_post_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn entry(hole_number: i16, strokes: i16) -> ScoreEntry {
        ScoreEntry {
            hole_number,
            strokes,
            putts: None,
            fairway_hit: None,
            green_in_regulation: None,
        }
    }

    #[test]
    fn test_accepts_a_plain_entry() {
        assert!(validate_entry(&round(9, RoundEnvironment::Outdoor), &entry(1, 4)).is_ok());
    }

    #[test]
    fn test_rejects_hole_outside_the_round() {
        let r = round(9, RoundEnvironment::Outdoor);

        assert!(validate_entry(&r, &entry(0, 4)).is_err());
        assert!(validate_entry(&r, &entry(10, 4)).is_err());
    }

    #[test]
    fn test_rejects_strokes_out_of_range() {
        let r = round(9, RoundEnvironment::Outdoor);

        assert!(validate_entry(&r, &entry(1, 0)).is_err());
        assert!(validate_entry(&r, &entry(1, 16)).is_err());
        assert!(validate_entry(&r, &entry(1, 15)).is_ok());
    }

    #[test]
    fn test_putts_are_bounded_by_strokes() {
        let r = round(9, RoundEnvironment::Outdoor);

        let mut e = entry(3, 4);
        e.putts = Some(5);
        assert!(validate_entry(&r, &e).is_err());

        e.putts = Some(4);
        assert!(validate_entry(&r, &e).is_ok());

        e.putts = Some(0);
        assert!(validate_entry(&r, &e).is_ok());
    }

    #[test]
    fn test_fairway_flag_is_outdoor_only() {
        let mut e = entry(1, 4);
        e.fairway_hit = Some(true);

        assert!(validate_entry(&round(9, RoundEnvironment::Outdoor), &e).is_ok());
        assert!(validate_entry(&round(9, RoundEnvironment::Indoor), &e).is_err());
    }

    #[test]
    fn test_green_in_regulation_applies_anywhere() {
        let mut e = entry(1, 4);
        e.green_in_regulation = Some(true);

        assert!(validate_entry(&round(9, RoundEnvironment::Indoor), &e).is_ok());
    }

    // The ledger is keyed on (participant, hole); replaying a batch against
    // a map with the same key reproduces the persistence semantics closely
    // enough to check the partial-failure contract.
    #[test]
    fn test_mixed_batch_applies_the_valid_subset() {
        let r = round(9, RoundEnvironment::Outdoor);
        let batch = vec![entry(1, 4), entry(12, 5), entry(2, 0), entry(3, 6)];

        let mut ledger: BTreeMap<i16, i16> = BTreeMap::new();
        let mut outcomes = Vec::new();

        for e in &batch {
            match validate_entry(&r, e) {
                Ok(()) => {
                    ledger.insert(e.hole_number, e.strokes);
                    outcomes.push(EntryOutcome::applied(e.hole_number));
                }
                Err(reason) => outcomes.push(EntryOutcome::rejected(e.hole_number, reason)),
            }
        }

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[1].reason.is_some());
        assert!(outcomes[2].reason.is_some());

        let scores: Vec<HoleScore> = ledger
            .iter()
            .map(|(hole, strokes)| sample_score(*hole, *strokes))
            .collect();
        let totals = compute_totals(&scores, r.par_per_hole);

        assert_eq!(totals.holes_completed, 2);
        assert_eq!(totals.total_strokes, 10);
        assert_eq!(totals.strokes_to_par, Some(2));
    }

    #[test]
    fn test_resubmitting_the_same_batch_is_stable() {
        let r = round(9, RoundEnvironment::Outdoor);
        let batch = vec![entry(1, 4), entry(2, 5)];

        let mut ledger: BTreeMap<i16, i16> = BTreeMap::new();

        for _ in 0..2 {
            for e in &batch {
                assert!(validate_entry(&r, e).is_ok());
                ledger.insert(e.hole_number, e.strokes);
            }
        }

        let scores: Vec<HoleScore> = ledger
            .iter()
            .map(|(hole, strokes)| sample_score(*hole, *strokes))
            .collect();
        let totals = compute_totals(&scores, r.par_per_hole);

        assert_eq!(totals.holes_completed, 2);
        assert_eq!(totals.total_strokes, 9);
    }

    fn sample_score(hole_number: i16, strokes: i16) -> HoleScore {
        let now = chrono::Utc::now().naive_utc();

        HoleScore {
            score_id: Uuid::new_v4(),
            participant_id: Uuid::new_v4(),
            hole_number,
            strokes,
            putts: None,
            fairway_hit: None,
            green_in_regulation: None,
            entered_by: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }
}
