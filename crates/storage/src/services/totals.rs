use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{HoleScore, Participant};
use crate::repository::participant::ParticipantRepository;
use crate::repository::score::ScoreRepository;

/// Output of one aggregation pass over a participant's ledger rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantTotals {
    pub total_strokes: i32,
    pub strokes_to_par: Option<i32>,
    pub holes_completed: i32,
}

/// Full recompute from the ledger rows, never incremental. Whatever order
/// writes arrived in, the output depends only on the rows that exist now.
///
/// A participant with no rows has no relative score: reporting zero would
/// read as "even par" instead of "nothing entered yet".
pub fn compute_totals(scores: &[HoleScore], par_per_hole: Option<Decimal>) -> ParticipantTotals {
    let holes_completed = scores.len() as i32;
    let total_strokes: i32 = scores.iter().map(|s| i32::from(s.strokes)).sum();

    let strokes_to_par = match par_per_hole {
        Some(par) if holes_completed > 0 => {
            Some(total_strokes - prorated_par(par, holes_completed, total_strokes))
        }
        _ => None,
    };

    ParticipantTotals {
        total_strokes,
        strokes_to_par,
        holes_completed,
    }
}

/// Par scaled down to the holes actually completed, rounded to the nearest
/// integer. When the scaled par lands exactly half way, the neighbour
/// closer to the actual total wins, so the reported deviation is the
/// smaller of the two readings.
fn prorated_par(par_per_hole: Decimal, holes_completed: i32, total_strokes: i32) -> i32 {
    let exact = par_per_hole * Decimal::from(holes_completed);
    let floor = exact.floor();
    let lower = floor.to_i32().unwrap_or(0);

    if exact - floor == Decimal::new(5, 1) {
        let upper = lower + 1;
        if (total_strokes - lower).abs() <= (total_strokes - upper).abs() {
            lower
        } else {
            upper
        }
    } else {
        exact.round().to_i32().unwrap_or(lower)
    }
}

/// Re-derive a participant's totals from their current ledger rows and
/// persist them, inside the caller's transaction. Runs after every ledger
/// write or delete; there is no other path that touches the derived
/// columns.
pub async fn recompute_and_store(
    conn: &mut PgConnection,
    participant_id: Uuid,
    par_per_hole: Option<Decimal>,
) -> Result<Participant> {
    let scores = ScoreRepository::list_for_participant(&mut *conn, participant_id).await?;
    let totals = compute_totals(&scores, par_per_hole);

    ParticipantRepository::store_totals(&mut *conn, participant_id, &totals).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(hole_number: i16, strokes: i16) -> HoleScore {
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

    fn card(strokes: &[i16]) -> Vec<HoleScore> {
        strokes
            .iter()
            .enumerate()
            .map(|(i, s)| score(i as i16 + 1, *s))
            .collect()
    }

    #[test]
    fn test_empty_ledger_has_no_relative_score() {
        let totals = compute_totals(&[], Some(Decimal::from(4)));

        assert_eq!(
            totals,
            ParticipantTotals {
                total_strokes: 0,
                strokes_to_par: None,
                holes_completed: 0,
            }
        );
    }

    #[test]
    fn test_no_configured_par_means_no_relative_score() {
        let totals = compute_totals(&card(&[4, 5, 3]), None);

        assert_eq!(totals.total_strokes, 12);
        assert_eq!(totals.holes_completed, 3);
        assert_eq!(totals.strokes_to_par, None);
    }

    #[test]
    fn test_partial_round_is_compared_against_prorated_par() {
        // 9 of 18 holes at par 4: prorated par is 36, not the full 72.
        let scores = card(&[4, 5, 4, 4, 5, 4, 4, 4, 4]);
        let totals = compute_totals(&scores, Some(Decimal::from(4)));

        assert_eq!(totals.total_strokes, 38);
        assert_eq!(totals.holes_completed, 9);
        assert_eq!(totals.strokes_to_par, Some(2));
    }

    #[test]
    fn test_running_totals_across_a_growing_card() {
        let par = Some(Decimal::from(4));

        let first_five = card(&[4, 5, 3, 4, 6]);
        let totals = compute_totals(&first_five, par);
        assert_eq!(totals.total_strokes, 22);
        assert_eq!(totals.holes_completed, 5);
        assert_eq!(totals.strokes_to_par, Some(2));

        let mut with_sixth = first_five;
        with_sixth.push(score(6, 5));
        let totals = compute_totals(&with_sixth, par);
        assert_eq!(totals.total_strokes, 27);
        assert_eq!(totals.holes_completed, 6);
        assert_eq!(totals.strokes_to_par, Some(3));
    }

    #[test]
    fn test_deleted_row_reduces_completion_count() {
        let par = Some(Decimal::from(4));
        let mut scores = card(&[4, 5, 3]);

        assert_eq!(compute_totals(&scores, par).holes_completed, 3);

        scores.remove(1);
        let totals = compute_totals(&scores, par);
        assert_eq!(totals.holes_completed, 2);
        assert_eq!(totals.total_strokes, 7);
        assert_eq!(totals.strokes_to_par, Some(-1));
    }

    #[test]
    fn test_fractional_par_rounds_to_nearest() {
        // 4.3 over three holes is 12.9, rounded to 13.
        let scores = card(&[4, 4, 4]);
        let totals = compute_totals(&scores, Some(Decimal::new(43, 1)));

        assert_eq!(totals.strokes_to_par, Some(-1));
    }

    #[test]
    fn test_half_way_par_rounds_toward_the_actual_total() {
        // One hole at par 4.5: candidates are 4 and 5.
        let high = compute_totals(&card(&[7]), Some(Decimal::new(45, 1)));
        assert_eq!(high.strokes_to_par, Some(2));

        let low = compute_totals(&card(&[2]), Some(Decimal::new(45, 1)));
        assert_eq!(low.strokes_to_par, Some(-2));
    }

    #[test]
    fn test_full_round_matches_unprorated_par() {
        let scores = card(&[4, 4, 4, 4, 4, 4, 4, 4, 4]);
        let totals = compute_totals(&scores, Some(Decimal::from(4)));

        assert_eq!(totals.total_strokes, 36);
        assert_eq!(totals.strokes_to_par, Some(0));
    }
}
