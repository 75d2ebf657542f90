//! Trait scoring
//!
//! Scoring is a pure transform over caller-owned data:
//! 1. Check the response vector against the item list and the scale
//! 2. Reverse-code the items flagged `reversed`
//! 3. Average the effective scores per trait
//!
//! Means are kept at full `f64` precision; rounding is a presentation concern.

use indexmap::IndexMap;

pub mod assessment;
pub mod classify;
pub mod error;
pub mod responses;

use crate::inventory::Item;
use crate::inventory::scale::LikertScale;
use crate::inventory::traits::Trait;
use error::ScoreError;

/// Mean score per trait, in order of first appearance among the items
pub type ScoreMap = IndexMap<Trait, f64>;

/// Check that every item has exactly one in-range answer
pub fn check_responses(items: &[Item], scale: &LikertScale, responses: &[i32]) -> Result<(), ScoreError> {
    if responses.len() != items.len() {
        return Err(ScoreError::LengthMismatch {
            expected: items.len(),
            actual: responses.len(),
        });
    }

    if let Some((index, &value)) = responses.iter().enumerate().find(|(_, v)| !scale.contains(**v)) {
        return Err(ScoreError::OutOfRange {
            item: index + 1,
            value,
            min: scale.min(),
            max: scale.max,
        });
    }

    Ok(())
}

/// Average reverse-coded responses per trait
pub fn score(items: &[Item], scale: &LikertScale, responses: &[i32]) -> Result<ScoreMap, ScoreError> {
    check_responses(items, scale, responses)?;

    let mut totals: IndexMap<Trait, (i64, u32)> = IndexMap::new();
    for (item, &raw) in items.iter().zip(responses) {
        let effective = if item.reversed { scale.reverse(raw) } else { raw };
        let (sum, count) = totals.entry(item.trait_).or_insert((0, 0));
        *sum += effective as i64;
        *count += 1;
    }

    let scores = totals
        .into_iter()
        .map(|(trait_, (sum, count))| (trait_, sum as f64 / count as f64))
        .collect();

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::builtin;
    use proptest::prelude::*;

    fn seven() -> LikertScale {
        LikertScale::new(7, &[])
    }

    #[test]
    fn test_score_reverse_pair() {
        let items = vec![
            Item::new("Extraverted", Trait::Extraversion, false),
            Item::new("Reserved", Trait::Extraversion, true),
        ];
        let scores = score(&items, &seven(), &[7, 1]).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[&Trait::Extraversion], 7.0);
    }

    #[test]
    fn test_score_single_reversed_item() {
        let items = vec![Item::new("Conventional", Trait::Openness, true)];
        let scores = score(&items, &seven(), &[4]).unwrap();
        assert_eq!(scores[&Trait::Openness], 4.0);
    }

    #[test]
    fn test_score_keeps_full_precision() {
        let items = vec![
            Item::new("a", Trait::Agreeableness, false),
            Item::new("b", Trait::Agreeableness, false),
            Item::new("c", Trait::Agreeableness, false),
        ];
        let scores = score(&items, &seven(), &[5, 5, 3]).unwrap();
        assert_eq!(scores[&Trait::Agreeableness], 13.0 / 3.0);
    }

    #[test]
    fn test_score_only_averages_own_items() {
        let items = vec![
            Item::new("a", Trait::Openness, false),
            Item::new("b", Trait::Extraversion, false),
            Item::new("c", Trait::Openness, false),
        ];
        let scores = score(&items, &seven(), &[2, 7, 4]).unwrap();
        assert_eq!(scores[&Trait::Openness], 3.0);
        assert_eq!(scores[&Trait::Extraversion], 7.0);
        assert_eq!(scores.keys().copied().collect::<Vec<_>>(), vec![Trait::Openness, Trait::Extraversion]);
    }

    #[test]
    fn test_score_length_mismatch() {
        let items = vec![Item::new("a", Trait::Openness, false)];
        let err = score(&items, &seven(), &[4, 4]).unwrap_err();
        assert_eq!(err, ScoreError::LengthMismatch { expected: 1, actual: 2 });
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_score_out_of_range() {
        let items = vec![
            Item::new("a", Trait::Openness, false),
            Item::new("b", Trait::Openness, false),
        ];
        let err = score(&items, &seven(), &[4, 8]).unwrap_err();
        assert_eq!(
            err,
            ScoreError::OutOfRange {
                item: 2,
                value: 8,
                min: 1,
                max: 7
            }
        );

        assert!(score(&items, &seven(), &[0, 4]).is_err());
        assert!(score(&items, &LikertScale::new(5, &[]), &[6, 4]).is_err());
    }

    #[test]
    fn test_tipi_all_neutral() {
        let inv = builtin::get("tipi").unwrap();
        let scores = score(&inv.items, &inv.scale, &[4; 10]).unwrap();
        assert_eq!(scores.len(), 5);
        assert!(scores.values().all(|&s| s == 4.0));
    }

    #[test]
    fn test_bfi44_reverse_coding_uses_five_point_scale() {
        let inv = builtin::get("bfi-44").unwrap();
        // Agree strongly with everything: reversed items count as 1
        let scores = score(&inv.items, &inv.scale, &[5; 44]).unwrap();
        assert_eq!(scores[&Trait::Extraversion], (5.0 * 5.0 + 3.0) / 8.0);
        assert_eq!(scores[&Trait::Openness], (8.0 * 5.0 + 2.0) / 10.0);
    }

    fn tipi_responses() -> impl Strategy<Value = Vec<i32>> {
        proptest::collection::vec(1..=7i32, 10)
    }

    fn bfi_responses() -> impl Strategy<Value = Vec<i32>> {
        proptest::collection::vec(1..=5i32, 44)
    }

    proptest! {
        /// Property: every trait gets one finite mean inside the scale
        #[test]
        fn prop_tipi_scores_in_range(responses in tipi_responses()) {
            let inv = builtin::get("tipi").unwrap();
            let scores = score(&inv.items, &inv.scale, &responses).unwrap();

            prop_assert_eq!(scores.len(), inv.traits().len());
            for (_, s) in &scores {
                prop_assert!(s.is_finite());
                prop_assert!((1.0..=7.0).contains(s));
            }
        }

        #[test]
        fn prop_bfi_scores_in_range(responses in bfi_responses()) {
            let inv = builtin::get("bfi-44").unwrap();
            let scores = score(&inv.items, &inv.scale, &responses).unwrap();

            prop_assert_eq!(scores.len(), 5);
            for (_, s) in &scores {
                prop_assert!((1.0..=5.0).contains(s));
            }
        }

        /// Property: scoring is deterministic down to the bit
        #[test]
        fn prop_score_is_idempotent(responses in tipi_responses()) {
            let inv = builtin::get("tipi").unwrap();
            let first = score(&inv.items, &inv.scale, &responses).unwrap();
            let second = score(&inv.items, &inv.scale, &responses).unwrap();

            prop_assert_eq!(first.len(), second.len());
            for ((t1, a), (t2, b)) in first.iter().zip(second.iter()) {
                prop_assert_eq!(t1, t2);
                prop_assert_eq!(a.to_bits(), b.to_bits());
            }
        }

        /// Property: out-of-range answers are rejected, never clamped
        #[test]
        fn prop_out_of_range_rejected(bad in prop_oneof![-100..=0i32, 8..=100i32], index in 0usize..10) {
            let inv = builtin::get("tipi").unwrap();
            let mut responses = vec![4; 10];
            responses[index] = bad;

            let err = score(&inv.items, &inv.scale, &responses).unwrap_err();
            prop_assert!(err.is_invalid_input());
        }
    }
}
