use chrono::{Duration, Utc};
use proptest::prelude::*;

use test_fixtures::make_evidence;
use verity_core::claim::TrustScore;
use verity_trust::{formula, TrustEngine};

proptest! {
    #[test]
    fn scores_always_clamped(value in -10.0f64..10.0) {
        let score = TrustScore::new(value);
        prop_assert!((0.0..=1.0).contains(&score.value()));
    }

    #[test]
    fn level_is_total_over_unit_interval(value in 0.0f64..=1.0) {
        // Any score classifies without panicking; the bands cover [0, 1].
        let engine = TrustEngine::new();
        let _ = engine.level_of(TrustScore::new(value));
    }

    #[test]
    fn level_is_monotone_in_score(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        // A higher score never maps to a less credible level.
        let engine = TrustEngine::new();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |s: f64| match engine.level_of(TrustScore::new(s)) {
            verity_core::claim::TrustLevel::Debunked => 0,
            verity_core::claim::TrustLevel::LikelyFalse => 1,
            verity_core::claim::TrustLevel::Uncertain => 2,
            verity_core::claim::TrustLevel::LikelyTrue => 3,
            verity_core::claim::TrustLevel::Verified => 4,
        };
        prop_assert!(rank(lo) <= rank(hi));
    }

    #[test]
    fn empty_evidence_no_op_law(value in 0.0f64..=1.0) {
        let engine = TrustEngine::new();
        let score = TrustScore::new(value);
        prop_assert_eq!(engine.update_with_evidence(score, &[]), score);
    }

    #[test]
    fn evidence_update_stays_bounded(
        current in 0.0f64..=1.0,
        credibility in 0.0f64..=1.0,
        supporting in any::<bool>(),
        count in 1usize..20,
    ) {
        let engine = TrustEngine::new();
        let now = Utc::now();
        let evidence: Vec<_> = (0..count)
            .map(|i| make_evidence("c", supporting, credibility, now - Duration::hours(i as i64)))
            .collect();
        let updated = engine.update_with_evidence(TrustScore::new(current), &evidence);
        prop_assert!((0.0..=1.0).contains(&updated.value()));
    }

    #[test]
    fn temporal_decay_never_crosses_neutral(
        current in 0.0f64..=1.0,
        days in 1i64..5000,
    ) {
        let now = Utc::now();
        let start = TrustScore::new(current);
        let decayed = formula::temporal_decay(start, now - Duration::days(days), 0.01, now);

        if current > 0.5 {
            prop_assert!(decayed.value() > 0.5);
            prop_assert!(decayed.value() <= current);
        } else if current < 0.5 {
            prop_assert!(decayed.value() < 0.5);
            prop_assert!(decayed.value() >= current);
        } else {
            prop_assert!((decayed.value() - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn temporal_decay_monotone_in_days(
        current in 0.0f64..=1.0,
        days in 1i64..1000,
    ) {
        let now = Utc::now();
        let start = TrustScore::new(current);
        let d1 = formula::temporal_decay(start, now - Duration::days(days), 0.01, now);
        let d2 = formula::temporal_decay(start, now - Duration::days(days + 1), 0.01, now);
        // More days: at least as close to neutral.
        prop_assert!((d2.value() - 0.5).abs() <= (d1.value() - 0.5).abs() + 1e-12);
    }

    #[test]
    fn boost_bounded_by_cap(n in 0usize..50, m in 0usize..50) {
        let verification: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
        let official: Vec<String> = (0..m).map(|i| format!("o{i}")).collect();
        let boost = formula::credibility_boost(&verification, &official);
        prop_assert!((0.0..=0.3).contains(&boost));
    }
}
