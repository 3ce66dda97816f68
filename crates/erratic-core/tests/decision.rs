#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use erratic_core::decision::{should_fail, FixedSampler, Sampler, ThreadRngSampler, SAMPLE_SPACE};

#[test]
fn boundary_is_inclusive() {
    // 0.25 * 1000 = 250
    assert!(should_fail(0.25, 250));
    assert!(!should_fail(0.25, 251));
    assert!(should_fail(0.25, 0));
}

#[test]
fn zero_rate_only_fails_at_sample_zero() {
    assert!(should_fail(0.0, 0));
    for s in 1..SAMPLE_SPACE {
        assert!(!should_fail(0.0, s), "sample {s}");
    }
}

#[test]
fn rate_of_one_or_more_always_fails() {
    for s in 0..SAMPLE_SPACE {
        assert!(should_fail(1.0, s));
        assert!(should_fail(100.0, s));
    }
}

#[test]
fn negative_rate_never_fails() {
    for s in 0..SAMPLE_SPACE {
        assert!(!should_fail(-0.5, s));
    }
}

#[test]
fn thread_rng_sampler_stays_in_range() {
    let sampler = ThreadRngSampler;
    for _ in 0..10_000 {
        assert!(sampler.sample() < SAMPLE_SPACE);
    }
}

#[test]
fn fixed_sampler_is_fixed() {
    let sampler = FixedSampler(7);
    assert_eq!(sampler.sample(), 7);
    assert_eq!(sampler.sample(), 7);
}
