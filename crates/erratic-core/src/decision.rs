//! Per-request fail decision.
//!
//! A request fails when a uniform sample from `0..SAMPLE_SPACE` is at or below
//! `rate * SAMPLE_SPACE`. The comparison is inclusive, so a rate of `0` still
//! fails when the sample is exactly `0` (a 1/1000 bias). Rates outside `[0, 1]`
//! are not rejected here: `rate >= 1` always fails, a negative rate never does.

use rand::Rng;

/// Size of the sample space the rate is scaled against.
pub const SAMPLE_SPACE: u32 = 1000;

/// Decide whether one request fails for the given rate and sample.
pub fn should_fail(rate: f64, sample: u32) -> bool {
    f64::from(sample) <= rate * f64::from(SAMPLE_SPACE)
}

/// Source of samples in `0..SAMPLE_SPACE`.
pub trait Sampler: Send + Sync {
    fn sample(&self) -> u32;
}

/// Uniform samples from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSampler;

impl Sampler for ThreadRngSampler {
    fn sample(&self) -> u32 {
        rand::rng().random_range(0..SAMPLE_SPACE)
    }
}

/// Always returns the same sample. Used to pin decisions in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler(pub u32);

impl Sampler for FixedSampler {
    fn sample(&self) -> u32 {
        self.0
    }
}
