//! How the percent given to the set-rate endpoint becomes a stored rate.
//!
//! The decision function treats the stored value as a fraction, while the
//! endpoint accepts a percent in `[0, 100]`. `Raw` keeps the historical
//! behavior of storing the percent unchanged (so `/errors/50` stores `50` and
//! every request fails). `Fraction` divides by 100 first.

use serde::Deserialize;

use crate::error::{ErraticError, Result};

/// Upper bound accepted for the percent path segment.
pub const MAX_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateUnit {
    #[default]
    Raw,
    Fraction,
}

impl RateUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            RateUnit::Raw => "raw",
            RateUnit::Fraction => "fraction",
        }
    }

    /// Parse a percent path segment and convert it to the rate to store.
    ///
    /// Rejects anything that is not a number in `[0, 100]` (NaN included).
    pub fn rate_from_percent(self, percent: &str) -> Result<f64> {
        let p: f64 = percent
            .parse()
            .map_err(|e| ErraticError::Parse(format!("invalid percent {percent:?}: {e}")))?;

        if !(0.0..=MAX_PERCENT).contains(&p) {
            return Err(ErraticError::Validation(format!(
                "percent {p} out of range [0, {MAX_PERCENT}]"
            )));
        }

        Ok(match self {
            RateUnit::Raw => p,
            RateUnit::Fraction => p / MAX_PERCENT,
        })
    }
}
