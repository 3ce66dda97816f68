#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use erratic_core::error::ErrorKind;
use erratic_core::RateUnit;

#[test]
fn raw_stores_percent_unchanged() {
    assert_eq!(RateUnit::Raw.rate_from_percent("50").unwrap(), 50.0);
    assert_eq!(RateUnit::Raw.rate_from_percent("0").unwrap(), 0.0);
    assert_eq!(RateUnit::Raw.rate_from_percent("100").unwrap(), 100.0);
    assert_eq!(RateUnit::Raw.rate_from_percent("0.5").unwrap(), 0.5);
}

#[test]
fn fraction_divides_by_hundred() {
    assert_eq!(RateUnit::Fraction.rate_from_percent("50").unwrap(), 0.5);
    assert_eq!(RateUnit::Fraction.rate_from_percent("100").unwrap(), 1.0);
}

#[test]
fn rejects_non_numeric() {
    for bad in ["abc", "", "5%", "1,5"] {
        let err = RateUnit::Raw.rate_from_percent(bad).expect_err(bad);
        assert_eq!(err.kind(), ErrorKind::Parse, "{bad}");
    }
}

#[test]
fn rejects_out_of_range_and_nan() {
    for bad in ["-1", "100.01", "1e3", "NaN", "inf"] {
        let err = RateUnit::Fraction.rate_from_percent(bad).expect_err(bad);
        assert_eq!(err.kind(), ErrorKind::Validation, "{bad}");
    }
}
