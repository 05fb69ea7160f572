//! Notation detection for raw tuning-system columns.
//!
//! Import workflows receive a column of value strings without an explicit
//! format marker; this module decides which notation the column is written
//! in. Detection order matters and is part of the contract: fraction pattern
//! first, then cents, decimal ratio and string length by range and
//! monotonicity.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::pitch_class::NotationKind;

lazy_static! {
    // Positive integer, "/" or ":" separator, positive integer. No signs,
    // no leading zeros.
    static ref FRACTION_PATTERN: Regex = Regex::new(r"^[1-9]\d*[/:][1-9]\d*$").unwrap();
}

/// Classifies a raw column of tuning-system values.
///
/// First match wins:
/// 1. every token matches the strict fraction pattern -> `Fraction`
/// 2. any token fails numeric parsing -> `Unknown`
/// 3. non-strictly ascending, all in `[0, 1200)` -> `Cents`
/// 4. non-strictly ascending, all in `[1.0, 2.0)` -> `DecimalRatio`
/// 5. non-strictly descending -> `StringLength`
/// 6. otherwise `Unknown`
///
/// A constant sequence is both ascending and descending, so a single token
/// classifies by the same cents -> decimal -> string-length priority.
pub fn classify_value_type<S: AsRef<str>>(values: &[S]) -> NotationKind {
    let cleaned: Vec<&str> = values
        .iter()
        .map(|v| v.as_ref().trim())
        .filter(|v| !v.is_empty())
        .collect();
    if cleaned.is_empty() {
        return NotationKind::Unknown;
    }

    if cleaned.iter().all(|v| FRACTION_PATTERN.is_match(v)) {
        return NotationKind::Fraction;
    }

    let mut numeric = Vec::with_capacity(cleaned.len());
    for value in &cleaned {
        match value.parse::<f64>() {
            Ok(n) => numeric.push(n),
            Err(_) => {
                log::debug!("unparseable tuning value {value:?}, column is unclassifiable");
                return NotationKind::Unknown;
            }
        }
    }

    let ascending = numeric.windows(2).all(|w| w[1] >= w[0]);
    let descending = numeric.windows(2).all(|w| w[1] <= w[0]);

    if ascending && numeric.iter().all(|&n| (0.0..1200.0).contains(&n)) {
        return NotationKind::Cents;
    }
    // The decimal range sits inside the cents range, so with the checks in
    // this order an ascending decimal column already matched above. The arm
    // stays to keep the priority chain explicit.
    if ascending && numeric.iter().all(|&n| (1.0..2.0).contains(&n)) {
        return NotationKind::DecimalRatio;
    }
    if descending {
        return NotationKind::StringLength;
    }

    NotationKind::Unknown
}
