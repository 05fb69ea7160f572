//! Pitch class representation and interval arithmetic.
//!
//! A `PitchClass` is one pitch of a generated tuning system: its position
//! within the single-octave degree table, its octave, and every display
//! notation of the same pitch kept in parallel as text. Exactly one pitch
//! class exists per `(index, octave)` pair in a generated set.

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

/// The notation a raw tuning-system column was written in.
///
/// Serialized spellings match the values persisted by the application layer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotationKind {
    #[serde(rename = "fraction")]
    Fraction,
    #[serde(rename = "cents")]
    Cents,
    #[serde(rename = "decimalRatio")]
    DecimalRatio,
    #[serde(rename = "stringLength")]
    StringLength,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

/// A pitch at a specific tuning-system position.
///
/// All notation fields are derived representations of the same pitch, stored
/// as text exactly as the generation pipeline formatted them. For a fixed
/// `index`, frequency doubles from one octave to the next.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PitchClass {
    pub note_name: String,
    pub english_name: String,
    pub abjad_name: String,
    pub fraction: String,
    pub cents: String,
    pub decimal_ratio: String,
    pub string_length: String,
    pub fret_division: String,
    pub frequency: String,
    pub midi_note_number: f64,
    /// Raw input token this pitch was generated from.
    pub original_value: String,
    pub original_value_type: NotationKind,
    /// Position within one octave's degree table. Negative means unset.
    pub index: i32,
    /// Octave number, 0..=3 in generated sets. Negative means unset.
    pub octave: i32,
}

/// The navigator's name for the same record.
pub type Cell = PitchClass;

impl PitchClass {
    /// The distinguished "no such pitch" sentinel: negative position, empty
    /// text fields. Returned by the boundary layer where a record must be
    /// rendered even when navigation failed.
    pub fn empty() -> Self {
        Self {
            index: -1,
            octave: -1,
            ..Self::default()
        }
    }

    /// True for the sentinel produced by [`PitchClass::empty`].
    pub fn is_empty(&self) -> bool {
        self.index < 0 && self.octave < 0
    }

    pub fn frequency_value(&self) -> f64 {
        parse_or_nan(&self.frequency)
    }

    pub fn cents_value(&self) -> f64 {
        parse_or_nan(&self.cents)
    }

    pub fn string_length_value(&self) -> f64 {
        parse_or_nan(&self.string_length)
    }

    pub fn fret_division_value(&self) -> f64 {
        parse_or_nan(&self.fret_division)
    }
}

/// Text-to-number with the lenient semantics the persisted data assumes:
/// malformed text becomes NaN, never a panic.
fn parse_or_nan(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// The interval between two pitch classes, carried in every notation at once
/// so transposition matching can compare in whichever notation the source
/// column used.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PitchClassInterval {
    /// Frequency ratio between the two pitches, reduced.
    pub fraction: String,
    pub cents: f64,
    pub decimal_ratio: f64,
    pub string_length: f64,
    pub fret_division: f64,
    /// Octave-weighted positional delta between the two pitches.
    pub index: i32,
    pub original_value: String,
    pub original_value_type: NotationKind,
}

/// Parses `"n/d"` into a reduced ratio. Denominator or numerator of zero, or
/// malformed text, yields `None`.
fn parse_fraction(text: &str) -> Option<Ratio<u64>> {
    let (num, den) = text.trim().split_once('/')?;
    let num: u64 = num.trim().parse().ok()?;
    let den: u64 = den.trim().parse().ok()?;
    if num == 0 || den == 0 {
        return None;
    }
    Some(Ratio::new(num, den))
}

/// Interval ratio from `first` to `second`, reduced: `(c/d) / (a/b)`.
fn fraction_interval(first: &str, second: &str) -> Option<Ratio<u64>> {
    let a = parse_fraction(first)?;
    let b = parse_fraction(second)?;
    Some(b / a)
}

/// Computes the interval from `first` to `second`.
///
/// Pure and total for valid pitches; malformed notation fields degrade to
/// NaN (numeric fields) or an empty fraction, matching how the rest of the
/// pipeline treats unparseable text.
pub fn calculate_interval(first: &PitchClass, second: &PitchClass) -> PitchClassInterval {
    let ratio = fraction_interval(&first.fraction, &second.fraction);
    let fraction = ratio
        .map(|r| format!("{}/{}", r.numer(), r.denom()))
        .unwrap_or_default();
    let decimal_ratio = ratio
        .map(|r| *r.numer() as f64 / *r.denom() as f64)
        .unwrap_or(f64::NAN);

    let cents = second.cents_value() - first.cents_value();
    let string_length = second.string_length_value() - first.string_length_value();
    let fret_division = second.fret_division_value() - first.fret_division_value();
    let index = second.index * second.octave - first.index * first.octave;

    let original_value_type = second.original_value_type;
    let original_value = match original_value_type {
        NotationKind::Fraction => fraction.clone(),
        NotationKind::Cents => format!("{cents:.2}"),
        NotationKind::DecimalRatio => format!("{decimal_ratio:.2}"),
        NotationKind::StringLength => format!("{string_length:.2}"),
        NotationKind::Unknown => String::new(),
    };

    PitchClassInterval {
        fraction,
        cents,
        decimal_ratio,
        string_length,
        fret_division,
        index,
        original_value,
        original_value_type,
    }
}

/// Intervals between consecutive pitch classes: `n` pitches yield `n - 1`
/// intervals, in order. Empty and single-element input yield no intervals.
pub fn pitch_class_intervals(pitch_classes: &[PitchClass]) -> Vec<PitchClassInterval> {
    pitch_classes
        .windows(2)
        .map(|pair| calculate_interval(&pair[0], &pair[1]))
        .collect()
}

/// Whether two intervals count as the same step for transposition matching.
///
/// Ratio-based notations compare reduced fractions exactly; the others
/// compare cents within `cents_tolerance`.
pub fn matching_intervals(
    first: &PitchClassInterval,
    second: &PitchClassInterval,
    cents_tolerance: f64,
) -> bool {
    match first.original_value_type {
        NotationKind::Fraction | NotationKind::DecimalRatio => first.fraction == second.fraction,
        _ => (first.cents - second.cents).abs() <= cents_tolerance,
    }
}

/// Element-wise [`matching_intervals`] over two sequences of equal length.
pub fn matching_interval_lists(
    first: &[PitchClassInterval],
    second: &[PitchClassInterval],
    cents_tolerance: f64,
) -> bool {
    first.len() == second.len()
        && first
            .iter()
            .zip(second)
            .all(|(a, b)| matching_intervals(a, b, cents_tolerance))
}
