//! Cents deviation and MIDI note naming.
//!
//! Both operations share the enharmonic correction rule: rounded MIDI
//! numbers landing on a D#, G# or A# position are bumped up one semitone,
//! reflecting how those degrees are spelled in maqam practice.

use crate::error::AnalysisError;

const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// D#, G# and A# positions across the MIDI range: three interleaved
/// sequences with common difference 12, starting at 3, 8 and 10.
fn is_enharmonic_special(midi: i64) -> bool {
    (0..=127).contains(&midi) && matches!(midi.rem_euclid(12), 3 | 8 | 10)
}

/// Rounds a real-valued MIDI number and applies the enharmonic +1 bump.
fn corrected_rounded(midi: f64) -> i64 {
    let rounded = midi.round() as i64;
    if is_enharmonic_special(rounded) {
        rounded + 1
    } else {
        rounded
    }
}

/// Cents deviation of the current pitch from the reference pitch, with
/// semitone-rounding artifacts removed.
///
/// Both MIDI numbers are rounded (and enharmonically corrected) before the
/// whole-semitone distance between them is subtracted from the current
/// cents offset, leaving only the fractional deviation:
/// `current_cents - (corrected(current) - corrected(starting)) * 100`.
///
/// `current_cents` is the textual cents offset as stored on the pitch class;
/// malformed text contributes NaN, like every other lenient text field.
pub fn cents_deviation(current_midi: f64, current_cents: &str, starting_midi: f64) -> f64 {
    let parsed_cents: f64 = current_cents.trim().parse().unwrap_or(f64::NAN);
    let semitones = corrected_rounded(current_midi) - corrected_rounded(starting_midi);
    parsed_cents - semitones as f64 * 100.0
}

/// A MIDI note number resolved to its spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MidiNoteName {
    /// Sharp spelling.
    pub note: &'static str,
    /// Flat spelling, when it differs from the sharp one.
    pub alt: Option<&'static str>,
    /// Octave by MIDI convention: 60 is C4.
    pub octave: i32,
}

/// Names a (possibly fractional) MIDI note number.
///
/// The enharmonic +1 bump applies here too, so a pitch rounding onto D#, G#
/// or A# is reported as the semitone above. Input outside 0..=127 is a
/// caller bug and fails with [`AnalysisError::MidiOutOfRange`].
pub fn midi_number_to_note_name(note_number: f64) -> Result<MidiNoteName, AnalysisError> {
    if !(0.0..=127.0).contains(&note_number) {
        return Err(AnalysisError::MidiOutOfRange(note_number));
    }

    let rounded = corrected_rounded(note_number);
    let semitone = rounded.rem_euclid(12) as usize;
    let octave = (rounded / 12) as i32 - 1;

    let note = NOTE_NAMES_SHARP[semitone];
    let alt = Some(NOTE_NAMES_FLAT[semitone]).filter(|&flat| flat != note);

    Ok(MidiNoteName { note, alt, octave })
}
