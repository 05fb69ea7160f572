//! Error types for the analysis core.
//!
//! Only programmer errors surface here. Routine absences (an empty tuning
//! column, an out-of-range octave shift) resolve to sentinel values instead,
//! because the consuming layer has to render *something* for them.

use thiserror::Error;

/// Precondition violations raised by the analysis operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Selection extension needs at least one selected pitch class to anchor
    /// the frequency-doubling cutoff.
    #[error("cannot extend an empty pitch class selection")]
    EmptySelection,

    /// MIDI note numbers are only nameable inside the standard range.
    #[error("MIDI note number {0} is outside the valid range 0..=127")]
    MidiOutOfRange(f64),
}
