//! Analysis core for Arabic maqam tuning systems.
//!
//! Models pitch classes across four octaves and the notations that describe
//! them (fraction ratio, cents, decimal ratio, string length, frequency,
//! MIDI number, transliterated note names), and provides the analysis
//! primitives built on that model: interval computation, notation detection,
//! octave-aware note naming, selection extension, octave navigation,
//! cents-deviation measurement, modulation hop counting, and the melodic
//! pattern model.
//!
//! Everything here is a pure function over immutable inputs. Persistence,
//! transport, playback and rendering live in the consuming application.

pub mod analysis;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use analysis::cents::{cents_deviation, midi_number_to_note_name, MidiNoteName};
pub use analysis::detect::classify_value_type;
pub use analysis::extend::extend_selection;
pub use analysis::note_names::{first_note_name, note_names_in_tuning_system, NONE_NOTE_NAME};
pub use analysis::shift::shift_cell;
pub use error::AnalysisError;
pub use models::maqam::MaqamModulations;
pub use models::pattern::{reverse_pattern_notes, NoteDuration, Pattern, PatternNote, ScaleDegree};
pub use models::pitch_class::{
    calculate_interval, matching_interval_lists, matching_intervals, pitch_class_intervals, Cell,
    NotationKind, PitchClass, PitchClassInterval,
};
