//! Data models for the maqam analysis core.
//!
//! All entities are immutable value records; relationships between them are
//! positional (array order) or key-based (`index`/`octave` pairs), never
//! owning references.

pub mod maqam;
pub mod note_name;
pub mod pattern;
pub mod pitch_class;

// Re-export commonly used types
pub use maqam::MaqamModulations;
pub use pattern::{Pattern, PatternNote};
pub use pitch_class::{Cell, NotationKind, PitchClass, PitchClassInterval};
