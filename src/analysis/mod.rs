//! Analysis primitives over the pitch model.

pub mod cents;
pub mod detect;
pub mod extend;
pub mod note_names;
pub mod shift;
