//! Octave-aware note-name resolution.
//!
//! Degree indices carry a dual meaning: below the single-octave table length
//! they address the current octave's table directly; at or above it they wrap
//! into the next octave's table. The split is computed once into
//! [`DegreeAddress`] so resolution never re-derives it.

use crate::models::note_name::{note_name_at, OCTAVE_ONE_NOTE_NAMES};

/// Rendered stand-in for a missing or unresolvable note name.
pub const NONE_NOTE_NAME: &str = "none";

/// A degree index with its octave addressing resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DegreeAddress {
    /// Addresses the table of the octave being resolved.
    Local(usize),
    /// Addresses the table one octave up, after subtracting the base table
    /// length.
    Wrapped(usize),
    /// Negative input; never resolves.
    Invalid,
}

impl DegreeAddress {
    fn from_index(index: i32) -> Self {
        let base_len = OCTAVE_ONE_NOTE_NAMES.len() as i32;
        if index < 0 {
            Self::Invalid
        } else if index < base_len {
            Self::Local(index as usize)
        } else {
            Self::Wrapped((index - base_len) as usize)
        }
    }

    fn resolve(self, octave: usize) -> Option<&'static str> {
        match self {
            Self::Local(index) => note_name_at(octave, index),
            Self::Wrapped(index) => note_name_at(octave + 1, index),
            Self::Invalid => None,
        }
    }
}

/// Octave-one note name at the first selected degree index.
///
/// Resolves to [`NONE_NOTE_NAME`] for an empty selection, a negative index,
/// or an index past the table.
pub fn first_note_name(selected_indices: &[i32]) -> &'static str {
    selected_indices
        .first()
        .filter(|&&index| index >= 0)
        .and_then(|&index| OCTAVE_ONE_NOTE_NAMES.get(index as usize).copied())
        .unwrap_or(NONE_NOTE_NAME)
}

/// Resolves every requested degree index in each of the four octaves.
///
/// Output order is octave-major: for octave 0 through 3, each index in input
/// order, giving `4 * indices.len()` entries. Unresolvable positions yield
/// [`NONE_NOTE_NAME`].
pub fn note_names_in_tuning_system(indices: &[i32]) -> Vec<&'static str> {
    let addresses: Vec<DegreeAddress> = indices
        .iter()
        .map(|&index| DegreeAddress::from_index(index))
        .collect();

    let mut names = Vec::with_capacity(4 * addresses.len());
    for octave in 0..4 {
        for address in &addresses {
            names.push(address.resolve(octave).unwrap_or(NONE_NOTE_NAME));
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_note_name_sentinels() {
        assert_eq!(first_note_name(&[]), NONE_NOTE_NAME);
        assert_eq!(first_note_name(&[-1]), NONE_NOTE_NAME);
        // Past every table: bounds-checked, not undefined access.
        assert_eq!(first_note_name(&[10_000]), NONE_NOTE_NAME);
    }

    #[test]
    fn test_first_note_name_resolves_octave_one() {
        assert_eq!(first_note_name(&[16]), "rāst");
        assert_eq!(first_note_name(&[16, 21, 26]), "rāst");
        assert_eq!(first_note_name(&[0]), "yegāh");
    }

    #[test]
    fn test_octave_major_output_order() {
        let names = note_names_in_tuning_system(&[16, 21]);
        assert_eq!(names.len(), 8);
        // All of octave 0 first, then octave 1, never interleaved by index.
        assert_eq!(names[0], "qarār rāst");
        assert_eq!(names[1], "qarār dūgāh");
        assert_eq!(names[2], "rāst");
        assert_eq!(names[3], "dūgāh");
        assert_eq!(names[4], "kurdān");
        assert_eq!(names[5], "muḥayyar");
        assert_eq!(names[6], "jawāb kurdān");
        assert_eq!(names[7], "jawāb muḥayyar");
    }

    #[test]
    fn test_wrapped_indices_resolve_one_octave_up() {
        let base = OCTAVE_ONE_NOTE_NAMES.len() as i32;
        // base + 0 wraps to degree 0 of the next octave table.
        let names = note_names_in_tuning_system(&[base]);
        assert_eq!(names, vec!["yegāh", "nawā", "saham/ramal tūtī", "jawāb saham/ramal tūtī"]);
    }

    #[test]
    fn test_negative_and_oversized_indices_yield_none() {
        let names = note_names_in_tuning_system(&[-1, 10_000]);
        assert_eq!(names.len(), 8);
        assert!(names.iter().all(|&name| name == NONE_NOTE_NAME));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(note_names_in_tuning_system(&[]).is_empty());
    }
}
