//! Octave extension of a selected pitch-class subset.

use crate::error::AnalysisError;
use crate::models::pitch_class::PitchClass;

/// Extends `selected` with the octave-siblings of each selected degree,
/// drawn from `all` and kept in `all`'s order.
///
/// A cutoff (`slice_index`) splits the selection into a low region, whose
/// degrees already have their upper octave inside the selection, and a high
/// region, whose degrees get siblings pulled in from other octaves: a pitch
/// from `all` whose degree is selected but whose exact octave is not joins
/// the output only if some same-degree selected pitch sits at or past the
/// cutoff.
///
/// The cutoff scan visits the whole selection and keeps overwriting, so a
/// qualifying position after a non-qualifying one still advances the cutoff.
/// That matches the shipped behavior; a prefix-stopping scan would cut
/// differently on non-monotonic selections.
///
/// Passing an empty `selected` is a caller bug and fails with
/// [`AnalysisError::EmptySelection`].
pub fn extend_selection(
    all: &[PitchClass],
    selected: &[PitchClass],
) -> Result<Vec<PitchClass>, AnalysisError> {
    let last = selected.last().ok_or(AnalysisError::EmptySelection)?;
    let last_frequency = last.frequency_value();

    let mut slice_index = 0;
    for (position, pitch_class) in selected.iter().enumerate() {
        if pitch_class.frequency_value() * 2.0 <= last_frequency {
            slice_index = position + 1;
        }
    }
    log::trace!(
        "extending {} selected pitch classes, cutoff at {slice_index}",
        selected.len()
    );

    let mut extended = Vec::new();
    for pitch_class in all {
        let same_degree: Vec<usize> = selected
            .iter()
            .enumerate()
            .filter(|(_, pc)| pc.index == pitch_class.index)
            .map(|(position, _)| position)
            .collect();
        if same_degree.is_empty() {
            continue;
        }

        let octave_selected = same_degree
            .iter()
            .any(|&position| selected[position].octave == pitch_class.octave);
        if octave_selected || same_degree.iter().any(|&position| position >= slice_index) {
            extended.push(pitch_class.clone());
        }
    }

    Ok(extended)
}
