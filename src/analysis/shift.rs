//! Whole-octave navigation through a generated pitch array.

use crate::models::pitch_class::Cell;

/// Moves `cell` up or down by whole octaves through `all`.
///
/// `all` must be the full generated set: four equal per-octave blocks with
/// identical per-octave ordering, flattened octave-major. The cell is matched
/// by `(index, octave)`, its flat position shifted by
/// `octave_shift * (all.len() / 4)`, and the landing pitch returned with its
/// octave field rebased to `cell.octave + octave_shift`.
///
/// Returns `None` when the cell is not in `all` or the landing position
/// falls outside the array. Callers that must render a record regardless can
/// fall back to [`Cell::empty`](crate::models::pitch_class::PitchClass::empty).
pub fn shift_cell(all: &[Cell], cell: &Cell, octave_shift: i32) -> Option<Cell> {
    let position = all
        .iter()
        .position(|c| c.index == cell.index && c.octave == cell.octave)?;

    let per_octave = all.len() / 4;
    let shifted = position as i64 + octave_shift as i64 * per_octave as i64;
    if shifted < 0 || shifted >= all.len() as i64 {
        log::debug!(
            "octave shift {octave_shift} from flat position {position} leaves the pitch array"
        );
        return None;
    }

    let mut landed = all[shifted as usize].clone();
    landed.octave = cell.octave + octave_shift;
    Some(landed)
}
