//! End-to-end checks of the analysis primitives through the public API.

use maqam_core::{
    calculate_interval, cents_deviation, classify_value_type, extend_selection, first_note_name,
    midi_number_to_note_name, note_names_in_tuning_system, pitch_class_intervals,
    reverse_pattern_notes, shift_cell, AnalysisError, MaqamModulations, NotationKind,
    NoteDuration, PatternNote, PitchClass, ScaleDegree, NONE_NOTE_NAME,
};

/// Rast-like 7-degree just scale over four octaves with pure doubling.
fn generated_set() -> Vec<PitchClass> {
    let ratios: [(u32, u32, &str); 7] = [
        (1, 1, "0.00"),
        (9, 8, "203.91"),
        (27, 22, "354.55"),
        (4, 3, "498.04"),
        (3, 2, "701.96"),
        (27, 16, "905.87"),
        (81, 44, "1058.47"),
    ];
    let mut all = Vec::new();
    for octave in 0..4 {
        for (index, (num, den, cents)) in ratios.iter().enumerate() {
            let frequency = 220.0 * f64::powi(2.0, octave) * (*num as f64 / *den as f64);
            all.push(PitchClass {
                fraction: format!("{num}/{den}"),
                cents: cents.to_string(),
                frequency: format!("{frequency:.4}"),
                midi_note_number: 69.0 + (frequency / 440.0).log2() * 12.0,
                original_value: format!("{num}/{den}"),
                original_value_type: NotationKind::Fraction,
                index: index as i32,
                octave,
                ..PitchClass::default()
            });
        }
    }
    all
}

#[test]
fn classifier_labels_real_columns() {
    assert_eq!(
        classify_value_type(&["1/1", "9/8", "27/22", "4/3", "3/2"]),
        NotationKind::Fraction
    );
    assert_eq!(
        classify_value_type(&["0", "203.91", "354.55", "498.04"]),
        NotationKind::Cents
    );
    // Ascending decimals fall inside the cents range, which is checked
    // first.
    assert_eq!(
        classify_value_type(&["1.0", "1.125", "1.2273", "1.3333"]),
        NotationKind::Cents
    );
    assert_eq!(
        classify_value_type(&["1200", "1066.7", "977.8", "900"]),
        NotationKind::StringLength
    );
    let no_tokens: [&str; 0] = [];
    assert_eq!(classify_value_type(&no_tokens), NotationKind::Unknown);
}

#[test]
fn interval_sequence_has_one_fewer_element() {
    let all = generated_set();
    let octave_one: Vec<PitchClass> = all.iter().filter(|pc| pc.octave == 1).cloned().collect();
    let intervals = pitch_class_intervals(&octave_one);
    assert_eq!(intervals.len(), octave_one.len() - 1);
    assert_eq!(intervals[0].fraction, "9/8");

    // Consecutive pairing: first interval is pitch 1 against pitch 0.
    let direct = calculate_interval(&octave_one[0], &octave_one[1]);
    assert_eq!(intervals[0], direct);
}

#[test]
fn extension_spans_octaves_for_a_scale_selection() {
    let all = generated_set();
    let selected: Vec<PitchClass> = all
        .iter()
        .filter(|pc| pc.octave == 1)
        .take(7)
        .cloned()
        .collect();
    let extended = extend_selection(&all, &selected).unwrap();
    // Every degree is selected within one octave, so the whole set returns.
    assert_eq!(extended.len(), all.len());
    assert_eq!(
        extend_selection(&all, &[]),
        Err(AnalysisError::EmptySelection)
    );
}

#[test]
fn navigation_matches_the_flat_layout() {
    let all = generated_set();
    let cell = all
        .iter()
        .find(|pc| pc.index == 2 && pc.octave == 0)
        .unwrap();
    let up = shift_cell(&all, cell, 1).unwrap();
    assert_eq!(up.index, 2);
    assert_eq!(up.octave, 1);
    assert_eq!(up.frequency, all[9].frequency);
    assert!(shift_cell(&all, cell, 4).is_none());
}

#[test]
fn note_naming_agrees_between_both_resolvers() {
    assert_eq!(first_note_name(&[16, 21]), "rāst");
    assert_eq!(first_note_name(&[]), NONE_NOTE_NAME);

    let names = note_names_in_tuning_system(&[16]);
    assert_eq!(names.len(), 4);
    // The octave-one slot of the four-octave resolution matches the
    // first-note resolver.
    assert_eq!(names[1], first_note_name(&[16]));
}

#[test]
fn hop_count_follows_bucket_lengths() {
    let modulations = MaqamModulations::<&str> {
        hops_from_one: vec!["a"],
        hops_from_three_2p: vec!["b", "c"],
        hops_from_five: vec!["d", "e", "f"],
        hops_from_six_descending: vec!["g"],
        ..MaqamModulations::default()
    };
    assert_eq!(modulations.total_hops(), 7);
}

#[test]
fn deviation_and_naming_share_the_enharmonic_rule() {
    assert!((cents_deviation(63.5, "+20", 51.5) - -1180.0).abs() < 1e-9);
    // The same +1 bump shows up in note naming.
    assert_eq!(midi_number_to_note_name(63.0).unwrap().note, "E");
}

#[test]
fn pattern_reversal_round_trips_degrees() {
    let notes = vec![
        PatternNote {
            scale_degree: ScaleDegree::Tonic,
            note_duration: NoteDuration::Quarter,
            is_target: true,
            velocity: Some(96),
        },
        PatternNote {
            scale_degree: ScaleDegree::Four,
            note_duration: NoteDuration::Eighth,
            is_target: false,
            velocity: None,
        },
        PatternNote {
            scale_degree: ScaleDegree::UpperOne,
            note_duration: NoteDuration::Half,
            is_target: false,
            velocity: Some(64),
        },
    ];
    let once = reverse_pattern_notes(&notes);
    assert_eq!(once[0].scale_degree, ScaleDegree::UpperOne);
    assert_eq!(once[0].note_duration, NoteDuration::Quarter);
    assert_eq!(once[0].velocity, Some(96));

    let twice = reverse_pattern_notes(&once);
    assert_eq!(twice, notes);
}
