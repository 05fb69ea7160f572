//! Melodic pattern model.
//!
//! A pattern is an identified, named, ordered sequence of scale-degree notes.
//! Order is melodic order and is significant everywhere.

use serde::{Deserialize, Serialize};

/// Scale degree relative to the tonic, spanning one octave below (`-I..-VII`)
/// through one octave above (`+I..+VII`). `R` is the tonic itself.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleDegree {
    #[serde(rename = "-I")]
    LowerOne,
    #[serde(rename = "-II")]
    LowerTwo,
    #[serde(rename = "-III")]
    LowerThree,
    #[serde(rename = "-IV")]
    LowerFour,
    #[serde(rename = "-V")]
    LowerFive,
    #[serde(rename = "-VI")]
    LowerSix,
    #[serde(rename = "-VII")]
    LowerSeven,
    #[serde(rename = "R")]
    Tonic,
    #[serde(rename = "I")]
    One,
    #[serde(rename = "II")]
    Two,
    #[serde(rename = "III")]
    Three,
    #[serde(rename = "IV")]
    Four,
    #[serde(rename = "V")]
    Five,
    #[serde(rename = "VI")]
    Six,
    #[serde(rename = "VII")]
    Seven,
    #[serde(rename = "+I")]
    UpperOne,
    #[serde(rename = "+II")]
    UpperTwo,
    #[serde(rename = "+III")]
    UpperThree,
    #[serde(rename = "+IV")]
    UpperFour,
    #[serde(rename = "+V")]
    UpperFive,
    #[serde(rename = "+VI")]
    UpperSix,
    #[serde(rename = "+VII")]
    UpperSeven,
}

/// Rhythmic value of a pattern note: whole through 32nd, each in normal,
/// dotted and triplet form. Serialized spellings ("4n", "8t", ...) are the
/// sequencer-facing duration codes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteDuration {
    #[serde(rename = "1n")]
    Whole,
    #[serde(rename = "1d")]
    WholeDotted,
    #[serde(rename = "1t")]
    WholeTriplet,
    #[serde(rename = "2n")]
    Half,
    #[serde(rename = "2d")]
    HalfDotted,
    #[serde(rename = "2t")]
    HalfTriplet,
    #[serde(rename = "4n")]
    Quarter,
    #[serde(rename = "4d")]
    QuarterDotted,
    #[serde(rename = "4t")]
    QuarterTriplet,
    #[serde(rename = "8n")]
    Eighth,
    #[serde(rename = "8d")]
    EighthDotted,
    #[serde(rename = "8t")]
    EighthTriplet,
    #[serde(rename = "16n")]
    Sixteenth,
    #[serde(rename = "16d")]
    SixteenthDotted,
    #[serde(rename = "16t")]
    SixteenthTriplet,
    #[serde(rename = "32n")]
    ThirtySecond,
    #[serde(rename = "32d")]
    ThirtySecondDotted,
    #[serde(rename = "32t")]
    ThirtySecondTriplet,
}

/// One note of a melodic pattern.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatternNote {
    pub scale_degree: ScaleDegree,
    pub note_duration: NoteDuration,
    /// Marks the note as a melodic focal point.
    pub is_target: bool,
    /// MIDI-style intensity, 0..=127.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<u8>,
}

/// An identified, named melodic pattern.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pattern {
    id: String,
    name: String,
    notes: Vec<PatternNote>,
}

impl Pattern {
    pub fn new(id: impl Into<String>, name: impl Into<String>, notes: Vec<PatternNote>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            notes,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notes(&self) -> &[PatternNote] {
        &self.notes
    }

    /// The `{id, name, notes}` projection handed to the persistence layer.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "notes": self.notes,
        })
    }
}

/// Mirrors the degree sequence of a pattern while leaving every other field
/// at its original position: output note `i` carries input note `n-1-i`'s
/// scale degree but input note `i`'s duration, target flag and velocity.
pub fn reverse_pattern_notes(notes: &[PatternNote]) -> Vec<PatternNote> {
    notes
        .iter()
        .zip(notes.iter().rev())
        .map(|(note, mirrored)| PatternNote {
            scale_degree: mirrored.scale_degree,
            ..*note
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(degree: ScaleDegree, duration: NoteDuration, is_target: bool) -> PatternNote {
        PatternNote {
            scale_degree: degree,
            note_duration: duration,
            is_target,
            velocity: None,
        }
    }

    #[test]
    fn test_reversal_mirrors_degrees_only() {
        let notes = vec![
            PatternNote {
                velocity: Some(100),
                ..note(ScaleDegree::Tonic, NoteDuration::Quarter, true)
            },
            note(ScaleDegree::Three, NoteDuration::Eighth, false),
            note(ScaleDegree::Five, NoteDuration::Half, false),
        ];
        let reversed = reverse_pattern_notes(&notes);

        let degrees: Vec<_> = reversed.iter().map(|n| n.scale_degree).collect();
        assert_eq!(
            degrees,
            vec![ScaleDegree::Five, ScaleDegree::Three, ScaleDegree::Tonic]
        );
        // Rhythm and dynamics stay put.
        assert_eq!(reversed[0].note_duration, NoteDuration::Quarter);
        assert_eq!(reversed[0].velocity, Some(100));
        assert!(reversed[0].is_target);
        assert_eq!(reversed[2].note_duration, NoteDuration::Half);
        assert_eq!(reversed[2].velocity, None);
    }

    #[test]
    fn test_reversal_is_degree_involution() {
        let notes = vec![
            note(ScaleDegree::LowerSeven, NoteDuration::Sixteenth, false),
            note(ScaleDegree::Tonic, NoteDuration::Quarter, true),
            note(ScaleDegree::UpperTwo, NoteDuration::Whole, false),
            note(ScaleDegree::Four, NoteDuration::EighthTriplet, false),
        ];
        assert_eq!(reverse_pattern_notes(&reverse_pattern_notes(&notes)), notes);
    }

    #[test]
    fn test_reversal_degenerate_lengths() {
        assert!(reverse_pattern_notes(&[]).is_empty());
        let single = vec![note(ScaleDegree::Tonic, NoteDuration::Quarter, false)];
        assert_eq!(reverse_pattern_notes(&single), single);
    }

    #[test]
    fn test_degree_and_duration_spellings() {
        assert_eq!(
            serde_json::to_value(ScaleDegree::LowerThree).unwrap(),
            "-III"
        );
        assert_eq!(serde_json::to_value(ScaleDegree::Tonic).unwrap(), "R");
        assert_eq!(serde_json::to_value(ScaleDegree::UpperSeven).unwrap(), "+VII");
        assert_eq!(
            serde_json::to_value(NoteDuration::SixteenthDotted).unwrap(),
            "16d"
        );
        let parsed: NoteDuration = serde_json::from_str("\"32t\"").unwrap();
        assert_eq!(parsed, NoteDuration::ThirtySecondTriplet);
    }

    #[test]
    fn test_pattern_json_projection() {
        let pattern = Pattern::new(
            "p1",
            "ascent",
            vec![note(ScaleDegree::Tonic, NoteDuration::Quarter, false)],
        );
        let json = pattern.to_json();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["name"], "ascent");
        assert_eq!(json["notes"][0]["scaleDegree"], "R");
        assert_eq!(json["notes"][0]["noteDuration"], "4n");
        assert_eq!(json["notes"][0]["isTarget"], false);
        assert!(json["notes"][0].get("velocity").is_none());
    }
}
