// Diatonic modes and keys.
//
// The seven diatonic modes are the rotations of the major scale: Ionian
// starts on degree 1, Dorian on degree 2, and so on through Locrian on
// degree 7. Each mode has a characteristic interval pattern from its tonic.
//
// This module provides:
// - `Mode` with its interval pattern and the major-scale degree it starts on
// - `Key`: a scale anchored to a concrete tonic, for note membership,
//   note-to-degree mapping, and snapping stray notes into the key
//
// Used by the instrument crate to mark in-key frets and by the CLI to name
// chords in a key.

use crate::chord::Chord;
use crate::degree::{Degree, DegreeSet};
use crate::error::{Result, TheoryError};
use crate::interval::Interval;
use crate::note::Note;
use crate::scale::Scale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven diatonic modes, in major-scale degree order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// C D E F G A B: the major scale.
    Ionian,
    /// D E F G A B C: natural minor with a raised 6th.
    Dorian,
    /// E F G A B C D: half step from 1 to 2.
    Phrygian,
    /// F G A B C D E: raised 4th.
    Lydian,
    /// G A B C D E F: major with a lowered 7th.
    Mixolydian,
    /// A B C D E F G: natural minor.
    Aeolian,
    /// B C D E F G A: diminished 5th above the tonic.
    Locrian,
}

const MODE_SCALES: [Scale; 7] = [
    Scale::known(&[0, 2, 4, 5, 7, 9, 11]),
    Scale::known(&[0, 2, 3, 5, 7, 9, 10]),
    Scale::known(&[0, 1, 3, 5, 7, 8, 10]),
    Scale::known(&[0, 2, 4, 6, 7, 9, 11]),
    Scale::known(&[0, 2, 4, 5, 7, 9, 10]),
    Scale::known(&[0, 2, 3, 5, 7, 8, 10]),
    Scale::known(&[0, 1, 3, 5, 6, 8, 10]),
];

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// Degree of the major scale this mode starts on.
    pub fn degree(self) -> Degree {
        match self {
            Mode::Ionian => Degree::FIRST,
            Mode::Dorian => Degree::SECOND,
            Mode::Phrygian => Degree::THIRD,
            Mode::Lydian => Degree::FOURTH,
            Mode::Mixolydian => Degree::FIFTH,
            Mode::Aeolian => Degree::SIXTH,
            Mode::Locrian => Degree::SEVENTH,
        }
    }

    /// The mode's intervals from its own tonic.
    pub fn scale(self) -> Scale {
        MODE_SCALES[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "ionian",
            Mode::Dorian => "dorian",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Aeolian => "aeolian",
            Mode::Locrian => "locrian",
        }
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| TheoryError::invalid_format(s, "unknown mode"))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scale anchored to a concrete tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub tonic: Note,
    pub scale: Scale,
}

impl Key {
    pub fn new(tonic: Note, scale: Scale) -> Self {
        Key { tonic, scale }
    }

    pub fn from_mode(tonic: Note, mode: Mode) -> Self {
        Key::new(tonic, mode.scale())
    }

    pub fn contains(&self, note: Note) -> bool {
        self.scale.contains(self.tonic.interval_to(note))
    }

    /// Scale degree of `note`, or None if the note is outside the key.
    pub fn degree_of(&self, note: Note) -> Option<Degree> {
        let offset = self.tonic.interval_to(note);
        let position = self.scale.intervals().iter().position(|i| i == offset)?;
        Degree::new(position as u32 + 1).ok()
    }

    /// The note on `degree`.
    pub fn note(&self, degree: Degree) -> Result<Note> {
        Ok(self.tonic + self.scale.interval(degree)?)
    }

    pub fn notes(&self) -> Vec<Note> {
        self.scale.notes(self.tonic)
    }

    pub fn chord(&self, root: Degree, template: &DegreeSet) -> Result<Chord> {
        self.scale.chord(root, template)
    }

    /// Nearest in-key note, searching downward first at equal distance.
    /// Returns `note` unchanged when it is already in the key or the key is
    /// empty.
    pub fn snap(&self, note: Note) -> Note {
        if self.contains(note) {
            return note;
        }
        for distance in 1..=6 {
            let below = note - Interval::new(distance);
            if self.contains(below) {
                return below;
            }
            let above = note + Interval::new(distance);
            if self.contains(above) {
                return above;
            }
        }
        note
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{TriadType, templates};

    #[test]
    fn test_modes_are_rotations_of_major() {
        for mode in Mode::ALL {
            assert_eq!(
                Scale::MAJOR.transform(mode.degree()).unwrap(),
                mode.scale(),
                "{}",
                mode
            );
        }
        assert_eq!(Mode::Ionian.scale(), Scale::MAJOR);
        assert_eq!(Mode::Aeolian.scale(), Scale::NATURAL_MINOR);
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!(" Dorian ".parse::<Mode>().unwrap(), Mode::Dorian);
        assert!("hypodorian".parse::<Mode>().unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_d_dorian_membership() {
        let key = Key::from_mode(Note::D, Mode::Dorian);
        for name in ["D", "E", "F", "G", "A", "B", "C"] {
            assert!(key.contains(name.parse().unwrap()), "{name}");
        }
        assert!(!key.contains(Note::D_SHARP));
        assert!(!key.contains(Note::F_SHARP));
    }

    #[test]
    fn test_degree_of() {
        let key = Key::from_mode(Note::D, Mode::Dorian);
        assert_eq!(key.degree_of(Note::D), Some(Degree::FIRST));
        assert_eq!(key.degree_of(Note::A), Some(Degree::FIFTH));
        assert_eq!(key.degree_of(Note::D_SHARP), None);
        assert_eq!(key.note(Degree::FIFTH).unwrap(), Note::A);
        assert!(key.note(Degree::new(8).unwrap()).is_err());
    }

    #[test]
    fn test_snap() {
        let key = Key::from_mode(Note::D, Mode::Dorian);
        assert_eq!(key.snap(Note::D), Note::D);
        assert_eq!(key.snap(Note::D_SHARP), Note::D);
        assert_eq!(key.snap(Note::F_SHARP), Note::F);
        assert_eq!(Key::new(Note::C, Scale::new(Default::default()).unwrap()).snap(Note::E), Note::E);
    }

    #[test]
    fn test_phrygian_half_step() {
        let key = Key::from_mode(Note::E, Mode::Phrygian);
        assert_eq!(key.degree_of(Note::F), Some(Degree::SECOND));
        let i = key.chord(Degree::FIRST, &templates::TRIAD).unwrap();
        assert_eq!(i.triad_type(), Some(TriadType::Minor));
        assert_eq!(key.to_string(), "E {0, 1, 3, 5, 7, 8, 10}");
    }
}
