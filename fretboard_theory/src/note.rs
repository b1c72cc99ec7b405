// Pitch classes and note-name text.
//
// A `Note` is a pitch class 0..=11 (C = 0, C# = 1, ... B = 11), independent
// of octave. It is the only type with a text grammar:
//
//   Letter Accidental*
//
// where Letter is A-G (either case, surrounding whitespace trimmed) and each
// accidental shifts the pitch class by one semitone: `#`/`♯` up, `b`/`♭`
// down, and the double glyphs `𝄪`/`𝄫` count as two. Accidentals are summed
// algebraically (`C#b` is C) and the total is reduced modulo 12, so `Cb` is
// B and `C♭♭` is A#.
//
// Output spelling is fixed to the sharp table below. Flats are accepted on
// input but never produced.

use crate::error::{Result, TheoryError};
use crate::interval::Interval;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

const NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A pitch class in 0..=11.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note(u8);

impl Note {
    pub const C: Note = Note(0);
    pub const C_SHARP: Note = Note(1);
    pub const D: Note = Note(2);
    pub const D_SHARP: Note = Note(3);
    pub const E: Note = Note(4);
    pub const F: Note = Note(5);
    pub const F_SHARP: Note = Note(6);
    pub const G: Note = Note(7);
    pub const G_SHARP: Note = Note(8);
    pub const A: Note = Note(9);
    pub const A_SHARP: Note = Note(10);
    pub const B: Note = Note(11);

    /// All twelve pitch classes, ascending from C.
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::C_SHARP,
        Note::D,
        Note::D_SHARP,
        Note::E,
        Note::F,
        Note::F_SHARP,
        Note::G,
        Note::G_SHARP,
        Note::A,
        Note::A_SHARP,
        Note::B,
    ];

    /// Fails with `OutOfRange` outside 0..=11.
    pub fn new(index: i32) -> Result<Self> {
        if !(0..Interval::SEMITONES_PER_OCTAVE).contains(&index) {
            return Err(TheoryError::out_of_range("note index", index));
        }
        Ok(Note(index as u8))
    }

    pub const fn index(self) -> i32 {
        self.0 as i32
    }

    /// Canonical sharp spelling.
    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// Any interval is accepted; only its pitch-class distance matters.
    pub const fn transpose(self, by: Interval) -> Note {
        let steps = self.0 as i32 + by.normalize().semitones();
        Note((steps % Interval::SEMITONES_PER_OCTAVE) as u8)
    }

    /// Upward distance from `self` to `other`, in 0..=11.
    pub const fn interval_to(self, other: Note) -> Interval {
        Interval::new(other.0 as i32 - self.0 as i32).normalize()
    }

    /// Parse note-name text. See the module comment for the grammar.
    pub fn parse(s: &str) -> Result<Note> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .ok_or_else(|| TheoryError::invalid_format(s, "empty note name"))?;
        let base = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(TheoryError::invalid_format(s, "unknown note letter")),
        };
        let mut shift = 0i32;
        for c in chars {
            let step = match c {
                '#' | '♯' => 1,
                'b' | '♭' => -1,
                '𝄪' => 2,
                '𝄫' => -2,
                _ => return Err(TheoryError::invalid_format(s, "unrecognized accidental")),
            };
            shift = (shift + step).rem_euclid(Interval::SEMITONES_PER_OCTAVE);
        }
        Ok(Note(0).transpose(Interval::new(base + shift)))
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Note::parse(s)
    }
}

impl Add<Interval> for Note {
    type Output = Note;

    fn add(self, rhs: Interval) -> Note {
        self.transpose(rhs)
    }
}

impl Sub<Interval> for Note {
    type Output = Note;

    fn sub(self, rhs: Interval) -> Note {
        self.transpose(Interval::new(-rhs.normalize().semitones()))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Serialized as the canonical name so notes read naturally in JSON.
impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Note::parse(&s).map_err(serde::de::Error::custom)
    }
}
