// Absolute pitches: an octave number plus a pitch class.
//
// The linear index is `octave * 12 + note`, so C0 is 0, A4 is 57 and B-1 is
// -1. Pitches order by that index. Transposition goes through the index,
// which carries into the octave whenever note + interval leaves [0, 12);
// `from_index` uses Euclidean division so negative indices land in negative
// octaves (index -4 is G#-1).
//
// The index is an i64, so it is exact for every i32 octave. Results whose
// octave no longer fits an i32 fail with `OutOfRange`.
//
// Frequency conversion is equal temperament relative to a reference pitch;
// the methods here use the standard A4 = 440 Hz reference, and
// `ConcertPitch` (config.rs) does the same math for any other reference.

use crate::config::ConcertPitch;
use crate::error::{Result, TheoryError};
use crate::frequency::Frequency;
use crate::interval::Interval;
use crate::note::Note;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Octave
// ---------------------------------------------------------------------------

/// A signed octave number (scientific pitch notation: middle C is in octave 4).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Octave(i32);

impl Octave {
    pub const fn new(value: i32) -> Self {
        Octave(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Octave {
    fn from(value: i32) -> Self {
        Octave(value)
    }
}

// Saturating, like `Interval`.
impl Add for Octave {
    type Output = Octave;

    fn add(self, rhs: Octave) -> Octave {
        Octave(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Octave {
    type Output = Octave;

    fn sub(self, rhs: Octave) -> Octave {
        Octave(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Octave {
    type Output = Octave;

    fn neg(self) -> Octave {
        Octave(self.0.saturating_neg())
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Pitch
// ---------------------------------------------------------------------------

/// A pitch class in a specific octave.
///
/// Field order matters: the derived ordering compares octave first, then
/// note, which is the same as comparing `index()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pitch {
    pub octave: Octave,
    pub note: Note,
}

impl Pitch {
    pub const fn new(octave: Octave, note: Note) -> Self {
        Pitch { octave, note }
    }

    /// Linear semitone index: `octave * 12 + note`.
    pub const fn index(self) -> i64 {
        self.octave.value() as i64 * Interval::SEMITONES_PER_OCTAVE as i64 + self.note.index() as i64
    }

    /// Fails with `OutOfRange` when the octave does not fit an i32.
    pub fn from_index(index: i64) -> Result<Pitch> {
        let per_octave = Interval::SEMITONES_PER_OCTAVE as i64;
        let octave = i32::try_from(index.div_euclid(per_octave))
            .map_err(|_| TheoryError::out_of_range("pitch index", index))?;
        let note = Note::C.transpose(Interval::new(index.rem_euclid(per_octave) as i32));
        Ok(Pitch::new(Octave(octave), note))
    }

    pub fn transpose(self, by: Interval) -> Result<Pitch> {
        Pitch::from_index(self.index() + by.semitones() as i64)
    }

    /// Equal-tempered frequency against A4 = 440 Hz.
    pub fn frequency(self) -> Frequency {
        ConcertPitch::default().frequency_of(self)
    }

    /// Nearest pitch to `frequency` against A4 = 440 Hz.
    pub fn from_frequency(frequency: Frequency) -> Result<Pitch> {
        ConcertPitch::default().pitch_of(frequency)
    }

    /// Parse `<note><octave>`, e.g. `A4`, `Eb3`, `C#-1`.
    pub fn parse(s: &str) -> Result<Pitch> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(|| TheoryError::invalid_format(s, "missing octave number"))?;
        let (note, octave) = trimmed.split_at(split);
        let note = Note::parse(note)?;
        let octave = octave
            .parse::<i32>()
            .map_err(|_| TheoryError::invalid_format(s, "malformed octave number"))?;
        Ok(Pitch::new(Octave(octave), note))
    }
}

impl FromStr for Pitch {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Pitch::parse(s)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

// Serialized as `"C#4"` text, like `Note`.
impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Pitch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pitch::parse(&s).map_err(serde::de::Error::custom)
    }
}
