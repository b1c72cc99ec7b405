// A multi-string fretted instrument.
//
// The fretboard is an ordered, non-empty list of strings. Strings are held
// behind `Arc`, so pressing a fret on one string builds a new fretboard that
// shares every other string with the old one instead of copying it. Every
// indexed operation checks the string index and fails with `OutOfRange`
// when it is past the last string.

use crate::preset::TuningPreset;
use crate::string::InstrumentString;
use fretboard_theory::{Interval, Pitch, Result, TheoryError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An ordered, non-empty set of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<InstrumentString>", into = "Vec<InstrumentString>")]
pub struct Fretboard {
    strings: Vec<Arc<InstrumentString>>,
}

impl Fretboard {
    /// Fails with `OutOfRange` when `strings` is empty.
    pub fn new<I>(strings: I) -> Result<Self>
    where
        I: IntoIterator<Item = InstrumentString>,
    {
        let strings: Vec<_> = strings.into_iter().map(Arc::new).collect();
        if strings.is_empty() {
            return Err(TheoryError::OutOfRange {
                name: "fretboard string count",
                value: "0".to_string(),
            });
        }
        Ok(Fretboard { strings })
    }

    /// Open strings tuned to `preset`.
    pub fn with_preset(preset: TuningPreset) -> Self {
        Fretboard {
            strings: preset
                .pitches()
                .iter()
                .map(|&p| Arc::new(InstrumentString::open(p)))
                .collect(),
        }
    }

    /// Number of strings (always at least one).
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false; a fretboard has at least one string.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn strings(&self) -> impl Iterator<Item = &InstrumentString> {
        self.strings.iter().map(|s| s.as_ref())
    }

    pub fn string(&self, index: usize) -> Result<&InstrumentString> {
        self.check_index(index)?;
        Ok(&self.strings[index])
    }

    pub fn is_pressed(&self, index: usize, fret: Interval) -> Result<bool> {
        Ok(self.string(index)?.is_pressed(fret))
    }

    /// Retune every string by `by`. Fails with `OutOfRange` if any string
    /// would leave the representable octaves.
    pub fn transpose(&self, by: Interval) -> Result<Self> {
        let strings = self
            .strings
            .iter()
            .map(|s| s.transpose(by).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;
        Ok(Fretboard { strings })
    }

    pub fn press_fret(&self, index: usize, fret: Interval) -> Result<Self> {
        self.modify_string(index, |s| s.press_fret(fret))
    }

    pub fn depress_fret(&self, index: usize, fret: Interval) -> Result<Self> {
        self.modify_string(index, |s| s.depress_fret(fret))
    }

    /// Press every fret in `0..=max_fret`, on every string, whose pitch
    /// satisfies `matches`. Existing presses are kept.
    pub fn press_matching<F>(&self, max_fret: i32, matches: F) -> Result<Self>
    where
        F: Fn(Pitch) -> bool,
    {
        let strings = self
            .strings
            .iter()
            .map(|s| {
                let mut frets = Vec::new();
                for fret in (0..=max_fret).map(Interval::new) {
                    if matches(s.tuning().transpose(fret)?) {
                        frets.push(fret);
                    }
                }
                s.press_frets(frets).map(Arc::new)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Fretboard { strings })
    }

    /// Pressed pitches, one list per string.
    pub fn pitches(&self) -> Result<Vec<Vec<Pitch>>> {
        self.strings.iter().map(|s| s.pitches()).collect()
    }

    /// What each string sounds when strummed.
    pub fn sounding_pitches(&self) -> Result<Vec<Pitch>> {
        self.strings.iter().map(|s| s.sounding_pitch()).collect()
    }

    fn modify_string<F>(&self, index: usize, action: F) -> Result<Self>
    where
        F: FnOnce(&InstrumentString) -> Result<InstrumentString>,
    {
        self.check_index(index)?;
        let mut strings = self.strings.clone();
        strings[index] = Arc::new(action(&strings[index])?);
        Ok(Fretboard { strings })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.strings.len() {
            return Err(TheoryError::OutOfRange {
                name: "string index",
                value: index.to_string(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<InstrumentString>> for Fretboard {
    type Error = TheoryError;

    fn try_from(strings: Vec<InstrumentString>) -> Result<Self> {
        Fretboard::new(strings)
    }
}

impl From<Fretboard> for Vec<InstrumentString> {
    fn from(board: Fretboard) -> Self {
        board.strings.iter().map(|s| s.as_ref().clone()).collect()
    }
}

impl fmt::Display for Fretboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.strings.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}
