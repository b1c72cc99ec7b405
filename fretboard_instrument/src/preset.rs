// Standard instrument tunings.
//
// Each preset lists its open-string pitches from the lowest-sounding
// string upward, except the ukulele, whose re-entrant G4 string comes first
// as it sits on the instrument.

use crate::error::InstrumentError;
use fretboard_theory::{Note, Octave, Pitch};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const fn p(octave: i32, note: Note) -> Pitch {
    Pitch::new(Octave::new(octave), note)
}

const STANDARD_GUITAR: [Pitch; 6] = [
    p(2, Note::E),
    p(2, Note::A),
    p(3, Note::D),
    p(3, Note::G),
    p(3, Note::B),
    p(4, Note::E),
];

const DROP_D: [Pitch; 6] = [
    p(2, Note::D),
    p(2, Note::A),
    p(3, Note::D),
    p(3, Note::G),
    p(3, Note::B),
    p(4, Note::E),
];

const STANDARD_BASS: [Pitch; 4] = [p(1, Note::E), p(1, Note::A), p(2, Note::D), p(2, Note::G)];

const UKULELE: [Pitch; 4] = [p(4, Note::G), p(4, Note::C), p(4, Note::E), p(4, Note::A)];

/// A named set of open-string pitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TuningPreset {
    StandardGuitar,
    DropD,
    StandardBass,
    Ukulele,
}

impl TuningPreset {
    pub const ALL: [TuningPreset; 4] = [
        TuningPreset::StandardGuitar,
        TuningPreset::DropD,
        TuningPreset::StandardBass,
        TuningPreset::Ukulele,
    ];

    pub fn pitches(self) -> &'static [Pitch] {
        match self {
            TuningPreset::StandardGuitar => &STANDARD_GUITAR,
            TuningPreset::DropD => &DROP_D,
            TuningPreset::StandardBass => &STANDARD_BASS,
            TuningPreset::Ukulele => &UKULELE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TuningPreset::StandardGuitar => "standard-guitar",
            TuningPreset::DropD => "drop-d",
            TuningPreset::StandardBass => "standard-bass",
            TuningPreset::Ukulele => "ukulele",
        }
    }
}

impl FromStr for TuningPreset {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, InstrumentError> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match wanted.as_str() {
            "guitar" => return Ok(TuningPreset::StandardGuitar),
            "bass" => return Ok(TuningPreset::StandardBass),
            _ => {}
        }
        TuningPreset::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| InstrumentError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for TuningPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
