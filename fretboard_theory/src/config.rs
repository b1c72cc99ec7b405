// Concert pitch: the reference for equal-temperament frequency conversion.
//
// `ConcertPitch::default()` is the standard A4 = 440 Hz that
// `Pitch::frequency` and `Pitch::from_frequency` use. Other references
// (baroque A4 = 415 Hz, A4 = 432 Hz, ...) can be built directly or loaded
// from JSON; fields missing from the JSON fall back to the defaults:
//
//   { "reference_pitch": "A4", "reference_frequency": 432.0 }
//
// Conversion:
//   f     = ref_hz * 2^((index - ref_index) / 12)
//   index = ref_index + round_ties_even(12 * log2(f / ref_hz))
//
// `frequency_of` saturates: pitches too far from the reference for an f64
// come back as the smallest or largest finite frequency.

use crate::error::{ConfigError, TheoryError};
use crate::frequency::Frequency;
use crate::interval::Interval;
use crate::note::Note;
use crate::pitch::{Octave, Pitch};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Standard reference: A above middle C.
pub const STANDARD_REFERENCE_PITCH: Pitch = Pitch::new(Octave::new(4), Note::A);

/// Standard reference frequency for `STANDARD_REFERENCE_PITCH`.
pub const STANDARD_REFERENCE_HZ: f64 = 440.0;

/// A reference pitch and the frequency it sounds at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcertPitch {
    pub reference_pitch: Pitch,
    pub reference_frequency: Frequency,
}

impl Default for ConcertPitch {
    fn default() -> Self {
        ConcertPitch {
            reference_pitch: STANDARD_REFERENCE_PITCH,
            reference_frequency: Frequency::saturating(STANDARD_REFERENCE_HZ),
        }
    }
}

impl ConcertPitch {
    pub fn new(reference_pitch: Pitch, reference_frequency: Frequency) -> Self {
        ConcertPitch {
            reference_pitch,
            reference_frequency,
        }
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let concert: ConcertPitch = serde_json::from_str(json)?;
        tracing::debug!(
            reference = %concert.reference_pitch,
            hz = concert.reference_frequency.hertz(),
            "loaded concert pitch"
        );
        Ok(concert)
    }

    /// Read and parse a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "reading concert pitch config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn frequency_of(&self, pitch: Pitch) -> Frequency {
        let steps = (pitch.index() - self.reference_pitch.index()) as f64;
        let ratio = (steps / Interval::SEMITONES_PER_OCTAVE as f64).exp2();
        Frequency::saturating(self.reference_frequency.hertz() * ratio)
    }

    /// Nearest equal-tempered pitch; exact half-semitone ties round to even.
    /// Fails with `OutOfRange` if that pitch's octave does not fit an i32.
    pub fn pitch_of(&self, frequency: Frequency) -> Result<Pitch, TheoryError> {
        let ratio = frequency.hertz() / self.reference_frequency.hertz();
        let steps = nearest_step(ratio.log2() * Interval::SEMITONES_PER_OCTAVE as f64);
        Pitch::from_index(self.reference_pitch.index().saturating_add(steps))
    }
}

/// Round a fractional semitone offset to the nearest whole step, ties to even.
fn nearest_step(steps: f64) -> i64 {
    steps.round_ties_even() as i64
}
