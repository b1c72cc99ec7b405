// Scales and chord derivation.
//
// A `Scale` is an `IntervalSet` of offsets from the tonic that is already in
// normalized form (every member in [0, 12)). Construction rejects anything
// else rather than silently folding it.
//
// Chords are derived by rotate-then-project: to build the chord on degree
// `r` with template {1, 3, 5}, rotate the scale so degree `r` becomes the
// tonic, then read degrees 1, 3 and 5 off the rotated scale. The ii chord of
// C major is therefore D-F-A (offsets 0, 3, 7 from D), a minor triad.
//
// The named templates below are validated at compile time.

use crate::chord::{Chord, ChordStep};
use crate::degree::{Degree, DegreeSet};
use crate::error::{Result, TheoryError};
use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::note::Note;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized set of offsets from a tonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalSet", into = "IntervalSet")]
pub struct Scale {
    intervals: IntervalSet,
}

impl Scale {
    pub const MAJOR: Scale = Scale::known(&[0, 2, 4, 5, 7, 9, 11]);
    pub const NATURAL_MINOR: Scale = Scale::known(&[0, 2, 3, 5, 7, 8, 10]);
    pub const HARMONIC_MINOR: Scale = Scale::known(&[0, 2, 3, 5, 7, 8, 11]);
    pub const MELODIC_MINOR: Scale = Scale::known(&[0, 2, 3, 5, 7, 9, 11]);
    pub const MAJOR_PENTATONIC: Scale = Scale::known(&[0, 2, 4, 7, 9]);
    pub const MINOR_PENTATONIC: Scale = Scale::known(&[0, 3, 5, 7, 10]);
    pub const BLUES: Scale = Scale::known(&[0, 3, 5, 6, 7, 10]);
    pub const WHOLE_TONE: Scale = Scale::known(&[0, 2, 4, 6, 8, 10]);
    pub const CHROMATIC: Scale = Scale::known(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);

    /// Fails with `OutOfRange` unless `intervals` equals its own normalization.
    pub fn new(intervals: IntervalSet) -> Result<Self> {
        if !intervals.is_normalized() {
            return Err(TheoryError::out_of_range("scale intervals", intervals));
        }
        Ok(Scale { intervals })
    }

    /// Build from raw offsets; same validation as `new`.
    pub fn from_semitones<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Interval>,
    {
        Scale::new(IntervalSet::new(values)?)
    }

    pub(crate) const fn known(values: &[i32]) -> Self {
        let mut i = 0;
        while i < values.len() {
            assert!(values[i] < Interval::SEMITONES_PER_OCTAVE, "scale offset not normalized");
            i += 1;
        }
        Scale {
            intervals: IntervalSet::of(values),
        }
    }

    pub fn intervals(&self) -> IntervalSet {
        self.intervals
    }

    /// Number of degrees.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn contains(&self, interval: Interval) -> bool {
        self.intervals.contains(interval)
    }

    pub fn has_degree(&self, degree: Degree) -> bool {
        self.intervals.has_degree(degree)
    }

    pub fn interval(&self, degree: Degree) -> Result<Interval> {
        self.intervals.interval(degree)
    }

    /// Modal rotation to `degree`. Rotating a normalized set keeps it
    /// normalized, so no re-validation is needed.
    pub fn transform(&self, degree: Degree) -> Result<Scale> {
        Ok(Scale {
            intervals: self.intervals.transform(degree)?,
        })
    }

    /// The chord built on `root` from the degrees in `template`.
    ///
    /// Fails with `OutOfRange` if `root` or any template degree is past the
    /// scale's last degree.
    pub fn chord(&self, root: Degree, template: &DegreeSet) -> Result<Chord> {
        let root_offset = self.interval(root)?;
        let rotated = self.transform(root)?;
        let steps = template
            .iter()
            .map(|degree| {
                rotated
                    .interval(degree)
                    .map(|interval| ChordStep { degree, interval })
            })
            .collect::<Result<Vec<_>>>()?;
        Chord::new(root, root_offset, *template, steps)
    }

    /// One chord per degree, in ascending degree order.
    pub fn chords(&self, template: &DegreeSet) -> Result<Vec<Chord>> {
        (1..=self.len() as u32)
            .map(|d| Degree::new(d).and_then(|root| self.chord(root, template)))
            .collect()
    }

    /// Concrete pitch classes of the scale starting on `tonic`.
    pub fn notes(&self, tonic: Note) -> Vec<Note> {
        self.intervals.iter().map(|i| tonic + i).collect()
    }
}

impl TryFrom<IntervalSet> for Scale {
    type Error = TheoryError;

    fn try_from(intervals: IntervalSet) -> Result<Self> {
        Scale::new(intervals)
    }
}

impl From<Scale> for IntervalSet {
    fn from(scale: Scale) -> Self {
        scale.intervals
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.intervals)
    }
}
