// Signed semitone offsets.
//
// An `Interval` is plain integer semitones. As a transposition amount it may
// be negative or exceed an octave; as a scale offset it is folded into
// [0, 12) with `normalize()`. Arithmetic is ordinary integer arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A signed distance in semitones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval(i32);

impl Interval {
    pub const SEMITONES_PER_OCTAVE: i32 = 12;

    pub const UNISON: Interval = Interval(0);
    pub const MINOR_SECOND: Interval = Interval(1);
    pub const MAJOR_SECOND: Interval = Interval(2);
    pub const MINOR_THIRD: Interval = Interval(3);
    pub const MAJOR_THIRD: Interval = Interval(4);
    pub const PERFECT_FOURTH: Interval = Interval(5);
    pub const TRITONE: Interval = Interval(6);
    pub const PERFECT_FIFTH: Interval = Interval(7);
    pub const MINOR_SIXTH: Interval = Interval(8);
    pub const MAJOR_SIXTH: Interval = Interval(9);
    pub const MINOR_SEVENTH: Interval = Interval(10);
    pub const MAJOR_SEVENTH: Interval = Interval(11);
    pub const OCTAVE: Interval = Interval(12);

    pub const fn new(semitones: i32) -> Self {
        Interval(semitones)
    }

    pub const fn semitones(self) -> i32 {
        self.0
    }

    /// Fold into a single octave: `((v % 12) + 12) % 12`.
    pub const fn normalize(self) -> Self {
        Interval(self.0.rem_euclid(Self::SEMITONES_PER_OCTAVE))
    }
}

impl From<i32> for Interval {
    fn from(semitones: i32) -> Self {
        Interval(semitones)
    }
}

impl From<Interval> for i32 {
    fn from(interval: Interval) -> Self {
        interval.0
    }
}

// Arithmetic saturates at the i32 bounds. Consumers that need a checked
// range (sets, pitches) validate the saturated result.
impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval(self.0.saturating_neg())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
