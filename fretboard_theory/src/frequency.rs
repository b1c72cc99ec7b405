// Frequencies in Hertz.
//
// A `Frequency` is always positive and finite. NaN, infinities, zero and
// negative values are rejected at construction, so frequencies have a total
// order.

use crate::error::{Result, TheoryError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A positive frequency in Hertz.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Frequency(f64);

impl Frequency {
    /// Fails with `OutOfRange` for NaN, infinite, zero, or negative input.
    pub fn new(hertz: f64) -> Result<Self> {
        if !hertz.is_finite() || hertz <= 0.0 {
            return Err(TheoryError::out_of_range("frequency", hertz));
        }
        Ok(Frequency(hertz))
    }

    /// Clamp into `[f64::MIN_POSITIVE, f64::MAX]` instead of failing. Used for
    /// values computed from valid inputs, where only underflow to zero or
    /// overflow to infinity can leave the valid range.
    pub(crate) fn saturating(hertz: f64) -> Self {
        if hertz.is_nan() {
            return Frequency(f64::MIN_POSITIVE);
        }
        Frequency(hertz.clamp(f64::MIN_POSITIVE, f64::MAX))
    }

    pub const fn hertz(self) -> f64 {
        self.0
    }

    /// `self + other`, failing with `OutOfRange` if the sum overflows.
    pub fn checked_add(self, other: Frequency) -> Result<Frequency> {
        Frequency::new(self.0 + other.0)
    }

    /// `self - other`, failing with `OutOfRange` unless the result is positive.
    pub fn checked_sub(self, other: Frequency) -> Result<Frequency> {
        Frequency::new(self.0 - other.0)
    }
}

impl Eq for Frequency {}

impl PartialOrd for Frequency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frequency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Frequency {
    type Error = TheoryError;

    fn try_from(hertz: f64) -> Result<Self> {
        Frequency::new(hertz)
    }
}

impl From<Frequency> for f64 {
    fn from(frequency: Frequency) -> Self {
        frequency.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
