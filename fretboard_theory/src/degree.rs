// Scale and chord degrees.
//
// A `Degree` is a 1-based ordinal position counted upward from the tonic:
// degree 1 is the tonic itself, degree 3 the third tone of the scale, and
// so on. `DegreeSet` is an ascending set of degrees used as a chord
// template ("take degrees 1, 3 and 5 of the rotated scale").
//
// Both are validated at construction; zero is never a degree.

use crate::error::{Result, TheoryError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based ordinal position within a scale or chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Degree(u32);

impl Degree {
    pub const FIRST: Degree = Degree(1);
    pub const SECOND: Degree = Degree(2);
    pub const THIRD: Degree = Degree(3);
    pub const FOURTH: Degree = Degree(4);
    pub const FIFTH: Degree = Degree(5);
    pub const SIXTH: Degree = Degree(6);
    pub const SEVENTH: Degree = Degree(7);
    pub const NINTH: Degree = Degree(9);
    pub const ELEVENTH: Degree = Degree(11);
    pub const THIRTEENTH: Degree = Degree(13);

    /// Fails with `OutOfRange` for 0.
    pub fn new(value: u32) -> Result<Self> {
        if value < 1 {
            return Err(TheoryError::out_of_range("degree", value));
        }
        Ok(Degree(value))
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Zero-based position, for indexing into ordered collections.
    pub(crate) const fn offset(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u32> for Degree {
    type Error = TheoryError;

    fn try_from(value: u32) -> Result<Self> {
        Degree::new(value)
    }
}

impl From<Degree> for u32 {
    fn from(degree: Degree) -> Self {
        degree.0
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// DegreeSet
// ---------------------------------------------------------------------------

/// Largest degree a `DegreeSet` can hold.
pub const MAX_SET_DEGREE: u32 = 31;

/// An ascending set of distinct degrees in 1..=31.
///
/// Bit `d` of the mask marks degree `d`; bit 0 is always clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct DegreeSet {
    mask: u32,
}

impl DegreeSet {
    /// Build from any collection of degrees, dropping duplicates.
    pub fn new<I>(degrees: I) -> Result<Self>
    where
        I: IntoIterator<Item = Degree>,
    {
        let mut mask = 0u32;
        for degree in degrees {
            if degree.0 > MAX_SET_DEGREE {
                return Err(TheoryError::out_of_range("degree set member", degree.0));
            }
            mask |= 1 << degree.0;
        }
        Ok(DegreeSet { mask })
    }

    /// Compile-time constructor for the fixed templates in `chord::templates`.
    pub(crate) const fn of(degrees: &[u32]) -> Self {
        let mut mask = 0u32;
        let mut i = 0;
        while i < degrees.len() {
            let d = degrees[i];
            assert!(d >= 1 && d <= MAX_SET_DEGREE, "degree out of range");
            mask |= 1 << d;
            i += 1;
        }
        DegreeSet { mask }
    }

    pub fn contains(&self, degree: Degree) -> bool {
        degree.0 <= MAX_SET_DEGREE && self.mask & (1 << degree.0) != 0
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Highest degree in the set, if any.
    pub fn max(&self) -> Option<Degree> {
        if self.mask == 0 {
            None
        } else {
            Some(Degree(31 - self.mask.leading_zeros()))
        }
    }

    /// Degrees in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Degree> + use<> {
        let mut rest = self.mask;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let d = rest.trailing_zeros();
            rest &= rest - 1;
            Some(Degree(d))
        })
    }
}

impl TryFrom<Vec<u32>> for DegreeSet {
    type Error = TheoryError;

    fn try_from(values: Vec<u32>) -> Result<Self> {
        let degrees = values
            .into_iter()
            .map(Degree::new)
            .collect::<Result<Vec<_>>>()?;
        DegreeSet::new(degrees)
    }
}

impl From<DegreeSet> for Vec<u32> {
    fn from(set: DegreeSet) -> Self {
        set.iter().map(Degree::value).collect()
    }
}

impl fmt::Display for DegreeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, d) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "}}")
    }
}
