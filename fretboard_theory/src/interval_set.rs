// Ascending sets of non-negative semitone offsets.
//
// `IntervalSet` answers "which offsets from a root are present". It backs
// both scales (offsets from the tonic, always normalized into one octave)
// and fret sets on an instrument string (offsets from the open string).
//
// Representation: a 32-bit mask, bit `i` set when offset `i` is present.
// That caps members at 31. The mask never leaves this module; callers only
// see membership, ascending iteration, and degree lookup (degree `d` is the
// d-th smallest member).
//
// Modal rotation (`transform`) lives here rather than on `Scale` because it
// is also how a chord's root is rotated to the tonic.

use crate::degree::Degree;
use crate::error::{Result, TheoryError};
use crate::interval::Interval;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest offset an `IntervalSet` can hold.
pub const MAX_MEMBER: i32 = 31;

/// An immutable set of distinct semitone offsets in [0, 31].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct IntervalSet {
    mask: u32,
}

impl IntervalSet {
    pub const fn empty() -> Self {
        IntervalSet { mask: 0 }
    }

    /// Build from any collection of offsets, dropping duplicates.
    ///
    /// Fails with `OutOfRange` if any value lies outside [0, 31].
    pub fn new<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Interval>,
    {
        let mut mask = 0u32;
        for value in values {
            mask |= bit(value.into())?;
        }
        Ok(IntervalSet { mask })
    }

    /// Compile-time constructor for the fixed tables in `scale.rs`.
    pub(crate) const fn of(values: &[i32]) -> Self {
        let mut mask = 0u32;
        let mut i = 0;
        while i < values.len() {
            let v = values[i];
            assert!(v >= 0 && v <= MAX_MEMBER, "interval out of range");
            mask |= 1 << v;
            i += 1;
        }
        IntervalSet { mask }
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn contains(&self, value: Interval) -> bool {
        matches!(bit(value), Ok(b) if self.mask & b != 0)
    }

    /// True iff `degree <= len()`.
    pub fn has_degree(&self, degree: Degree) -> bool {
        degree.offset() < self.len()
    }

    /// The `degree`-th smallest member.
    pub fn interval(&self, degree: Degree) -> Result<Interval> {
        self.iter()
            .nth(degree.offset())
            .ok_or_else(|| TheoryError::out_of_range("degree", degree))
    }

    /// Members in ascending order.
    pub fn iter(&self) -> Iter {
        Iter { rest: self.mask }
    }

    /// Fold every member into one octave. Offsets an octave apart collapse,
    /// so the result may be smaller.
    pub fn normalize(&self) -> IntervalSet {
        let mask = self
            .iter()
            .fold(0u32, |acc, v| acc | 1 << v.normalize().semitones());
        IntervalSet { mask }
    }

    pub fn is_normalized(&self) -> bool {
        self.normalize() == *self
    }

    pub fn union(&self, other: &IntervalSet) -> IntervalSet {
        IntervalSet {
            mask: self.mask | other.mask,
        }
    }

    /// Members of `self` not in `other`. Removing an absent value is a no-op.
    pub fn difference(&self, other: &IntervalSet) -> IntervalSet {
        IntervalSet {
            mask: self.mask & !other.mask,
        }
    }

    pub fn insert(&self, value: Interval) -> Result<IntervalSet> {
        Ok(IntervalSet {
            mask: self.mask | bit(value)?,
        })
    }

    /// Removing a value that is not present (or not representable) is a no-op.
    pub fn remove(&self, value: Interval) -> IntervalSet {
        match bit(value) {
            Ok(b) => IntervalSet {
                mask: self.mask & !b,
            },
            Err(_) => *self,
        }
    }

    /// Modal rotation: make the `degree`-th member the new zero.
    ///
    /// With `r = interval(degree)`, the result is `{ (v - r).normalize() }`.
    pub fn transform(&self, degree: Degree) -> Result<IntervalSet> {
        let root = self.interval(degree)?;
        let mask = self
            .iter()
            .fold(0u32, |acc, v| acc | 1 << (v - root).normalize().semitones());
        Ok(IntervalSet { mask })
    }

    /// Shift every member by `by`. Fails if any member would leave [0, 31].
    pub fn transpose(&self, by: Interval) -> Result<IntervalSet> {
        IntervalSet::new(self.iter().map(|v| v + by))
    }
}

fn bit(value: Interval) -> Result<u32> {
    let v = value.semitones();
    if !(0..=MAX_MEMBER).contains(&v) {
        return Err(TheoryError::out_of_range("interval set member", v));
    }
    Ok(1 << v)
}

/// Ascending iterator over an `IntervalSet`.
#[derive(Clone, Debug)]
pub struct Iter {
    rest: u32,
}

impl Iterator for Iter {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        if self.rest == 0 {
            return None;
        }
        let v = self.rest.trailing_zeros();
        self.rest &= self.rest - 1;
        Some(Interval::new(v as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &IntervalSet {
    type Item = Interval;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl TryFrom<Vec<i32>> for IntervalSet {
    type Error = TheoryError;

    fn try_from(values: Vec<i32>) -> Result<Self> {
        IntervalSet::new(values)
    }
}

impl From<IntervalSet> for Vec<i32> {
    fn from(set: IntervalSet) -> Self {
        set.iter().map(Interval::semitones).collect()
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Decode the 12-bit encoding used in reference tables (bit i = offset i).
    pub(crate) fn from_mask(mask: u32) -> IntervalSet {
        IntervalSet::new((0..32i32).filter(|&i| (mask >> i) & 1 == 1)).unwrap()
    }

    fn semitones(set: &IntervalSet) -> Vec<i32> {
        set.iter().map(Interval::semitones).collect()
    }

    #[test]
    fn test_decodes_reference_masks() {
        assert_eq!(semitones(&from_mask(2741)), vec![0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(semitones(&from_mask(65)), vec![0, 6]);
        assert_eq!(semitones(&from_mask(4095)), (0..12).collect::<Vec<_>>());
        assert_eq!(semitones(&from_mask(1365)), vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(semitones(&from_mask(2137)), vec![0, 3, 4, 6, 11]);
        assert_eq!(semitones(&from_mask(3)), vec![0, 1]);
        assert!(from_mask(0).is_empty());
    }

    #[test]
    fn test_new_dedups_and_sorts() {
        let set = IntervalSet::new([7, 0, 4, 7, 0]).unwrap();
        assert_eq!(semitones(&set), vec![0, 4, 7]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(IntervalSet::new([-1]).unwrap_err().is_out_of_range());
        assert!(IntervalSet::new([0, 32]).unwrap_err().is_out_of_range());
        assert!(IntervalSet::new([31]).is_ok());
    }

    #[test]
    fn test_contains() {
        let set = IntervalSet::new([0, 4, 7]).unwrap();
        assert!(set.contains(Interval::MAJOR_THIRD));
        assert!(!set.contains(Interval::MINOR_THIRD));
        assert!(!set.contains(Interval::new(-4)));
        assert!(!set.contains(Interval::new(100)));
    }

    #[test]
    fn test_degree_lookup() {
        let set = IntervalSet::new([0, 2, 4, 5, 7, 9, 11]).unwrap();
        assert!(set.has_degree(Degree::SEVENTH));
        assert!(!set.has_degree(Degree::new(8).unwrap()));
        assert_eq!(set.interval(Degree::FIRST).unwrap(), Interval::new(0));
        assert_eq!(set.interval(Degree::FIFTH).unwrap(), Interval::new(7));
        assert_eq!(set.interval(Degree::SEVENTH).unwrap(), Interval::new(11));
    }

    #[test]
    fn test_degree_past_count_fails() {
        let set = IntervalSet::new([0, 4, 7]).unwrap();
        let past = Degree::new(set.len() as u32 + 1).unwrap();
        assert!(set.interval(past).unwrap_err().is_out_of_range());
        assert!(IntervalSet::empty().interval(Degree::FIRST).is_err());
    }

    #[test]
    fn test_degree_lookup_matches_iteration_for_all_12_tone_sets() {
        for mask in 0..4096u32 {
            let set = from_mask(mask);
            for (i, v) in set.iter().enumerate() {
                let degree = Degree::new(i as u32 + 1).unwrap();
                assert_eq!(set.interval(degree).unwrap(), v);
            }
        }
    }

    #[test]
    fn test_normalize_collapses_octaves() {
        let set = IntervalSet::new([0, 12, 14, 19, 31]).unwrap();
        assert_eq!(semitones(&set.normalize()), vec![0, 2, 7]);
        assert!(!set.is_normalized());
        assert!(set.normalize().is_normalized());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for mask in (0..u32::MAX).step_by(65_521) {
            let set = IntervalSet { mask };
            assert_eq!(set.normalize().normalize(), set.normalize());
        }
    }

    #[test]
    fn test_union_and_difference() {
        let a = IntervalSet::new([0, 4, 7]).unwrap();
        let b = IntervalSet::new([4, 10]).unwrap();
        assert_eq!(semitones(&a.union(&b)), vec![0, 4, 7, 10]);
        assert_eq!(semitones(&a.difference(&b)), vec![0, 7]);
        assert_eq!(a.difference(&IntervalSet::new([1]).unwrap()), a);
        // Receivers are untouched.
        assert_eq!(semitones(&a), vec![0, 4, 7]);
    }

    #[test]
    fn test_insert_remove() {
        let set = IntervalSet::empty().insert(Interval::new(5)).unwrap();
        assert_eq!(semitones(&set), vec![5]);
        assert!(set.insert(Interval::new(-1)).is_err());
        assert!(set.remove(Interval::new(5)).is_empty());
        assert_eq!(set.remove(Interval::new(6)), set);
        assert_eq!(set.remove(Interval::new(-6)), set);
    }

    #[test]
    fn test_transform_rotates() {
        let cases = [
            (2741, 6, 1453),
            (2137, 1, 2137),
            (2741, 7, 1387),
            (1453, 7, 1717),
            (1453, 2, 1387),
            (65, 2, 65),
            (2275, 2, 3185),
        ];
        for (from, degree, to) in cases {
            let rotated = from_mask(from).transform(Degree::new(degree).unwrap()).unwrap();
            assert_eq!(rotated, from_mask(to), "{} -> degree {}", from, degree);
        }
    }

    #[test]
    fn test_transform_past_count_fails() {
        let set = IntervalSet::new([0, 6]).unwrap();
        assert!(set.transform(Degree::THIRD).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_transpose() {
        let set = IntervalSet::new([0, 3, 7]).unwrap();
        assert_eq!(semitones(&set.transpose(Interval::new(2)).unwrap()), vec![2, 5, 9]);
        assert!(set.transpose(Interval::new(-1)).unwrap_err().is_out_of_range());
        assert!(set.transpose(Interval::new(25)).is_err());
        assert!(set.transpose(Interval::new(i32::MAX)).unwrap_err().is_out_of_range());
        assert!(set.transpose(Interval::new(i32::MIN)).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_display_and_serde() {
        let set = IntervalSet::new([7, 0, 4]).unwrap();
        assert_eq!(set.to_string(), "{0, 4, 7}");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[0,4,7]");
        assert_eq!(serde_json::from_str::<IntervalSet>(&json).unwrap(), set);
        assert!(serde_json::from_str::<IntervalSet>("[0, 40]").is_err());
    }
}
