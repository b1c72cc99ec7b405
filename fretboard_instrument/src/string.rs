// A single string of a fretted instrument.
//
// A string is an open-string tuning pitch plus the set of frets currently
// held down, stored as non-negative semitone offsets from the open string.
// Fret 0 means the open string itself is marked. Offsets share the
// `IntervalSet` representation, so the highest usable fret is 31.
//
// Every operation returns a new string; the receiver is never modified.
// Operations that compute pitches fail with `OutOfRange` when a result's
// octave would not fit an i32.

use fretboard_theory::{Interval, IntervalSet, Pitch, Result, TheoryError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One instrument string: tuning plus pressed frets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentString {
    tuning: Pitch,
    pressed: IntervalSet,
}

impl InstrumentString {
    /// Fails with `OutOfRange` if any fret is negative or above 31.
    pub fn new<I>(tuning: Pitch, frets: I) -> Result<Self>
    where
        I: IntoIterator<Item = Interval>,
    {
        Ok(InstrumentString {
            tuning,
            pressed: IntervalSet::new(frets)?,
        })
    }

    /// A string with nothing pressed.
    pub fn open(tuning: Pitch) -> Self {
        InstrumentString {
            tuning,
            pressed: IntervalSet::empty(),
        }
    }

    pub fn tuning(&self) -> Pitch {
        self.tuning
    }

    /// Pressed frets, ascending.
    pub fn pressed(&self) -> IntervalSet {
        self.pressed
    }

    pub fn is_pressed(&self, fret: Interval) -> bool {
        self.pressed.contains(fret)
    }

    pub fn press_fret(&self, fret: Interval) -> Result<Self> {
        self.press_frets([fret])
    }

    pub fn press_frets<I>(&self, frets: I) -> Result<Self>
    where
        I: IntoIterator<Item = Interval>,
    {
        Ok(InstrumentString {
            tuning: self.tuning,
            pressed: self.pressed.union(&IntervalSet::new(frets)?),
        })
    }

    /// Releasing a fret that is not pressed is a no-op; a negative fret is
    /// still rejected.
    pub fn depress_fret(&self, fret: Interval) -> Result<Self> {
        self.depress_frets([fret])
    }

    pub fn depress_frets<I>(&self, frets: I) -> Result<Self>
    where
        I: IntoIterator<Item = Interval>,
    {
        let mut pressed = self.pressed;
        for fret in frets {
            check_fret(fret)?;
            pressed = pressed.remove(fret);
        }
        Ok(InstrumentString {
            tuning: self.tuning,
            pressed,
        })
    }

    /// Retune by `by`; pressed frets stay where they are.
    pub fn transpose(&self, by: Interval) -> Result<Self> {
        Ok(InstrumentString {
            tuning: self.tuning.transpose(by)?,
            pressed: self.pressed,
        })
    }

    /// The tuning transposed by each pressed fret, ascending.
    pub fn pitches(&self) -> Result<Vec<Pitch>> {
        self.pressed.iter().map(|fret| self.tuning.transpose(fret)).collect()
    }

    pub fn highest_pressed(&self) -> Option<Interval> {
        self.pressed.iter().last()
    }

    /// What the string sounds when plucked: the highest pressed fret, or the
    /// open string when nothing is pressed.
    pub fn sounding_pitch(&self) -> Result<Pitch> {
        self.tuning.transpose(self.highest_pressed().unwrap_or(Interval::UNISON))
    }
}

fn check_fret(fret: Interval) -> Result<()> {
    if fret.semitones() < 0 {
        return Err(TheoryError::OutOfRange {
            name: "fret",
            value: fret.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for InstrumentString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tuning, self.pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low_e() -> InstrumentString {
        InstrumentString::open(Pitch::parse("E2").unwrap())
    }

    fn fret(n: i32) -> Interval {
        Interval::new(n)
    }

    #[test]
    fn test_new_rejects_negative_frets() {
        let tuning = Pitch::parse("A2").unwrap();
        assert!(InstrumentString::new(tuning, [fret(-1)]).unwrap_err().is_out_of_range());
        assert!(InstrumentString::new(tuning, [fret(0), fret(5)]).is_ok());
    }

    #[test]
    fn test_press_and_depress() {
        let string = low_e();
        let pressed = string.press_fret(fret(3)).unwrap();
        assert!(pressed.is_pressed(fret(3)));
        assert!(!string.is_pressed(fret(3)));

        let released = pressed.depress_fret(fret(3)).unwrap();
        assert!(!released.is_pressed(fret(3)));
        assert_eq!(released, string);

        assert_eq!(string.depress_fret(fret(7)).unwrap(), string);
    }

    #[test]
    fn test_negative_frets_rejected_everywhere() {
        let string = low_e();
        assert!(string.press_fret(fret(-2)).unwrap_err().is_out_of_range());
        assert!(string.depress_fret(fret(-2)).unwrap_err().is_out_of_range());
        assert!(string.press_frets([fret(1), fret(-1)]).is_err());
    }

    #[test]
    fn test_pitches_follow_pressed_frets() {
        let string = low_e().press_frets([fret(5), fret(0), fret(12)]).unwrap();
        let names: Vec<String> = string.pitches().unwrap().iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["E2", "A2", "E3"]);
    }

    #[test]
    fn test_sounding_pitch() {
        let string = low_e();
        assert_eq!(string.sounding_pitch().unwrap().to_string(), "E2");
        let string = string.press_frets([fret(2), fret(3)]).unwrap();
        assert_eq!(string.highest_pressed(), Some(fret(3)));
        assert_eq!(string.sounding_pitch().unwrap().to_string(), "G2");
    }

    #[test]
    fn test_pitches_past_the_top_octave_fail() {
        let top = Pitch::parse(&format!("A#{}", i32::MAX)).unwrap();
        let string = InstrumentString::open(top);
        assert_eq!(string.sounding_pitch().unwrap(), top);
        let string = string.press_frets([fret(1), fret(2)]).unwrap();
        assert!(string.pitches().unwrap_err().is_out_of_range());
        assert!(string.sounding_pitch().unwrap_err().is_out_of_range());
        assert!(string.transpose(fret(2)).unwrap_err().is_out_of_range());
        assert!(low_e().transpose(fret(i32::MAX)).is_ok());
    }

    #[test]
    fn test_transpose_moves_tuning_only() {
        let string = low_e().press_fret(fret(2)).unwrap();
        let drop_d = string.transpose(fret(-2)).unwrap();
        assert_eq!(drop_d.tuning().to_string(), "D2");
        assert!(drop_d.is_pressed(fret(2)));
        assert_eq!(string.tuning().to_string(), "E2");
    }

    #[test]
    fn test_serde() {
        let string = low_e().press_fret(fret(5)).unwrap();
        let json = serde_json::to_string(&string).unwrap();
        assert_eq!(json, r#"{"tuning":"E2","pressed":[5]}"#);
        let back: InstrumentString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, string);
        assert!(serde_json::from_str::<InstrumentString>(r#"{"tuning":"E2","pressed":[-5]}"#).is_err());
    }
}
