// Chords derived from scales, and their quality classification.
//
// A `Chord` is only produced by `Scale::chord`. It keeps the degree
// template it was built from and, for each template degree, the interval
// read off the scale after rotating it to the chord's root.
//
// Triad and seventh quality are computed on demand from exact semitone
// values; there is no tolerance and no enharmonic reasoning beyond the
// modulo-12 folding already done by the rotation. Anything outside the
// tables is unclassified (`None`).
//
//   third fifth  triad         triad      seventh  seventh chord
//   3     7      Minor         Minor      10       Minor7
//   4     7      Major         Major      11       Major7
//   3     6      Diminished    Minor      11       MinorMajor7
//   4     8      Augmented     Major      10       Dominant7
//                              Diminished 10       HalfDiminished7
//                              Diminished 9        Diminished7
//                              Diminished 11       DiminishedMajor7
//                              Augmented  10       Augmented7
//                              Augmented  11       AugmentedMajor7

use crate::degree::{Degree, DegreeSet};
use crate::error::Result;
use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::note::Note;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Common chord templates, as degree sets over the rotated scale.
pub mod templates {
    use crate::degree::DegreeSet;

    pub const TRIAD: DegreeSet = DegreeSet::of(&[1, 3, 5]);
    pub const SEVENTH: DegreeSet = DegreeSet::of(&[1, 3, 5, 7]);
    pub const SUSPENDED_2: DegreeSet = DegreeSet::of(&[1, 2, 5]);
    pub const SUSPENDED_4: DegreeSet = DegreeSet::of(&[1, 4, 5]);
    pub const POWER: DegreeSet = DegreeSet::of(&[1, 5]);
}

/// One template degree and the interval it resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChordStep {
    pub degree: Degree,
    pub interval: Interval,
}

/// A chord built on one degree of a scale.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Chord {
    root: Degree,
    root_offset: Interval,
    template: DegreeSet,
    steps: Vec<ChordStep>,
    intervals: IntervalSet,
}

impl Chord {
    pub(crate) fn new(
        root: Degree,
        root_offset: Interval,
        template: DegreeSet,
        steps: Vec<ChordStep>,
    ) -> Result<Self> {
        let intervals = IntervalSet::new(steps.iter().map(|s| s.interval))?;
        Ok(Chord {
            root,
            root_offset,
            template,
            steps,
            intervals,
        })
    }

    /// The scale degree the chord is built on.
    pub fn root(&self) -> Degree {
        self.root
    }

    /// Offset of the root from the source scale's tonic.
    pub fn root_offset(&self) -> Interval {
        self.root_offset
    }

    pub fn template(&self) -> DegreeSet {
        self.template
    }

    /// Steps in ascending template-degree order.
    pub fn steps(&self) -> &[ChordStep] {
        &self.steps
    }

    /// The interval at `degree` of the chord, if the template includes it.
    pub fn interval(&self, degree: Degree) -> Option<Interval> {
        self.steps
            .iter()
            .find(|s| s.degree == degree)
            .map(|s| s.interval)
    }

    /// All chord intervals as a set of offsets from the chord root.
    pub fn intervals(&self) -> IntervalSet {
        self.intervals
    }

    /// Requires degrees 1, 3 and 5.
    pub fn triad_type(&self) -> Option<TriadType> {
        self.interval(Degree::FIRST)?;
        let third = self.interval(Degree::THIRD)?;
        let fifth = self.interval(Degree::FIFTH)?;
        TriadType::classify(third, fifth)
    }

    /// Requires degrees 1, 3, 5 and 7.
    pub fn seventh_type(&self) -> Option<SeventhType> {
        let triad = self.triad_type()?;
        let seventh = self.interval(Degree::SEVENTH)?;
        SeventhType::classify(triad, seventh)
    }

    /// Concrete pitch classes when the source scale starts on `tonic`.
    pub fn notes(&self, tonic: Note) -> Vec<Note> {
        let root = tonic + self.root_offset;
        self.steps.iter().map(|s| root + s.interval).collect()
    }

    /// Chord symbol when the source scale starts on `tonic`, e.g. `Dm7`.
    /// Unclassified chords print their intervals: `G {0, 5, 7}`.
    pub fn name(&self, tonic: Note) -> String {
        let root = tonic + self.root_offset;
        if let Some(seventh) = self.seventh_type() {
            format!("{}{}", root, seventh.symbol())
        } else if let Some(triad) = self.triad_type() {
            format!("{}{}", root, triad.symbol())
        } else {
            format!("{} {}", root, self.intervals)
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Quality of a triad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriadType {
    Minor,
    Major,
    Diminished,
    Augmented,
}

impl TriadType {
    pub fn classify(third: Interval, fifth: Interval) -> Option<TriadType> {
        match (third.semitones(), fifth.semitones()) {
            (3, 7) => Some(TriadType::Minor),
            (4, 7) => Some(TriadType::Major),
            (3, 6) => Some(TriadType::Diminished),
            (4, 8) => Some(TriadType::Augmented),
            _ => None,
        }
    }

    /// Suffix after the root name: `""`, `"m"`, `"dim"`, `"aug"`.
    pub fn symbol(self) -> &'static str {
        match self {
            TriadType::Minor => "m",
            TriadType::Major => "",
            TriadType::Diminished => "dim",
            TriadType::Augmented => "aug",
        }
    }
}

impl fmt::Display for TriadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TriadType::Minor => "minor",
            TriadType::Major => "major",
            TriadType::Diminished => "diminished",
            TriadType::Augmented => "augmented",
        };
        f.write_str(name)
    }
}

/// Quality of a seventh chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeventhType {
    Minor7,
    Major7,
    MinorMajor7,
    Dominant7,
    HalfDiminished7,
    Diminished7,
    DiminishedMajor7,
    Augmented7,
    AugmentedMajor7,
}

impl SeventhType {
    pub fn classify(triad: TriadType, seventh: Interval) -> Option<SeventhType> {
        match (triad, seventh.semitones()) {
            (TriadType::Minor, 10) => Some(SeventhType::Minor7),
            (TriadType::Major, 11) => Some(SeventhType::Major7),
            (TriadType::Minor, 11) => Some(SeventhType::MinorMajor7),
            (TriadType::Major, 10) => Some(SeventhType::Dominant7),
            (TriadType::Diminished, 10) => Some(SeventhType::HalfDiminished7),
            (TriadType::Diminished, 9) => Some(SeventhType::Diminished7),
            (TriadType::Diminished, 11) => Some(SeventhType::DiminishedMajor7),
            (TriadType::Augmented, 10) => Some(SeventhType::Augmented7),
            (TriadType::Augmented, 11) => Some(SeventhType::AugmentedMajor7),
            _ => None,
        }
    }

    /// Full suffix after the root name, including the triad quality.
    pub fn symbol(self) -> &'static str {
        match self {
            SeventhType::Minor7 => "m7",
            SeventhType::Major7 => "maj7",
            SeventhType::MinorMajor7 => "mMaj7",
            SeventhType::Dominant7 => "7",
            SeventhType::HalfDiminished7 => "m7b5",
            SeventhType::Diminished7 => "dim7",
            SeventhType::DiminishedMajor7 => "dimMaj7",
            SeventhType::Augmented7 => "aug7",
            SeventhType::AugmentedMajor7 => "augMaj7",
        }
    }

    /// The triad underneath the seventh.
    pub fn triad(self) -> TriadType {
        match self {
            SeventhType::Minor7 | SeventhType::MinorMajor7 => TriadType::Minor,
            SeventhType::Major7 | SeventhType::Dominant7 => TriadType::Major,
            SeventhType::HalfDiminished7
            | SeventhType::Diminished7
            | SeventhType::DiminishedMajor7 => TriadType::Diminished,
            SeventhType::Augmented7 | SeventhType::AugmentedMajor7 => TriadType::Augmented,
        }
    }
}

impl fmt::Display for SeventhType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeventhType::Minor7 => "minor seventh",
            SeventhType::Major7 => "major seventh",
            SeventhType::MinorMajor7 => "minor-major seventh",
            SeventhType::Dominant7 => "dominant seventh",
            SeventhType::HalfDiminished7 => "half-diminished seventh",
            SeventhType::Diminished7 => "diminished seventh",
            SeventhType::DiminishedMajor7 => "diminished-major seventh",
            SeventhType::Augmented7 => "augmented seventh",
            SeventhType::AugmentedMajor7 => "augmented-major seventh",
        };
        f.write_str(name)
    }
}
