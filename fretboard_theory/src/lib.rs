// Fretboard music-theory value model.
//
// Pitches, intervals, scales and chords as exact, immutable values, plus the
// canonical transformations between them: transposition, modal rotation,
// chord derivation, equal-temperament frequency conversion, and triad/seventh
// classification. Every "mutating" operation returns a new value.
//
// Architecture (leaf-first):
// - interval.rs: `Interval`, signed semitones with modulo-12 normalization
// - degree.rs: `Degree` (1-based ordinal) and `DegreeSet` (chord templates)
// - interval_set.rs: `IntervalSet`, ascending set of offsets 0..=31 with
//   degree lookup, set algebra, and modal rotation
// - note.rs: `Note` pitch classes and the note-name text grammar
// - frequency.rs: `Frequency`, a validated positive Hertz value
// - pitch.rs: `Octave` and `Pitch`, linear index and frequency conversion
// - config.rs: `ConcertPitch`, the frequency reference (JSON-loadable)
// - scale.rs: `Scale`, normalized interval sets, rotation, chord derivation
// - chord.rs: `Chord`, `TriadType`/`SeventhType` classification, templates
// - mode.rs: the diatonic modes and `Key` (scale + tonic)
// - known.rs: read-only name -> scale table
// - error.rs: `TheoryError` (OutOfRange / InvalidFormat), `ConfigError`
//
// Nothing here performs I/O except `ConcertPitch::load`.

pub mod chord;
pub mod config;
pub mod degree;
pub mod error;
pub mod frequency;
pub mod interval;
pub mod interval_set;
pub mod known;
pub mod mode;
pub mod note;
pub mod pitch;
pub mod scale;

// Re-export key types at crate root for convenience.
pub use chord::{Chord, ChordStep, SeventhType, TriadType, templates};
pub use config::ConcertPitch;
pub use degree::{Degree, DegreeSet};
pub use error::{ConfigError, Result, TheoryError};
pub use frequency::Frequency;
pub use interval::Interval;
pub use interval_set::IntervalSet;
pub use known::{KnownScales, known_scales};
pub use mode::{Key, Mode};
pub use note::Note;
pub use pitch::{Octave, Pitch};
pub use scale::Scale;
