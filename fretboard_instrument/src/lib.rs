// Fretted string instruments on top of the fretboard_theory value model.
//
// Architecture:
// - string.rs: `InstrumentString`, an open-string tuning plus pressed frets
// - fretboard.rs: `Fretboard`, an ordered non-empty list of shared strings
// - preset.rs: `TuningPreset`, named standard tunings
// - error.rs: `InstrumentError` for preset/scale names and config loading
// - main.rs: the `fretboard` CLI (scale listing, pitch/frequency conversion,
//   ASCII fretboard diagrams)
//
// Validation failures on strings and fretboards are reported as
// `fretboard_theory::TheoryError`, the same kinds the value model uses.

pub mod error;
pub mod fretboard;
pub mod preset;
pub mod string;

pub use error::InstrumentError;
pub use fretboard::Fretboard;
pub use preset::TuningPreset;
pub use string::InstrumentString;
