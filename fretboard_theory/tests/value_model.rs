// End-to-end checks of the value model through its public API only.
//
// Mirrors how a consumer uses the crate: parse note names, build scales,
// derive and classify chords, convert pitches to frequencies and back.

use fretboard_theory::{
    Degree, Frequency, Interval, IntervalSet, Key, Mode, Note, Octave, Pitch, Scale,
    SeventhType, TheoryError, TriadType, known_scales, templates,
};

fn degree(d: u32) -> Degree {
    Degree::new(d).unwrap()
}

#[test]
fn major_scale_triads_by_degree() {
    let major = Scale::from_semitones([0, 2, 4, 5, 7, 9, 11]).unwrap();
    let one = major.chord(degree(1), &templates::TRIAD).unwrap();
    let two = major.chord(degree(2), &templates::TRIAD).unwrap();
    assert_eq!(one.triad_type(), Some(TriadType::Major));
    assert_eq!(two.triad_type(), Some(TriadType::Minor));
}

#[test]
fn note_names_parse_and_print() {
    assert_eq!(Note::parse("C").unwrap(), Note::new(0).unwrap());
    assert_eq!(Note::parse("C#").unwrap(), Note::new(1).unwrap());
    assert_eq!(Note::parse("Db").unwrap(), Note::new(1).unwrap());
    assert_eq!(Note::parse("C♭♭").unwrap(), Note::new(10).unwrap());
    assert_eq!(Note::parse("B").unwrap(), Note::new(11).unwrap());
    assert_eq!(Note::new(1).unwrap().to_string(), "C#");

    for note in Note::ALL {
        assert_eq!(note.to_string().parse::<Note>().unwrap(), note);
    }
}

#[test]
fn pitch_reference_values() {
    let a4 = Pitch::new(Octave::new(4), Note::new(9).unwrap());
    let a3 = Pitch::new(Octave::new(3), Note::new(9).unwrap());
    let c0 = Pitch::new(Octave::new(0), Note::new(0).unwrap());
    assert_eq!(a4.frequency().hertz(), 440.0);
    assert_eq!(a3.frequency().hertz(), 220.0);
    assert_eq!(c0.index(), 0);
}

#[test]
fn every_pitch_survives_a_frequency_round_trip() {
    for index in -60..=180 {
        let pitch = Pitch::from_index(index).unwrap();
        assert_eq!(Pitch::from_frequency(pitch.frequency()).unwrap(), pitch, "index {index}");
    }
}

#[test]
fn extreme_octaves_and_intervals_never_panic() {
    let high = Pitch::parse("C300000000").unwrap();
    assert!(high.frequency().hertz().is_finite());
    assert!(Frequency::new(high.frequency().hertz()).is_ok());

    let e2 = Pitch::parse("E2").unwrap();
    assert!(e2.transpose(Interval::new(i32::MAX)).is_ok());
    assert_eq!(Note::E + Interval::new(i32::MAX), Note::B);

    let top = Pitch::new(Octave::new(i32::MAX), Note::B);
    assert!(matches!(top.transpose(Interval::OCTAVE), Err(TheoryError::OutOfRange { .. })));

    let max = Frequency::new(f64::MAX).unwrap();
    assert!(max.checked_add(max).unwrap_err().is_out_of_range());
}

#[test]
fn degree_past_the_end_is_out_of_range() {
    let set = IntervalSet::new([0, 3, 7]).unwrap();
    let err = set.interval(degree(set.len() as u32 + 1)).unwrap_err();
    assert!(matches!(err, TheoryError::OutOfRange { .. }));
}

#[test]
fn invalid_text_is_invalid_format() {
    assert!(matches!(Note::parse("H"), Err(TheoryError::InvalidFormat { .. })));
    assert!(matches!(Note::parse(""), Err(TheoryError::InvalidFormat { .. })));
    assert!(matches!(Pitch::parse("C#"), Err(TheoryError::InvalidFormat { .. })));
}

#[test]
fn invalid_numbers_are_out_of_range() {
    assert!(Degree::new(0).unwrap_err().is_out_of_range());
    assert!(Note::new(12).unwrap_err().is_out_of_range());
    assert!(Frequency::new(0.0).unwrap_err().is_out_of_range());
    assert!(Frequency::new(f64::NAN).unwrap_err().is_out_of_range());
    assert!(IntervalSet::new([-1]).unwrap_err().is_out_of_range());
}

#[test]
fn operations_never_modify_their_receiver() {
    let scale = Scale::MAJOR;
    let _ = scale.transform(degree(3)).unwrap();
    assert_eq!(scale, Scale::MAJOR);

    let set = IntervalSet::new([0, 4, 7]).unwrap();
    let _ = set.union(&IntervalSet::new([10]).unwrap());
    let _ = set.difference(&IntervalSet::new([4]).unwrap());
    assert_eq!(set, IntervalSet::new([0, 4, 7]).unwrap());

    let pitch = Pitch::parse("E2").unwrap();
    let _ = pitch.transpose(Interval::OCTAVE).unwrap();
    assert_eq!(pitch.to_string(), "E2");
}

#[test]
fn ii_v_i_in_b_flat() {
    let key = Key::from_mode("Bb".parse().unwrap(), Mode::Ionian);
    let names: Vec<String> = [2, 5, 1]
        .into_iter()
        .map(|d| key.chord(degree(d), &templates::SEVENTH).unwrap().name(key.tonic))
        .collect();
    assert_eq!(names, vec!["Cm7", "F7", "A#maj7"]);
}

#[test]
fn named_scales_produce_expected_sevenths() {
    let melodic = known_scales().get("melodic minor").unwrap();
    let sevenths: Vec<Option<SeventhType>> = melodic
        .chords(&templates::SEVENTH)
        .unwrap()
        .iter()
        .map(|c| c.seventh_type())
        .collect();
    assert_eq!(
        sevenths,
        vec![
            Some(SeventhType::MinorMajor7),
            Some(SeventhType::Minor7),
            Some(SeventhType::AugmentedMajor7),
            Some(SeventhType::Dominant7),
            Some(SeventhType::Dominant7),
            Some(SeventhType::HalfDiminished7),
            Some(SeventhType::HalfDiminished7),
        ]
    );
}
