// Fretboard CLI entry point.
//
// Usage:
//   fretboard scale <name> [--tonic NOTE]
//   fretboard freq <PITCH>
//   fretboard pitch <HZ>
//   fretboard board [--preset NAME] [--transpose N] [--frets N]
//     [--scale NAME] [--tonic NOTE]
//
// Any command accepts `--concert PATH` to load a ConcertPitch JSON file
// (e.g. {"reference_frequency": 432.0}). Output goes to stdout; diagnostics
// go to stderr and are filtered with RUST_LOG.

use fretboard_instrument::{Fretboard, InstrumentError, TuningPreset};
use fretboard_theory::{
    ConcertPitch, Degree, DegreeSet, Frequency, Interval, Key, Note, Pitch, Scale, TheoryError,
    known_scales, templates,
};
use std::path::Path;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const DEFAULT_FRETS: i32 = 12;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), InstrumentError> {
    let concert = match parse_flag::<String>(args, "--concert") {
        Some(path) => ConcertPitch::load(Path::new(&path))?,
        None => ConcertPitch::default(),
    };
    debug!(
        reference = %concert.reference_pitch,
        hz = concert.reference_frequency.hertz(),
        "concert pitch"
    );

    match args.get(1).map(String::as_str) {
        Some("scale") => {
            let name = positional(args).unwrap_or("major");
            let tonic = parse_tonic(args)?;
            print_scale(name, tonic)
        }
        Some("freq") => {
            let text = positional(args).unwrap_or("A4");
            let pitch = Pitch::parse(text)?;
            println!("{} = {:.3} Hz", pitch, concert.frequency_of(pitch).hertz());
            Ok(())
        }
        Some("pitch") => {
            let text = positional(args).unwrap_or("440");
            let hz: f64 = text.trim().parse().map_err(|_| TheoryError::InvalidFormat {
                input: text.to_string(),
                reason: "expected a frequency in Hz",
            })?;
            let frequency = Frequency::new(hz)?;
            let pitch = concert.pitch_of(frequency)?;
            println!(
                "{} Hz ~ {} ({:.3} Hz)",
                frequency,
                pitch,
                concert.frequency_of(pitch).hertz()
            );
            Ok(())
        }
        Some("board") => print_board(args),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_scale(name: &str, tonic: Note) -> Result<(), InstrumentError> {
    let scale = lookup_scale(name)?;
    let key = Key::new(tonic, scale);
    let notes: Vec<String> = key.notes().iter().map(|n| n.to_string()).collect();
    println!("{} {}: {}", tonic, name, notes.join(" "));
    println!("intervals: {}", scale);

    for d in 1..=scale.len() as u32 {
        let degree = Degree::new(d)?;
        let triad = chord_name(&key, degree, &templates::TRIAD);
        let seventh = chord_name(&key, degree, &templates::SEVENTH);
        println!("  {:>2}  {:<3} {:<6} {}", d, key.note(degree)?, triad, seventh);
    }
    Ok(())
}

/// Chord name on `degree`, or "-" when the scale is too short for it.
fn chord_name(key: &Key, degree: Degree, template: &DegreeSet) -> String {
    match key.chord(degree, template) {
        Ok(chord) => chord.name(key.tonic),
        Err(e) => {
            debug!(%degree, error = %e, "no chord");
            "-".to_string()
        }
    }
}

fn print_board(args: &[String]) -> Result<(), InstrumentError> {
    let preset: TuningPreset = match parse_flag::<String>(args, "--preset") {
        Some(name) => name.parse()?,
        None => TuningPreset::StandardGuitar,
    };
    let transpose: i32 = parse_flag(args, "--transpose").unwrap_or(0);
    let frets: i32 = parse_flag(args, "--frets").unwrap_or(DEFAULT_FRETS);

    let mut board = Fretboard::with_preset(preset).transpose(Interval::new(transpose))?;
    if let Some(name) = parse_flag::<String>(args, "--scale") {
        let key = Key::new(parse_tonic(args)?, lookup_scale(&name)?);
        board = board.press_matching(frets, |p| key.contains(p.note))?;
        println!("{} {} on {}", key.tonic, name, preset);
    } else {
        println!("{}", preset);
    }

    for line in render_board(&board, frets) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per string, highest string first, pressed frets labelled with
/// their note name.
fn render_board(board: &Fretboard, frets: i32) -> Vec<String> {
    let mut lines: Vec<String> = board
        .strings()
        .map(|s| {
            let mut line = format!("{:<4}", s.tuning().to_string());
            for fret in 0..=frets.max(0) {
                let fret = Interval::new(fret);
                let cell = if s.is_pressed(fret) {
                    format!("{:-^4}", (s.tuning().note + fret).to_string())
                } else {
                    "----".to_string()
                };
                line.push_str(&cell);
                line.push(if fret == Interval::UNISON { '‖' } else { '|' });
            }
            line
        })
        .collect();
    lines.reverse();
    lines
}

fn lookup_scale(name: &str) -> Result<Scale, InstrumentError> {
    known_scales()
        .get(name)
        .ok_or_else(|| InstrumentError::UnknownScale(name.to_string()))
}

fn parse_tonic(args: &[String]) -> Result<Note, InstrumentError> {
    match parse_flag::<String>(args, "--tonic") {
        Some(text) => Ok(Note::parse(&text)?),
        None => Ok(Note::C),
    }
}

/// The argument after the command, unless it is a flag.
fn positional(args: &[String]) -> Option<&str> {
    args.get(2)
        .filter(|s| !s.starts_with("--"))
        .map(|s| s.as_str())
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

fn print_usage() {
    println!("usage:");
    println!("  fretboard scale <name> [--tonic NOTE]");
    println!("  fretboard freq <PITCH>");
    println!("  fretboard pitch <HZ>");
    println!("  fretboard board [--preset NAME] [--transpose N] [--frets N] [--scale NAME] [--tonic NOTE]");
    println!("  (any command) --concert PATH");
    println!();
    let names: Vec<&str> = known_scales().names().collect();
    println!("scales: {}", names.join(", "));
    let presets: Vec<&str> = TuningPreset::ALL.iter().map(|p| p.name()).collect();
    println!("presets: {}", presets.join(", "));
}
