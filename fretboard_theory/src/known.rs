// Named scales.
//
// A fixed, read-only table from name to `Scale`, built once on first use.
// It covers the common scale templates, the seven diatonic modes, and the
// four triad shapes. Several names can map to the same scale ("major" and
// "ionian"); reverse lookup returns the first name in table order.
//
// Lookups ignore case and treat '-' and '_' as spaces, so "Natural-Minor"
// finds "natural minor".

use crate::mode::Mode;
use crate::scale::Scale;
use std::sync::LazyLock;

/// Name-to-scale table in declaration order.
#[derive(Debug, Clone)]
pub struct KnownScales {
    entries: Vec<(&'static str, Scale)>,
}

static KNOWN: LazyLock<KnownScales> = LazyLock::new(KnownScales::standard);

/// The shared standard table.
pub fn known_scales() -> &'static KnownScales {
    &KNOWN
}

impl KnownScales {
    pub fn standard() -> Self {
        let mut entries = vec![
            ("major", Scale::MAJOR),
            ("natural minor", Scale::NATURAL_MINOR),
            ("minor", Scale::NATURAL_MINOR),
            ("harmonic minor", Scale::HARMONIC_MINOR),
            ("melodic minor", Scale::MELODIC_MINOR),
            ("major pentatonic", Scale::MAJOR_PENTATONIC),
            ("minor pentatonic", Scale::MINOR_PENTATONIC),
            ("blues", Scale::BLUES),
            ("whole tone", Scale::WHOLE_TONE),
            ("chromatic", Scale::CHROMATIC),
        ];
        entries.extend(Mode::ALL.iter().map(|m| (m.name(), m.scale())));
        entries.extend([
            ("diminished triad", const { Scale::known(&[0, 3, 6]) }),
            ("minor triad", const { Scale::known(&[0, 3, 7]) }),
            ("major triad", const { Scale::known(&[0, 4, 7]) }),
            ("augmented triad", const { Scale::known(&[0, 4, 8]) }),
        ]);
        KnownScales { entries }
    }

    pub fn get(&self, name: &str) -> Option<Scale> {
        let wanted = canonical_name(name);
        self.entries
            .iter()
            .find(|(n, _)| *n == wanted)
            .map(|(_, s)| *s)
    }

    /// First registered name for `scale`.
    pub fn name_of(&self, scale: &Scale) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, s)| s == scale)
            .map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Scale)> + '_ {
        self.entries.iter().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn canonical_name(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .replace(['-', '_'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval_set::tests::from_mask;

    #[test]
    fn test_lookup_is_forgiving() {
        let known = known_scales();
        assert_eq!(known.get("major"), Some(Scale::MAJOR));
        assert_eq!(known.get("  Natural-Minor "), Some(Scale::NATURAL_MINOR));
        assert_eq!(known.get("WHOLE_TONE"), Some(Scale::WHOLE_TONE));
        assert_eq!(known.get("dorian"), Some(Mode::Dorian.scale()));
        assert_eq!(known.get("bebop"), None);
    }

    #[test]
    fn test_triad_shapes_match_reference_masks() {
        let known = known_scales();
        assert_eq!(known.get("diminished triad").unwrap().intervals(), from_mask(73));
        assert_eq!(known.get("minor triad").unwrap().intervals(), from_mask(137));
        assert_eq!(known.get("major triad").unwrap().intervals(), from_mask(145));
        assert_eq!(known.get("augmented triad").unwrap().intervals(), from_mask(273));
    }

    #[test]
    fn test_reverse_lookup_prefers_first_name() {
        let known = known_scales();
        assert_eq!(known.name_of(&Scale::MAJOR), Some("major"));
        assert_eq!(known.name_of(&Mode::Aeolian.scale()), Some("natural minor"));
        assert_eq!(known.name_of(&Mode::Lydian.scale()), Some("lydian"));
        assert_eq!(known.name_of(&Scale::from_semitones([0, 1]).unwrap()), None);
    }

    #[test]
    fn test_names_are_unique_and_canonical() {
        let known = KnownScales::standard();
        let mut names: Vec<_> = known.names().collect();
        assert_eq!(names.len(), known.len());
        for name in &names {
            assert_eq!(canonical_name(name), *name);
        }
        names.sort();
        names.dedup();
        assert_eq!(names.len(), known.len());
        assert!(!known.is_empty());
        assert_eq!(known.iter().count(), known.len());
    }
}
