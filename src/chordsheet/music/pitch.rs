//! Pitch classes and their spellings

use serde::{Deserialize, Serialize};
use std::fmt;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Which accidental to use when spelling a chromatic pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidentals {
    Sharps,
    Flats,
}

impl Accidentals {
    pub fn from_prefer_sharps(prefer_sharps: bool) -> Self {
        if prefer_sharps {
            Accidentals::Sharps
        } else {
            Accidentals::Flats
        }
    }

    pub fn prefers_sharps(self) -> bool {
        matches!(self, Accidentals::Sharps)
    }
}

/// One of the twelve equal-tempered pitch classes (C = 0 .. B = 11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Wraps any semitone count into 0..12
    pub fn new(semitone: i32) -> Self {
        Self(semitone.rem_euclid(12) as u8)
    }

    pub fn semitone(self) -> u8 {
        self.0
    }

    pub fn transpose(self, interval: i32) -> Self {
        Self::new(i32::from(self.0) + interval)
    }

    /// Upward distance from `self` to `other`, in 0..12
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (i32::from(other.0) - i32::from(self.0)).rem_euclid(12) as u8
    }

    pub fn name(self, accidentals: Accidentals) -> &'static str {
        match accidentals {
            Accidentals::Sharps => SHARP_NAMES[usize::from(self.0)],
            Accidentals::Flats => FLAT_NAMES[usize::from(self.0)],
        }
    }

    /// Parse a complete note name such as `"F#"` or `"Bb"`
    pub fn from_name(name: &str) -> Option<Self> {
        match parse_root(name) {
            Some((pitch, len)) if len == name.len() => Some(pitch),
            _ => None,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Accidentals::Sharps))
    }
}

fn natural_semitone(letter: char) -> Option<i32> {
    match letter {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Read the root note at the start of `text`
///
/// A root is an upper-case letter A-G optionally followed by `#` or `b`.
/// Returns the pitch and the number of bytes the root takes up. `Cb`, `B#`,
/// `E#` and `Fb` are read as the neighbouring natural.
pub fn parse_root(text: &str) -> Option<(PitchClass, usize)> {
    let mut chars = text.chars();
    let semitone = natural_semitone(chars.next()?)?;
    match chars.next() {
        Some('#') => Some((PitchClass::new(semitone + 1), 2)),
        Some('b') => Some((PitchClass::new(semitone - 1), 2)),
        _ => Some((PitchClass::new(semitone), 1)),
    }
}

/// Spell a note name with the requested accidental (`Db` <-> `C#`, ...)
///
/// Naturals are left alone; anything that is not a note name is returned as is.
pub fn respell(name: &str, accidentals: Accidentals) -> String {
    match PitchClass::from_name(name) {
        Some(pitch) => pitch.name(accidentals).to_string(),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("C", 0)]
    #[case("C#", 1)]
    #[case("Db", 1)]
    #[case("D", 2)]
    #[case("D#", 3)]
    #[case("Eb", 3)]
    #[case("E", 4)]
    #[case("F", 5)]
    #[case("F#", 6)]
    #[case("Gb", 6)]
    #[case("G", 7)]
    #[case("G#", 8)]
    #[case("Ab", 8)]
    #[case("A", 9)]
    #[case("A#", 10)]
    #[case("Bb", 10)]
    #[case("B", 11)]
    #[case("Cb", 11)]
    #[case("B#", 0)]
    #[case("E#", 5)]
    #[case("Fb", 4)]
    fn test_note_table(#[case] name: &str, #[case] semitone: u8) {
        assert_eq!(PitchClass::from_name(name).map(PitchClass::semitone), Some(semitone));
    }

    #[rstest]
    #[case("")]
    #[case("H")]
    #[case("c")]
    #[case("C##")]
    #[case("Cm")]
    fn test_not_a_note_name(#[case] name: &str) {
        assert_eq!(PitchClass::from_name(name), None);
    }

    #[test]
    fn test_parse_root_reports_length() {
        assert_eq!(parse_root("G#m7"), Some((PitchClass::new(8), 2)));
        assert_eq!(parse_root("Bbmaj7"), Some((PitchClass::new(10), 2)));
        assert_eq!(parse_root("Em6"), Some((PitchClass::new(4), 1)));
        assert_eq!(parse_root("N.C."), None);
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(PitchClass::new(11).transpose(1), PitchClass::new(0));
        assert_eq!(PitchClass::new(0).transpose(-1), PitchClass::new(11));
        assert_eq!(PitchClass::new(-13), PitchClass::new(11));
    }

    #[test]
    fn test_interval_to() {
        let c = PitchClass::new(0);
        assert_eq!(c.interval_to(PitchClass::new(7)), 7);
        assert_eq!(PitchClass::new(7).interval_to(c), 5);
    }

    #[rstest]
    #[case("Db", Accidentals::Sharps, "C#")]
    #[case("C#", Accidentals::Flats, "Db")]
    #[case("Eb", Accidentals::Sharps, "D#")]
    #[case("Gb", Accidentals::Sharps, "F#")]
    #[case("G#", Accidentals::Flats, "Ab")]
    #[case("A#", Accidentals::Flats, "Bb")]
    #[case("E", Accidentals::Flats, "E")]
    #[case("xyz", Accidentals::Flats, "xyz")]
    fn test_respell(#[case] name: &str, #[case] accidentals: Accidentals, #[case] expected: &str) {
        assert_eq!(respell(name, accidentals), expected);
    }
}
