//! Keys and the two questions asked of them: how far apart, and sharps or flats

use crate::chordsheet::music::pitch::{parse_root, PitchClass};
use std::fmt;

/// Minor-quality suffixes, longest first
const MINOR_SUFFIXES: [&str; 3] = ["minor", "min", "m"];

/// A musical key: a root note and whether it is minor
///
/// Only the root takes part in interval arithmetic. The quality matters for
/// the accidental preference: `D` prefers sharps, `Dm` prefers flats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub root: PitchClass,
    /// The root as written, e.g. `"Bb"`, used for the preference lookup
    pub root_name: String,
    pub minor: bool,
}

impl Key {
    /// Read a key name such as `"G"`, `"F#m"` or `"Bbmin"`
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (root_text, minor) = MINOR_SUFFIXES
            .iter()
            .find_map(|suffix| text.strip_suffix(suffix).map(|rest| (rest, true)))
            .unwrap_or((text, false));
        let root = PitchClass::from_name(root_text)?;
        Some(Self {
            root,
            root_name: root_text.to_string(),
            minor,
        })
    }

    /// Whether chords in this key read best with sharps
    ///
    /// Flat keys are the flat side of the circle of fifths (F Bb Eb Ab Db Gb)
    /// and their relative minors (Dm Gm Cm Fm Bbm Ebm). Every other key,
    /// enharmonic spellings such as `A#` included, prefers sharps.
    pub fn prefers_sharps(&self) -> bool {
        let flat = if self.minor {
            matches!(
                self.root_name.as_str(),
                "D" | "G" | "C" | "F" | "Bb" | "Eb"
            )
        } else {
            matches!(
                self.root_name.as_str(),
                "F" | "Bb" | "Eb" | "Ab" | "Db" | "Gb"
            )
        };
        !flat
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root_name, if self.minor { "m" } else { "" })
    }
}

fn parse_optional(key: Option<&str>) -> Option<Key> {
    let text = key?;
    let parsed = Key::parse(text);
    if parsed.is_none() && !text.trim().is_empty() {
        tracing::debug!(key = text, "unrecognised key name");
    }
    parsed
}

/// Semitones to move up to get from `from_key` to `to_key`, in 0..12
///
/// A missing or unreadable key on either side yields 0.
pub fn semitone_interval(from_key: Option<&str>, to_key: Option<&str>) -> u8 {
    match (parse_optional(from_key), parse_optional(to_key)) {
        (Some(from), Some(to)) => from.root.interval_to(to.root),
        _ => 0,
    }
}

/// Accidental preference for a key; missing or unreadable keys prefer sharps
pub fn prefer_sharps(key: Option<&str>) -> bool {
    parse_optional(key).map_or(true, |key| key.prefers_sharps())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_semitone_interval_basic() {
        assert_eq!(semitone_interval(Some("C"), Some("D")), 2);
        assert_eq!(semitone_interval(Some("C"), Some("G")), 7);
        assert_eq!(semitone_interval(Some("G"), Some("C")), 5);
        assert_eq!(semitone_interval(Some("E"), Some("E")), 0);
    }

    #[test]
    fn test_semitone_interval_edge_cases() {
        assert_eq!(semitone_interval(None, Some("D")), 0);
        assert_eq!(semitone_interval(Some("C"), None), 0);
        assert_eq!(semitone_interval(Some("Db"), Some("C#")), 0);
        assert_eq!(semitone_interval(Some("C"), Some("H")), 0);
        assert_eq!(semitone_interval(Some(""), Some("D")), 0);
    }

    #[test]
    fn test_minor_quality_does_not_change_interval() {
        assert_eq!(semitone_interval(Some("Am"), Some("C")), 3);
        assert_eq!(semitone_interval(Some("A"), Some("Cm")), 3);
        assert_eq!(semitone_interval(Some("F#m"), Some("Gbmin")), 0);
    }

    #[test]
    fn test_key_parse() {
        let key = Key::parse(" Bbm ").unwrap();
        assert_eq!(key.root, PitchClass::new(10));
        assert_eq!(key.root_name, "Bb");
        assert!(key.minor);
        assert_eq!(key.to_string(), "Bbm");
        assert!(Key::parse("m").is_none());
        assert!(Key::parse("Xm").is_none());
        assert!(!Key::parse("Eb").unwrap().minor);
    }

    #[rstest]
    #[case("C", true)]
    #[case("G", true)]
    #[case("D", true)]
    #[case("A", true)]
    #[case("E", true)]
    #[case("B", true)]
    #[case("F#", true)]
    #[case("C#", true)]
    #[case("Cb", true)]
    #[case("F", false)]
    #[case("Bb", false)]
    #[case("Eb", false)]
    #[case("Ab", false)]
    #[case("Db", false)]
    #[case("Gb", false)]
    fn test_prefer_sharps_major(#[case] key: &str, #[case] sharps: bool) {
        assert_eq!(prefer_sharps(Some(key)), sharps, "key {key}");
    }

    #[rstest]
    #[case("Am", true)]
    #[case("Em", true)]
    #[case("Bm", true)]
    #[case("F#m", true)]
    #[case("C#m", true)]
    #[case("G#m", true)]
    #[case("D#m", true)]
    #[case("A#m", true)]
    #[case("Abm", true)]
    #[case("Dm", false)]
    #[case("Gm", false)]
    #[case("Cm", false)]
    #[case("Fm", false)]
    #[case("Bbm", false)]
    #[case("Ebm", false)]
    fn test_prefer_sharps_minor(#[case] key: &str, #[case] sharps: bool) {
        assert_eq!(prefer_sharps(Some(key)), sharps, "key {key}");
    }

    #[test]
    fn test_prefer_sharps_without_key() {
        assert!(prefer_sharps(None));
        assert!(prefer_sharps(Some("nonsense")));
    }
}
