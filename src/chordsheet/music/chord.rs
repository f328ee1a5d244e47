//! Single chord symbol transposition

use crate::chordsheet::music::pitch::{parse_root, Accidentals};

/// Transpose a chord symbol by `interval` semitones
///
/// Slash chords are split at the first `/` and both halves are moved
/// independently. Only the leading root of each half is rewritten and respelled
/// with the requested accidental; quality, extensions and alterations are kept
/// verbatim. A half that does not start with a root note passes through as is.
pub fn transpose_chord(symbol: &str, interval: i32, prefer_sharps: bool) -> String {
    let accidentals = Accidentals::from_prefer_sharps(prefer_sharps);
    match symbol.split_once('/') {
        Some((main, bass)) => format!(
            "{}/{}",
            transpose_part(main, interval, accidentals),
            transpose_part(bass, interval, accidentals)
        ),
        None => transpose_part(symbol, interval, accidentals),
    }
}

fn transpose_part(part: &str, interval: i32, accidentals: Accidentals) -> String {
    match parse_root(part) {
        Some((root, len)) => {
            let mut out = String::with_capacity(part.len() + 1);
            out.push_str(root.transpose(interval).name(accidentals));
            out.push_str(&part[len..]);
            out
        }
        None => part.to_string(),
    }
}
