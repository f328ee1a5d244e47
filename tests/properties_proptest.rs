//! Property-based tests for the tokenizer, chord layout and transposer

use chordsheet::chordsheet::ast::{ChordToken, LineBlock};
use chordsheet::chordsheet::layout::{build_chord_row, place_chords, wrap_line};
use chordsheet::chordsheet::lexer::tokenize_line;
use chordsheet::chordsheet::music::{semitone_interval, transpose_chord, PitchClass};
use chordsheet::chordsheet::parser::{parse_document, strip_to_lyrics};
use proptest::prelude::*;

fn chord_symbol() -> impl Strategy<Value = String> {
    "[A-G][#b]?(m|7|maj7|sus4|m7b5|dim)?(/[A-G][#b]?)?"
}

fn lyric_fragment() -> impl Strategy<Value = String> {
    "[a-zа-я .,-]{0,8}"
}

proptest! {
    #[test]
    fn tokenizer_round_trip(parts in prop::collection::vec((prop::option::of(chord_symbol()), lyric_fragment()), 0..8)) {
        let mut source = String::new();
        let mut expected_lyrics = String::new();
        let mut expected_chords = Vec::new();
        for (chord, text) in &parts {
            if let Some(symbol) = chord {
                source.push_str(&format!("[{symbol}]"));
                expected_chords.push(ChordToken::new(symbol.clone(), expected_lyrics.chars().count()));
            }
            source.push_str(text);
            expected_lyrics.push_str(text);
        }

        let line = tokenize_line(&source);
        prop_assert_eq!(line.lyrics, expected_lyrics);
        prop_assert_eq!(line.chords, expected_chords);
    }

    #[test]
    fn chord_rows_never_collide(chords in prop::collection::vec((chord_symbol(), 0usize..30), 0..10)) {
        let tokens: Vec<ChordToken> = chords
            .iter()
            .map(|(symbol, column)| ChordToken::new(symbol.clone(), *column))
            .collect();
        let placed = place_chords(&tokens);

        prop_assert_eq!(placed.len(), tokens.len());
        for pair in placed.windows(2) {
            prop_assert!(pair[1].start > pair[0].end(), "{:?} touches {:?}", pair[0], pair[1]);
        }
        for chord in &placed {
            let anchor = tokens
                .iter()
                .filter(|t| t.symbol == chord.symbol)
                .map(|t| t.column)
                .min()
                .unwrap();
            prop_assert!(chord.start >= anchor);
        }

        let row = build_chord_row(&LineBlock::new(tokens.clone(), ""));
        let expected_width = placed.last().map(|c| c.end()).unwrap_or(0);
        prop_assert_eq!(row.chars().count(), expected_width);
    }

    #[test]
    fn transposition_composes_modulo_12(symbol in chord_symbol(), a in -24i32..24, b in -24i32..24, sharps: bool) {
        let stepwise = transpose_chord(&transpose_chord(&symbol, a, sharps), b, sharps);
        let direct = transpose_chord(&symbol, a + b, sharps);
        prop_assert_eq!(stepwise, direct);
    }

    #[test]
    fn octave_transposition_only_respells(symbol in chord_symbol(), octaves in -2i32..3, sharps: bool) {
        prop_assert_eq!(
            transpose_chord(&symbol, 12 * octaves, sharps),
            transpose_chord(&symbol, 0, sharps)
        );
    }

    #[test]
    fn interval_matches_pitch_arithmetic(from in 0i32..12, to in 0i32..12) {
        let from_name = PitchClass::new(from).name(chordsheet::chordsheet::music::Accidentals::Sharps);
        let to_name = PitchClass::new(to).name(chordsheet::chordsheet::music::Accidentals::Flats);
        let interval = semitone_interval(Some(from_name), Some(to_name));
        prop_assert_eq!(i32::from(interval), (to - from).rem_euclid(12));
    }

    #[test]
    fn strip_matches_parsed_lyrics(parts in prop::collection::vec((prop::option::of(chord_symbol()), "[a-z ]{1,8}"), 1..6)) {
        let body: String = parts
            .iter()
            .map(|(chord, text)| match chord {
                Some(symbol) => format!("[{symbol}]{text}"),
                None => text.clone(),
            })
            .collect();
        let source = format!("{{start_of_section: Verse}}\n{body}\n{{end_of_section}}");

        let doc = parse_document(&source).unwrap();
        let stripped = strip_to_lyrics(&source);
        let lyric_lines: Vec<&str> = stripped.lines().filter(|l| !l.trim().is_empty()).collect();
        let parsed_lines: Vec<&str> = doc
            .iter_lines()
            .map(|l| l.lyrics.as_str())
            .filter(|l| !l.trim().is_empty())
            .collect();
        prop_assert_eq!(lyric_lines, parsed_lines);
    }

    #[test]
    fn wrapping_keeps_every_chord(parts in prop::collection::vec((prop::option::of(chord_symbol()), "[a-z]{1,6} "), 1..16), width in 5usize..40) {
        let source: String = parts
            .iter()
            .map(|(chord, text)| match chord {
                Some(symbol) => format!("[{symbol}]{text}"),
                None => text.clone(),
            })
            .collect();
        let line = tokenize_line(&source);
        let segments = wrap_line(&line, width);

        let chord_count: usize = segments.iter().map(|s| s.chords.len()).sum();
        prop_assert_eq!(chord_count, line.chords.len());
        for segment in &segments {
            prop_assert!(segment.lyrics.chars().count() <= width);
        }
    }
}
