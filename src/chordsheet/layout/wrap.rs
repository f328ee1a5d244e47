//! Width-bound wrapping of lyric lines

use crate::chordsheet::ast::{ChordToken, LineBlock};

fn is_break(character: char) -> bool {
    character.is_whitespace() || character == '-'
}

/// Split a line into blocks no wider than `width` chars
///
/// Each segment ends after the last whitespace or hyphen that fits, or hard at
/// `width` when there is none. Trailing whitespace is trimmed from a segment and
/// leading whitespace is skipped before the next one. A chord belongs to the
/// segment whose range `[segment start, next segment start)` holds its column
/// and is rebased to that start; chords at or past the end of the lyric stay
/// with the last segment. A `width` of 0 disables wrapping.
pub fn wrap_line(line: &LineBlock, width: usize) -> Vec<LineBlock> {
    let chars: Vec<char> = line.lyrics.chars().collect();
    if width == 0 || chars.len() <= width {
        return vec![line.clone()];
    }

    let mut result = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let hard_end = (start + width).min(chars.len());
        let end = if hard_end < chars.len() {
            (start + 1..=hard_end)
                .rev()
                .find(|&i| is_break(chars[i - 1]))
                .unwrap_or(hard_end)
        } else {
            hard_end
        };

        let segment: String = chars[start..end].iter().collect();
        let mut next_start = end;
        while next_start < chars.len() && chars[next_start].is_whitespace() {
            next_start += 1;
        }
        let is_last = next_start >= chars.len();

        let chords = line
            .chords
            .iter()
            .filter(|c| c.column >= start && (is_last || c.column < next_start))
            .map(|c| ChordToken::new(c.symbol.clone(), c.column - start))
            .collect();

        result.push(LineBlock::new(chords, segment.trim_end()));
        start = next_start;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chordsheet::lexer::tokenize_line;

    #[test]
    fn test_short_line_is_untouched() {
        let line = tokenize_line("[C]short");
        assert_eq!(wrap_line(&line, 40), vec![line.clone()]);
        assert_eq!(wrap_line(&line, 0), vec![line]);
    }

    #[test]
    fn test_breaks_at_last_space() {
        let line = tokenize_line("[C]one two [G]three four");
        let parts = wrap_line(&line, 12);
        let lyrics: Vec<&str> = parts.iter().map(|p| p.lyrics.as_str()).collect();
        assert_eq!(lyrics, vec!["one two", "three four"]);
        assert_eq!(parts[0].chords, vec![ChordToken::new("C", 0)]);
        assert_eq!(parts[1].chords, vec![ChordToken::new("G", 0)]);
    }

    #[test]
    fn test_breaks_after_hyphen() {
        let line = LineBlock::from_lyrics("well-known words");
        let parts = wrap_line(&line, 8);
        let lyrics: Vec<&str> = parts.iter().map(|p| p.lyrics.as_str()).collect();
        assert_eq!(lyrics, vec!["well-", "known", "words"]);
    }

    #[test]
    fn test_hard_break_without_whitespace() {
        let line = LineBlock::from_lyrics("abcdefghij");
        let parts = wrap_line(&line, 4);
        let lyrics: Vec<&str> = parts.iter().map(|p| p.lyrics.as_str()).collect();
        assert_eq!(lyrics, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_chords_are_rebased() {
        let line = tokenize_line("aaaa b[D]bbb cc[E]cc");
        let parts = wrap_line(&line, 7);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].lyrics, "bbbb");
        assert_eq!(parts[1].chords, vec![ChordToken::new("D", 1)]);
        assert_eq!(parts[2].lyrics, "cccc");
        assert_eq!(parts[2].chords, vec![ChordToken::new("E", 2)]);
    }

    #[test]
    fn test_trailing_chord_stays_on_last_segment() {
        let line = tokenize_line("над безоднею ха[E]осу[F#] мене[G#m7].        [D#m7]");
        let parts = wrap_line(&line, 20);
        let last = parts.last().unwrap();
        assert_eq!(last.symbols().last(), Some(&"D#m7"));
        let total: usize = parts.iter().map(|p| p.chords.len()).sum();
        assert_eq!(total, line.chords.len());
    }

    #[test]
    fn test_chord_in_skipped_whitespace_stays_with_previous_segment() {
        let line = tokenize_line("one two [A]  three");
        let parts = wrap_line(&line, 8);
        assert_eq!(parts[0].lyrics, "one two");
        assert_eq!(parts[0].chords, vec![ChordToken::new("A", 8)]);
        assert_eq!(parts[1].lyrics, "three");
        assert!(parts[1].chords.is_empty());
    }
}
