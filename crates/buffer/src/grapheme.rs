// Chunk: docs/chunks/grapheme_cluster_awareness - Grapheme cluster boundary helpers

//! Grapheme cluster boundary detection at the cursor.
//!
//! The buffer stores Rust `char` (Unicode scalar values) and its baseline
//! operations move and delete one `char` at a time. A grapheme cluster is what
//! users perceive as a single "character", which includes:
//!
//! - ZWJ emoji sequences: 👨‍👩‍👧‍👦 (4 codepoints + 3 ZWJ = 7 chars)
//! - Combining character sequences: é (e + combining acute = 2 chars)
//! - Regional indicator pairs: 🇺🇸 (2 chars)
//! - `\r\n` line endings
//!
//! The helpers here only look at the line segment adjacent to the cursor.
//! A line feed is always a cluster boundary on its far side, so segmenting
//! from the start of the current line (or up to the next line break) yields
//! the same clusters as segmenting the whole document.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the number of chars in the last grapheme cluster of `before`.
///
/// `before` is the text to the left of the cursor, in document order.
/// Returns 0 if `before` is empty.
pub fn grapheme_len_before(before: &[char]) -> usize {
    let Some(&last) = before.last() else {
        return 0;
    };

    if last == '\n' {
        let crlf = before.len() >= 2 && before[before.len() - 2] == '\r';
        return if crlf { 2 } else { 1 };
    }

    // Fast path: an ASCII char preceded by ASCII (or nothing) is a
    // single-char cluster. A non-ASCII predecessor may be a prepend mark.
    let prev_is_ascii = before.len() < 2 || before[before.len() - 2].is_ascii();
    if last.is_ascii() && prev_is_ascii {
        return 1;
    }

    let line_start = before
        .iter()
        .rposition(|&c| c == '\n')
        .map_or(0, |i| i + 1);
    let segment: String = before[line_start..].iter().collect();

    segment
        .graphemes(true)
        .next_back()
        .map_or(1, |g| g.chars().count())
}

/// Returns the number of chars in the first grapheme cluster of `after`.
///
/// `after` yields the text to the right of the cursor in document order.
/// Returns 0 if it yields nothing.
pub fn grapheme_len_after<I>(after: I) -> usize
where
    I: IntoIterator<Item = char>,
{
    let mut chars = after.into_iter().peekable();
    let Some(first) = chars.next() else {
        return 0;
    };

    match first {
        '\r' => return if chars.peek() == Some(&'\n') { 2 } else { 1 },
        '\n' => return 1,
        _ => {}
    }

    // Fast path: ASCII followed by ASCII (or nothing) is a single-char cluster.
    match chars.peek() {
        None => return 1,
        Some(next) if first.is_ascii() && next.is_ascii() => return 1,
        _ => {}
    }

    // There is always a cluster break before CR and LF.
    let mut segment = String::new();
    segment.push(first);
    segment.extend(chars.take_while(|&c| c != '\r' && c != '\n'));

    segment
        .graphemes(true)
        .next()
        .map_or(1, |g| g.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // ==================== ASCII Tests ====================

    #[test]
    fn test_ascii_len_before() {
        assert_eq!(grapheme_len_before(&chars("")), 0);
        assert_eq!(grapheme_len_before(&chars("h")), 1);
        assert_eq!(grapheme_len_before(&chars("hello")), 1);
    }

    #[test]
    fn test_ascii_len_after() {
        assert_eq!(grapheme_len_after("".chars()), 0);
        assert_eq!(grapheme_len_after("o".chars()), 1);
        assert_eq!(grapheme_len_after("hello".chars()), 1);
    }

    // ==================== Line Ending Tests ====================

    #[test]
    fn test_crlf_is_one_cluster() {
        assert_eq!(grapheme_len_before(&chars("ab\r\n")), 2);
        assert_eq!(grapheme_len_after("\r\nab".chars()), 2);
    }

    #[test]
    fn test_lone_line_breaks() {
        assert_eq!(grapheme_len_before(&chars("ab\n")), 1);
        assert_eq!(grapheme_len_after("\nab".chars()), 1);
        assert_eq!(grapheme_len_after("\rab".chars()), 1);
    }

    // ==================== ZWJ Emoji Tests ====================

    #[test]
    fn test_zwj_emoji_len_before() {
        // 👨‍👩‍👧‍👦 is 7 chars: U+1F468 U+200D U+1F469 U+200D U+1F467 U+200D U+1F466
        assert_eq!(grapheme_len_before(&chars("a👨‍👩‍👧‍👦")), 7);
    }

    #[test]
    fn test_zwj_emoji_len_after() {
        assert_eq!(grapheme_len_after("👨‍👩‍👧‍👦b".chars()), 7);
    }

    // ==================== Combining Character Tests ====================

    #[test]
    fn test_combining_len_before() {
        assert_eq!(grapheme_len_before(&chars("ae\u{0301}")), 2);
    }

    #[test]
    fn test_combining_len_after_ascii_base() {
        // ASCII base followed by a non-ASCII combining mark takes the slow path
        assert_eq!(grapheme_len_after("e\u{0301}b".chars()), 2);
    }

    // ==================== Regional Indicator Tests ====================

    #[test]
    fn test_flag_pairs() {
        // 🇺🇸🇬🇧 is two flags of two regional indicators each
        assert_eq!(grapheme_len_before(&chars("a🇺🇸🇬🇧")), 2);
        assert_eq!(grapheme_len_after("🇺🇸🇬🇧".chars()), 2);
    }

    // ==================== Prepend Tests ====================

    #[test]
    fn test_prepend_mark_joins_following_ascii() {
        // U+0600 ARABIC NUMBER SIGN is a prepend char; it clusters with the digit
        assert_eq!(grapheme_len_before(&chars("a\u{0600}1")), 2);
        assert_eq!(grapheme_len_after("\u{0600}1b".chars()), 2);
    }

    #[test]
    fn test_segment_starts_at_previous_line() {
        // The flag on the previous line must not pair with this one
        assert_eq!(grapheme_len_before(&chars("🇺\n🇸🇬")), 2);
    }
}
