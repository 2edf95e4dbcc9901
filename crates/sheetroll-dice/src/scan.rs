//! Locating dice notation inside free text

use std::ops::Range;

use crate::token::{scan_token, DiceToken};

/// A dice-shaped substring found in a larger text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceMatch<'a> {
    text: &'a str,
    start: usize,
    token: DiceToken<'a>,
}

impl<'a> DiceMatch<'a> {
    /// The matched substring
    pub fn as_str(&self) -> &'a str {
        &self.text[self.range()]
    }

    /// Byte range of the match in the searched text
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.token.len
    }

    /// Byte offset where the match starts
    pub fn start(&self) -> usize {
        self.start
    }

    /// The scanned token
    pub fn token(&self) -> &DiceToken<'a> {
        &self.token
    }

    /// Copy of the searched text with the match replaced by `replacement`
    pub fn replace_with(&self, replacement: &str) -> String {
        let range = self.range();
        let mut out = String::with_capacity(self.text.len() + replacement.len());
        out.push_str(&self.text[..range.start]);
        out.push_str(replacement);
        out.push_str(&self.text[range.end..]);
        out
    }
}

/// Find the leftmost dice-shaped substring in `text`
///
/// A match starting at an earlier offset always wins, and at a given offset the longest
/// token is taken, so `"11d6+2"` matches as a whole rather than as `"1d6+2"`.
///
/// # Example
/// ```rust
/// use sheetroll_dice::find_dice;
///
/// let found = find_dice("STR + 1d20+5").unwrap();
/// assert_eq!(found.as_str(), "1d20+5");
/// assert_eq!(found.replace_with("17"), "STR + 17");
///
/// assert!(find_dice("2 * 3").is_none());
/// ```
pub fn find_dice(text: &str) -> Option<DiceMatch<'_>> {
    text.char_indices().find_map(|(start, _)| {
        scan_token(&text[start..]).map(|token| DiceMatch { text, start, token })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finds_first_token() {
        let found = find_dice("1d4 + 2d6").unwrap();
        assert_eq!(found.as_str(), "1d4");
        assert_eq!(found.range(), 0..3);
    }

    #[test]
    fn test_finds_token_inside_parentheses() {
        let found = find_dice("2 * (1d4) + 1").unwrap();
        assert_eq!(found.as_str(), "1d4");
        assert_eq!(found.start(), 5);
        assert_eq!(found.replace_with("3"), "2 * (3) + 1");
    }

    #[test]
    fn test_takes_whole_digit_run() {
        let found = find_dice("x11d6+2").unwrap();
        assert_eq!(found.as_str(), "11d6+2");
        assert_eq!(found.token().count, Some("11"));
    }

    #[test]
    fn test_modifier_is_greedy() {
        // The modifier belongs to the dice token, not to the surrounding arithmetic
        let found = find_dice("2d6+3*2").unwrap();
        assert_eq!(found.as_str(), "2d6+3");
        assert_eq!(found.replace_with("9"), "9*2");
    }

    #[test]
    fn test_only_first_occurrence_replaced() {
        let found = find_dice("d6 + d6").unwrap();
        assert_eq!(found.replace_with("4"), "4 + d6");
    }

    #[test]
    fn test_no_dice() {
        assert!(find_dice("").is_none());
        assert!(find_dice("10 + 4").is_none());
        assert!(find_dice("round(2.5)").is_none());
        assert!(find_dice("2d").is_none());
    }

    #[test]
    fn test_non_ascii_text() {
        let found = find_dice("dégâts 3d8").unwrap();
        assert_eq!(found.as_str(), "3d8");
        assert_eq!(found.replace_with("12"), "dégâts 12");
    }
}
