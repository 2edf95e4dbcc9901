//! Dice token scanner
//!
//! Recognizes the longest dice token at the start of the input. The token shape is
//! an optional digit run, a lowercase `d`, a required digit run, and an optional
//! modifier made of `+` or `-` followed by a digit run.
//!
//! Only structure is checked here; numeric limits are enforced by
//! [`DiceExpression`](crate::DiceExpression).

/// Pieces of a dice token, borrowed from the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceToken<'a> {
    /// Digits before the `d`, if any
    pub count: Option<&'a str>,
    /// Digits after the `d`
    pub sides: &'a str,
    /// Sign and digits of the modifier, if any (e.g. `+3`, `-1`)
    pub modifier: Option<&'a str>,
    /// Number of bytes the token spans
    pub len: usize,
}

impl<'a> DiceToken<'a> {
    /// The token text, given the input it was scanned from
    pub fn text<'s>(&self, input: &'s str) -> &'s str {
        &input[..self.len]
    }
}

/// Scan a dice token at the start of `input`
///
/// Returns `None` when the input does not start with a dice token. Trailing text after
/// the token is ignored; check [`DiceToken::len`] to require a full match.
///
/// # Example
/// ```rust
/// use sheetroll_dice::scan_token;
///
/// let token = scan_token("2d6+3 fire").unwrap();
/// assert_eq!(token.count, Some("2"));
/// assert_eq!(token.sides, "6");
/// assert_eq!(token.modifier, Some("+3"));
/// assert_eq!(token.len, 5);
/// ```
pub fn scan_token(input: &str) -> Option<DiceToken<'_>> {
    let bytes = input.as_bytes();

    // Count
    let mut pos = digits_end(bytes, 0);
    let count = (pos > 0).then(|| &input[..pos]);

    if bytes.get(pos) != Some(&b'd') {
        return None;
    }
    pos += 1;

    // Sides (required)
    let sides_start = pos;
    pos = digits_end(bytes, pos);
    if pos == sides_start {
        return None;
    }
    let sides = &input[sides_start..pos];

    // Modifier: a sign without digits is not part of the token
    let mut modifier = None;
    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        let end = digits_end(bytes, pos + 1);
        if end > pos + 1 {
            modifier = Some(&input[pos..end]);
            pos = end;
        }
    }

    Some(DiceToken {
        count,
        sides,
        modifier,
        len: pos,
    })
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while bytes.get(pos).map_or(false, u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_full_token() {
        let token = scan_token("12d20-4").unwrap();
        assert_eq!(
            token,
            DiceToken {
                count: Some("12"),
                sides: "20",
                modifier: Some("-4"),
                len: 7,
            }
        );
    }

    #[test]
    fn test_scan_without_count_or_modifier() {
        let token = scan_token("d8").unwrap();
        assert_eq!(token.count, None);
        assert_eq!(token.sides, "8");
        assert_eq!(token.modifier, None);
        assert_eq!(token.len, 2);
    }

    #[test]
    fn test_dangling_sign_is_not_consumed() {
        let token = scan_token("1d6+").unwrap();
        assert_eq!(token.modifier, None);
        assert_eq!(token.text("1d6+"), "1d6");
    }

    #[test]
    fn test_rejects_non_tokens() {
        assert!(scan_token("").is_none());
        assert!(scan_token("d").is_none());
        assert!(scan_token("2dx").is_none());
        assert!(scan_token("2D6").is_none());
        assert!(scan_token("x1d6").is_none());
        assert!(scan_token("+1d6").is_none());
    }
}
