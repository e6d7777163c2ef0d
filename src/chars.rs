// chars.rs - Rune classification, case folding and directional indexing.
//
// The predicates are ASCII-only on purpose: the fuzzy matcher only needs to
// recognize ASCII case and digit boundaries, and doing less work per rune is
// what keeps per-line matching cheap.

use bitflags::bitflags;

bitflags! {
    /// ASCII character class of a single code point.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u8 {
        const LOWER = 1 << 0;
        const UPPER = 1 << 1;
        const DIGIT = 1 << 2;
    }
}

impl CharClass {
    /// Classify `ch`. Non-ASCII code points are always empty.
    #[inline]
    pub fn of(ch: char) -> CharClass {
        match ch {
            'a'..='z' => CharClass::LOWER,
            'A'..='Z' => CharClass::UPPER,
            '0'..='9' => CharClass::DIGIT,
            _ => CharClass::empty(),
        }
    }

    #[inline]
    pub fn is_letter(self) -> bool {
        self.intersects(CharClass::LOWER | CharClass::UPPER)
    }

    #[inline]
    pub fn is_letter_or_digit(self) -> bool {
        !self.is_empty()
    }
}

#[inline]
pub fn is_lower(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

#[inline]
pub fn is_upper(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

#[inline]
pub fn is_letter(ch: char) -> bool {
    is_lower(ch) || is_upper(ch)
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_letter_or_digit(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}

/// Lowercase ASCII `A`-`Z`; every other code point passes through.
#[inline]
pub fn fold_ascii_lower(ch: char) -> char {
    if is_upper(ch) {
        (ch as u8 + 32) as char
    } else {
        ch
    }
}

/// Lowercase with an ASCII fast path and a Unicode fallback above 0x7F.
///
/// The result is always a single code point. For the one mapping that
/// expands (U+0130 to `i` + U+0307) the leading code point is kept.
#[inline]
pub fn fold_lower_full(ch: char) -> char {
    if ch.is_ascii() {
        fold_ascii_lower(ch)
    } else {
        ch.to_lowercase().next().unwrap_or(ch)
    }
}

/// Read `seq` at a logical index, counting from the end when `!forward`.
///
/// # Panics
///
/// Panics if `index >= len` or `len > seq.len()`.
#[inline]
pub fn rune_at(seq: &[char], index: usize, len: usize, forward: bool) -> char {
    if forward {
        seq[index]
    } else {
        seq[len - index - 1]
    }
}

/// Strip trailing whitespace. Offsets of the kept prefix are unchanged.
///
/// "Whitespace" is the Unicode `White_Space` property (`char::is_whitespace`),
/// not just ASCII: besides space, `\t`, `\n` and `\r` it also strips
/// U+00A0 NO-BREAK SPACE, U+2003 EM SPACE, U+3000 IDEOGRAPHIC SPACE and
/// the other `White_Space` runes. U+200B ZERO WIDTH SPACE is not one of them.
pub fn trim_trailing_whitespace(seq: &[char]) -> &[char] {
    let end = seq
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(0, |i| i + 1);
    &seq[..end]
}
