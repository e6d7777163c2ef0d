// algo/anchored.rs - Prefix, suffix and whole-line matching.
//
// These modes are anchored, so the `forward` flag has no effect.

use super::Span;
use crate::chars::{fold_lower_full, trim_trailing_whitespace};

#[inline]
fn same(case_sensitive: bool, ch: char, pch: char) -> bool {
    if case_sensitive {
        ch == pch
    } else {
        fold_lower_full(ch) == pch
    }
}

/// Match when `haystack` starts with `pattern`.
pub fn prefix_match(
    case_sensitive: bool,
    _forward: bool,
    haystack: &[char],
    pattern: &[char],
) -> Option<Span> {
    if haystack.len() < pattern.len() {
        return None;
    }
    let matched = haystack
        .iter()
        .zip(pattern)
        .all(|(&ch, &pch)| same(case_sensitive, ch, pch));
    matched.then(|| Span::new(0, pattern.len()))
}

/// Match when `haystack`, minus trailing whitespace, ends with `pattern`.
pub fn suffix_match(
    case_sensitive: bool,
    _forward: bool,
    haystack: &[char],
    pattern: &[char],
) -> Option<Span> {
    if pattern.is_empty() {
        return Some(Span::new(0, 0));
    }
    let trimmed = trim_trailing_whitespace(haystack);
    let trimmed_len = trimmed.len();
    let diff = trimmed_len.checked_sub(pattern.len())?;

    let matched = trimmed[diff..]
        .iter()
        .zip(pattern)
        .all(|(&ch, &pch)| same(case_sensitive, ch, pch));
    matched.then(|| Span::new(diff, trimmed_len))
}

/// Match when `haystack` and `pattern` are the same line.
///
/// An empty pattern matches any line at `0..0`, as in every other mode.
pub fn equal_match(
    case_sensitive: bool,
    _forward: bool,
    haystack: &[char],
    pattern: &[char],
) -> Option<Span> {
    if pattern.is_empty() {
        return Some(Span::new(0, 0));
    }
    if haystack.len() != pattern.len() {
        return None;
    }
    let matched = if case_sensitive {
        haystack == pattern
    } else {
        haystack.iter().map(|&c| fold_lower_full(c)).eq(pattern.iter().copied())
    };
    matched.then(|| Span::new(0, pattern.len()))
}
