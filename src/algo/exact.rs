// algo/exact.rs - Naive substring search.
//
// For the short lines and patterns typical of interactive filtering, a
// restart-on-mismatch scan with inline case folding beats lowercasing the
// whole line and handing it to a general-purpose substring search.

use super::Span;
use crate::chars::{fold_lower_full, rune_at};

/// Find `pattern` as a contiguous run in `haystack`.
///
/// Scanning from the front reports the first occurrence; scanning from the
/// back (`forward == false`) reports the last one.
pub fn exact_match_naive(
    case_sensitive: bool,
    forward: bool,
    haystack: &[char],
    pattern: &[char],
) -> Option<Span> {
    if pattern.is_empty() {
        return Some(Span::new(0, 0));
    }

    let len_h = haystack.len();
    let len_p = pattern.len();
    if len_h < len_p {
        return None;
    }

    let mut pidx = 0;
    let mut index = 0;
    while index < len_h {
        let mut ch = rune_at(haystack, index, len_h, forward);
        if !case_sensitive {
            ch = fold_lower_full(ch);
        }
        if ch == rune_at(pattern, pidx, len_p, forward) {
            pidx += 1;
            if pidx == len_p {
                let (start, end) = if forward {
                    (index + 1 - len_p, index + 1)
                } else {
                    (len_h - (index + 1), len_h - (index + 1) + len_p)
                };
                return Some(Span::new(start, end));
            }
        } else {
            // restart one past where this attempt began
            index -= pidx;
            pidx = 0;
        }
        index += 1;
    }
    None
}
