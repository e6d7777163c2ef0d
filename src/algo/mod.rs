// algo/mod.rs - Low-level match functions.
//
// Every function here shares one shape:
//
//     fn(case_sensitive, forward, haystack, pattern) -> Option<Span>
//
// They assume `pattern` is already lowercase when `case_sensitive` is false;
// only the haystack is folded while scanning. Use `crate::pattern::Pattern`
// to get that guarantee from the type system.

mod anchored;
mod exact;
mod fuzzy;

use std::ops::Range;

pub use anchored::{equal_match, prefix_match, suffix_match};
pub use exact::exact_match_naive;
pub use fuzzy::{fuzzy_match, fuzzy_match_limited, FuzzyLimits};

/// Half-open span of rune indices, always in left-to-right coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Span {
        debug_assert!(start <= end);
        Span { start, end }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Range<usize> {
        span.range()
    }
}

/// Signature shared by all match modes.
pub type MatchFn = fn(bool, bool, &[char], &[char]) -> Option<Span>;
