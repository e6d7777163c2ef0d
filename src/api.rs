// api.rs - Idiomatic matcher API.
//
// Wraps the low-level `algo` functions with a compiled `Matcher`, a builder
// for its options, and `Match` values that know how to map rune offsets back
// onto the searched `&str`.

use std::fmt;
use std::iter::Enumerate;
use std::ops::Range;
use std::str::FromStr;

use memchr::{memchr, memchr2};
use smallvec::SmallVec;
use tracing::trace;

use crate::algo::{
    equal_match, exact_match_naive, fuzzy_match, fuzzy_match_limited, prefix_match,
    suffix_match, FuzzyLimits, MatchFn, Span,
};
use crate::chars::fold_ascii_lower;
use crate::error::MatchError;
use crate::pattern::{CaseMatching, Pattern};

/// Which algorithm decides whether a line matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Pattern runes appear in order, preferring word starts.
    #[default]
    Fuzzy,
    /// Pattern appears as a contiguous substring.
    Exact,
    /// Line starts with the pattern.
    Prefix,
    /// Line, ignoring trailing whitespace, ends with the pattern.
    Suffix,
    /// Line is the pattern.
    Equal,
}

impl MatchMode {
    pub const ALL: [MatchMode; 5] = [
        MatchMode::Fuzzy,
        MatchMode::Exact,
        MatchMode::Prefix,
        MatchMode::Suffix,
        MatchMode::Equal,
    ];

    /// The low-level function implementing this mode.
    pub fn algo(self) -> MatchFn {
        match self {
            MatchMode::Fuzzy => fuzzy_match,
            MatchMode::Exact => exact_match_naive,
            MatchMode::Prefix => prefix_match,
            MatchMode::Suffix => suffix_match,
            MatchMode::Equal => equal_match,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchMode::Fuzzy => "fuzzy",
            MatchMode::Exact => "exact",
            MatchMode::Prefix => "prefix",
            MatchMode::Suffix => "suffix",
            MatchMode::Equal => "equal",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchMode {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<MatchMode, MatchError> {
        MatchMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MatchError::UnknownMode(s.to_string()))
    }
}

// === Prefilter ===

/// Cheap rejection over UTF-8 bytes before a line is decoded into runes.
///
/// Every ASCII rune of the pattern must occur, in order, in any line the
/// pattern can match. Non-ASCII runes are skipped.
#[derive(Debug, Clone)]
struct Prefilter {
    /// Byte to look for, plus its other ASCII case when case is folded.
    needles: Vec<(u8, Option<u8>)>,
    /// Whether the needles stay sound on lines containing non-ASCII runes.
    holds_for_unicode: bool,
}

impl Prefilter {
    fn new(mode: MatchMode, pattern: &Pattern) -> Prefilter {
        let fuzzy = mode == MatchMode::Fuzzy;
        let fold = fuzzy || !pattern.is_case_sensitive();
        let needles = pattern
            .as_chars()
            .iter()
            .filter(|c| c.is_ascii())
            .map(|&c| {
                let lower = fold_ascii_lower(c);
                if fold && lower.is_ascii_lowercase() {
                    (lower as u8, Some(lower.to_ascii_uppercase() as u8))
                } else {
                    (c as u8, None)
                }
            })
            .collect();
        // Unicode folding can turn a non-ASCII rune into an ASCII one
        // (KELVIN SIGN to 'k'); fuzzy only folds ASCII.
        let holds_for_unicode = fuzzy || pattern.is_case_sensitive();
        Prefilter {
            needles,
            holds_for_unicode,
        }
    }

    fn admits(&self, line: &str) -> bool {
        if self.needles.is_empty() || (!self.holds_for_unicode && !line.is_ascii()) {
            return true;
        }
        let bytes = line.as_bytes();
        let mut pos = 0;
        for &(a, b) in &self.needles {
            let rest = &bytes[pos..];
            let found = match b {
                Some(b) => memchr2(a, b, rest),
                None => memchr(a, rest),
            };
            match found {
                Some(i) => pos += i + 1,
                None => return false,
            }
        }
        true
    }
}

// === Matcher ===

/// A pattern compiled for one match mode.
///
/// `Matcher` holds no mutable state and is `Send + Sync`, so one instance can
/// be shared by every worker filtering a large input.
///
/// # Examples
///
/// ```
/// use linematch::api::{MatchMode, Matcher};
///
/// let m = Matcher::new(MatchMode::Exact, "world");
/// let found = m.find("Hello World").unwrap();
/// assert_eq!(found.range(), 6..11);
/// assert_eq!(found.as_str(), "World");
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    mode: MatchMode,
    pattern: Pattern,
    forward: bool,
    limits: FuzzyLimits,
    prefilter: Prefilter,
}

impl Matcher {
    /// Compile `pattern` for `mode` with smart case and forward scanning.
    pub fn new(mode: MatchMode, pattern: &str) -> Matcher {
        Matcher::from_parts(
            mode,
            Pattern::new(pattern, CaseMatching::Smart),
            true,
            FuzzyLimits::UNBOUNDED,
        )
    }

    /// Create a [`MatcherBuilder`] for fine-grained control.
    pub fn builder(pattern: &str) -> MatcherBuilder {
        MatcherBuilder::new(pattern)
    }

    fn from_parts(
        mode: MatchMode,
        pattern: Pattern,
        forward: bool,
        limits: FuzzyLimits,
    ) -> Matcher {
        trace!(
            %mode,
            case_sensitive = pattern.is_case_sensitive(),
            forward,
            pattern_len = pattern.len(),
            "compiled matcher"
        );
        let prefilter = Prefilter::new(mode, &pattern);
        Matcher {
            mode,
            pattern,
            forward,
            limits,
            prefilter,
        }
    }

    /// Match a line given as runes. Offsets are rune indices.
    pub fn find_chars(&self, line: &[char]) -> Option<Span> {
        let case_sensitive = self.pattern.is_case_sensitive();
        let pattern = self.pattern.as_chars();
        match self.mode {
            MatchMode::Fuzzy => {
                fuzzy_match_limited(case_sensitive, self.forward, line, pattern, self.limits)
            }
            mode => (mode.algo())(case_sensitive, self.forward, line, pattern),
        }
    }

    /// Match a line of text.
    pub fn find<'t>(&self, line: &'t str) -> Option<Match<'t>> {
        if !self.prefilter.admits(line) {
            return None;
        }
        let runes: SmallVec<[char; 128]> = line.chars().collect();
        let span = self.find_chars(&runes)?;
        Some(Match { text: line, span })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.find(line).is_some()
    }

    /// Iterate over the matching lines of `lines`, with their indices.
    pub fn filter<'m, 't, I>(&'m self, lines: I) -> Filter<'m, I::IntoIter>
    where
        I: IntoIterator<Item = &'t str>,
    {
        Filter {
            matcher: self,
            lines: lines.into_iter().enumerate(),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.pattern.is_case_sensitive()
    }

    pub fn is_forward(&self) -> bool {
        self.forward
    }
}

// === MatcherBuilder ===

#[derive(Debug, Clone)]
enum PatternSource {
    Text(String),
    Prepared(Pattern),
}

/// Builder for a [`Matcher`] with custom options.
///
/// # Examples
///
/// ```
/// use linematch::api::{MatchMode, Matcher};
/// use linematch::pattern::CaseMatching;
///
/// let m = Matcher::builder("foo")
///     .mode(MatchMode::Exact)
///     .case(CaseMatching::Respect)
///     .forward(false)
///     .build()
///     .unwrap();
/// assert_eq!(m.find("foo bar foo").unwrap().range(), 8..11);
/// assert!(!m.is_match("FOO"));
/// ```
#[derive(Debug, Clone)]
pub struct MatcherBuilder {
    source: PatternSource,
    mode: MatchMode,
    case: CaseMatching,
    forward: bool,
    limits: FuzzyLimits,
}

impl MatcherBuilder {
    pub fn new(pattern: &str) -> Self {
        MatcherBuilder {
            source: PatternSource::Text(pattern.to_string()),
            mode: MatchMode::default(),
            case: CaseMatching::default(),
            forward: true,
            limits: FuzzyLimits::UNBOUNDED,
        }
    }

    /// Start from an already prepared pattern. Its case sensitivity wins over
    /// [`case`](Self::case).
    pub fn from_pattern(pattern: Pattern) -> Self {
        MatcherBuilder {
            source: PatternSource::Prepared(pattern),
            ..MatcherBuilder::new("")
        }
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn case(mut self, case: CaseMatching) -> Self {
        self.case = case;
        self
    }

    /// Scan from the start (`true`, default) or the end of each line.
    pub fn forward(mut self, yes: bool) -> Self {
        self.forward = yes;
        self
    }

    /// Cap the positions a fuzzy search may examine per line.
    pub fn fuzzy_step_limit(mut self, max_steps: usize) -> Self {
        self.limits = FuzzyLimits::with_max_steps(max_steps);
        self
    }

    pub fn build(self) -> Result<Matcher, MatchError> {
        if self.limits.max_steps == Some(0) {
            return Err(MatchError::InvalidArgument(
                "fuzzy step limit must be non-zero",
            ));
        }
        let pattern = match self.source {
            PatternSource::Text(text) => Pattern::new(&text, self.case),
            PatternSource::Prepared(pattern) => pattern,
        };
        Ok(Matcher::from_parts(
            self.mode,
            pattern,
            self.forward,
            self.limits,
        ))
    }
}

// === Match ===

/// A match within a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    span: Span,
}

impl<'t> Match<'t> {
    /// Rune offset of the first matched rune.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Rune offset one past the last matched rune.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Rune range of the match.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.span.range()
    }

    /// Number of runes covered, including skipped ones for fuzzy matches.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Byte range of the match within the searched line.
    pub fn byte_range(&self) -> Range<usize> {
        if self.text.is_ascii() {
            return self.range();
        }
        let offset = |rune: usize| {
            self.text
                .char_indices()
                .nth(rune)
                .map_or(self.text.len(), |(byte, _)| byte)
        };
        offset(self.span.start)..offset(self.span.end)
    }

    /// The matched text.
    pub fn as_str(&self) -> &'t str {
        &self.text[self.byte_range()]
    }

    /// The whole line the match was found in.
    pub fn line(&self) -> &'t str {
        self.text
    }
}

// === Filter ===

/// Iterator over matching lines, created by [`Matcher::filter`].
pub struct Filter<'m, I> {
    matcher: &'m Matcher,
    lines: Enumerate<I>,
}

impl<'m, 't, I> Iterator for Filter<'m, I>
where
    I: Iterator<Item = &'t str>,
{
    type Item = (usize, Match<'t>);

    fn next(&mut self) -> Option<(usize, Match<'t>)> {
        for (index, line) in self.lines.by_ref() {
            if let Some(m) = self.matcher.find(line) {
                return Some((index, m));
            }
        }
        None
    }
}
