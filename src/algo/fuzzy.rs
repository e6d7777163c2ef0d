// algo/fuzzy.rs - Boundary-preferring subsequence match.
//
// Every pattern rune must appear in the haystack in order. The first pattern
// rune may be taken at the very next haystack position; any later occurrence
// is only accepted if it starts a "word" (see `is_boundary`). The search is
// greedy: at each level the leftmost acceptable position whose continuation
// succeeds wins, without looking for a shorter overall span.
//
// The search runs on an explicit stack instead of recursing, so long lines
// cannot overflow the call stack, and it remembers which `(haystack, pattern)`
// positions already failed. A failed position fails again no matter how it is
// reached, so pruning it does not change the result but turns exponential
// backtracking on repetitive lines into O(n * m) worst case.

use smallvec::{smallvec, SmallVec};
use tracing::debug;

use super::Span;
use crate::chars::{fold_ascii_lower, CharClass};

/// Bounds on how much work a single fuzzy search may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuzzyLimits {
    /// Maximum number of haystack positions examined before giving up.
    /// `None` means unbounded.
    pub max_steps: Option<usize>,
}

impl FuzzyLimits {
    pub const UNBOUNDED: FuzzyLimits = FuzzyLimits { max_steps: None };

    pub const fn with_max_steps(max_steps: usize) -> FuzzyLimits {
        FuzzyLimits {
            max_steps: Some(max_steps),
        }
    }
}

/// Fuzzy-match `pattern` against `haystack`.
///
/// Comparison is always case-insensitive (ASCII folding on both sides) and
/// the scan always runs front to back, so `case_sensitive` and `forward` are
/// accepted only to share the signature of the other modes.
///
/// # Examples
///
/// ```
/// use linematch::algo::{fuzzy_match, Span};
///
/// let line: Vec<char> = "FuzzyFinder".chars().collect();
/// let pattern: Vec<char> = "ff".chars().collect();
/// assert_eq!(fuzzy_match(false, true, &line, &pattern), Some(Span::new(0, 6)));
/// ```
pub fn fuzzy_match(
    case_sensitive: bool,
    forward: bool,
    haystack: &[char],
    pattern: &[char],
) -> Option<Span> {
    fuzzy_match_limited(
        case_sensitive,
        forward,
        haystack,
        pattern,
        FuzzyLimits::UNBOUNDED,
    )
}

/// [`fuzzy_match`] with an exploration budget. Running out of budget is
/// reported as no match.
pub fn fuzzy_match_limited(
    _case_sensitive: bool,
    _forward: bool,
    haystack: &[char],
    pattern: &[char],
    limits: FuzzyLimits,
) -> Option<Span> {
    if pattern.is_empty() {
        return Some(Span::new(0, 0));
    }
    // each pattern rune consumes a distinct haystack rune
    if pattern.len() > haystack.len() {
        return None;
    }
    let mut steps = 0;
    search(haystack, pattern, limits, &mut steps)
}

/// Whether `haystack[i]` starts a word relative to `haystack[i - 1]`.
///
/// Classification uses the runes as written, so `fooBar` has a boundary at
/// `B`. Requires `i >= 1`.
#[inline]
fn is_boundary(haystack: &[char], i: usize) -> bool {
    let curr = haystack[i];
    let prev = haystack[i - 1];
    let cc = CharClass::of(curr);
    let pc = CharClass::of(prev);

    (cc.contains(CharClass::UPPER) && !pc.contains(CharClass::UPPER))
        || (cc.contains(CharClass::LOWER) && !pc.is_letter())
        || (cc.contains(CharClass::DIGIT) && !pc.contains(CharClass::DIGIT))
        || (!cc.is_letter_or_digit() && curr != prev)
}

/// Search state for matching `pattern[p..]` against `haystack[r..]`.
#[derive(Debug, Clone, Copy)]
struct Frame {
    r: usize,
    p: usize,
    /// Next haystack position to examine.
    next: usize,
    /// Position taken for `pattern[p]` by the live continuation.
    picked: usize,
}

impl Frame {
    fn new(r: usize, p: usize) -> Frame {
        Frame {
            r,
            p,
            next: r,
            picked: r,
        }
    }
}

/// Bit set of `(r, p)` states known to fail.
///
/// Nothing is allocated until the first insert; a search whose greedy path
/// succeeds, or whose failures are all covered by the per-level low-water
/// mark in `search`, never touches the heap.
struct FailedStates {
    bits: SmallVec<[u64; 8]>,
    rows: usize,
    width: usize,
}

impl FailedStates {
    fn new(rows: usize, width: usize) -> FailedStates {
        FailedStates {
            bits: SmallVec::new(),
            rows,
            width,
        }
    }

    #[inline]
    fn contains(&self, r: usize, p: usize) -> bool {
        let bit = r * self.width + p;
        self.bits
            .get(bit / 64)
            .is_some_and(|word| word & (1u64 << (bit % 64)) != 0)
    }

    #[inline]
    fn insert(&mut self, r: usize, p: usize) {
        if self.bits.is_empty() {
            self.bits.resize((self.rows * self.width).div_ceil(64), 0);
        }
        let bit = r * self.width + p;
        self.bits[bit / 64] |= 1u64 << (bit % 64);
    }
}

/// Run the search, counting examined positions in `steps`.
///
/// `exhausted_from[p]` is the smallest `r` whose frame `(r, p)` has failed.
/// Such a frame tried its direct position `r` and every boundary position
/// after it, so any frame `(r', p)` only has to look below that mark: past
/// it, every candidate leads to a continuation already known to fail. A
/// frame starting at or beyond the mark is left with its direct position
/// alone. Each level therefore scans the line at most once, plus one step
/// per direct-only frame, for O(n * m) positions overall.
fn search(
    haystack: &[char],
    pattern: &[char],
    limits: FuzzyLimits,
    steps: &mut usize,
) -> Option<Span> {
    let n = haystack.len();
    let m = pattern.len();
    let max_steps = limits.max_steps.unwrap_or(usize::MAX);
    let mut exhausted_from: SmallVec<[usize; 16]> = smallvec![n; m];
    // failures of direct-only frames, which the mark cannot express
    let mut failed = FailedStates::new(n, m);
    let mut stack: SmallVec<[Frame; 16]> = smallvec![Frame::new(0, 0)];

    while let Some(top) = stack.last_mut() {
        let pch = fold_ascii_lower(pattern[top.p]);
        let mark = exhausted_from[top.p];
        let limit = if top.r < mark { mark } else { top.r + 1 };
        let mut found = None;
        while top.next < limit {
            if *steps == max_steps {
                debug!(
                    max_steps = ?limits.max_steps,
                    haystack_len = n,
                    pattern_len = m,
                    "fuzzy search step limit exhausted"
                );
                return None;
            }
            *steps += 1;

            let i = top.next;
            top.next += 1;
            if fold_ascii_lower(haystack[i]) == pch && (i == top.r || is_boundary(haystack, i)) {
                found = Some(i);
                break;
            }
        }

        match found {
            Some(i) => {
                top.picked = i;
                let (r, p) = (i + 1, top.p + 1);
                if p == m {
                    return Some(Span::new(stack[0].picked, r));
                }
                let known_failed = r >= n || r == exhausted_from[p] || failed.contains(r, p);
                if !known_failed {
                    stack.push(Frame::new(r, p));
                }
            }
            None => {
                let (r, p) = (top.r, top.p);
                stack.pop();
                if r < exhausted_from[p] {
                    exhausted_from[p] = r;
                } else {
                    failed.insert(r, p);
                }
            }
        }
    }
    None
}
