// pattern.rs - Search patterns with a guaranteed case-folding invariant.
//
// The low-level match functions expect a lowercase pattern whenever they are
// asked to ignore case. `Pattern` is the only way the high-level API hands a
// pattern to them, so that contract cannot be broken by accident.

use std::fmt;

use crate::chars::fold_lower_full;
use crate::error::MatchError;

/// How letter case is treated when matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseMatching {
    /// Case must match exactly.
    Respect,
    /// Case is ignored.
    Ignore,
    /// Case is ignored unless the pattern contains an uppercase letter.
    #[default]
    Smart,
}

impl CaseMatching {
    /// Resolve the policy for a concrete pattern.
    pub fn is_case_sensitive(self, pattern: &str) -> bool {
        match self {
            CaseMatching::Respect => true,
            CaseMatching::Ignore => false,
            CaseMatching::Smart => pattern.chars().any(char::is_uppercase),
        }
    }
}

/// A pattern ready to be passed to the [`algo`](crate::algo) functions.
///
/// When `is_case_sensitive()` is false, every rune is already folded with
/// [`fold_lower_full`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    chars: Vec<char>,
    case_sensitive: bool,
}

impl Pattern {
    /// Build a pattern from user text, folding it if `case` says to ignore case.
    ///
    /// ```
    /// use linematch::pattern::{CaseMatching, Pattern};
    ///
    /// let p = Pattern::new("Hello", CaseMatching::Ignore);
    /// assert_eq!(p.as_chars(), &['h', 'e', 'l', 'l', 'o']);
    /// assert!(Pattern::new("Hello", CaseMatching::Smart).is_case_sensitive());
    /// ```
    pub fn new(text: &str, case: CaseMatching) -> Pattern {
        let case_sensitive = case.is_case_sensitive(text);
        let chars = if case_sensitive {
            text.chars().collect()
        } else {
            text.chars().map(fold_lower_full).collect()
        };
        Pattern {
            chars,
            case_sensitive,
        }
    }

    /// Adopt runes the caller has already prepared.
    ///
    /// Fails with [`MatchError::UnfoldedPattern`] if the pattern is meant to
    /// ignore case but still contains a rune that folding would change.
    pub fn from_folded(chars: Vec<char>, case_sensitive: bool) -> Result<Pattern, MatchError> {
        if !case_sensitive {
            if let Some((index, &ch)) = chars
                .iter()
                .enumerate()
                .find(|&(_, &c)| fold_lower_full(c) != c)
            {
                return Err(MatchError::UnfoldedPattern { index, ch });
            }
        }
        Ok(Pattern {
            chars,
            case_sensitive,
        })
    }

    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smart_case() {
        assert!(!CaseMatching::Smart.is_case_sensitive("foo"));
        assert!(CaseMatching::Smart.is_case_sensitive("Foo"));
        assert!(CaseMatching::Smart.is_case_sensitive("straßE"));
        assert!(CaseMatching::Smart.is_case_sensitive("Élan"));
        assert!(!CaseMatching::Smart.is_case_sensitive("123_"));
        assert!(CaseMatching::Respect.is_case_sensitive("foo"));
        assert!(!CaseMatching::Ignore.is_case_sensitive("FOO"));
    }

    #[test]
    fn new_folds_only_when_ignoring_case() {
        let p = Pattern::new("ÉcoLE", CaseMatching::Ignore);
        assert_eq!(p.to_string(), "école");
        assert!(!p.is_case_sensitive());

        let p = Pattern::new("ÉcoLE", CaseMatching::Respect);
        assert_eq!(p.to_string(), "ÉcoLE");
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn from_folded_validates() {
        assert!(Pattern::from_folded(vec!['a', 'b'], false).is_ok());
        assert!(Pattern::from_folded(vec!['A', 'b'], true).is_ok());
        assert_eq!(
            Pattern::from_folded(vec!['a', 'Ж'], false),
            Err(MatchError::UnfoldedPattern { index: 1, ch: 'Ж' })
        );
    }

    #[test]
    fn empty() {
        let p = Pattern::new("", CaseMatching::Smart);
        assert!(p.is_empty());
        assert!(!p.is_case_sensitive());
    }
}
