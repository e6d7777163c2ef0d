// api_test.rs - Integration tests for the idiomatic Rust API.

use std::sync::Arc;
use std::thread;

use linematch::api::{MatchMode, Matcher, MatcherBuilder};
use linematch::error::MatchError;
use linematch::prelude::*;

// === Matcher::new ===

#[test]
fn fuzzy_by_default_builder() {
    let m = Matcher::builder("hw").build().unwrap();
    assert_eq!(m.mode(), MatchMode::Fuzzy);
    let found = m.find("hello_world").unwrap();
    assert_eq!(found.range(), 0..7);
    assert_eq!(found.as_str(), "hello_w");
}

#[test]
fn no_match_returns_none() {
    let m = Matcher::new(MatchMode::Fuzzy, "xyz");
    assert!(m.find("abc").is_none());
    assert!(!m.is_match("abc"));
}

#[test]
fn empty_pattern() {
    for mode in MatchMode::ALL {
        let m = Matcher::new(mode, "");
        let found = m.find("anything at all  ").unwrap();
        assert_eq!(found.start(), 0);
        assert_eq!(found.end(), 0);
        assert!(found.is_empty());
        assert_eq!(found.as_str(), "");
    }
}

// === Case matching ===

#[test]
fn smart_case_is_default() {
    let lower = Matcher::new(MatchMode::Exact, "world");
    assert!(!lower.is_case_sensitive());
    assert!(lower.is_match("Hello WORLD"));

    let mixed = Matcher::new(MatchMode::Exact, "World");
    assert!(mixed.is_case_sensitive());
    assert!(mixed.is_match("Hello World"));
    assert!(!mixed.is_match("hello world"));
}

#[test]
fn explicit_case_policies() {
    let respect = Matcher::builder("readme")
        .mode(MatchMode::Prefix)
        .case(CaseMatching::Respect)
        .build()
        .unwrap();
    assert!(!respect.is_match("README.md"));

    let ignore = Matcher::builder("README")
        .mode(MatchMode::Prefix)
        .case(CaseMatching::Ignore)
        .build()
        .unwrap();
    assert_eq!(ignore.pattern().to_string(), "readme");
    assert_eq!(ignore.find("ReadMe.md").unwrap().range(), 0..6);
}

#[test]
fn prepared_pattern() {
    let pattern = Pattern::from_folded(vec!['m', 'a', 'i', 'n'], false).unwrap();
    let m = MatcherBuilder::from_pattern(pattern)
        .mode(MatchMode::Exact)
        .case(CaseMatching::Respect)
        .build()
        .unwrap();
    assert!(!m.is_case_sensitive());
    assert_eq!(m.find("src/MAIN.rs").unwrap().as_str(), "MAIN");
}

#[test]
fn unfolded_prepared_pattern_rejected() {
    let err = Pattern::from_folded(vec!['M', 'a'], false).unwrap_err();
    match err {
        MatchError::UnfoldedPattern { index, ch } => {
            assert_eq!(index, 0);
            assert_eq!(ch, 'M');
        }
        other => panic!("expected UnfoldedPattern, got {:?}", other),
    }
}

// === Modes ===

#[test]
fn exact_backward_reports_last_occurrence() {
    let m = Matcher::builder("foo")
        .mode(MatchMode::Exact)
        .forward(false)
        .build()
        .unwrap();
    assert!(!m.is_forward());
    assert_eq!(m.find("foo bar foo").unwrap().range(), 8..11);
}

#[test]
fn suffix_ignores_trailing_whitespace() {
    let m = Matcher::new(MatchMode::Suffix, "text");
    let found = m.find("trailing text   ").unwrap();
    assert_eq!(found.range(), 9..13);
    assert_eq!(found.as_str(), "text");
    assert_eq!(found.line(), "trailing text   ");
}

#[test]
fn equal_whole_line() {
    let m = Matcher::new(MatchMode::Equal, "cargo.toml");
    assert!(m.is_match("Cargo.toml"));
    assert!(!m.is_match("Cargo.toml.bak"));
}

#[test]
fn mode_from_str() {
    let mode: MatchMode = "suffix".parse().unwrap();
    assert_eq!(mode, MatchMode::Suffix);
    let err = "glob".parse::<MatchMode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown match mode: \"glob\"");
}

// === Match ===

#[test]
fn match_offsets_are_runes() {
    let m = Matcher::new(MatchMode::Exact, "naïve");
    let found = m.find("très naïve").unwrap();
    assert_eq!(found.range(), 5..10);
    assert_eq!(found.len(), 5);
    assert_eq!(found.byte_range(), 6..12);
    assert_eq!(found.as_str(), "naïve");
}

#[test]
fn find_chars_matches_find() {
    let m = Matcher::new(MatchMode::Fuzzy, "ff");
    let runes: Vec<char> = "FuzzyFinder".chars().collect();
    assert_eq!(m.find_chars(&runes), Some(Span::new(0, 6)));
    assert_eq!(m.find("FuzzyFinder").unwrap().span(), Span::new(0, 6));
}

// === Fuzzy step limit ===

#[test]
fn fuzzy_step_limit() {
    let generous = Matcher::builder("hw").fuzzy_step_limit(1_000).build().unwrap();
    assert!(generous.is_match("hello_world"));

    let stingy = Matcher::builder("hw").fuzzy_step_limit(3).build().unwrap();
    assert!(!stingy.is_match("hello_world"));
}

#[test]
fn fuzzy_step_limit_zero_is_invalid() {
    let err = Matcher::builder("hw").fuzzy_step_limit(0).build().unwrap_err();
    assert_eq!(err.code(), linematch::error::LINEMATCH_ERR_INVALID_ARGUMENT);
}

#[test]
fn fuzzy_step_limit_ignored_by_other_modes() {
    let m = Matcher::builder("world")
        .mode(MatchMode::Exact)
        .fuzzy_step_limit(1)
        .build()
        .unwrap();
    assert!(m.is_match("hello world"));
}

// === Filter ===

#[test]
fn filter_yields_matching_lines_with_indices() {
    let lines = vec![
        "src/api.rs",
        "Cargo.toml",
        "src/algo/fuzzy.rs",
        "README.md",
        "tests/api_test.rs",
    ];
    let m = Matcher::new(MatchMode::Suffix, ".rs");
    let hits: Vec<(usize, &str)> = m
        .filter(lines.iter().copied())
        .map(|(i, found)| (i, found.line()))
        .collect();
    assert_eq!(
        hits,
        [
            (0, "src/api.rs"),
            (2, "src/algo/fuzzy.rs"),
            (4, "tests/api_test.rs")
        ]
    );
}

#[test]
fn filter_over_str_lines() {
    let text = "alpha\nbeta\ngamma\ndelta\n";
    let m = Matcher::new(MatchMode::Exact, "ta");
    let hits: Vec<usize> = m.filter(text.lines()).map(|(i, _)| i).collect();
    assert_eq!(hits, [1, 3]);
}

// === Concurrency ===

#[test]
fn shared_across_threads() {
    let m = Arc::new(Matcher::new(MatchMode::Fuzzy, "fb"));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let m = Arc::clone(&m);
            thread::spawn(move || {
                (0..250)
                    .filter(|i| m.is_match(&format!("foo_bar_{}_{}", t, i)))
                    .count()
            })
        })
        .collect();
    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, 1_000);
}
