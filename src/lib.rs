//! # linematch
//!
//! Per-line matching primitives for interactive filters: given one line and a
//! pattern, decide whether the line matches and report the matched span in
//! rune (code point) offsets.
//!
//! Five match modes are supported:
//!
//! | Mode | Function | Matches when |
//! |------|----------|--------------|
//! | Fuzzy | [`algo::fuzzy_match`] | pattern runes appear in order, at word starts |
//! | Exact | [`algo::exact_match_naive`] | pattern is a substring |
//! | Prefix | [`algo::prefix_match`] | line starts with the pattern |
//! | Suffix | [`algo::suffix_match`] | line (minus trailing whitespace) ends with it |
//! | Equal | [`algo::equal_match`] | line is the pattern |
//!
//! ## Quick Start
//!
//! ```rust
//! use linematch::prelude::*;
//!
//! let m = Matcher::new(MatchMode::Fuzzy, "hw");
//! let found = m.find("hello_world").unwrap();
//! assert_eq!(found.range(), 0..7);
//!
//! let lines = ["src/main.rs", "README.md", "src/lib.rs"];
//! let suffix = Matcher::builder(".rs").mode(MatchMode::Suffix).build().unwrap();
//! let hits: Vec<usize> = suffix.filter(lines).map(|(i, _)| i).collect();
//! assert_eq!(hits, [0, 2]);
//! ```
//!
//! ## Low-Level API
//!
//! The functions in [`algo`] take pre-decoded runes and a pattern that is
//! already lowercase when case is ignored:
//!
//! ```rust
//! use linematch::algo::{exact_match_naive, Span};
//!
//! let line: Vec<char> = "Hello World".chars().collect();
//! let pattern: Vec<char> = "world".chars().collect();
//! assert_eq!(exact_match_naive(false, true, &line, &pattern), Some(Span::new(6, 11)));
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`algo`] | The five match functions |
//! | [`chars`] | Rune classification, folding, directional indexing |
//! | [`pattern`] | Case policy and pre-folded patterns |
//! | [`api`] | `Matcher`, `MatcherBuilder`, `Match` |
//! | [`error`] | Construction errors |

pub mod algo;
pub mod api;
pub mod chars;
pub mod error;
pub mod pattern;
pub mod prelude;
