// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use linematch::prelude::*;
//!
//! let m = Matcher::new(MatchMode::Prefix, "src");
//! assert!(m.is_match("src/lib.rs"));
//! ```

pub use crate::algo::Span;
pub use crate::api::{Filter, Match, MatchMode, Matcher, MatcherBuilder};
pub use crate::error::MatchError;
pub use crate::pattern::{CaseMatching, Pattern};
