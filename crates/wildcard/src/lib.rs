//! Streaming wildcard pattern matching.
//!
//! A pattern is a string where one designated wildcard character stands for
//! exactly one arbitrary character. The matcher reports the start offset of
//! every window of the scanned text that matches the pattern, advancing in
//! O(1) amortized time per scanned character.
//!
//! # Features
//!
//! - **Streaming**: Characters are fed one at a time, matches are reported as soon as their window is complete
//! - **Multi-fragment**: Fixed fragments between wildcards are matched simultaneously by an Aho-Corasick automaton
//! - **Any wildcard**: The wildcard character is chosen by the caller
//! - **UTF-8 aware**: Offsets and wildcards count characters, not bytes
//!
//! # How It Works
//!
//! The pattern is split at wildcards into maximal fixed fragments, each keyed by
//! the offset of its last character within the pattern. Whenever the automaton
//! reports a fragment ending at the current position, it votes for the window
//! start that would put the fragment at its required offset. A window matches
//! when it has collected a vote from every fragment.
//!
//! # Examples
//!
//! ```
//! use wildcard::find_fuzzy_matches;
//!
//! assert_eq!(find_fuzzy_matches("a?c", "xabcay", '?').unwrap(), vec![1]);
//! assert_eq!(find_fuzzy_matches("a??", "aXXaYY", '?').unwrap(), vec![0, 3]);
//! assert_eq!(find_fuzzy_matches("abc", "abcabc", '?').unwrap(), vec![0, 3]);
//! ```
//!
//! Feeding a stream piece by piece:
//!
//! ```
//! use wildcard::WildcardMatcher;
//!
//! let mut matcher = WildcardMatcher::new("h_llo", '_').unwrap();
//! let mut found = Vec::new();
//! for chunk in ["say he", "llo, ", "hallo"] {
//!     matcher.scan_str(chunk, |start| found.push(start)).unwrap();
//! }
//! assert_eq!(found, vec![4, 11]);
//! ```

mod error;
mod matcher;
mod pattern;

pub use error::{Error, Result};
pub use matcher::{WildcardMatcher, find_fuzzy_matches};
pub use pattern::{Fragment, Pattern};
