//! Aho-Corasick multi-pattern matching automaton.
//!
//! Fragments are inserted into a trie whose nodes live in a single arena.
//! Two breadth-first passes then compute suffix links (the failure function)
//! and terminal links (shortcuts to the nearest node ending a fragment).
//! Scanning advances one [`NodeRef`] per input symbol through the memoized
//! goto function and enumerates fragment ids through the terminal link chain.
//!
//! # Examples
//!
//! ```
//! use ac_automaton::Automaton;
//!
//! let mut automaton = Automaton::build([("he".chars(), 0), ("she".chars(), 1), ("hers".chars(), 2)]);
//!
//! let mut found = Vec::new();
//! let mut state = automaton.root();
//! for (offset, ch) in "ushers".chars().enumerate() {
//!     state = automaton.next(state, ch);
//!     automaton.generate_matches(state, |id| found.push((offset, id)));
//! }
//! assert_eq!(found, vec![(3, 1), (3, 0), (5, 2)]);
//! ```

// public modules
pub mod graph;

// private modules
mod automaton;
mod links;
mod trie;

// public uses
pub use automaton::{Automaton, Builder, Matches, NodeRef};
pub use graph::{Graph, Visit, breadth_first_search};
pub use trie::{NodeId, Symbol, Trie};
