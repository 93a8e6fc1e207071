//! Find every occurrence of a single-character wildcard pattern in a text.
//!
//! The matching itself lives in the `wildcard` crate, built on the
//! Aho-Corasick automaton from the `ac-automaton` crate. This crate adds the
//! command line interface, layered configuration and error reporting.

// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod settings;

// public uses
pub use app::App;
pub use settings::Settings;
