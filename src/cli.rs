// std imports
use std::{ffi::OsString, path::PathBuf};

// third-party imports
use clap::{Args, CommandFactory, FromArgMatches, Parser};

// local imports
use crate::config;

// ---

/// Options needed before the full command line can be parsed.
pub struct BootstrapOpt {
    pub args: BootstrapArgs,
}

impl BootstrapOpt {
    /// Pre-parses the process arguments.
    pub fn parse() -> Self {
        Self::parse_from(std::env::args_os())
    }

    /// Pre-parses `args` with the full command, ignoring errors, so that bootstrap
    /// options are found in any position relative to other options and positionals.
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Opt::command()
            .ignore_errors(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .try_get_matches_from(args)
            .ok()
            .and_then(|matches| BootstrapArgs::from_arg_matches(&matches).ok())
            .unwrap_or_default();
        Self { args }
    }
}

#[derive(Args, Default)]
pub struct BootstrapArgs {
    /// Configuration file path, may be repeated.
    #[arg(long, short = 'c', env = "FUZZMATCH_CONFIG", value_name = "FILE", num_args = 1)]
    pub config: Vec<PathBuf>,
}

// ---

/// Find every occurrence of a wildcard pattern in a text.
///
/// Prints the number of matches followed by the 0-based start offset of each match.
/// If PATTERN and TEXT are omitted, they are read as two whitespace-delimited tokens from standard input.
#[derive(Parser)]
#[command(version)]
pub struct Opt {
    #[command(flatten)]
    pub bootstrap: BootstrapArgs,

    /// Wildcard character that matches any single character.
    #[arg(
        long,
        short = 'w',
        env = "FUZZMATCH_WILDCARD",
        default_value_t = config::get().wildcard,
        overrides_with = "wildcard"
    )]
    pub wildcard: char,

    /// Separator between match offsets.
    #[arg(
        long,
        default_value_t = config::get().output.separator.clone(),
        overrides_with = "separator"
    )]
    pub separator: String,

    /// Print only the number of matches.
    #[arg(long, overrides_with = "count_only")]
    pub count_only: bool,

    /// Do not print the number of matches.
    #[arg(long, overrides_with = "no_count")]
    pub no_count: bool,

    /// Compute all automaton transitions before scanning.
    #[arg(long, env = "FUZZMATCH_PRECOMPUTE", overrides_with = "no_precompute")]
    pub precompute: bool,

    /// Compute automaton transitions lazily while scanning.
    #[arg(long, overrides_with = "precompute")]
    pub no_precompute: bool,

    /// Pattern to search for.
    #[arg(value_name = "PATTERN", requires = "text")]
    pub pattern: Option<String>,

    /// Text to search in.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

impl Opt {
    /// Resolves the precompute flags against the configured default.
    pub fn resolve_precompute(&self, default: bool) -> bool {
        match (self.precompute, self.no_precompute) {
            (_, true) => false,
            (true, _) => true,
            _ => default,
        }
    }
}
