// std imports
use std::io::{Read, Write};

// third-party imports
use itertools::Itertools;
use wildcard::WildcardMatcher;

// local imports
use crate::error::*;

// ---

#[derive(Debug, Clone)]
pub struct Options {
    pub wildcard: char,
    pub separator: String,
    pub show_count: bool,
    pub count_only: bool,
    pub precompute: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wildcard: '?',
            separator: " ".into(),
            show_count: true,
            count_only: false,
            precompute: false,
        }
    }
}

/// Pattern and text to search in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub pattern: String,
    pub text: String,
}

impl Input {
    /// Reads the pattern and the text as the first two whitespace-delimited tokens of `reader`.
    pub fn read<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;

        let mut tokens = data.split_whitespace();
        let pattern = tokens.next().ok_or(Error::MissingInput { what: "pattern" })?;
        let text = tokens.next().ok_or(Error::MissingInput { what: "text" })?;
        Ok(Self {
            pattern: pattern.into(),
            text: text.into(),
        })
    }
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Returns the start offset of every occurrence of the input pattern in the input text.
    pub fn find(&self, input: &Input) -> Result<Vec<usize>> {
        let mut matcher = WildcardMatcher::default().with_precompute(self.options.precompute);
        matcher.init(&input.pattern, self.options.wildcard)?;

        let mut occurrences = Vec::new();
        matcher.scan_str(&input.text, |start| occurrences.push(start))?;
        log::debug!(
            "scanned {} characters, found {} matches",
            matcher.position(),
            occurrences.len()
        );
        Ok(occurrences)
    }

    pub fn run<W: Write>(&self, input: &Input, output: &mut W) -> Result<()> {
        let occurrences = self.find(input)?;

        if self.options.show_count || self.options.count_only {
            writeln!(output, "{}", occurrences.len())?;
        }
        if !self.options.count_only {
            writeln!(output, "{}", occurrences.iter().join(&self.options.separator))?;
        }
        output.flush()?;
        Ok(())
    }
}
