// third-party imports
use ac_automaton::{Automaton, Builder, NodeRef};

// local imports
use crate::error::{Error, Result};
use crate::pattern::Pattern;

// ---

/// Finds every occurrence of a wildcard pattern in a stream of characters.
///
/// A matcher starts uninitialized, see [`WildcardMatcher::init`].
/// Once initialized, it may be fed any number of characters with
/// [`WildcardMatcher::scan`], and reset to start over on a new stream.
#[derive(Debug, Default)]
pub struct WildcardMatcher {
    state: State,
    precompute: bool,
}

impl WildcardMatcher {
    /// Creates a matcher that is ready to scan.
    pub fn new(pattern: &str, wildcard: char) -> Result<Self> {
        let mut matcher = Self::default();
        matcher.init(pattern, wildcard)?;
        Ok(matcher)
    }

    /// Controls whether all automaton transitions are computed during [`WildcardMatcher::init`]
    /// instead of lazily while scanning.
    pub fn with_precompute(mut self, value: bool) -> Self {
        self.precompute = value;
        self
    }

    /// Prepares the matcher for `pattern` and resets the stream.
    ///
    /// Each fixed fragment of the pattern is registered in the automaton
    /// under the offset of its last character within the pattern.
    pub fn init(&mut self, pattern: &str, wildcard: char) -> Result<()> {
        let pattern = Pattern::new(pattern, wildcard);
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let mut builder = Builder::new();
        for fragment in pattern.fragments() {
            builder.add(fragment.text().chars(), fragment.end());
        }
        let mut automaton = builder.build();
        if self.precompute {
            automaton.precompute();
        }
        log::debug!(
            "wildcard matcher initialized: pattern length {}, {} fragments",
            pattern.len(),
            pattern.fragments().len()
        );

        self.state = State::Ready(Ready {
            cursor: automaton.root(),
            automaton,
            counters: vec![0; pattern.len()],
            fragments: pattern.fragments().len(),
            position: 0,
        });
        Ok(())
    }

    /// Starts a new stream, keeping the pattern.
    pub fn reset(&mut self) {
        if let State::Ready(ready) = &mut self.state {
            ready.reset();
        }
    }

    /// Scans the next character of the stream.
    ///
    /// Calls `on_match` with the start offset of the pattern occurrence ending
    /// at this character, if there is one.
    pub fn scan<F>(&mut self, symbol: char, on_match: F) -> Result<()>
    where
        F: FnMut(usize),
    {
        match &mut self.state {
            State::Ready(ready) => {
                ready.scan(symbol, on_match);
                Ok(())
            }
            State::Uninitialized => Err(Error::NotInitialized),
        }
    }

    /// Scans every character of `text` in order.
    pub fn scan_str<F>(&mut self, text: &str, mut on_match: F) -> Result<()>
    where
        F: FnMut(usize),
    {
        let State::Ready(ready) = &mut self.state else {
            return Err(Error::NotInitialized);
        };
        for symbol in text.chars() {
            ready.scan(symbol, &mut on_match);
        }
        Ok(())
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Number of characters scanned since the last init or reset.
    pub fn position(&self) -> usize {
        self.ready().map(|r| r.position).unwrap_or_default()
    }

    pub fn pattern_length(&self) -> usize {
        self.ready().map(|r| r.counters.len()).unwrap_or_default()
    }

    /// Number of fixed fragments in the pattern.
    pub fn fragment_count(&self) -> usize {
        self.ready().map(|r| r.fragments).unwrap_or_default()
    }

    fn ready(&self) -> Option<&Ready> {
        match &self.state {
            State::Ready(ready) => Some(ready),
            State::Uninitialized => None,
        }
    }
}

// ---

#[derive(Debug, Default)]
enum State {
    #[default]
    Uninitialized,
    Ready(Ready),
}

#[derive(Debug)]
struct Ready {
    automaton: Automaton,
    cursor: NodeRef,
    // Circular buffer, slot `s % len` counts fragments confirmed for the window starting at `s`.
    counters: Vec<usize>,
    fragments: usize,
    position: usize,
}

impl Ready {
    fn scan<F>(&mut self, symbol: char, mut on_match: F)
    where
        F: FnMut(usize),
    {
        let Self {
            automaton,
            cursor,
            counters,
            fragments,
            position,
        } = self;
        let len = counters.len();
        let offset = *position;

        *cursor = automaton.next(*cursor, symbol);
        automaton.generate_matches(*cursor, |end| {
            // windows starting before the stream are never reported
            if end <= offset {
                counters[(offset - end) % len] += 1;
            }
        });

        if offset + 1 >= len {
            let start = offset + 1 - len;
            let slot = &mut counters[start % len];
            if *slot == *fragments {
                on_match(start);
            }
            *slot = 0;
        }

        *position += 1;
    }

    fn reset(&mut self) {
        self.cursor = self.automaton.root();
        self.counters.fill(0);
        self.position = 0;
    }
}

// ---

/// Returns the start offset of every occurrence of `pattern` in `text`.
///
/// Offsets count characters, not bytes.
pub fn find_fuzzy_matches(pattern: &str, text: &str, wildcard: char) -> Result<Vec<usize>> {
    let mut matcher = WildcardMatcher::new(pattern, wildcard)?;
    let mut occurrences = Vec::new();
    matcher.scan_str(text, |start| occurrences.push(start))?;
    Ok(occurrences)
}
