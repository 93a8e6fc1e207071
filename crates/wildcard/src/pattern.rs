use std::fmt;
use std::mem::take;

/// A wildcard pattern split into fixed fragments.
///
/// Patterns are created from a string and a wildcard character:
/// - the wildcard matches exactly one UTF-8 character
/// - any other character matches itself
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("a?c", '?');
/// assert!(pattern.matches("abc"));
/// assert!(pattern.matches("a🦀c"));
/// assert!(!pattern.matches("ac"));
///
/// let pattern = Pattern::new("ab??cd", '?');
/// let fragments: Vec<_> = pattern.fragments().iter().map(|f| (f.text(), f.end())).collect();
/// assert_eq!(fragments, vec![("ab", 1), ("cd", 5)]);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pattern {
    fragments: Vec<Fragment>,
    len: usize,
    wildcard: char,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    /// Consecutive wildcards produce no empty fragments.
    pub fn new(raw: impl AsRef<str>, wildcard: char) -> Self {
        Compiler::new(wildcard).compile(raw.as_ref())
    }

    /// Pattern length in characters, wildcards included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn wildcard(&self) -> char {
        self.wildcard
    }

    /// Maximal runs of non-wildcard characters, in pattern order.
    #[inline]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns `true` if the pattern consists of wildcards only.
    #[inline]
    pub fn is_wildcard_only(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Tests whether the pattern matches the entire text.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("??", '?');
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        text.len() == self.len && self.matches_at(&text, 0)
    }

    /// Tests whether the pattern matches `text` starting at `offset`.
    ///
    /// Returns `false` if the text is too short.
    pub fn matches_at(&self, text: &[char], offset: usize) -> bool {
        let Some(window) = offset.checked_add(self.len).and_then(|end| text.get(offset..end)) else {
            return false;
        };
        self.fragments
            .iter()
            .all(|fragment| fragment.text.chars().eq(window[fragment.start()..=fragment.end].iter().copied()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut offset = 0;
        for fragment in &self.fragments {
            for _ in offset..fragment.start() {
                write!(f, "{}", self.wildcard)?;
            }
            f.write_str(&fragment.text)?;
            offset = fragment.end + 1;
        }
        for _ in offset..self.len {
            write!(f, "{}", self.wildcard)?;
        }
        Ok(())
    }
}

// ---

/// A maximal run of non-wildcard characters within a pattern.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Fragment {
    text: String,
    len: usize,
    end: usize,
}

impl Fragment {
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the first character within the pattern.
    #[inline]
    pub fn start(&self) -> usize {
        self.end + 1 - self.len
    }

    /// Offset of the last character within the pattern.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }
}

// ---

struct Compiler {
    wildcard: char,
    fragments: Vec<Fragment>,
    next: String,
    next_len: usize,
    offset: usize,
}

impl Compiler {
    fn new(wildcard: char) -> Self {
        Self {
            wildcard,
            fragments: Vec::new(),
            next: String::new(),
            next_len: 0,
            offset: 0,
        }
    }

    fn flush(&mut self) {
        if !self.next.is_empty() {
            self.fragments.push(Fragment {
                text: take(&mut self.next),
                len: take(&mut self.next_len),
                end: self.offset - 1,
            });
        }
    }

    fn compile(mut self, raw: &str) -> Pattern {
        for ch in raw.chars() {
            if ch == self.wildcard {
                self.flush();
            } else {
                self.next.push(ch);
                self.next_len += 1;
            }
            self.offset += 1;
        }

        self.flush();

        Pattern {
            fragments: self.fragments,
            len: self.offset,
            wildcard: self.wildcard,
        }
    }
}
