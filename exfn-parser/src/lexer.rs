//! A lexer for generating tokens from a command line.

/// Variant of `Flag` token. Only store the identifier, not the hyphens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flag<'a> {
    /// A short flag (e.g. -f).
    Short(char),

    /// A long flag (e.g. --first), with its inline value when written as `--name=value`.
    Long {
        /// Flag name, without the leading hyphens.
        name: &'a str,

        /// Everything after the first `=`, if any.
        value: Option<&'a str>,
    },
}

impl<'a> Flag<'a> {
    /// Evaluate if the flag is the switch `-short` or `--long`, ignoring ASCII case.
    ///
    /// A long flag carrying an inline value (e.g. `--first=1`) is not a switch.
    pub fn is_switch(&self, short: char, long: &str) -> bool {
        match *self {
            Flag::Short(c) => c.eq_ignore_ascii_case(&short),
            Flag::Long { name, value: None } => name.eq_ignore_ascii_case(long),
            Flag::Long { .. } => false,
        }
    }

    /// Evaluate if the flag is the long flag `--long`, with or without an inline value.
    pub fn is_long(&self, long: &str) -> bool {
        matches!(*self, Flag::Long { name, .. } if name.eq_ignore_ascii_case(long))
    }

    /// Retrieve the inline value of a long flag.
    #[inline(always)]
    pub fn inline_value(&self) -> Option<&'a str> {
        match *self {
            Flag::Long { value, .. } => value,
            Flag::Short(_) => None,
        }
    }
}

/// Defines a `Token` that has been read from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Token<'a> {
    /// Flag.
    Flag(Flag<'a>),

    /// Value (i.e. everything that is not a short or long flag).
    Value(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a single command line entry.
    pub fn lex(arg: &'a str) -> Self {
        // Long flag, with an optional inline value.
        if let Some(rest) = arg.strip_prefix("--") {
            if rest.is_empty() {
                return Token::Value(arg);
            }

            let (name, value) = match rest.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (rest, None),
            };

            return Token::Flag(Flag::Long { name, value });
        }

        // Short flag.
        if let Some(rest) = arg.strip_prefix('-') {
            let mut chars = rest.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Token::Flag(Flag::Short(c));
            }
        }

        Token::Value(arg)
    }
}

/// Defines a cursor that streams tokens from the command line input.
///
/// It acts like a forward iterator, with a one-entry look-ahead for flags that take a separate
/// value.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    argv: &'a [&'a str],
    cursor: usize,
}

impl<'a> Tokens<'a> {
    /// Create a new lexer from the command line input.
    pub fn new(argv: &'a [&'a str]) -> Self {
        Tokens { argv, cursor: 0 }
    }

    /// Retrieve the raw text of the entry last returned by `next`, or an empty string if nothing
    /// has been consumed yet.
    #[inline(always)]
    pub fn raw(&self) -> &'a str {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.argv.get(i))
            .copied()
            .unwrap_or_default()
    }

    /// Look at the next entry if it can stand as a value: present, non-empty and not starting
    /// with a hyphen.
    pub fn peek_value(&self) -> Option<&'a str> {
        self.argv
            .get(self.cursor)
            .copied()
            .filter(|x| !x.is_empty() && !x.starts_with('-'))
    }

    /// Consume the next entry without classifying it.
    #[inline(always)]
    pub fn skip_one(&mut self) {
        if self.cursor < self.argv.len() {
            self.cursor += 1;
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let arg = self.argv.get(self.cursor).copied()?;
        self.cursor += 1;

        Some(Token::lex(arg))
    }
}
