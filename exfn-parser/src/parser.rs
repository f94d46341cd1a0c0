//! A parser for collecting the `example-function` arguments from a token stream.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::lexer::{Token, Tokens};

/// Maximum number of positional arguments accepted on the command line.
pub const POSITIONAL_COUNT_MAX: usize = 2;

/// Defines the possible errors that may occur during parsing of arguments.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// `--param` was given without a value, either at the end of the input or right before
    /// another hyphenated entry.
    #[error("missing value for --param")]
    MissingValue,

    /// A third positional argument was given.
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Defines the outcome of a successful parse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action<'a> {
    /// Help was requested, the remaining input has not been looked at.
    Help,

    /// The input has been fully consumed.
    Run(ParsedArgs<'a>),
}

/// Defines the result of argument parsing. Values borrow from the command line input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsedArgs<'a> {
    first: bool,
    second: bool,
    params: Vec<&'a str>,
    positionals: heapless::Vec<&'a str, POSITIONAL_COUNT_MAX>,
}

impl<'a> ParsedArgs<'a> {
    /// Parse the command line input.
    pub fn parse(argv: &'a [&'a str]) -> Result<Action<'a>, Error> {
        let mut tokens = Tokens::new(argv);

        let mut out = Self::default();

        while let Some(token) = tokens.next() {
            #[cfg(feature = "tracing")]
            {
                trace!(?token, "lexed");
            }

            match token {
                Token::Flag(f) if f.is_switch('h', "help") => return Ok(Action::Help),

                Token::Flag(f) if f.is_switch('f', "first") => out.first = true,

                Token::Flag(f) if f.is_switch('s', "second") => out.second = true,

                Token::Flag(f) if f.is_long("param") => {
                    let value = if let Some(value) = f.inline_value() {
                        value
                    } else if let Some(value) = tokens.peek_value() {
                        tokens.skip_one();
                        value
                    } else {
                        return Err(Error::MissingValue);
                    };

                    out.params.push(value);
                }

                // Everything else, unknown flags included, is positional.
                _ => {
                    let raw = tokens.raw();
                    if out.positionals.push(raw).is_err() {
                        return Err(Error::UnexpectedArgument(raw.into()));
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        {
            debug!(
                first = out.first,
                second = out.second,
                params = out.params.len(),
                positionals = out.positionals.len(),
                "parsed arguments"
            );
        }

        Ok(Action::Run(out))
    }

    /// Whether `-f`/`--first` was given.
    #[inline(always)]
    pub fn first(&self) -> bool {
        self.first
    }

    /// Whether `-s`/`--second` was given.
    #[inline(always)]
    pub fn second(&self) -> bool {
        self.second
    }

    /// Values of `--param`, in command line order.
    #[inline(always)]
    pub fn params(&self) -> &[&'a str] {
        &self.params
    }

    /// First positional value.
    #[inline(always)]
    pub fn positional1(&self) -> Option<&'a str> {
        self.positionals.first().copied()
    }

    /// Second positional value.
    #[inline(always)]
    pub fn positional2(&self) -> Option<&'a str> {
        self.positionals.get(1).copied()
    }

    /// All positional values, in command line order.
    #[inline(always)]
    pub fn positionals(&self) -> &[&'a str] {
        &self.positionals
    }
}

/// Parse the command line input. See [`ParsedArgs::parse`].
#[inline(always)]
pub fn parse<'a>(argv: &'a [&'a str]) -> Result<Action<'a>, Error> {
    ParsedArgs::parse(argv)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use googletest::prelude::*;

    use super::*;

    fn run<'a>(argv: &'a [&'a str]) -> ParsedArgs<'a> {
        match parse(argv) {
            Ok(Action::Run(args)) => args,
            other => panic!("unexpected parse outcome: {other:?}"),
        }
    }

    #[test]
    fn it_should_parse_empty_input() {
        let args = run(&[]);

        assert_that!(args, eq(&ParsedArgs::default()));
        assert_that!(args.positional1(), eq(None));
    }

    #[test]
    fn it_should_parse_switch_and_positionals() {
        let args = run(&["--first", "pos1", "pos2"]);

        assert_that!(args.first(), eq(true));
        assert_that!(args.second(), eq(false));
        assert_that!(args.params().is_empty(), eq(true));
        assert_that!(args.positional1(), eq(Some("pos1")));
        assert_that!(args.positional2(), eq(Some("pos2")));
    }

    #[test]
    fn it_should_collect_repeated_params_in_order() {
        let args = run(&["--param=foo", "--param", "bar", "--param=foo"]);

        assert_that!(args.params(), eq(&["foo", "bar", "foo"][..]));
        assert_that!(args.positionals().is_empty(), eq(true));
    }

    #[test]
    fn it_should_accept_empty_inline_param() {
        let args = run(&["--param="]);

        assert_that!(args.params(), eq(&[""][..]));
    }

    #[test]
    fn it_should_fail_on_param_without_value() {
        assert_that!(parse(&["--param"]), eq(&Err(Error::MissingValue)));
        assert_that!(parse(&["--param", "-f"]), eq(&Err(Error::MissingValue)));
        assert_that!(parse(&["--param", ""]), eq(&Err(Error::MissingValue)));
    }

    #[test]
    fn it_should_fail_on_third_positional() {
        let res = parse(&["a", "b", "c"]);

        assert_that!(res, eq(&Err(Error::UnexpectedArgument("c".into()))));
        assert_that!(
            res.unwrap_err().to_string(),
            eq("unexpected argument: c")
        );
    }

    #[test]
    fn it_should_short_circuit_on_help() {
        assert_that!(parse(&["-h"]), eq(&Ok(Action::Help)));
        assert_that!(parse(&["-f", "a", "b", "--help", "c"]), eq(&Ok(Action::Help)));
        assert_that!(parse(&["--param", "x", "-H"]), eq(&Ok(Action::Help)));
    }

    #[test]
    fn it_should_report_error_met_before_help() {
        assert_that!(
            parse(&["a", "b", "c", "--help"]),
            eq(&Err(Error::UnexpectedArgument("c".into())))
        );
        assert_that!(parse(&["--param", "-h"]), eq(&Err(Error::MissingValue)));
    }

    #[test]
    fn it_should_match_flags_ignoring_case() {
        let args = run(&["--FIRST", "-S", "--PaRaM=MixedCase", "Pos"]);

        assert_that!(args.first(), eq(true));
        assert_that!(args.second(), eq(true));
        assert_that!(args.params(), eq(&["MixedCase"][..]));
        assert_that!(args.positional1(), eq(Some("Pos")));
    }

    #[test]
    fn it_should_treat_unknown_flags_as_positionals() {
        let args = run(&["-x", "--first=1"]);

        assert_that!(args.first(), eq(false));
        assert_that!(args.positionals(), eq(&["-x", "--first=1"][..]));
    }
}
