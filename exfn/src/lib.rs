//! exfn, the `example-function` argument template.
//!
//! The grammar lives in [`parser`]; this crate runs it against a command line, writes help and
//! diagnostics, and maps the outcome to an exit status.
#![deny(missing_docs)]

use std::io::Write;
use std::process::ExitCode;

use tracing::debug;

pub use exfn_parser as parser;

pub use parser::{Action, PROGRAM, ParsedArgs, USAGE};

mod config;

pub use config::{Config, DEFAULT_LOG_FILTER, LOG_ENV};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error comes from the parsing of arguments.
    #[error(transparent)]
    Parser(#[from] parser::Error),

    /// Help or diagnostics could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The runtime configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Exit status of an invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    /// Arguments were parsed, or help was printed.
    Success = 0,

    /// The command line was rejected.
    Usage = 1,
}

impl Status {
    /// Numeric exit code.
    #[inline(always)]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Parse the command line, wrapping parser failures into the crate error.
pub fn parse_args<'a>(argv: &'a [&'a str]) -> Result<Action<'a>, Error> {
    Ok(parser::parse(argv)?)
}

/// Run `example-function` against the given command line.
///
/// Help goes to `out`. Usage errors go to `err` as a one-line diagnostic followed by the usage
/// block. Only failures to write are returned as errors.
pub fn run<O, E>(argv: &[&str], out: &mut O, err: &mut E) -> Result<Status, Error>
where
    O: Write,
    E: Write,
{
    match parse_args(argv) {
        Ok(Action::Help) => {
            out.write_all(USAGE.as_bytes())?;
            out.flush()?;
            Ok(Status::Success)
        }

        Ok(Action::Run(args)) => {
            debug!(
                first = args.first(),
                second = args.second(),
                params = ?args.params(),
                positional1 = ?args.positional1(),
                positional2 = ?args.positional2(),
                "arguments accepted"
            );
            Ok(Status::Success)
        }

        Err(Error::Parser(e)) => {
            debug!(error = %e, "arguments rejected");
            writeln!(err, "{PROGRAM}: {e}")?;
            err.write_all(USAGE.as_bytes())?;
            err.flush()?;
            Ok(Status::Usage)
        }

        Err(e) => Err(e),
    }
}
