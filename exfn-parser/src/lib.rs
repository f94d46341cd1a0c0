//! `no_std` lexer and parser for the fixed `example-function` grammar.
#![no_std]
#![deny(missing_docs)]

extern crate alloc;

pub mod lexer;
pub mod parser;
pub mod usage;

pub use lexer::Tokens;
pub use parser::{Action, Error, ParsedArgs, parse};
pub use usage::{PROGRAM, USAGE};
