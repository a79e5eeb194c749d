//! The colon command line: parsing and execution.
//!
//! [`parse`] turns a raw line into a [`Command`]; [`execute`] runs it
//! against the saved notes and the current note, returning a message and a
//! list of [`Effect`]s for the caller to apply.

mod interpreter;
mod parser;

pub use interpreter::{CommandResult, Effect, HELP_TEXT, Outcome, execute, short_date};
pub use parser::{Command, CommandKind, ParseError, parse};
