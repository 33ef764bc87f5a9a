//! A small parallel shell.
//!
//! Each input line is split on `&` into commands that are all started before any of
//! them is waited for. A command is either one of the built-ins `path` and `cd`, or a
//! program looked up in the session's search path, optionally with its output and
//! errors sent to a file with `> file`. Every failure is reported with the same
//! fixed message on standard error.
//!
//! The main entry point is [`Interpreter`], which executes lines against a session
//! [`env::Environment`] and reads them from any [`input::LineSource`].

mod builtin;
pub mod command;
pub mod env;
pub mod error;
mod external;
pub mod input;
mod interpreter;
pub mod lexer;
pub mod logging;
pub mod parser;
mod redirect;

pub use external::find_command_path;
pub use interpreter::{EXIT, Interpreter};
