//! Error types and the single channel through which they reach the user.
//!
//! Every failure is shown to the user as the same fixed line on standard error. The
//! variants below only exist so that the log and the tests can tell failures apart.

use crate::parser::ParsingError;
#[cfg(test)]
use std::cell::RefCell;
use std::io::{self, Write};
#[cfg(test)]
use std::rc::Rc;
use thiserror::Error;

/// The one diagnostic the shell ever prints.
pub const ERROR_MESSAGE: &str = "An error has occurred\n";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("parse error: {0}")]
    Parse(#[from] ParsingError),
    #[error("cd: expected exactly one argument, got {0}")]
    CdUsage(usize),
    #[error("cd: can't chdir to {target}: {source}")]
    ChangeDir { target: String, source: io::Error },
    #[error("{0}: command not found")]
    NotFound(String),
    #[error("can't open {target} for redirection: {source}")]
    Redirect { target: String, source: io::Error },
    #[error("failed to spawn {program}: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("failed to wait for process {pid}: {source}")]
    Wait { pid: u32, source: io::Error },
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("can't read script {path}: {source}")]
    Script { path: String, source: io::Error },
    #[error("failed to read input: {0}")]
    Input(String),
}

/// Capability to tell the user that something went wrong.
pub trait Reporter {
    fn report(&self, err: &ShellError);
}

/// Writes [`ERROR_MESSAGE`] to the standard error of the shell process.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&self, err: &ShellError) {
        tracing::debug!(error = %err, "reporting error");
        let mut stderr = io::stderr().lock();
        if let Err(e) = stderr.write_all(ERROR_MESSAGE.as_bytes()) {
            tracing::warn!(error = %e, "failed to write diagnostic");
        }
    }
}

/// Memory-backed reporter that records the text of every reported error.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct MemReporter {
    reports: Rc<RefCell<Vec<String>>>,
}

#[cfg(test)]
impl MemReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: create a reporter and return (reporter, rc_handle).
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<String>>>) {
        let reporter = MemReporter::new();
        let rc = reporter.reports.clone();
        (reporter, rc)
    }
}

#[cfg(test)]
impl Reporter for MemReporter {
    fn report(&self, err: &ShellError) {
        self.reports.borrow_mut().push(err.to_string());
    }
}
