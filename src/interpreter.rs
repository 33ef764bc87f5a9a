use crate::builtin::Builtin;
use crate::command::{Command, CommandBatch};
use crate::env::Environment;
use crate::error::{Reporter, ShellError, StderrReporter};
use crate::external::ExternalCommand;
use crate::input::LineSource;
use crate::parser;
use std::process::Child;

/// The line that ends the session. Only an exact match counts.
pub const EXIT: &str = "exit";

/// A minimal shell that runs the commands of each line in parallel.
///
/// The interpreter owns the session [`Environment`] and reports every failure
/// through its [`Reporter`].
///
/// Example
/// ```no_run
/// use wish::Interpreter;
/// let mut sh: Interpreter = Interpreter::default();
/// sh.execute_line("echo hello & echo world");
/// ```
pub struct Interpreter<R: Reporter = StderrReporter> {
    env: Environment,
    reporter: R,
}

impl<R: Reporter> Interpreter<R> {
    pub fn new(env: Environment, reporter: R) -> Self {
        Self { env, reporter }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn should_exit(&self) -> bool {
        self.env.should_exit
    }

    /// Reads and executes lines until the input ends or `exit` is seen.
    pub fn run(&mut self, input: &mut dyn LineSource) -> Result<(), ShellError> {
        while !self.env.should_exit {
            match input.next_line()? {
                Some(line) => {
                    self.execute_line(&line);
                }
                None => break,
            }
        }
        Ok(())
    }

    /// Executes one input line and returns once every process it started has ended.
    ///
    /// Returns the number of processes that were started.
    pub fn execute_line(&mut self, line: &str) -> usize {
        if line == EXIT {
            tracing::debug!("exit requested");
            self.env.should_exit = true;
            return 0;
        }
        let batch = parser::parse(line);
        tracing::debug!(line, commands = batch.len(), "parsed line");
        self.execute(batch)
    }

    /// Dispatches every command of `batch` in order, then waits for all started
    /// processes in the order they were started.
    pub fn execute(&mut self, batch: CommandBatch) -> usize {
        let children = self.dispatch(batch);
        let count = children.len();
        self.wait_all(children);
        count
    }

    fn dispatch(&mut self, batch: CommandBatch) -> Vec<Child> {
        let mut children = Vec::new();
        for parsed in batch {
            let command = match parsed {
                Ok(command) => command,
                Err(e) => {
                    self.reporter.report(&ShellError::from(e));
                    continue;
                }
            };
            match self.dispatch_one(command) {
                Ok(Some(child)) => children.push(child),
                Ok(None) => {}
                Err(Abort(e)) => {
                    self.reporter.report(&e);
                    tracing::debug!("rest of the line skipped");
                    break;
                }
            }
        }
        children
    }

    /// Runs a built-in or starts an external program.
    ///
    /// Errors that only concern this command are reported here; an `Err` means the
    /// rest of the line must be skipped.
    fn dispatch_one(&mut self, command: Command) -> Result<Option<Child>, Abort> {
        let Some(name) = command.name() else {
            return Ok(None);
        };

        if let Some(builtin) = Builtin::try_create(name, command.args()) {
            let builtin = builtin.map_err(Abort)?;
            if let Err(e) = builtin.execute(&mut self.env) {
                self.reporter.report(&e);
            }
            return Ok(None);
        }

        let spawned = ExternalCommand::resolve(command, &self.env)
            .transpose()
            .and_then(|external| external.map(ExternalCommand::spawn).transpose());
        match spawned {
            Ok(child) => Ok(child),
            Err(e) => {
                tracing::debug!(error = %e, "command not started");
                self.reporter.report(&e);
                Ok(None)
            }
        }
    }

    fn wait_all(&self, children: Vec<Child>) {
        for mut child in children {
            let pid = child.id();
            match child.wait() {
                Ok(status) => tracing::debug!(pid, ?status, "process finished"),
                Err(source) => self.reporter.report(&ShellError::Wait { pid, source }),
            }
        }
    }
}

/// A failure that ends the processing of the current line.
struct Abort(ShellError);

impl Default for Interpreter {
    /// Create an interpreter with the default search path that reports to stderr.
    fn default() -> Self {
        Self::new(Environment::new(), StderrReporter)
    }
}
