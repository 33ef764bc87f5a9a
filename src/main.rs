use argh::{EarlyExit, FromArgs};
use std::process::ExitCode;
use wish::Interpreter;
use wish::error::{Reporter, ShellError, StderrReporter};
use wish::input::{Interactive, LineSource, Script};
use wish::logging::init_logging;

#[derive(FromArgs)]
/// Run commands read from the terminal or from a script, in parallel when separated by `&`.
struct Args {
    #[argh(positional, greedy)]
    /// script to execute line by line instead of prompting for input.
    script: Vec<String>,
}

enum Mode {
    Interactive,
    Script(String),
    Help,
}

fn parse_args() -> Result<Mode, ShellError> {
    let mut raw = std::env::args();
    let cmd = raw.next().unwrap_or_else(|| "wish".to_string());
    let rest: Vec<String> = raw.collect();
    if rest.len() > 1 {
        return Err(ShellError::InvalidArguments(format!(
            "expected at most one script, got {}",
            rest.len()
        )));
    }
    let mut rest: Vec<&str> = rest.iter().map(String::as_str).collect();
    // A lone argument is always the script path, even `help` or `-x`.
    if matches!(rest.as_slice(), [arg] if *arg != "--help") {
        rest.insert(0, "--");
    }

    match Args::from_args(&[cmd.as_str()], &rest) {
        Ok(Args { mut script }) => match script.len() {
            0 => Ok(Mode::Interactive),
            1 => Ok(Mode::Script(script.remove(0))),
            n => Err(ShellError::InvalidArguments(format!(
                "expected at most one script, got {n}"
            ))),
        },
        Err(EarlyExit { output, status }) => match status {
            Ok(()) => {
                println!("{output}");
                Ok(Mode::Help)
            }
            Err(()) => Err(ShellError::InvalidArguments(output)),
        },
    }
}

fn run() -> Result<(), ShellError> {
    let mut input: Box<dyn LineSource> = match parse_args()? {
        Mode::Help => return Ok(()),
        Mode::Script(path) => {
            tracing::debug!(script = %path, "running script");
            Box::new(Script::open(&path)?)
        }
        Mode::Interactive => Box::new(Interactive::new()?),
    };
    let mut shell: Interpreter = Interpreter::default();
    shell.run(input.as_mut())
}

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            StderrReporter.report(&e);
            ExitCode::FAILURE
        }
    }
}
