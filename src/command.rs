use crate::parser::ParsingError;

/// One parsed invocation unit of a command line.
///
/// `argv[0]` is the program or built-in name. When `redirect` is set the command's
/// standard output and standard error go to that file; the `>` operator and the file
/// name are never part of `argv`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    pub argv: Vec<String>,
    pub redirect: Option<String>,
}

impl Command {
    pub fn new(argv: Vec<String>) -> Self {
        Self {
            argv,
            redirect: None,
        }
    }

    pub fn with_redirect(argv: Vec<String>, target: impl Into<String>) -> Self {
        Self {
            argv,
            redirect: Some(target.into()),
        }
    }

    /// The program or built-in name, if the command has any tokens.
    pub fn name(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Arguments following the name.
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}

/// All commands of one input line, in the order they were written.
///
/// A command whose redirection could not be parsed keeps its slot as an error so that
/// it is reported when the interpreter reaches it, without disturbing its siblings.
pub type CommandBatch = Vec<Result<Command, ParsingError>>;
