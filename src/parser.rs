use crate::command::{Command, CommandBatch};
use crate::lexer::{self, Token};
use thiserror::Error;

/// Ways in which the redirection of a single command can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    #[error("redirection without a command")]
    RedirectWithoutCommand,
    #[error("redirection without a target file")]
    MissingRedirectTarget,
    #[error("redirection with more than one target: {0:?}")]
    TooManyRedirectTargets(Vec<String>),
    #[error("more than one redirection in a command")]
    MultipleRedirects,
}

struct BatchBuilder {
    tokens: std::vec::IntoIter<Token>,
    current: Vec<Token>,
    batch: CommandBatch,
}

impl BatchBuilder {
    fn from(tokens: Vec<Token>) -> Self {
        BatchBuilder {
            tokens: tokens.into_iter(),
            current: Vec::new(),
            batch: Vec::new(),
        }
    }

    fn build(mut self) -> CommandBatch {
        while let Some(token) = self.tokens.next() {
            match token {
                Token::Parallel => self.finish_command(),
                other => self.current.push(other),
            }
        }
        self.finish_command();
        self.batch
    }

    /// Closes the command accumulated so far; a separator with nothing before it
    /// contributes nothing.
    fn finish_command(&mut self) {
        if !self.current.is_empty() {
            let tokens = std::mem::take(&mut self.current);
            self.batch.push(parse_command(tokens));
        }
    }
}

/// Turns the tokens of one command into a [`Command`], extracting a trailing redirection.
///
/// The only accepted form is `name [args...] > file`: exactly one `>`, not in first
/// position, followed by exactly one word.
fn parse_command(tokens: Vec<Token>) -> Result<Command, ParsingError> {
    let redirects: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| matches!(t, Token::RedirectRight))
        .map(|(i, _)| i)
        .collect();

    match redirects.as_slice() {
        [] => Ok(Command::new(into_words(tokens))),
        [0] => Err(ParsingError::RedirectWithoutCommand),
        [pos] => {
            let mut argv = into_words(tokens);
            let mut targets = argv.split_off(*pos);
            match targets.len() {
                0 => Err(ParsingError::MissingRedirectTarget),
                1 => Ok(Command::with_redirect(argv, targets.remove(0))),
                _ => Err(ParsingError::TooManyRedirectTargets(targets)),
            }
        }
        _ => Err(ParsingError::MultipleRedirects),
    }
}

fn into_words(tokens: Vec<Token>) -> Vec<String> {
    tokens
        .into_iter()
        .filter_map(|t| match t {
            Token::Word(w) => Some(w),
            _ => None,
        })
        .collect()
}

/// Groups tokens into commands separated by `&`.
pub fn construct_batch(tokens: Vec<Token>) -> CommandBatch {
    BatchBuilder::from(tokens).build()
}

/// Parses a whole input line into its batch of parallel commands.
pub fn parse(line: &str) -> CommandBatch {
    construct_batch(lexer::split_into_tokens(line))
}
