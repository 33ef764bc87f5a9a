//! Lexical analysis of a single command line.
//!
//! The language is deliberately tiny: words are separated by spaces, and the two
//! operator characters `>` and `&` always form tokens of their own, whether or not
//! they are surrounded by spaces. There is no quoting or escaping.

/// The redirection operator character.
pub const REDIRECT: char = '>';
/// The parallel separator character.
pub const PARALLEL: char = '&';

/// Represents a token resulting from lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of characters containing no space and no operator.
    Word(String),
    /// Output redirection symbol, `>`.
    RedirectRight,
    /// Parallel command separator, `&`.
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Start,
    ReadingWord,
}

struct LexingFSM<'a> {
    input: std::str::Chars<'a>,
    state: LexingState,
    buffer: String,
}

impl<'a> LexingFSM<'a> {
    fn new(line: &'a str) -> Self {
        LexingFSM {
            input: line.chars(),
            state: LexingState::Start,
            buffer: String::new(),
        }
    }

    /// Runs the machine over the whole input.
    ///
    /// Unlike a full shell lexer there is no state that can be left unfinished,
    /// so tokenization cannot fail.
    fn make_tokens(mut self) -> Vec<Token> {
        let mut out = Vec::new();

        while let Some(ch) = self.input.next() {
            match self.state {
                LexingState::Start => self.handle_start(ch, &mut out),
                LexingState::ReadingWord => self.handle_word(ch, &mut out),
            }
        }

        self.finalize_word(&mut out);
        out
    }

    fn handle_start(&mut self, ch: char, out: &mut Vec<Token>) {
        match ch {
            ' ' => {}
            REDIRECT => out.push(Token::RedirectRight),
            PARALLEL => out.push(Token::Parallel),
            c => {
                self.buffer.push(c);
                self.state = LexingState::ReadingWord;
            }
        }
    }

    fn handle_word(&mut self, ch: char, out: &mut Vec<Token>) {
        match ch {
            ' ' => self.finalize_word(out),
            REDIRECT | PARALLEL => {
                self.finalize_word(out);
                self.handle_start(ch, out);
            }
            c => self.buffer.push(c),
        }
    }

    fn finalize_word(&mut self, out: &mut Vec<Token>) {
        if !self.buffer.is_empty() {
            out.push(Token::Word(std::mem::take(&mut self.buffer)));
        }
        self.state = LexingState::Start;
    }
}

/// Splits a line into tokens.
///
/// Only the space character separates words; tabs and every other character are
/// part of the word they appear in.
pub fn split_into_tokens(line: &str) -> Vec<Token> {
    LexingFSM::new(line).make_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn splits_on_spaces_only() {
        assert_eq!(
            split_into_tokens("ls  -la\t/tmp"),
            vec![word("ls"), word("-la\t/tmp")]
        );
    }

    #[test]
    fn blank_line_has_no_tokens() {
        assert!(split_into_tokens("").is_empty());
        assert!(split_into_tokens("     ").is_empty());
    }

    #[test]
    fn redirect_forces_token_boundary() {
        let glued = split_into_tokens("echo hi>out");
        let spaced = split_into_tokens("echo hi > out");
        assert_eq!(glued, spaced);
        assert_eq!(
            glued,
            vec![word("echo"), word("hi"), Token::RedirectRight, word("out")]
        );
    }

    #[test]
    fn parallel_forces_token_boundary() {
        assert_eq!(
            split_into_tokens("a&b &c& "),
            vec![
                word("a"),
                Token::Parallel,
                word("b"),
                Token::Parallel,
                word("c"),
                Token::Parallel,
            ]
        );
    }

    #[test]
    fn consecutive_operators_are_separate_tokens() {
        assert_eq!(
            split_into_tokens(">>&&"),
            vec![
                Token::RedirectRight,
                Token::RedirectRight,
                Token::Parallel,
                Token::Parallel,
            ]
        );
    }
}
