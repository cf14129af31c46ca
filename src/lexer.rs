use crate::Error;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::slice::Iter;

/// Space, tab, carriage return, newline and bell.
pub static DELIMITERS: &[u8] = b" \t\r\n\x07";

/// Token slots reserved up front and added on every overflow.
pub const TOKENS_CHUNK: usize = 64;

pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, position: 0 }
    }

    pub fn lex(&mut self) -> Result<Tokens<'a>, Error> {
        let mut tokens: Vec<&'a OsStr> = Vec::new();
        tokens.try_reserve_exact(TOKENS_CHUNK)?;

        while !self.is_eof() {
            let Some(token) = self.next_token() else {
                break;
            };

            if tokens.len() == tokens.capacity() {
                tokens.try_reserve_exact(TOKENS_CHUNK)?;
            }
            tokens.push(token);
        }

        log::trace!("lexed {} tokens from {} bytes", tokens.len(), self.input.len());
        Ok(Tokens { tokens })
    }

    fn next_token(&mut self) -> Option<&'a OsStr> {
        self.handle_delimiters();
        if self.is_eof() {
            return None;
        }

        Some(self.handle_word())
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn handle_delimiters(&mut self) {
        while !self.is_eof() && is_delimiter(self.input[self.position]) {
            self.position += 1;
        }
    }

    fn handle_word(&mut self) -> &'a OsStr {
        let start = self.position;
        while !self.is_eof() && !is_delimiter(self.input[self.position]) {
            self.position += 1;
        }

        OsStr::from_bytes(&self.input[start..self.position])
    }
}

fn is_delimiter(byte: u8) -> bool {
    DELIMITERS.contains(&byte)
}

/// Splits `line` on [`DELIMITERS`], collapsing runs of them.
pub fn tokenize(line: &[u8]) -> Result<Tokens<'_>, Error> {
    Lexer::new(line).lex()
}

/// Non-empty views into the line they were lexed from, bytes untouched.
#[derive(PartialEq, Debug, Default)]
pub struct Tokens<'a> {
    tokens: Vec<&'a OsStr>,
}

impl<'a> Tokens<'a> {
    /// The command name, or `None` when nothing was entered.
    pub fn command(&self) -> Option<&'a OsStr> {
        self.tokens.first().copied()
    }

    pub fn as_slice(&self) -> &[&'a OsStr] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, &'a OsStr> {
        self.tokens.iter()
    }
}

impl<'t, 'a> IntoIterator for &'t Tokens<'a> {
    type Item = &'t &'a OsStr;
    type IntoIter = Iter<'t, &'a OsStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
