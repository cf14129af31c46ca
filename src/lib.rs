pub mod builtin;
pub mod config;
pub mod launcher;
pub mod lexer;
pub mod macros;
pub mod read_line;
pub mod shell;

use std::collections::TryReserveError;
use std::io;

pub static PROMPT: &str = "cshell> ";
pub static PROMPT_COLOR: &str = "\x1b[33m";
pub static RESET_COLOR: &str = "\x1b[0m";

/// Outcome of every builtin and every dispatch: keep looping or stop.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Signal {
    Continue,
    Terminate,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("allocation error")]
    Allocation(#[from] TryReserveError),
    #[error("write prompt: {0}")]
    Io(#[from] io::Error),
}
