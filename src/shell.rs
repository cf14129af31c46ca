use crate::builtin::Builtin;
use crate::config::Config;
use crate::launcher::Launcher;
use crate::lexer::{Lexer, Tokens};
use crate::read_line::LineReader;
use crate::{Error, Signal, print_to};
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};

pub struct Shell<L> {
    launcher: L,
    prompt: String,
}

impl<L: Launcher> Shell<L> {
    pub fn new(launcher: L, config: &Config) -> Self {
        Self {
            launcher,
            prompt: config.styled_prompt(),
        }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Runs until a builtin asks to terminate.
    ///
    /// Only a fatal condition (allocation failure, or a prompt that can no
    /// longer be written) ends the loop with an error.
    pub fn repl<R: BufRead>(
        &mut self,
        input: R,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<(), Error> {
        let mut reader = LineReader::new(input);

        loop {
            self.print(stdout)?;

            let line = reader.read_line()?;
            let tokens = Lexer::new(&line).lex()?;
            let signal = self.dispatch(&tokens, stdout, stderr);

            if signal == Signal::Terminate {
                log::debug!("terminating");
                return Ok(());
            }
        }
    }

    /// Runs a builtin or launches a program for one token sequence.
    pub fn dispatch(
        &mut self,
        tokens: &Tokens<'_>,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Signal {
        let Some((command, args)) = tokens.as_slice().split_first() else {
            return Signal::Continue;
        };

        if let Some(builtin) = Builtin::lookup(command) {
            log::debug!("builtin {}", builtin.name());
            return builtin.run(tokens.as_slice(), stdout, stderr);
        }

        self.launch(command, args, stdout, stderr)
    }

    fn launch(
        &mut self,
        command: &OsStr,
        args: &[&OsStr],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Signal {
        // The child writes straight to the inherited descriptor.
        if let Err(err) = stdout.flush() {
            log::warn!("flush stdout: {err}");
        }

        match self.launcher.launch(command, args) {
            Ok(completion) => log::debug!("{}: {completion:?}", command.to_string_lossy()),
            Err(err) => {
                if let Err(write_err) = report(stderr, &err) {
                    log::warn!("report {err}: {write_err}");
                }
            }
        }

        Signal::Continue
    }

    fn print(&self, stdout: &mut dyn Write) -> io::Result<()> {
        print_to!(stdout, "{}", self.prompt);
        stdout.flush()?;

        Ok(())
    }
}

fn report(stderr: &mut dyn Write, err: &dyn std::error::Error) -> io::Result<()> {
    print_to!(stderr, "cshell: {}\n", err);
    stderr.flush()
}
