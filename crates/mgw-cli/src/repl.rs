//! Read-eval-print loop over any line source

use std::io::{BufRead, Write};

use anyhow::Context;
use mgw_core::session::EXIT_MESSAGE;
use mgw_core::{Prompter, Session};

pub const BANNER: &str = "\
Welcome to MoneyGoWhere!
Type `help` or `?` to see the available commands.";

const PROMPT: &str = "> ";

/// Line-oriented console: prompts on `output`, answers from `input`
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt` and read one line, without its line ending
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", prompt).context("failed to write prompt")?;
        self.output.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn print_line(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text).context("failed to write output")?;
        self.output.flush().context("failed to flush stdout")
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn ask(&mut self, question: &str) -> Option<String> {
        match self.read_line(&format!("{} ", question)) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "prompt failed");
                None
            }
        }
    }
}

/// Run commands until `exit` or end of input
pub fn run<R: BufRead, W: Write>(
    mut session: Session,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    loop {
        let Some(line) = console.read_line(PROMPT)? else {
            console.print_line("")?;
            return console.print_line(EXIT_MESSAGE);
        };

        let response = session.execute(&line, console);
        console.print_line(&response.text())?;

        if response.is_exit() {
            return Ok(());
        }
    }
}
