//! The yes/no question asked before anything is written.

use crate::errors::Result;
use std::io::{self, BufRead, IsTerminal, Write};

/// Asks the user to approve the run.
pub trait Confirmation {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Interactive prompt on the controlling terminal.
///
/// When standard input is not a terminal (for example `echo y | reword ...`)
/// one line is read from it instead.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Confirmation for TerminalPrompt {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if io::stdin().is_terminal() {
            let answer = dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()?;
            return Ok(answer);
        }

        print!("{prompt} [y/N]: ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(is_yes(&line))
    }
}

/// A fixed answer, used for `--yes` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct Answer(pub bool);

impl Confirmation for Answer {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
