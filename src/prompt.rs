use std::io::{self, BufRead, Write};

use colored::Colorize;
use thiserror::Error;

use crate::commit::{CommitMessage, CommitType};

#[derive(Error, Debug)]
pub enum PromptError {
  #[error("Input closed before the commit message was complete")]
  InputClosed,
  #[error("IO error: {0}")]
  IOError(#[from] io::Error)
}

/// Walks the user through composing a commit message: a numbered type menu,
/// a selection loop that rejects anything outside `1..=types.len()`, then a
/// single free-text summary line. Generic over the streams so tests can
/// script the exchange.
pub fn commit_message<R: BufRead, W: Write>(types: &[CommitType], input: &mut R, output: &mut W) -> Result<CommitMessage, PromptError> {
  writeln!(output, "Select the type of change you are committing:")?;
  for (idx, commit_type) in types.iter().enumerate() {
    writeln!(output, "{}. {}", idx + 1, commit_type)?;
  }

  let commit_type = loop {
    write!(output, "Enter number (1-{}): ", types.len())?;
    output.flush()?;

    let choice = read_line(input)?;
    match choice.trim().parse::<usize>() {
      Ok(choice) if (1..=types.len()).contains(&choice) => break &types[choice - 1],
      _ => writeln!(output, "{}", "Invalid selection. Try again.".red())?
    }
  };

  writeln!(output, "Write a short and imperative summary of the code changes:")?;
  write!(output, "> ")?;
  output.flush()?;

  let summary = read_line(input)?;

  Ok(CommitMessage {
    commit_type: commit_type.value.clone(),
    summary: summary.trim().to_string()
  })
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, PromptError> {
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Err(PromptError::InputClosed);
  }
  Ok(line)
}
