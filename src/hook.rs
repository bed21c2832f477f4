use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::fs::File;

use structopt::StructOpt;
use anyhow::{Context, Result};
use thiserror::Error;

use crate::config::{CommitHook, CONFIG_FILE};
use crate::prompt::{self, PromptError};

// Error definitions
#[derive(Error, Debug)]
pub enum HookError {
  #[error(transparent)]
  Prompt(#[from] PromptError),

  #[error(transparent)]
  Anyhow(#[from] anyhow::Error)
}

// CLI Arguments
#[derive(StructOpt, Debug)]
#[structopt(name = "commit-hook", about = "A git hook that writes commit messages as `type: summary`.")]
pub struct Args {
  pub commit_msg_file: PathBuf,

  /// Message source git passes to prepare-commit-msg (message, merge, ...).
  /// Ignored: whether to prompt rests on the file contents alone.
  pub source: Option<String>,

  /// Commit being amended, when git provides one. Ignored.
  pub sha1: Option<String>
}

// File operations traits
pub trait FilePath {
  fn has_content(&self) -> bool {
    self
      .read()
      .map(|contents| !contents.trim().is_empty())
      .unwrap_or(false)
  }

  fn write(&self, msg: String) -> Result<()>;
  fn read(&self) -> Result<String>;
}

impl FilePath for PathBuf {
  fn write(&self, msg: String) -> Result<()> {
    File::create(self)?
      .write_all(msg.as_bytes())
      .map_err(Into::into)
  }

  fn read(&self) -> Result<String> {
    let mut contents = String::new();
    File::open(self)?.read_to_string(&mut contents)?;
    Ok(contents)
  }
}

pub fn run(args: &Args) -> Result<(), HookError> {
  run_with(args, Path::new(CONFIG_FILE), &mut io::stdin().lock(), &mut io::stdout())
}

/// The whole hook: load the config, bail out if a message is already in
/// place, otherwise prompt for a type and summary and overwrite the commit
/// message file with `type: summary`.
pub fn run_with<R: BufRead, W: Write>(args: &Args, config_file: &Path, input: &mut R, output: &mut W) -> Result<(), HookError> {
  let config = CommitHook::load_from(config_file);

  if args.commit_msg_file.has_content() {
    log::debug!("Commit message already present in {}, nothing to do", args.commit_msg_file.display());
    return Ok(());
  }

  let types = config.commit_types();
  let message = prompt::commit_message(&types, input, output)?;

  args
    .commit_msg_file
    .write(format!("{}\n", message))
    .context("Failed to write commit message")?;

  Ok(())
}
