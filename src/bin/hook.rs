// Hook: prepare-commit-msg

use std::process;

use structopt::clap::ErrorKind;
use structopt::StructOpt;
use anyhow::Result;
use commit_hook::hook::{self, Args};

fn main() -> Result<()> {
  env_logger::init();

  // The usage contract wants everything on stdout: arg errors with exit
  // code 1, --help and --version with exit code 0.
  let args = match Args::from_args_safe() {
    Ok(args) => args,
    Err(err) => {
      println!("{}", err.message);
      match err.kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => return Ok(()),
        _ => process::exit(1)
      }
    }
  };

  Ok(hook::run(&args)?)
}
