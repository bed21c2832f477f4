use std::path::Path;

use serde::Deserialize;
use config::{Config, ConfigError, FileFormat};
use colored::Colorize;

use crate::commit::{CommitType, DEFAULT_TYPES};

// Constants
pub const CONFIG_FILE: &str = ".commit-hook.toml";

/// A `types` entry as it appears in the config file. Tables name both
/// fields; bare pairs are positional, `["value", "name"]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TypeEntry {
  Record { value: String, name: String },
  Pair(String, String)
}

impl From<TypeEntry> for CommitType {
  fn from(entry: TypeEntry) -> Self {
    match entry {
      TypeEntry::Record { value, name } => CommitType::new(value, name),
      TypeEntry::Pair(value, name) => CommitType::new(value, name)
    }
  }
}

/// The `tool.commit_hook` section of `.commit-hook.toml`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CommitHook {
  pub types: Option<Vec<TypeEntry>>
}

impl CommitHook {
  /// Loads the section from the given config file. A missing file or a
  /// missing section is the common case and yields the empty section; a
  /// file or section that fails to parse is reported once on stdout and
  /// also yields the empty section. Never an error.
  pub fn load_from(path: &Path) -> Self {
    match Self::parse(path) {
      Ok(section) => section,
      Err(err) => {
        println!("{} {}: {}", "Ignoring config file".yellow(), path.display(), err);
        Self::default()
      }
    }
  }

  fn parse(path: &Path) -> Result<Self, ConfigError> {
    let config = Config::builder()
      .add_source(config::File::new(path.to_string_lossy().as_ref(), FileFormat::Toml).required(false))
      .build()?;

    match config.get::<Self>("tool.commit_hook") {
      Err(ConfigError::NotFound(_)) => Ok(Self::default()),
      section => section
    }
  }

  /// The commit types to offer, in menu order: the configured list if one
  /// is present (even an empty one), the built-in list otherwise.
  pub fn commit_types(&self) -> Vec<CommitType> {
    match &self.types {
      Some(entries) => entries.iter().cloned().map(CommitType::from).collect(),
      None => {
        log::debug!("No commit types configured, using the built-in list");
        DEFAULT_TYPES.clone()
      }
    }
  }
}
