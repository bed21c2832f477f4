use std::fmt;

use serde::Deserialize;
use lazy_static::lazy_static;

/// A selectable commit classifier: the short tag that prefixes the message
/// and the description shown next to it in the menu.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommitType {
  pub value: String,
  pub name:  String
}

impl CommitType {
  pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
    Self { value: value.into(), name: name.into() }
  }
}

impl fmt::Display for CommitType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.value, self.name)
  }
}

lazy_static! {
  /// Menu shown when no `types` list is configured. Order defines numbering.
  pub static ref DEFAULT_TYPES: Vec<CommitType> = vec![
    CommitType::new("feat", "A new feature"),
    CommitType::new("bug", "A bug fix"),
    CommitType::new("perf", "Improve performance"),
    CommitType::new("docs", "Documentation-only changes"),
    CommitType::new("style", "Code style changes (formatting, etc)"),
    CommitType::new("ref", "Code refactor without behavior change"),
    CommitType::new("ci", "CI/CD configuration or scripts"),
  ];
}

/// A finished answer from the prompt, rendered as `type: summary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
  pub commit_type: String,
  pub summary:     String
}

impl fmt::Display for CommitMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.commit_type, self.summary)
  }
}
