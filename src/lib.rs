pub mod commit;
pub mod config;
pub mod hook;
pub mod prompt;
