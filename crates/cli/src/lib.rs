pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod message;
pub mod report;
pub mod validate;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use message::CommitMessage;
pub use validate::{DEFAULT_TYPES, ValidationResult, Violation, validate};
