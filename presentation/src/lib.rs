//! Presentation layer for skinpal
//!
//! This crate contains CLI definitions, output formatters
//! and the interactive questionnaire prompt.

pub mod cli;
pub mod output;
pub mod questionnaire;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use questionnaire::{Question, QuestionnairePrompt};
