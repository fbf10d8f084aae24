//! Interactive questionnaire

mod prompt;

pub use prompt::{Question, QuestionnairePrompt};
