//! Terminal prompt for the skin questionnaire.
//!
//! Each question lists its options; the user may answer with the option
//! number or its value:
//!
//! ```text
//! What is your skin type?
//!   1. Oily (oily)
//!   2. Dry (dry)
//!   3. Combination (combination)
//! skin type>
//! ```
//!
//! Answers are returned raw. Validation happens when the questionnaire
//! is submitted, so an empty answer here surfaces as a missing answer.

use colored::Colorize;
use skinpal_application::SubmitQuestionnaireInput;
use skinpal_domain::{Budget, Concern, SkinType};
use std::io::{self, BufRead, Write};

/// One multiple-choice question
#[derive(Debug, Clone)]
pub struct Question {
    pub field: &'static str,
    pub text: &'static str,
    /// `(value, label)` pairs
    pub options: Vec<(&'static str, &'static str)>,
}

impl Question {
    pub fn skin_type() -> Self {
        Self {
            field: "skin type",
            text: "What is your skin type?",
            options: SkinType::ALL.iter().map(|v| (v.as_str(), v.label())).collect(),
        }
    }

    pub fn concern() -> Self {
        Self {
            field: "concern",
            text: "What is your main skin concern?",
            options: Concern::ALL.iter().map(|v| (v.as_str(), v.label())).collect(),
        }
    }

    pub fn budget() -> Self {
        Self {
            field: "budget",
            text: "What is your budget per product?",
            options: Budget::ALL.iter().map(|v| (v.as_str(), v.label())).collect(),
        }
    }

    /// Map a menu number to its value; anything else passes through
    fn resolve(&self, input: &str) -> String {
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.options.get(i))
            .map(|(value, _)| value.to_string())
            .unwrap_or_else(|| input.to_string())
    }
}

/// Asks questionnaire questions over any reader/writer pair
pub struct QuestionnairePrompt<R, W> {
    input: R,
    output: W,
}

impl QuestionnairePrompt<io::StdinLock<'static>, io::Stderr> {
    /// Read answers from stdin and ask on stderr, keeping stdout for results
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> QuestionnairePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask one question and return the raw answer
    pub fn ask(&mut self, question: &Question) -> io::Result<String> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", question.text.cyan().bold())?;
        for (i, (value, label)) in question.options.iter().enumerate() {
            writeln!(self.output, "  {}. {} ({})", i + 1, label, value.dimmed())?;
        }
        write!(self.output, "{} ", format!("{}>", question.field).magenta().bold())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(question.resolve(line.trim()))
    }

    /// Fill in whichever answers were not already given
    pub fn complete(
        &mut self,
        skin_type: Option<String>,
        concern: Option<String>,
        budget: Option<String>,
    ) -> io::Result<SubmitQuestionnaireInput> {
        let skin_type = match skin_type {
            Some(answer) => answer,
            None => self.ask(&Question::skin_type())?,
        };
        let concern = match concern {
            Some(answer) => answer,
            None => self.ask(&Question::concern())?,
        };
        let budget = match budget {
            Some(answer) => answer,
            None => self.ask(&Question::budget())?,
        };
        Ok(SubmitQuestionnaireInput::new(skin_type, concern, budget))
    }
}
