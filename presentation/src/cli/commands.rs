//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for recommendation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full routine with products and tips for every step
    Full,
    /// Top pick per step only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for skinpal_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for skinpal
#[derive(Parser, Debug)]
#[command(name = "skinpal")]
#[command(author, version, about = "Skincare routine recommendations from a short questionnaire")]
#[command(long_about = r#"
skinpal recommends a skincare routine from three answers:
your skin type, your main concern and your budget.

The routine has up to four steps:
1. Cleanser
2. Moisturizer
3. Treatment (only when you have a concern)
4. Sunscreen

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./skinpal.toml      Project-level config
3. ~/.config/skinpal/config.toml   Global config

Example:
  skinpal recommend --skin-type oily --concern acne --budget below_500
  skinpal --user alice questionnaire
  skinpal --user alice signin
  skinpal show -o summary
  skinpal signout
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Act as this user (overrides [identity] user in config)
    #[arg(short, long, global = true, value_name = "USER")]
    pub user: Option<String>,

    /// Output format (overrides [output] format in config)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Recommend a routine for the given answers without saving anything
    Recommend {
        /// oily, dry or combination
        #[arg(long, value_name = "TYPE")]
        skin_type: String,

        /// acne, hyperpigmentation, wrinkles or none
        #[arg(long, value_name = "CONCERN", default_value = "none")]
        concern: String,

        /// below_500, 500_to_1000 or 1000_to_2000
        #[arg(long, value_name = "BUDGET")]
        budget: String,
    },

    /// Answer the questionnaire and save it as your profile.
    ///
    /// Answers not given as flags are asked for interactively.
    Questionnaire {
        #[arg(long, value_name = "TYPE")]
        skin_type: Option<String>,

        #[arg(long, value_name = "CONCERN")]
        concern: Option<String>,

        #[arg(long, value_name = "BUDGET")]
        budget: Option<String>,
    },

    /// Show recommendations for your saved profile
    Show,

    /// Show your saved profile
    Profile,

    /// Show a summary of the product catalog
    Catalog,

    /// Sign in as --user and remember it for later runs
    Signin {
        #[arg(long, value_name = "EMAIL")]
        email: Option<String>,
    },

    /// Sign out and forget the saved session
    Signout,
}
