//! CLI entrypoint for skinpal
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use skinpal_application::{
    GetProfileUseCase, GetRecommendationsUseCase, IdentityPort, ProfileStorePort,
    RecommendationOutcome, SubmitQuestionnaireUseCase,
};
use skinpal_domain::{OutputFormat, RecommendationEngine, SkinProfile};
use skinpal_infrastructure::{
    CatalogLoader, ConfigLoader, FileConfig, InMemoryProfileStore, JsonFileProfileStore,
    LocalIdentity, SessionFile, StoreBackend,
};
use skinpal_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormatter, QuestionnairePrompt,
};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Everything a command needs, built once at startup
struct App<S: ProfileStorePort> {
    identity: Arc<LocalIdentity>,
    /// Saved sign-in; `None` when no data directory is known
    session: Option<SessionFile>,
    /// `[identity] user` is set, so it signs in again on every run
    configured_user: bool,
    store: Arc<S>,
    engine: RecommendationEngine,
    format: OutputFormat,
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources());
        return Ok(());
    }

    info!("Starting skinpal");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate()?;
    debug!("Effective configuration: {:?}", config);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    // The catalog is loaded and validated once, then shared read-only
    let catalog = CatalogLoader::load(&config.catalog)?;
    info!("Loaded catalog version {}", catalog.version());
    let engine = RecommendationEngine::new(Arc::new(catalog));

    let session = config.identity.resolved_session_path().map(SessionFile::new);
    let identity = Arc::new(build_identity(&config, cli.user.as_deref(), session.as_ref()).await?);
    let configured_user = config.identity.user.is_some();
    let command = cli.command.unwrap_or(Command::Show);

    match config.store.backend {
        StoreBackend::Memory => {
            let store = Arc::new(InMemoryProfileStore::new());
            App { identity, session, configured_user, store, engine, format, quiet: cli.quiet }
                .run(command)
                .await
        }
        StoreBackend::File => {
            let path = config.store.resolved_path().ok_or_else(|| {
                anyhow!("Could not determine a data directory; set [store] path in config")
            })?;
            debug!("Using profile store at {}", path.display());
            let store = Arc::new(JsonFileProfileStore::new(path));
            App { identity, session, configured_user, store, engine, format, quiet: cli.quiet }
                .run(command)
                .await
        }
    }
}

async fn build_identity(
    config: &FileConfig,
    user_override: Option<&str>,
    session: Option<&SessionFile>,
) -> Result<LocalIdentity> {
    let mut identity_config = config.identity.clone();
    if let Some(user) = user_override {
        identity_config.user = Some(user.to_string());
    }
    let identity = match session {
        Some(session) => LocalIdentity::restore(&identity_config, session).await?,
        None => LocalIdentity::from_config(&identity_config)?,
    };
    if identity.current_user().is_none() {
        debug!("No user configured; running signed out");
    }
    Ok(identity)
}

/// Turn a use case error into a user-facing one, hinting at a retry when it may help
fn user_error(error: impl Display, retryable: bool) -> anyhow::Error {
    if retryable {
        anyhow!("{}. Please try again.", error)
    } else {
        anyhow!("{}", error)
    }
}

impl<S: ProfileStorePort + 'static> App<S> {
    async fn run(self, command: Command) -> Result<()> {
        match command {
            Command::Recommend {
                skin_type,
                concern,
                budget,
            } => {
                let profile = SkinProfile::from_answers(&skin_type, &concern, &budget)?;
                self.print_recommendations(&profile);
            }
            Command::Questionnaire {
                skin_type,
                concern,
                budget,
            } => self.questionnaire(skin_type, concern, budget).await?,
            Command::Show => self.show().await?,
            Command::Profile => self.profile().await?,
            Command::Catalog => {
                let catalog = self.engine.catalog();
                let output = match self.format {
                    OutputFormat::Json => serde_json::to_string_pretty(catalog)?,
                    _ => ConsoleFormatter::format_catalog(catalog),
                };
                println!("{}", output);
            }
            Command::Signin { email } => self.sign_in(email).await?,
            Command::Signout => self.sign_out().await?,
        }
        Ok(())
    }

    fn session(&self) -> Result<&SessionFile> {
        self.session.as_ref().ok_or_else(|| {
            anyhow!("Could not determine a data directory; set [identity] session_path in config")
        })
    }

    async fn sign_in(&self, email: Option<String>) -> Result<()> {
        let Some(mut user) = self.identity.current_user() else {
            bail!("Tell skinpal who you are: skinpal --user <USER> signin");
        };
        if let Some(email) = email {
            user = user.with_email(email);
        }

        self.session()?.save(&user).await?;
        self.identity.sign_in(user.clone());

        if !self.quiet {
            println!("Signed in as {}", user.id);
        }
        Ok(())
    }

    async fn sign_out(&self) -> Result<()> {
        self.identity.sign_out();
        let had_session = self.session()?.clear().await?;

        if self.configured_user {
            warn!("[identity] user is set in config and will sign you in again on the next run");
        }
        if !self.quiet {
            if had_session {
                println!("Signed out");
            } else {
                println!("No saved session");
            }
        }
        Ok(())
    }

    async fn questionnaire(
        &self,
        skin_type: Option<String>,
        concern: Option<String>,
        budget: Option<String>,
    ) -> Result<()> {
        if self.identity.current_user().is_none() {
            bail!("You must be signed in to submit your skin profile (use --user or [identity] user)");
        }

        let input = QuestionnairePrompt::terminal()
            .complete(skin_type, concern, budget)
            .context("Failed to read questionnaire answers")?;

        let use_case = SubmitQuestionnaireUseCase::new(self.identity.clone(), self.store.clone());
        let profile = use_case
            .execute(input)
            .await
            .map_err(|e| user_error(&e, e.is_retryable()))?;

        if !self.quiet && self.format != OutputFormat::Json {
            println!();
            print!("{}", ConsoleFormatter::format_profile_saved(&profile));
        }
        self.print_recommendations(&profile);
        Ok(())
    }

    async fn show(&self) -> Result<()> {
        let use_case = GetRecommendationsUseCase::new(
            self.identity.clone(),
            self.store.clone(),
            self.engine.clone(),
        );
        let outcome = use_case
            .execute()
            .await
            .map_err(|e| user_error(&e, e.is_retryable()))?;

        match outcome {
            RecommendationOutcome::Ready {
                profile,
                recommendations,
            } => println!(
                "{}",
                ConsoleFormatter.render(self.format, &profile, &recommendations)
            ),
            RecommendationOutcome::QuestionnaireRequired => {
                print!("{}", ConsoleFormatter::format_questionnaire_required())
            }
        }
        Ok(())
    }

    async fn profile(&self) -> Result<()> {
        let use_case = GetProfileUseCase::new(self.identity.clone(), self.store.clone());
        let state = use_case
            .execute()
            .await
            .map_err(|e| user_error(&e, e.is_retryable()))?;

        match self.format {
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_profile_json(&state)),
            _ => print!("{}", ConsoleFormatter::format_profile(&state)),
        }
        Ok(())
    }

    fn print_recommendations(&self, profile: &SkinProfile) {
        let recommendations = self.engine.generate_recommendations(profile);
        println!(
            "{}",
            ConsoleFormatter.render(self.format, profile, &recommendations)
        );
    }
}
