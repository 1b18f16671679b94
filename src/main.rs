//! wikisearch: search Wikipedia from the command line
//!
//! This is the main entry point for the application.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wikisearch_rs::{
    cli::Cli, config, App, HttpClient, QueryBuilder, ResponseSaver, SearchExecutor,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, command line wins over file and environment
    let (mut settings, source) = config::load(cli.config.as_deref())?;
    cli.apply(&mut settings);

    // Initialize logging
    init_tracing(settings.general.debug);
    info!("Starting wikisearch v{}", wikisearch_rs::VERSION);
    match source {
        Some(path) => debug!("Loaded settings from: {}", path.display()),
        None => debug!("No settings file found, using defaults"),
    }

    settings.validate()?;
    let topic = cli.topic()?;

    let query = QueryBuilder::from_settings(&settings.api).build(&topic)?;
    debug!("Built query URL {}", query.endpoint_url());

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;

    let app = App::new(
        SearchExecutor::new(client),
        ResponseSaver::new(settings.output.indent),
        settings.output.path.clone(),
    );

    let stdout = std::io::stdout();
    let report = app.run(&query, &mut stdout.lock()).await;

    for err in &report.errors {
        eprintln!("{}", err);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
