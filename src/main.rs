use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use staffdeck::domain::validation;
use staffdeck::infrastructure::store::{demo_employees, load_seed_file};
use staffdeck::infrastructure::{AppConfig, CliArgs, ConfigLoader, InMemoryEmployeeStore};
use staffdeck::presentation::{App, Route};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();

    let mut config = ConfigLoader::new()
        .and_then(|loader| loader.load_config(args.config.as_deref()))
        .wrap_err("Failed to load configuration")?;

    config.merge_with_args(args);
    Ok(config)
}

fn create_store(config: &AppConfig) -> Result<InMemoryEmployeeStore> {
    if !config.seed.enabled {
        info!("Starting with an empty store");
        return Ok(InMemoryEmployeeStore::new());
    }

    let records = match &config.seed.file {
        Some(path) => load_seed_file(path, validation::current_year())
            .wrap_err_with(|| format!("Failed to load seed file {}", path.display()))?,
        None => demo_employees(config.seed.count),
    };
    info!(count = records.len(), "Seeding store");

    Ok(InMemoryEmployeeStore::with_records(records))
}

fn create_app() -> Result<App> {
    let config = load_config()?;

    init_logging(&config)?;

    info!(version = staffdeck::VERSION, "Starting Staffdeck");

    let route: Route = config
        .route
        .as_deref()
        .unwrap_or("/")
        .parse()
        .wrap_err("Invalid start route")?;

    let store = Arc::new(create_store(&config)?);
    let mut app = App::new(store, &config);
    app.navigate(route);

    Ok(app)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
