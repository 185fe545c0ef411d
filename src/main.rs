use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use movie_browser::catalog::{
    CatalogClient, CatalogSettings, DiscoverRequest, FETCH_FAILED_MESSAGE, PLACEHOLDER_API_KEY,
};
use movie_browser::cli::{format_discover, Cli, Command};
use movie_browser::config::Config;
use movie_browser::logging;
use movie_browser::preference::{
    system_prefers_dark, FilePreferenceStorage, MemoryPreferenceStorage, PreferenceStorage,
    ThemeProvider,
};
use movie_browser::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Discover { .. }) => logging::init_cli_tracing(),
        None => logging::init_tui_tracing(),
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let api_key = config.api_key(cli.api_key.as_deref());
    if api_key == PLACEHOLDER_API_KEY {
        warn!("No API key configured; set TMDB_API_KEY or catalog.api_key");
    }
    let client = CatalogClient::new(CatalogSettings::from_config(&config.catalog, api_key))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        Some(Command::Discover { year, page, json }) => {
            let result = runtime
                .block_on(client.discover(DiscoverRequest::new(year, page)))
                .context(FETCH_FAILED_MESSAGE)?;
            print!("{}", format_discover(&result, &client, json)?);
        }
        None => {
            let storage: Box<dyn PreferenceStorage> =
                match FilePreferenceStorage::open(FilePreferenceStorage::default_path()) {
                    Ok(storage) => Box::new(storage),
                    Err(err) => {
                        warn!(error = %err, "Preferences unavailable, using in-memory storage");
                        Box::new(MemoryPreferenceStorage::new())
                    }
                };
            let theme = ThemeProvider::initialize(storage, system_prefers_dark());
            ui::run(runtime.handle(), client, theme, &config.ui, cli.year)?;
        }
    }

    Ok(())
}
