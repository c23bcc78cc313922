// Entrypoint: parse arguments, load config, build the tracker and hand it
// to the interactive shell.

mod config;
mod shell;

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use vacancy_tracker_core::providers::hh::HhProvider;
use vacancy_tracker_core::storage::json_file::JsonVacancyStorage;
use vacancy_tracker_core::VacancyTracker;

use config::Config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(long, default_value = "vacancy-tracker.toml")]
    config: PathBuf,

    /// Vacancy document to read and write (overrides the config file)
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Search query to fetch on start instead of asking for one
    #[arg(long)]
    query: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(path) = cli.storage {
        config.storage.path = path;
    }
    config.logging.init();
    debug!(?config, "configuration loaded");

    let settings = config.settings();
    let storage = JsonVacancyStorage::new(config.storage.path.clone());
    let provider = HhProvider::with_settings(&settings);
    let mut tracker = VacancyTracker::with_settings(Box::new(storage), Box::new(provider), settings);

    shell::run(&mut tracker, cli.query).await
}
