use anyhow::{Context, Result};
use clap::Parser;
use crix::app::App;
use crix::cli::{Cli, CliHandler};
use crix::config::AppConfig;
use crix::storage::open_store;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug, cli.log_file.clone());

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load config")?,
    };
    cli.apply_overrides(&mut config);

    let store = open_store(&config.storage);
    let mut app = App::new(&config, store)?;

    if let Some(raw) = &cli.skin {
        if let Err(e) = app.selector_mut().set_skin(raw) {
            let available: Vec<_> = app
                .selector()
                .registry()
                .ids()
                .iter()
                .map(|id| id.as_str())
                .collect();
            eprintln!("{} (available: {})", e, available.join(", "));
        }
    }

    if let Some(command) = cli.command {
        let handler = CliHandler::new(app.selector());
        return handler.handle_command(command, &mut std::io::stdout().lock());
    }

    let mut app = app.with_skip_splash(cli.skip_splash);
    app.run().await
}

// The TUI owns stdout, so logs go to a file.
fn init_logging(debug: bool, log_file: Option<PathBuf>) {
    let log_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let path = log_file.or_else(|| dirs::data_local_dir().map(|dir| dir.join("crix").join("crix.log")));
    let writer = match path.as_deref().and_then(open_log_file) {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(log_level)
        .init();

    if debug {
        tracing::debug!("debug logging enabled");
    }
}

fn open_log_file(path: &Path) -> Option<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
