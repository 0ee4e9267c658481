use anyhow::{Context, Result};
use clap::Parser;
use headlines::app::{App, AppEvent};
use headlines::config::Config;
use headlines::news::MockNewsSource;
use headlines::theme::ThemeVariant;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Get the default config file path (~/.config/headlines/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("headlines")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "headlines", about = "Browse the latest tech news by category")]
struct Args {
    /// Config file (defaults to ~/.config/headlines/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme override: "dark" or "light"
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Append logs to this file (filtered by RUST_LOG); discarded otherwise
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_writer = headlines::util::log_writer(args.log_file.as_deref())
        .context("Failed to open log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(log_writer)
        .with_ansi(false)
        .init();

    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let theme_name = args.theme.as_deref().unwrap_or(&config.theme);
    let theme = ThemeVariant::from_str_name(theme_name).unwrap_or_else(|| {
        tracing::warn!(theme = %theme_name, "Unknown theme, falling back to dark");
        ThemeVariant::Dark
    });

    let mut app = App::new(theme);
    let source = Arc::new(MockNewsSource::new(config.load_delay()));

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(8);

    headlines::ui::run(&mut app, source, event_tx, event_rx).await?;

    Ok(())
}
