//! Main application entry point for picstash.

use clap::Parser;
use std::path::PathBuf;
use tracing_appender::rolling;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;
use ui::Session;

mod config;
use config::{AppConfig, AppConfigOverrides};

#[derive(Parser)]
#[command(
    name = "picstash",
    author,
    version,
    about = "Photo hosting desktop client"
)]
struct Cli {
    /// Owner account id to browse
    #[arg(long)]
    owner: Option<i64>,
    /// Override API base URL
    #[arg(long)]
    api_base_url: Option<String>,
    /// Override log level (e.g. info, debug)
    #[arg(long)]
    log_level: Option<String>,
    /// Override UI language (en or ru)
    #[arg(long)]
    language: Option<String>,
    /// Override number of thumbnails to preload
    #[arg(long)]
    image_preload: Option<usize>,
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let overrides = AppConfigOverrides {
        log_level: cli.log_level,
        api_base_url: cli.api_base_url,
        language: cli.language,
        owner_id: cli.owner,
        image_preload: cli.image_preload,
    };
    let cfg = AppConfig::load_from(cli.config).apply_overrides(&overrides);

    let cache_dir = cfg.cache_path.clone();
    std::fs::create_dir_all(&cache_dir)?;

    let file_appender = rolling::daily(&cache_dir, "picstash.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cfg.log_level.clone()))
        .with_writer(std::io::stdout.and(file_writer))
        .init();

    let Some(owner) = cfg.owner_id else {
        eprintln!("No owner account configured.");
        eprintln!("Pass --owner <id> or set owner_id in the config file.");
        return Ok(());
    };

    let language = i18n::Lang::from_code(&cfg.language).unwrap_or_default();
    tracing::info!(owner, api = %cfg.api_base_url, "starting picstash");

    ui::run(ui::Flags {
        session: Session { owner },
        api_base_url: cfg.api_base_url,
        language,
        preload: cfg.image_preload,
        cache_dir,
        highlight: None,
    })?;

    Ok(())
}
