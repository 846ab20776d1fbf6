use clap::Parser;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing::level_filters::LevelFilter;

use tvevents::config::{self, Config};
use tvevents::core::{Result, TvEventsError};
use tvevents::platform::Os;
use tvevents::{repl, screen::Screen, tui};

/// Terminal demo of TV focus, press and remote-control events.
#[derive(Parser, Debug)]
#[command(name = "tvevents", version, about)]
struct Cli {
    /// Configuration file (defaults to <config dir>/tvevents/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Platform to emulate: android, ios or other
    #[arg(long, value_name = "OS")]
    os: Option<Os>,

    /// Emulate a TV device
    #[arg(long)]
    tv: bool,

    /// Read events as commands from standard input instead of the terminal UI
    #[arg(long)]
    console: bool,
}

fn parse_level(config: &Config, default: LevelFilter) -> Result<LevelFilter> {
    match &config.logging.level {
        Some(level) => level
            .parse()
            .map_err(|_| TvEventsError::Config(format!("invalid log level '{}'", level))),
        None => Ok(default),
    }
}

/// The console logs to stderr. The terminal UI owns the screen, so it logs
/// to a file or not at all.
fn init_logging(config: &Config, console: bool) -> Result<()> {
    if console {
        let level = parse_level(config, LevelFilter::WARN)?;
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    }

    let level = parse_level(config, LevelFilter::INFO)?;
    let Some(log_path) = config.logging.file.clone().or_else(config::default_log_path) else {
        return Ok(());
    };
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    info!(path = %log_path.display(), "Logging initialized");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = config::resolve_config(cli.config.as_deref())?;
    init_logging(&config, cli.console)?;

    let mut platform = config.platform();
    if let Some(os) = cli.os {
        platform.os = os;
    }
    if cli.tv {
        platform.is_tv = true;
    }
    info!(os = %platform.os, is_tv = platform.is_tv, "Starting tvevents...");

    let mut screen = Screen::new(platform, config.input).with_help(config.show_help());
    if cli.console {
        repl::run_repl(&mut screen)
    } else {
        tui::run_tui(&mut screen, config.input.key_release_events)
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("tvevents: {}", e);
        std::process::exit(1);
    }
}
