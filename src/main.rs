use anyhow::{Context, Result};
use news_cloud::config::Config;
use news_cloud::feed::http::HttpHeadlineFeed;
use news_cloud::presenter::picker::RandomPicker;
use news_cloud::presenter::schedule::{CancelToken, TokioScheduler};
use news_cloud::presenter::Presenter;
use news_cloud::tui::{self, state::BoardState, TuiCommand};
use std::path::PathBuf;
use tokio::sync::{mpsc, watch};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "config.toml";

/// `--config <path>`, falling back to `config.toml` in the working directory.
fn config_path() -> PathBuf {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            if let Some(path) = args.next() {
                return PathBuf::from(path);
            }
        }
    }
    PathBuf::from(DEFAULT_CONFIG)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load saved settings from .env (real env vars take precedence)
    Config::load_env_file();

    let path = config_path();
    let mut config = if path == PathBuf::from(DEFAULT_CONFIG) {
        Config::load_or_default(&path)?
    } else {
        Config::load(&path)?
    };
    config.apply_env_overrides();

    let log_file = std::fs::File::create(&config.log.file)
        .with_context(|| format!("Failed to create log file: {}", config.log.file))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let feed = HttpHeadlineFeed::new(&config.feed)?;
    tracing::info!(url = feed.url(), interval_ms = config.presenter.interval_ms, "starting news cloud");

    // Channels
    let (state_tx, state_rx) = watch::channel(BoardState::new());
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<TuiCommand>(16);
    let cancel = CancelToken::new();

    state_tx.send_modify(|s| s.push_log("INFO", format!("Fetching {}", feed.url())));

    let mut presenter = Presenter::new(
        RandomPicker::from_entropy(),
        state_tx.clone(),
        config.presenter.interval(),
    );
    let presenter_cancel = cancel.clone();
    let presenter_task = tokio::spawn(async move {
        presenter.start(&feed, &mut TokioScheduler, &presenter_cancel).await;
    });

    let cmd_cancel = cancel.clone();
    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            if !tui::apply_command(&cmd, &state_tx, &cmd_cancel) {
                return;
            }
        }
    });

    let result = tui::run_tui(state_rx, cmd_tx).await;

    cancel.cancel();
    if let Err(e) = presenter_task.await {
        tracing::error!(error = %e, "presenter task failed");
    }

    result
}
