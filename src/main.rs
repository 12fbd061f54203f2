#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use anyhow::{Context, Result};
use appstate::app::AppStores;
use appstate::app::dispatch::dispatch;
use appstate::cli::Cli;
use appstate::config::Config;
use appstate::observability::init_tracing;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_init()?,
    };
    config.apply_env_overrides();
    if let Some(base_url) = &cli.base_url {
        config.api.base_url.clone_from(base_url);
    }
    config.validate()?;

    init_tracing(config.observability.log_level);

    let stores = AppStores::from_config(&config);
    let report = dispatch(cli.command, &stores).await;

    let rendered = serde_json::to_string_pretty(&report).context("Failed to render state")?;
    println!("{rendered}");
    if let Some(notification) = &report.notification {
        eprintln!("[{}] {}", notification.severity, notification.text);
    }

    Ok(if report.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
