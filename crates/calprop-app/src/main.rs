use std::path::PathBuf;

use anyhow::Context;
use calprop_core::config::load_config;
use calprop_service::calendar::{CalendarFactory, ResolveContext};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "calprop")]
#[command(about = "Resolve calendar descriptors from a CalDAV PROPFIND multistatus body")]
struct Cli {
    /// Multistatus XML file to read
    input: PathBuf,

    /// Resolve as an anonymous visitor of a published calendar
    #[arg(long)]
    public: bool,

    /// Address the client is served from, used to build public links
    #[arg(long)]
    location: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let mut context = ResolveContext::try_from(config.context)?;
    if cli.public {
        context.public_mode = true;
    }
    if let Some(location) = cli.location {
        context.location = location;
    }

    let xml = std::fs::read(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let resources = CalendarFactory::new(context).parse(&xml)?;

    println!("{}", serde_json::to_string_pretty(&resources)?);

    Ok(())
}
