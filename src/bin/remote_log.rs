//! Command-line client for the remote log collector.
//!
//! Sends one entry using the same configuration as the server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin remote-log -- backend error handler "received string, expected bool"
//!
//! # Print the accepted values
//! cargo run --bin remote-log -- --values
//! ```
//!
//! # Environment Variables
//!
//! - `LOG_COLLECTOR_URL`: collector endpoint; without it entries are logged locally
//! - `LOG_COLLECTOR_TOKEN`: Bearer token sent with each entry
//! - `LOG_COLLECTOR_TIMEOUT_SECS`: request timeout (default: 5)

use shorturls::config::load_from_env;
use shorturls::infrastructure::remote_log::{Level, LogEntry, LogForwarder, Package, Stack};
use shorturls::telemetry::init_tracing;

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;

/// CLI tool for sending entries to the log collector.
#[derive(Parser)]
#[command(name = "remote-log")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// List accepted stacks, levels and packages, then exit
    #[arg(long)]
    values: bool,

    /// Stack: backend or frontend
    stack: Option<String>,
    /// Level: debug, info, warn, error or fatal
    level: Option<String>,
    /// Package name, e.g. handler, db, service
    package: Option<String>,
    /// Message text
    message: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.values {
        print_values();
        return Ok(());
    }

    let config = load_from_env()?;
    init_tracing(&config.log_level, &config.log_format);

    let (Some(stack), Some(level), Some(package), Some(message)) =
        (cli.stack, cli.level, cli.package, cli.message)
    else {
        anyhow::bail!("Usage: remote-log <STACK> <LEVEL> <PACKAGE> <MESSAGE>");
    };

    let entry = LogEntry::parse(&stack, &level, &package, &message)?;

    let forwarder = LogForwarder::new(
        config.log_collector_url.clone(),
        config.log_collector_token.clone(),
        Duration::from_secs(config.log_collector_timeout_secs),
    )
    .context("Failed to build log collector client")?;

    if !forwarder.is_remote() {
        forwarder.send(entry).await;
        println!("No collector configured; entry logged locally");
        return Ok(());
    }

    let log_id = forwarder
        .forward(&entry)
        .await
        .context("Collector rejected the entry")?;
    println!("Logged: {}", log_id);

    Ok(())
}

fn print_values() {
    let join = |items: Vec<&str>| items.join(", ");

    println!("Stacks:   {}", join(Stack::ALL.iter().map(|s| s.as_str()).collect()));
    println!("Levels:   {}", join(Level::ALL.iter().map(|l| l.as_str()).collect()));

    for stack in Stack::ALL {
        let packages = Package::all()
            .filter(|p| p.belongs_to(*stack))
            .map(|p| p.as_str())
            .collect();
        println!("Packages ({}): {}", stack, join(packages));
    }
}
