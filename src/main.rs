// MindBridge - Supportive keyword-matching chat service
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use mindbridge::config::load_config;
use mindbridge::responder::{ResponderEngine, ResponseTable};
use mindbridge::server::{ChatServer, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "mindbridge")]
#[command(about = "Supportive keyword-matching chat service", version)]
struct Args {
    /// Port to listen on (overrides PORT and the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Interface to bind (default: 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Path to a JSON response table overriding the built-in one
    #[arg(long)]
    responses: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Defaults, then config file, then environment, then CLI flags
    let mut config = load_config()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(responses) = args.responses {
        config.responses_path = Some(responses);
    }
    if args.debug {
        config.debug = true;
    }

    init_tracing(config.debug);

    let table = match &config.responses_path {
        Some(path) => ResponseTable::load_from_file(path)?,
        None => ResponseTable::default(),
    };

    tracing::info!(
        categories = table.category_keys().len(),
        "Response table loaded"
    );

    let engine = ResponderEngine::new(table)?;

    let server_config = ServerConfig {
        bind_address: config.bind_address(),
        port: config.port,
    };

    tracing::info!(
        port = config.port,
        debug = config.debug,
        "Starting MindBridge mental health companion"
    );

    let server = ChatServer::new(engine, server_config);
    server.serve().await
}

/// Initialize tracing with an environment filter
///
/// Default: INFO level (DEBUG in debug mode), can be overridden with the
/// RUST_LOG env var.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
