//! API Gateway binary

use api_gateway::config::AppConfig;
use clap::Parser;
use common::shutdown::shutdown_signal;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, Level};

/// QuantFi API gateway. Listens on HOST:PORT (default 0.0.0.0:8080).
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    let _args = Args::parse();

    let log_level = common::logging::init("info");
    let config = AppConfig::from_env();

    if let Err(err) = run(config, log_level).await {
        error!("failed to start gateway: {}", err);
        eprintln!("failed to start gateway: {}", err);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig, log_level: Level) -> std::io::Result<()> {
    let app = api_gateway::app(log_level);

    let listener = TcpListener::bind(config.addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    // Run until interrupt signal
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}
