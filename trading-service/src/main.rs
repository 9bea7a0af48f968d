//! Trading service binary

use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use trading_service::handler::register_handlers;
use trading_service::{RestConf, Server, ServiceContext};

/// QuantFi trading service
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// The config file
    #[clap(short = 'f', value_name = "FILE", default_value = "etc/trading.yaml")]
    config_file: PathBuf,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Nothing is bound until the config has been read
    let conf = match RestConf::load(&args.config_file) {
        Ok(conf) => conf,
        Err(err) => fail(format!("failed to read config: {}", err)),
    };

    common::logging::init(&conf.log.level);
    info!(config = %args.config_file.display(), "Configuration loaded");

    let ctx = ServiceContext::new(conf.clone()).await;
    let mut server = match Server::new(&conf) {
        Ok(server) => server,
        Err(err) => fail(format!("failed to create server: {}", err)),
    };

    register_handlers(&mut server, ctx);

    println!("Starting trading service at {}:{}...", conf.host, conf.port);
    if let Err(err) = server.start().await {
        fail(format!("failed to start server: {}", err));
    }
}

fn fail(message: String) -> ! {
    error!("{}", message);
    eprintln!("{}", message);
    std::process::exit(1)
}
