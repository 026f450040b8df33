//! Terminal dashboard / worker client with reconnection support.
//!
//! Connects to a chathub server, prints every pushed event and accepts
//! commands from stdin. Automatically reconnects on disconnection (max 5
//! attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chathub-client
//! cargo run --bin chathub-client -- --worker-name scraper-1 --server http://127.0.0.1:10000
//! ```

use clap::Parser;

use chathub_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "chathub-client")]
#[command(about = "Terminal dashboard for chathub, optionally acting as a worker", long_about = None)]
struct Args {
    /// Base URL of the chathub server
    #[arg(short = 's', long, default_value = "http://127.0.0.1:10000")]
    server: String,

    /// Register this session as a worker with the given name
    #[arg(short = 'w', long)]
    worker_name: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = chathub_client::run_client(args.server, args.worker_name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
