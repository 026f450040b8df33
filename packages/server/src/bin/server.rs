//! Dashboard server for live-chat scraping workers.
//!
//! Accepts comments and jobs over HTTP, tracks connected workers and pushes
//! every change to all WebSocket subscribers.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chathub-server
//! cargo run --bin chathub-server -- --host 127.0.0.1 --port 3000 --static-dir web/dist
//! ```

use std::{path::PathBuf, sync::Arc};

use chathub_server::ui::{AppState, Server};
use chathub_shared::{logger::setup_logger, time::SystemClock};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chathub-server")]
#[command(about = "Real-time dashboard server for live-chat scraping workers", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "10000")]
    port: u16,

    /// Directory containing the built dashboard (index.html + assets)
    #[arg(short = 's', long, env = "STATIC_DIR", default_value = "dist")]
    static_dir: PathBuf,

    /// Default log level when RUST_LOG is not set
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Store, presence, pusher and use cases share one process-wide state
    let state = AppState::in_memory(Arc::new(SystemClock));

    let server = Server::new(state).with_static_dir(args.static_dir);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
