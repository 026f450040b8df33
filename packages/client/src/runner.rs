//! Client execution logic with reconnection support.

use std::time::Duration;

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use super::{
    error::ClientError,
    session::{SessionConfig, run_client_session},
    ui::prompt,
};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Run the client with reconnection logic
///
/// Returns `Ok` when the user closes the input, `Err` when the server stays
/// unreachable for every attempt.
pub async fn run_client(
    server_url: String,
    worker_name: Option<String>,
) -> Result<(), ClientError> {
    let config = SessionConfig {
        server_url,
        worker_name,
    };
    let mut input_rx = spawn_line_reader(prompt(config.worker_name.as_deref()));
    let mut reconnect_count = 0;

    loop {
        tracing::info!(
            "Attempting to connect to {} (attempt {}/{})",
            config.server_url,
            reconnect_count + 1,
            MAX_RECONNECT_ATTEMPTS
        );

        match run_client_session(&config, &mut input_rx).await {
            Ok(()) => {
                tracing::info!("Client session ended normally");
                return Ok(());
            }
            Err(e) => {
                tracing::warn!("Connection lost: {}", e);
                reconnect_count += 1;

                if !should_attempt_reconnect(&e, reconnect_count, MAX_RECONNECT_ATTEMPTS) {
                    if e.is_fatal() {
                        return Err(e);
                    }
                    return Err(ClientError::ReconnectExhausted(reconnect_count));
                }

                tracing::info!(
                    "Reconnecting in {} seconds... (attempt {}/{})",
                    RECONNECT_INTERVAL_SECS,
                    reconnect_count + 1,
                    MAX_RECONNECT_ATTEMPTS
                );

                tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
            }
        }
    }
}

/// Whether another connection attempt should follow `error`.
///
/// `attempts` counts the attempts that already failed.
fn should_attempt_reconnect(error: &ClientError, attempts: u32, max_attempts: u32) -> bool {
    !error.is_fatal() && attempts < max_attempts
}

/// Read lines on a blocking thread (rustyline is synchronous) for the whole
/// lifetime of the client, so reconnects keep the same editor and history.
fn spawn_line_reader(prompt: String) -> mpsc::UnboundedReceiver<String> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            // Channel closed, exit thread
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    input_rx
}
