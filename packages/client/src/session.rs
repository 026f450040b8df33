//! WebSocket client session management.

use std::sync::Arc;

use chathub_server::infrastructure::dto::websocket::{
    ClientMessage, RegisterWorkerPayload, ServerMessage,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{Mutex, mpsc};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    api::{DashboardApi, websocket_url},
    command::{Command, parse},
    error::ClientError,
    formatter::MessageFormatter,
    mirror::DashboardMirror,
    ui::{prompt, redisplay_prompt},
    view::partition,
};

/// Settings that stay the same across reconnects
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub server_url: String,
    pub worker_name: Option<String>,
}

/// Run one connection until the input closes (`Ok`) or the server goes
/// away (`Err`).
///
/// The mirror starts empty every time; the catch-up snapshot and later
/// events rebuild it.
pub async fn run_client_session(
    config: &SessionConfig,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let url = websocket_url(&config.server_url)?;
    let (ws_stream, _) = connect_async(&url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to {}", url);

    let (mut write, mut read) = ws_stream.split();

    if let Some(name) = &config.worker_name {
        let frame = ClientMessage::RegisterWorker(RegisterWorkerPayload {
            name: Some(name.clone()),
        });
        let json = serde_json::to_string(&frame)
            .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
        write
            .send(Message::Text(json.into()))
            .await
            .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
        tracing::info!("Registered as worker '{}'", name);
    }

    println!(
        "\nType '<user>: <text>' to comment or /help for commands. Press Ctrl+C to exit.\n"
    );

    let mirror = Arc::new(Mutex::new(DashboardMirror::new()));
    let prompt = prompt(config.worker_name.as_deref());

    // Spawn a task to handle incoming events
    let mirror_for_read = mirror.clone();
    let prompt_for_read = prompt.clone();
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match serde_json::from_str::<ServerMessage>(text.as_str()) {
                        Ok(event) => {
                            mirror_for_read.lock().await.apply(&event);
                            MessageFormatter::format_event(&event)
                        }
                        Err(_) => MessageFormatter::format_raw_message(text.as_str()),
                    };
                    print!("{}", formatted);
                    redisplay_prompt(&prompt_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    });

    let api = DashboardApi::new(&config.server_url);

    loop {
        tokio::select! {
            line = input_rx.recv() => match line {
                Some(line) => {
                    execute_line(&api, config, &mirror, &line).await;
                    redisplay_prompt(&prompt);
                }
                None => {
                    // Input closed (Ctrl+C / Ctrl+D): leave without reconnecting
                    read_task.abort();
                    write.close().await.ok();
                    return Ok(());
                }
            },
            _ = &mut read_task => {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
    }
}

async fn execute_line(
    api: &DashboardApi,
    config: &SessionConfig,
    mirror: &Mutex<DashboardMirror>,
    line: &str,
) {
    let command = match parse(line) {
        Ok(command) => command,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    match command {
        Command::Comment { user_name, text } => {
            // The comment shows up through the broadcast; only failures are printed
            if let Err(e) = api
                .submit_comment(user_name, text, config.worker_name.clone())
                .await
            {
                println!("{}", e);
            }
        }
        Command::Job(url) => {
            if let Err(e) = api.submit_job(url).await {
                println!("{}", e);
            }
        }
        Command::PendingJobs => match api.pending_jobs().await {
            Ok(jobs) => print!("{}", MessageFormatter::format_jobs("Pending jobs", &jobs)),
            Err(e) => println!("{}", e),
        },
        Command::Clear => match api.clear_comments().await {
            Ok(confirmation) => tracing::info!("{}", confirmation),
            Err(e) => println!("{}", e),
        },
        Command::View => {
            let mirror = mirror.lock().await;
            print!(
                "{}",
                MessageFormatter::format_view(&partition(&mirror.comments))
            );
        }
        Command::Workers => {
            let mirror = mirror.lock().await;
            print!(
                "{}",
                MessageFormatter::format_workers(&mirror.workers, config.worker_name.as_deref())
            );
        }
        Command::Help => println!("{}", MessageFormatter::format_help()),
    }
}
