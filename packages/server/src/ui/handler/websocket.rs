//! WebSocket connection handlers.
//!
//! Lifecycle of one connection:
//! 1. Upgrade, assign a fresh connection id
//! 2. Catch-up snapshot is queued (`worker_update`, `initial_jobs`)
//! 3. Writer task drains the connection's channel into the socket while the
//!    reader handles `register_worker` frames
//! 4. Either side ends → the reader is fully stopped, then the disconnect
//!    use case runs (presence cleanup + broadcast)

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    domain::{ConnectionId, IdFactory},
    infrastructure::dto::websocket::ClientMessage,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let connection_id = IdFactory::connection_id();
    tracing::info!("New connection: '{}'", connection_id);
    ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id))
}

/// Spawns a task that forwards queued frames to the WebSocket sink.
///
/// Ends when the channel is closed or the socket refuses a write.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Spawns a task that handles frames sent by the client.
fn receiver_loop(
    mut receiver: SplitStream<WebSocket>,
    state: Arc<AppState>,
    connection_id: ConnectionId,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_client_frame(&state, &connection_id, text.as_str()).await
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                // ping/pong is answered by the protocol layer
                _ => {}
            }
        }
    })
}

async fn handle_client_frame(state: &AppState, connection_id: &ConnectionId, text: &str) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Ignoring unparseable frame from '{}': {}", connection_id, e);
            return;
        }
    };

    match message {
        ClientMessage::RegisterWorker(payload) => {
            if let Err(e) = state
                .register_worker_usecase
                .execute(connection_id.clone(), payload.name)
                .await
            {
                tracing::error!("Failed to register worker on '{}': {}", connection_id, e);
            }
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    let (sender, receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel();

    // Catch-up is queued on `tx` before the writer starts, so it goes out first
    if let Err(e) = state
        .connect_client_usecase
        .execute(connection_id.clone(), tx)
        .await
    {
        tracing::error!("Failed to attach connection '{}': {}", connection_id, e);
        return;
    }

    let mut send_task = pusher_loop(rx, sender);
    let mut recv_task = receiver_loop(receiver, state.clone(), connection_id.clone());

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => {
            recv_task.abort();
            // abort only takes effect at the reader's next await; a
            // register_worker already past it would land after the cleanup
            let _ = recv_task.await;
        }
    };

    match state
        .disconnect_client_usecase
        .execute(&connection_id)
        .await
    {
        Ok(Some(worker)) => tracing::info!(
            "Connection '{}' closed, worker '{}' removed",
            connection_id,
            worker.name
        ),
        Ok(None) => tracing::info!("Connection '{}' closed", connection_id),
        Err(e) => tracing::warn!("Failed to clean up connection '{}': {}", connection_id, e),
    }
}
