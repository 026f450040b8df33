//! Server execution logic.

use std::{future::Future, path::PathBuf, sync::Arc};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::{
    handler::{
        http::{
            clear_comments, create_comment, create_job, health_check, list_comments,
            list_pending_jobs, list_workers,
        },
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

const DEFAULT_STATIC_DIR: &str = "dist";

/// Dashboard server
///
/// Serves the HTTP API, the `/ws` event stream and the built dashboard
/// bundle from one listener.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(AppState::in_memory(Arc::new(SystemClock)))
///     .with_static_dir("dist".into());
/// server.run("0.0.0.0".to_string(), 10000).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
    static_dir: PathBuf,
}

impl Server {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Directory holding the dashboard bundle; unknown paths fall back to
    /// its `index.html`.
    pub fn with_static_dir(mut self, static_dir: PathBuf) -> Self {
        self.static_dir = static_dir;
        self
    }

    /// Build the router with every route, the static fallback and the
    /// tracing/CORS layers.
    pub fn router(&self) -> Router {
        let spa = ServeDir::new(&self.static_dir)
            .fallback(ServeFile::new(self.static_dir.join("index.html")));

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([CONTENT_TYPE]);

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route(
                "/api/comments",
                get(list_comments).post(create_comment).delete(clear_comments),
            )
            .route("/api/jobs", get(list_pending_jobs).post(create_job))
            .route("/api/workers", get(list_workers))
            .fallback_service(spa)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Run the dashboard server until SIGINT/SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Dashboard server listening on {}", listener.local_addr()?);
        tracing::info!("Serving static files from {}", self.static_dir.display());
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
