//! UI layer: axum handlers, routing and the server runner.

mod error;
mod handler;
mod server;
mod signal;
pub mod state;

pub use error::ApiError;
pub use server::Server;
pub use state::AppState;
