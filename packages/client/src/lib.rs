//! Terminal client for the chathub dashboard server.
//!
//! Mirrors the server state from the `/ws` event stream and drives the HTTP
//! API from an interactive prompt. With `--worker-name` the session also
//! registers itself as a worker.

mod api;
mod command;
mod error;
mod formatter;
mod mirror;
mod runner;
mod session;
mod ui;
mod view;

pub use error::ClientError;
pub use runner::run_client;
