//! `MessagePusher` implementations.
//!
//! - `websocket`: per-connection unbounded channels drained by the
//!   WebSocket writer task

pub mod websocket;

pub use websocket::WebSocketMessagePusher;
