//! Data Transfer Objects (DTOs) for the dashboard protocol.
//!
//! DTOs are organized by protocol:
//! - `payload`: entity shapes shared by both protocols
//! - `websocket`: push-channel envelopes
//! - `http`: HTTP request/response bodies

pub mod conversion;
pub mod http;
pub mod payload;
pub mod websocket;
