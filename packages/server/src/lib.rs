//! Real-time dashboard server for coordinating live-chat scraping workers.
//!
//! Workers and dashboards hold a WebSocket connection to the server. Comments
//! and scrape jobs arrive over HTTP, are stored in memory and fanned out to
//! every connection. Worker presence is tracked per connection.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
