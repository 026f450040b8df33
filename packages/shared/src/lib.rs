//! Utilities shared by the chathub server and client binaries.

pub mod logger;
pub mod time;
