//! UI utilities for the client.

use std::io::Write;

/// Prompt shown by the line editor
pub fn prompt(worker_name: Option<&str>) -> String {
    format!("{}> ", worker_name.unwrap_or("dashboard"))
}

/// Redisplay the prompt after printing asynchronous output
pub fn redisplay_prompt(prompt: &str) {
    print!("{}", prompt);
    std::io::stdout().flush().ok();
}
