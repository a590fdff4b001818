//! Centralized configuration (environment variables + defaults).

/// Socket address the API server binds to.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
