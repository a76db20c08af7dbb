// Configuration structs

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (default: all interfaces, for container deploys)
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// Debug mode: verbose logging
    pub debug: bool,

    /// Optional JSON response table overriding the built-in one
    pub responses_path: Option<PathBuf>,
}

impl Config {
    /// Full bind address for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: false,
            responses_path: None,
        }
    }
}
