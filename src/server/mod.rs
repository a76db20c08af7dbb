// MindBridge - HTTP server module

mod handlers;

pub use handlers::{create_router, health_check, ApiError};

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::responder::ResponderEngine;

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:5000")
    pub bind_address: String,
    /// Port reported by the health endpoint
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            port: 5000,
        }
    }
}

/// Main chat server structure
pub struct ChatServer {
    /// Response engine (shared, read-only across request handlers)
    engine: Arc<ResponderEngine>,
    /// Server configuration
    config: ServerConfig,
}

impl ChatServer {
    /// Create a new chat server
    pub fn new(engine: ResponderEngine, config: ServerConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config,
        }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self.config.bind_address.parse()?;

        // Create application state
        let app_state = Arc::new(self);

        // Build router
        let app = create_router(app_state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        tracing::info!("Starting MindBridge server on {}", addr);

        // Start server
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Get reference to the response engine
    pub fn engine(&self) -> &Arc<ResponderEngine> {
        &self.engine
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
