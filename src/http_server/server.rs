//! HTTP server
//!
//! Builds the router (door routes, permissive CORS, request logging) and
//! runs it on a tokio TCP listener until the process is terminated. There
//! is no graceful shutdown or signal handling.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::store::Store;

use super::config::ServerConfig;
use super::door_routes::{door_routes, DoorState};

/// HTTP server for the doors API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server from the given configuration
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the router: door routes, CORS open to all origins, one log
    /// line per request
    fn build_router(config: &ServerConfig) -> Router {
        let state = Arc::new(DoorState::new(Store::new(&config.db_path)));

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        door_routes(state)
            .layer(cors)
            .layer(middleware::from_fn(log_request))
    }

    /// Get the socket address the server binds to
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for driving requests in tests)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until externally terminated
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info("server_started", &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// One log line per request: method, path, status, duration
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis().to_string();
    let status = response.status().as_u16().to_string();
    Logger::info(
        "http_request",
        &[
            ("method", &method),
            ("path", &path),
            ("status", &status),
            ("duration_ms", &duration_ms),
        ],
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::default();
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(ServerConfig::with_port(8080));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::default();
        let _router = server.router();
    }
}
