//! HTTP server module for doorbase
//!
//! Axum-based server exposing CRUD routes over the "doors" collection.
//!
//! # Endpoints
//!
//! - `GET /doors` - list every door
//! - `GET /doors/:id` - fetch one door
//! - `POST /doors` - create a door with a server-generated id
//! - `PUT /doors/:id` - shallow-merge fields into a door
//! - `DELETE /doors/:id` - remove a door and return it

pub mod config;
pub mod door_routes;
pub mod errors;
pub mod server;

pub use config::ServerConfig;
pub use door_routes::{door_routes, DoorState};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
