//! doorbase - a small self-hostable CRUD service for door records
//!
//! The whole persistent state is one JSON document on disk mapping
//! collection names to arrays of records; an axum HTTP server exposes
//! create/read/update/delete over the "doors" collection.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
