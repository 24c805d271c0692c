//! Café lookup HTTP service
//!
//! `GET /cafe?count=<n>&city=<name>` returns up to `n` cafés of a city as a
//! comma-separated list, backed by an immutable in-memory directory.

pub mod cafe;
pub mod config;
pub mod directory;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
