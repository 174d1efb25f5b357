//! HTTP layer: configuration, shared state, error mapping, auth, handlers,
//! and routers. The binary entrypoint lives in `main.rs`; integration tests
//! build the same router through [`routes::api_routes`].

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod uploads;
