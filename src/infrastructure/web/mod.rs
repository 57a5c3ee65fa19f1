//! Local HTTP API
//!
//! Exposes the cached monkey collection to other front ends (for example a
//! CLI client shell whose source URL points at `/api/monkeys`).

pub mod handlers;
pub mod server;

pub use handlers::{ApiError, AppState};
pub use server::{router, serve, start_server};
