//! Application layer: wires configuration, adapters and services together.

pub mod context;

pub use context::AppContext;
