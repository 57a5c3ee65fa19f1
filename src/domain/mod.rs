//! Domain layer for Monkeyhub
//!
//! This module contains the monkey model, configuration model, and the port
//! traits implemented by services and infrastructure adapters.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{FetchError, FetchResult};
