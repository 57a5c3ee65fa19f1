//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - HTTP client for the remote monkey feed
//! - Local HTTP API (axum)
//! - Connectivity checks
//! - Configuration management
//! - Logging infrastructure
//! - Project setup
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod connectivity;
pub mod http;
pub mod logging;
pub mod setup;
pub mod web;
