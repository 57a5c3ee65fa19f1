//! HTTP client adapter for the remote monkey feed.

pub mod monkey_client;

pub use monkey_client::{build_http_client, HttpMonkeySource};
