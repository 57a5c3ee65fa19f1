//! Port trait definitions (Hexagonal Architecture)
//!
//! - MonkeySource: raw access to the remote monkey feed
//! - MonkeyService: cached collection and lookup consumed by front ends
//! - ConnectivityService: network availability check for client shells

pub mod connectivity;
pub mod monkey_service;
pub mod monkey_source;

pub use connectivity::ConnectivityService;
pub use monkey_service::MonkeyService;
pub use monkey_source::MonkeySource;
