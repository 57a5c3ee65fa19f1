//! CLI command implementations.

pub mod init;
pub mod monkey;
pub mod serve;
pub mod status;
