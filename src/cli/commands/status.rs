//! Implementation of the `monkeyhub status` command.

use anyhow::Result;
use serde::Serialize;

use crate::application::AppContext;
use crate::cli::output::{output, CommandOutput};

#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub connected: bool,
    pub connectivity_mode: String,
    pub source_url: String,
    pub server_addr: String,
}

impl CommandOutput for StatusOutput {
    fn to_human(&self) -> String {
        let network = if self.connected { "connected" } else { "offline" };
        [
            format!("Network:      {network} (mode: {})", self.connectivity_mode),
            format!("Source:       {}", self.source_url),
            format!("API address:  {}", self.server_addr),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(context: &AppContext, json_mode: bool) -> Result<()> {
    let status = StatusOutput {
        connected: context.connectivity.is_connected().await,
        connectivity_mode: context.connectivity.name().to_string(),
        source_url: context.config.source.url.clone(),
        server_addr: format!("{}:{}", context.config.server.host, context.config.server.port),
    };

    output(&status, json_mode);
    Ok(())
}
