//! Implementation of the `monkeyhub serve` command.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::application::AppContext;
use crate::infrastructure::web::start_server;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

pub async fn execute(args: ServeArgs, context: &AppContext) -> Result<()> {
    let mut server_config = context.config.server.clone();
    if let Some(host) = args.host {
        server_config.host = host;
    }
    if let Some(port) = args.port {
        server_config.port = port;
    }

    info!(source = %context.config.source.url, "starting monkey API");
    start_server(&server_config, context.app_state()).await
}
