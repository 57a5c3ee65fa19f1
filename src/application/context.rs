use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::domain::models::Config;
use crate::domain::ports::{ConnectivityService, MonkeyService};
use crate::infrastructure::connectivity::connectivity_from_config;
use crate::infrastructure::http::{build_http_client, HttpMonkeySource};
use crate::infrastructure::web::AppState;
use crate::services::MonkeyDataService;

/// Long-lived services shared by every front end for one process
///
/// The monkey service is created once here and handed out by `Arc`, so its
/// cache lives as long as the process.
pub struct AppContext {
    pub config: Config,
    pub monkey_service: Arc<MonkeyDataService<HttpMonkeySource>>,
    pub connectivity: Arc<dyn ConnectivityService>,
}

impl AppContext {
    pub fn from_config(config: Config) -> Result<Self> {
        let http_client = build_http_client(&config.source)?;
        let source = Arc::new(HttpMonkeySource::new(http_client, config.source.url.clone()));
        let monkey_service = Arc::new(MonkeyDataService::new(source));
        let connectivity = connectivity_from_config(&config.connectivity);

        debug!(
            source = %config.source.url,
            connectivity = connectivity.name(),
            "application context ready"
        );

        Ok(Self {
            config,
            monkey_service,
            connectivity,
        })
    }

    /// State for the HTTP API
    pub fn app_state(&self) -> AppState {
        AppState {
            monkey_service: self.monkey_service.clone() as Arc<dyn MonkeyService>,
            connectivity: self.connectivity.clone(),
        }
    }
}
