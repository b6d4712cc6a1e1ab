//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::config::Config;

/// Static service metadata shown on the root endpoint.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub project_name: String,
    pub base_url: String,
    pub api_prefix: String,
}

impl From<&Config> for ServiceInfo {
    fn from(config: &Config) -> Self {
        Self {
            project_name: config.project_name.clone(),
            base_url: config.base_url.clone(),
            api_prefix: config.api_prefix.clone(),
        }
    }
}

/// State shared by every request. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
    pub service_info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(mapping_service: Arc<MappingService>, service_info: ServiceInfo) -> Self {
        Self {
            mapping_service,
            service_info: Arc::new(service_info),
        }
    }
}
