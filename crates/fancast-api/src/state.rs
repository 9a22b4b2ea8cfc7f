//! Application state.

use std::sync::Arc;

use fancast_fal_client::FalClient;
use fancast_llm_client::LlmClient;

use crate::config::ApiConfig;

/// Shared application state.
///
/// Holds only immutable configuration and upstream clients; nothing is
/// mutated across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub llm: Arc<LlmClient>,
    pub fal: Arc<FalClient>,
}

impl AppState {
    /// Create application state from already-built clients.
    pub fn new(config: ApiConfig, llm: LlmClient, fal: FalClient) -> Self {
        Self {
            config,
            llm: Arc::new(llm),
            fal: Arc::new(fal),
        }
    }

    /// Create application state with clients configured from the environment.
    pub fn from_env(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let llm = LlmClient::from_env()?;
        let fal = FalClient::from_env()?;
        Ok(Self::new(config, llm, fal))
    }
}
