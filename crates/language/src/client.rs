use std::sync::Arc;

use transport::{ClientConfig, Dispatch, HttpDispatcher};

use crate::documents::Documents;

/// Public endpoint of the Cloud Natural Language service.
pub const DEFAULT_BASE_URL: &str = "https://language.googleapis.com";

/// Client for the Cloud Natural Language API. Cheap to clone; all
/// clones share the same configuration and dispatcher.
#[derive(Clone)]
pub struct Language {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) dispatcher: Arc<dyn Dispatch>,
}

impl Language {
    /// Client against the public endpoint with no credentials attached.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new(DEFAULT_BASE_URL))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_dispatcher(config, Arc::new(HttpDispatcher::new()))
    }

    /// Swaps in an alternative dispatcher, e.g. a recording fake in tests.
    pub fn with_dispatcher(config: ClientConfig, dispatcher: Arc<dyn Dispatch>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// Builds a client from `LANGUAGE_BASE_URL` and `LANGUAGE_API_KEY`,
    /// falling back to the public endpoint when unset.
    pub fn from_env() -> Self {
        let base_url = std::env::var("LANGUAGE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut config = ClientConfig::new(&base_url);
        if let Ok(key) = std::env::var("LANGUAGE_API_KEY") {
            config = config.with_api_key(&key);
        }

        Self::with_config(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The `documents` resource, which carries every analysis method.
    pub fn documents(&self) -> Documents<'_> {
        Documents::new(self)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new()
    }
}
