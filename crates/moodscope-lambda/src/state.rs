use std::sync::Arc;

use crate::config::ServiceConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The request's locale, or the configured default when it sent none.
    pub fn locale_or_default(&self, locale: Option<String>) -> String {
        locale
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| self.config.default_locale.clone())
    }
}
