//! Application state for the HTTP server.

use std::sync::Arc;

use crate::adapters::HttpContributionSource;
use crate::core::engine::ContributionEngine;
use crate::core::extractor::CalendarGraphExtractor;
use crate::core::interval::SystemClock;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

/// Shared application state passed to all handlers.
///
/// Holds no mutable data; concurrent requests only share the engine's
/// immutable collaborators.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ContributionEngine>,
}

impl AppState {
    pub fn new(engine: ContributionEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Wire the production collaborators from configuration.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let source = HttpContributionSource::from_config(config)?;
        let engine = ContributionEngine::new(
            Arc::new(source),
            Arc::new(CalendarGraphExtractor::new()),
            Arc::new(SystemClock),
        );
        Ok(Self::new(engine))
    }
}
