use std::sync::Arc;

use crate::core::{config::Settings, registry::ExamRegistry};
use crate::services::page_fetcher::PageFetcher;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    registry: ExamRegistry,
    fetcher: PageFetcher,
}

impl AppState {
    pub(crate) fn new(settings: Settings, registry: ExamRegistry, fetcher: PageFetcher) -> Self {
        Self { inner: Arc::new(InnerState { settings, registry, fetcher }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn registry(&self) -> &ExamRegistry {
        &self.inner.registry
    }

    pub(crate) fn fetcher(&self) -> &PageFetcher {
        &self.inner.fetcher
    }
}
