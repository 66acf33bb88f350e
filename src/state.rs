//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, LinkSettings, StatsService};
use crate::domain::clock::Clock;
use crate::infrastructure::memory::InMemoryStore;

/// State cloned into every request.
///
/// Both services share one [`InMemoryStore`]; each `AppState::new` call gets
/// whatever store it is handed, so tests can run against fresh, isolated
/// stores.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryStore>>,
    pub stats_service: Arc<StatsService<InMemoryStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryStore>, clock: Arc<dyn Clock>, settings: LinkSettings) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store.clone(), clock, settings)),
            stats_service: Arc::new(StatsService::new(store)),
        }
    }
}
