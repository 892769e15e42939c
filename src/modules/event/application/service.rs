use crate::modules::dcnet::{DcnetHttpClient, DcnetSource};
use crate::modules::event::domain::{Event, EventId};
use crate::shared::config::DcnetConfig;
use crate::shared::errors::AppResult;
use std::sync::Arc;

/// Entry point for building events against one danceconvention.net source
pub struct EventService {
    source: Arc<dyn DcnetSource>,
}

impl EventService {
    /// Service backed by the HTTP client described by `config`
    pub fn from_config(config: &DcnetConfig) -> AppResult<Self> {
        let client = DcnetHttpClient::with_config(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn new(source: Arc<dyn DcnetSource>) -> Self {
        Self { source }
    }

    /// An unloaded event bound to this service's source
    pub fn event(&self, id: impl Into<EventId>) -> Event {
        Event::new(id, Arc::clone(&self.source))
    }

    /// Fetch everything known about an event
    pub async fn load_event(&self, id: impl Into<EventId>) -> AppResult<Event> {
        let mut event = self.event(id);
        event.load().await?;
        Ok(event)
    }

    /// Fetch only the contest list, enough to tell whether the event exists
    pub async fn load_contests(&self, id: impl Into<EventId>) -> AppResult<Event> {
        let mut event = self.event(id);
        event.ensure_contests_loaded().await?;
        Ok(event)
    }
}
