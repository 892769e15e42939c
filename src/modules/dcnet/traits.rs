use crate::modules::dcnet::domain::DcnetResource;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde_json::Value;

/// Read access to the danceconvention.net service
///
/// Absence is not an error: a resource that could not be fetched (non-200
/// status, unreachable host) comes back as `Ok(None)`. `Err` is reserved for
/// responses that arrived but could not be understood.
#[async_trait]
pub trait DcnetSource: Send + Sync {
    /// Fetch one JSON collection for the given id
    async fn fetch_collection(&self, resource: DcnetResource, id: &str)
        -> AppResult<Option<Value>>;

    /// Fetch the raw HTML of an event page
    async fn fetch_event_page(&self, event_id: &str) -> AppResult<Option<String>>;

    /// Fetch a collection by its logical name.
    /// Unrecognised names return `Ok(None)` without any request being made.
    async fn get_collection(&self, name: &str, id: &str) -> AppResult<Option<Value>> {
        match DcnetResource::from_name(name) {
            Some(resource) => self.fetch_collection(resource, id).await,
            None => {
                log::debug!("Unknown dcnet resource '{}', skipping fetch", name);
                Ok(None)
            }
        }
    }
}
