/// In-memory stand-in for the danceconvention.net service
use async_trait::async_trait;
use dcnet_lib::{AppResult, DcnetResource, DcnetSource};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemorySource {
    collections: HashMap<(DcnetResource, String), Value>,
    pages: HashMap<String, String>,
    requests: Mutex<Vec<(DcnetResource, String)>>,
    page_requests: Mutex<Vec<String>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` with a 200 for this resource and id. Anything not
    /// registered behaves like a non-200 response.
    pub fn with_collection(mut self, resource: DcnetResource, id: &str, value: Value) -> Self {
        self.collections.insert((resource, id.to_string()), value);
        self
    }

    pub fn with_page(mut self, event_id: &str, html: &str) -> Self {
        self.pages.insert(event_id.to_string(), html.to_string());
        self
    }

    /// Every collection request made so far, in order
    pub fn requests(&self) -> Vec<(DcnetResource, String)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_resources(&self) -> Vec<DcnetResource> {
        self.requests().into_iter().map(|(r, _)| r).collect()
    }

    pub fn request_count(&self, resource: DcnetResource) -> usize {
        self.requests().iter().filter(|(r, _)| *r == resource).count()
    }

    pub fn page_requests(&self) -> Vec<String> {
        self.page_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DcnetSource for InMemorySource {
    async fn fetch_collection(
        &self,
        resource: DcnetResource,
        id: &str,
    ) -> AppResult<Option<Value>> {
        self.requests
            .lock()
            .unwrap()
            .push((resource, id.to_string()));
        Ok(self.collections.get(&(resource, id.to_string())).cloned())
    }

    async fn fetch_event_page(&self, event_id: &str) -> AppResult<Option<String>> {
        self.page_requests.lock().unwrap().push(event_id.to_string());
        Ok(self.pages.get(event_id).cloned())
    }
}
