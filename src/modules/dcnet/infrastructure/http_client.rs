use crate::modules::dcnet::domain::DcnetResource;
use crate::modules::dcnet::infrastructure::event_page::event_page_url;
use crate::modules::dcnet::traits::DcnetSource;
use crate::shared::config::DcnetConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// danceconvention.net client over `reqwest`
///
/// One GET per call, no retries. Anything other than `200 OK` is reported as
/// absence, as are transport failures.
pub struct DcnetHttpClient {
    client: Client,
    rest_base_url: String,
    event_page_base_url: String,
    language: String,
}

impl DcnetHttpClient {
    pub fn new() -> AppResult<Self> {
        Self::with_config(&DcnetConfig::default())
    }

    pub fn with_config(config: &DcnetConfig) -> AppResult<Self> {
        let client = Self::create_http_client(config.timeout_secs, &config.user_agent)?;

        Ok(Self {
            client,
            rest_base_url: config.rest_base_url.clone(),
            event_page_base_url: config.event_page_base_url.clone(),
            language: config.language.clone(),
        })
    }

    fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<Client> {
        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::ExternalServiceError(format!("Failed to build HTTP client: {}", e)))
    }

    pub fn rest_base_url(&self) -> &str {
        &self.rest_base_url
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// GET `url` and return the body on `200 OK`, `None` otherwise
    async fn get_body(&self, url: &str) -> AppResult<Option<String>> {
        LogContext::api_call(url, "GET", None);
        let started = Instant::now();

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("GET {} failed: {}", url, AppError::from(e));
                return Ok(None);
            }
        };

        let status = response.status();
        LogContext::api_call(
            url,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        if status != StatusCode::OK {
            debug!("GET {} returned {}, treating as absent", url, status);
            return Ok(None);
        }

        match response.text().await {
            Ok(body) => Ok(Some(body)),
            Err(e) => {
                warn!("Reading body of {} failed: {}", url, AppError::from(e));
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl DcnetSource for DcnetHttpClient {
    async fn fetch_collection(
        &self,
        resource: DcnetResource,
        id: &str,
    ) -> AppResult<Option<Value>> {
        let url = resource.resolve(&self.rest_base_url, id);

        let Some(body) = self.get_body(&url).await? else {
            return Ok(None);
        };

        let value = serde_json::from_str::<Value>(&body).map_err(|e| {
            AppError::SerializationError(format!("Failed to parse {} response: {}", resource, e))
        })?;

        Ok(Some(value))
    }

    async fn fetch_event_page(&self, event_id: &str) -> AppResult<Option<String>> {
        let url = event_page_url(&self.event_page_base_url, &self.language, event_id);
        self.get_body(&url).await
    }
}
