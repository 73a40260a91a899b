use super::dto::EventsDocument;
use super::store::EventStore;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info, warn};

pub const MAX_RETRIES: u32 = 5;

/// Where the event list is read from at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    Embedded,
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Error)]
pub enum APIError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("server answered with an error: {0}")]
    Status(#[from] reqwest::Error),
    #[error("could not read events file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid events document: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

pub struct EventsAPI {
    client: ClientWithMiddleware,
}

impl Default for EventsAPI {
    fn default() -> Self {
        Self::new(MAX_RETRIES)
    }
}

impl EventsAPI {
    pub fn new(max_retries: u32) -> Self {
        let client = ClientBuilder::new(Client::new())
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(max_retries),
            ))
            .build();

        Self { client }
    }

    /**
    Loads the event store from `source`.

    Never fails: any error reading the source falls back to the embedded events.
    */
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, source: &EventSource) -> EventStore {
        let loaded = match source {
            EventSource::Embedded => return EventStore::embedded(),
            EventSource::Url(url) => self.fetch_document(url).await,
            EventSource::File(path) => Self::read_document(path).await,
        };

        match loaded {
            Ok(document) => {
                let store = EventStore::new(document.into_models());
                info!("Loaded {} events", store.len());
                store
            }
            Err(e) => {
                warn!("Failed loading events ({}). Using the embedded events.", e);
                EventStore::embedded()
            }
        }
    }

    async fn fetch_document(&self, url: &str) -> Result<EventsDocument, APIError> {
        info!("Fetching events");

        let json_response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Self::parse(&json_response)
    }

    async fn read_document(path: &PathBuf) -> Result<EventsDocument, APIError> {
        info!("Reading events from {}", path.display());

        let json = tokio::fs::read_to_string(path).await?;

        Self::parse(&json)
    }

    fn parse(json: &str) -> Result<EventsDocument, APIError> {
        serde_json::from_str::<EventsDocument>(json).map_err(|e| {
            error!("Response parse failed: {:?}", e);
            APIError::InvalidResponse(e)
        })
    }
}
