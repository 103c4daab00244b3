use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use super::types::OmdbSearchResponse;
use crate::config::OmdbConfig;
use crate::nomination::SearchResult;

/// Only feature films are offered for nomination.
const RESULT_TYPE: &str = "movie";

#[async_trait]
pub trait MovieSearch: Send + Sync {
    /// Search by title. An empty vector means the database found nothing.
    async fn search(&self, term: &str) -> Result<Vec<SearchResult>, OmdbError>;
}

pub struct OmdbClient {
    client: reqwest::Client,
    baseurl: String,
    apikey: String,
}

impl OmdbClient {
    pub fn new(config: &OmdbConfig, apikey: String) -> Result<Self, OmdbError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            baseurl: config.baseurl.clone(),
            apikey,
        })
    }

    fn build_url(&self, term: &str) -> String {
        let sep = if self.baseurl.contains('?') { '&' } else { '?' };
        format!(
            "{}{}apikey={}&s={}&type={}",
            self.baseurl,
            sep,
            urlencoding::encode(&self.apikey),
            urlencoding::encode(term),
            RESULT_TYPE,
        )
    }
}

#[async_trait]
impl MovieSearch for OmdbClient {
    async fn search(&self, term: &str) -> Result<Vec<SearchResult>, OmdbError> {
        debug!(term = %term, "OMDb search");

        let response = self.client.get(self.build_url(term)).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(term = %term, status = status.as_u16(), "OMDb request failed");
            return Err(OmdbError::Status(status.as_u16()));
        }

        let body: OmdbSearchResponse = response.json().await?;
        if !body.is_success() {
            debug!(
                term = %term,
                error = body.error.as_deref().unwrap_or(""),
                "OMDb returned no results"
            );
        }

        Ok(body.into_results())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OmdbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {0}")]
    Status(u16),
}
