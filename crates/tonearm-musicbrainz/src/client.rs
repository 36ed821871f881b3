// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{MusicBrainzError, Result};
use crate::models::{Artist, Release, ReleaseGroup, SearchQuery, SearchResponse, Tag};
use crate::search::SearchEntity;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use serde::{de, Deserialize};
use std::time::Duration;
use tonearm_config::MusicBrainzConfig;
use tracing::{debug, trace, warn};
use url::Url;

const MAX_LIMIT: u32 = 100;

/// Format a `User-Agent` value the way MusicBrainz asks clients to identify
/// themselves: `Application/Version ( contact )`.
pub fn format_user_agent(application: &str, version: &str, contact: &str) -> String {
    format!("{}/{} ( {} )", application, version, contact)
}

/// MusicBrainz WS2 search client.
#[derive(Debug, Clone)]
pub struct MusicBrainzClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl MusicBrainzClient {
    /// Create a new MusicBrainz client with the defaults of [`MusicBrainzConfig`].
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> MusicBrainzClientBuilder {
        MusicBrainzClientBuilder::default()
    }

    /// Root URL all endpoints are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `User-Agent` header sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Replace the identifying `User-Agent` header.
    ///
    /// See <https://musicbrainz.org/doc/MusicBrainz_API/Rate_Limiting#Provide_meaningful_User-Agent_strings>.
    pub fn set_client_info(&mut self, application: &str, version: &str, contact: &str) {
        self.user_agent = format_user_agent(application, version, contact);
    }

    /// Search for artists.
    ///
    /// Without explicit fields the search server matches `query` against the
    /// artist name, sort name and aliases.
    ///
    /// # Example
    /// ```no_run
    /// # use tonearm_musicbrainz::{MusicBrainzClient, SearchQuery};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MusicBrainzClient::new()?;
    /// let query = SearchQuery::new("artist:Beatles AND country:GB").limit(10);
    /// let response = client.search_artists(&query).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_artists(&self, query: &SearchQuery) -> Result<SearchResponse<Artist>> {
        self.search(query).await
    }

    /// Search for releases. Unqualified terms match the release title.
    pub async fn search_releases(&self, query: &SearchQuery) -> Result<SearchResponse<Release>> {
        self.search(query).await
    }

    /// Search for release groups. Unqualified terms match the release group title.
    pub async fn search_release_groups(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchResponse<ReleaseGroup>> {
        self.search(query).await
    }

    /// Search for tags by name.
    pub async fn search_tags(&self, query: &SearchQuery) -> Result<SearchResponse<Tag>> {
        self.search(query).await
    }

    /// Search the index of entity kind `E`.
    ///
    /// # Example
    /// ```no_run
    /// # use tonearm_musicbrainz::{MusicBrainzClient, ReleaseGroup, SearchQuery};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MusicBrainzClient::new()?;
    /// let query = SearchQuery::from_sentinels("Abbey Road", -1, -1);
    /// let response = client.search::<ReleaseGroup>(&query).await?;
    /// println!("{} matches", response.count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search<E: SearchEntity>(&self, query: &SearchQuery) -> Result<SearchResponse<E>> {
        if let Some(limit) = query.limit.filter(|l| *l == 0 || *l > MAX_LIMIT) {
            warn!(
                target: "musicbrainz",
                "limit {} is outside 1-{}, the server may reject or clamp it",
                limit,
                MAX_LIMIT
            );
        }

        let mut url = Url::parse(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            E::KIND.endpoint()
        ))?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());

        let body = self.get(url).await?;
        let response = E::decode_search(&body)?;

        debug!(
            target: "musicbrainz",
            "{} search returned {} of {} results",
            E::KIND,
            response.results.len(),
            response.count
        );
        Ok(response)
    }

    /// Internal method to perform GET requests, returning the body of a successful response.
    async fn get(&self, url: Url) -> Result<String> {
        trace!(target: "musicbrainz", "GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await?;

        let status = response.status();
        debug!(target: "musicbrainz", "response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(MusicBrainzError::NotFound(url.to_string()));
        }

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(MusicBrainzError::RateLimitExceeded);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .map(|body| error_message(&body))
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MusicBrainzError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        trace!(target: "musicbrainz", "response body: {}", String::from_utf8_lossy(&bytes));

        // WS2 documents are UTF-8; invalid bytes are a decode failure.
        let body = std::str::from_utf8(&bytes)
            .map_err(|e| MusicBrainzError::Decode(<quick_xml::DeError as de::Error>::custom(e)))?;
        Ok(body.to_owned())
    }
}

/// Extract the human readable part of a WS2 `<error><text>..</text></error>`
/// document, falling back to the raw body.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorDocument {
        #[serde(default)]
        text: Vec<String>,
    }

    match quick_xml::de::from_str::<ErrorDocument>(body) {
        Ok(document) if !document.text.is_empty() => document.text.join(" "),
        _ => body.trim().to_string(),
    }
}

/// Builder for configuring a MusicBrainz client.
#[derive(Debug)]
pub struct MusicBrainzClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl Default for MusicBrainzClientBuilder {
    fn default() -> Self {
        Self::from_config(&MusicBrainzConfig::default())
    }
}

impl MusicBrainzClientBuilder {
    /// Seed a builder from loaded configuration.
    pub fn from_config(config: &MusicBrainzConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_agent: format_user_agent(&config.application, &config.version, &config.contact),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Set a custom base URL (useful for testing with mock servers or mirrors).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Identify the calling application in the `User-Agent` header.
    pub fn client_info(mut self, application: &str, version: &str, contact: &str) -> Self {
        self.user_agent = format_user_agent(application, version, contact);
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the MusicBrainz client.
    pub fn build(self) -> Result<MusicBrainzClient> {
        let client = Client::builder().timeout(self.timeout).build()?;

        Ok(MusicBrainzClient {
            client,
            base_url: self.base_url,
            user_agent: self.user_agent,
        })
    }
}
