//! HTTP client for the country-data provider.
//!
//! Read-only, unauthenticated. Any non-success status maps to a generic
//! fetch error; the provider does not return a structured error body.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::catalog::model::CountryRecord;

/// Errors from provider calls. Surfaced to the user as-is; never retried.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned status {status} for '{endpoint}'")]
    Status { endpoint: String, status: u16 },
}

pub struct CountryClient {
    client: Client,
    base_url: String,
}

impl CountryClient {
    pub fn new(base_url: impl Into<String>, connect_timeout: Duration) -> Self {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .expect("Failed to build provider client");

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The full catalog.
    pub async fn all(&self) -> Result<Vec<CountryRecord>, ProviderError> {
        self.get_records("/all").await
    }

    /// Countries whose common or official name matches `name`.
    pub async fn by_name(&self, name: &str) -> Result<Vec<CountryRecord>, ProviderError> {
        self.get_records(&format!("/name/{name}")).await
    }

    /// Countries in the given region.
    pub async fn by_region(&self, region: &str) -> Result<Vec<CountryRecord>, ProviderError> {
        self.get_records(&format!("/region/{region}")).await
    }

    /// The country with the given alpha-3 code, if any.
    ///
    /// The provider answers with an array that is typically a singleton;
    /// an empty array means the code is unknown.
    pub async fn by_code(&self, code: &str) -> Result<Option<CountryRecord>, ProviderError> {
        let mut records = self.get_records(&format!("/alpha/{code}")).await?;
        if records.is_empty() {
            Ok(None)
        } else {
            Ok(Some(records.remove(0)))
        }
    }

    /// The subset of the full catalog with the given identifiers,
    /// preserving catalog order. Used to resolve a favorite list back to
    /// records.
    pub async fn by_codes(&self, codes: &[String]) -> Result<Vec<CountryRecord>, ProviderError> {
        let all = self.all().await?;
        Ok(all
            .into_iter()
            .filter(|country| codes.contains(&country.cca3))
            .collect())
    }

    async fn get_records(&self, endpoint: &str) -> Result<Vec<CountryRecord>, ProviderError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(url = %url, "Fetching countries");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
