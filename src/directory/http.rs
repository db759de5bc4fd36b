//! HTTP client for the directory server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::directory::{GroupDirectory, GroupPage, GroupQuery};
use crate::error::{GroupdeckError, Result};

pub struct HttpDirectory {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

#[derive(Deserialize)]
struct ProjectsResponse {
    projects: Vec<String>,
}

#[derive(Deserialize)]
struct LabelsResponse {
    labels: Vec<String>,
}

#[derive(Deserialize)]
struct PhonesResponse {
    phones: Vec<String>,
}

impl HttpDirectory {
    /// Create a client from the application config, honoring the
    /// environment override for the server URL.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.server_url(), config.timeout())
    }

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // Validate up front so a bad URL fails at startup, not mid-fetch
        Url::parse(base_url)
            .map_err(|e| GroupdeckError::Config(format!("invalid server URL '{}': {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(HttpDirectory {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Decode a response body, mapping non-success statuses to the
    /// server-supplied `{ error }` message when one is present.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(GroupdeckError::Api(message));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GroupDirectory for HttpDirectory {
    async fn list_groups(&self, query: &GroupQuery) -> Result<GroupPage> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(phone) = &query.phone {
            params.push(("phone", phone.clone()));
        }
        if !query.search.is_empty() {
            params.push(("q", query.search.clone()));
        }
        if !query.project.is_empty() {
            params.push(("project", query.project.clone()));
        }
        if !query.labels.is_empty() {
            params.push(("labels", serde_json::to_string(&query.labels)?));
        }
        params.push(("page", query.page.to_string()));
        params.push(("pageSize", query.page_size.to_string()));

        debug!(page = query.page, page_size = query.page_size, "fetching groups");

        let response = self
            .client
            .get(self.endpoint("groups"))
            .query(&params)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn list_projects(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.endpoint("projects")).send().await?;
        let body: ProjectsResponse = Self::decode(response).await?;
        Ok(body.projects)
    }

    async fn list_labels(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.endpoint("labels")).send().await?;
        let body: LabelsResponse = Self::decode(response).await?;
        Ok(body.labels)
    }

    async fn list_phones(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.endpoint("phones")).send().await?;
        let body: PhonesResponse = Self::decode(response).await?;
        Ok(body.phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = HttpDirectory::new("not a url", Duration::from_secs(30));
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let directory =
            HttpDirectory::new("http://localhost:3000/api/", Duration::from_secs(30)).unwrap();
        assert_eq!(
            directory.endpoint("groups"),
            "http://localhost:3000/api/groups"
        );
    }
}
