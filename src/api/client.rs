// file: src/api/client.rs
// description: HTTP client for the comments and users endpoints
// reference: https://jsonplaceholder.typicode.com/guide/

use crate::config::ApiConfig;
use crate::error::{DashboardError, Result};
use crate::models::{Comment, User};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DashboardError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every comment, with `phone` set to an empty string.
    pub async fn fetch_comments(&self) -> Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .get_json("comments", "Failed to fetch comments")
            .await?;

        for comment in &mut comments {
            comment.phone.clear();
        }

        debug!("Fetched {} comments", comments.len());
        Ok(comments)
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        let users: Vec<User> = self.get_json("users", "Failed to fetch users").await?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    /// The profile page shows the first user returned.
    pub async fn fetch_profile(&self) -> Result<Option<User>> {
        Ok(self.fetch_users().await?.into_iter().next())
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str, failure: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            debug!("GET {} returned status {}", url, response.status());
            return Err(DashboardError::Fetch(failure.to_string()));
        }

        Ok(response.json::<T>().await?)
    }
}
