use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use storage::collaborators::{CollaboratorError, IdentityProvider, PlayerProfile};
use uuid::Uuid;

use crate::error::ConnectorError;

const SERVICE: &str = "identity";

/// HTTP client for the identity service. The engine only ever asks it two
/// questions: does this player exist, and how should they be displayed.
pub struct IdentityClient {
    base_url: String,
    client: reqwest::Client,
}

impl IdentityClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap(),
        }
    }
}

#[async_trait]
impl IdentityProvider for IdentityClient {
    async fn exists(&self, player_id: Uuid) -> Result<bool, CollaboratorError> {
        let url = format!("{}/api/players/{}", self.base_url, player_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ConnectorError::request(SERVICE, e))?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(ConnectorError::UnexpectedStatus {
                service: SERVICE,
                status: status.as_u16(),
            }
            .into()),
        }
    }

    async fn describe(&self, player_id: Uuid) -> Result<PlayerProfile, CollaboratorError> {
        let url = format!("{}/api/players/{}", self.base_url, player_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ConnectorError::request(SERVICE, e))?;

        if !response.status().is_success() {
            return Err(ConnectorError::UnexpectedStatus {
                service: SERVICE,
                status: response.status().as_u16(),
            }
            .into());
        }

        let profile = response
            .json::<PlayerProfile>()
            .await
            .map_err(|e| ConnectorError::request(SERVICE, e))?;

        Ok(profile)
    }
}
