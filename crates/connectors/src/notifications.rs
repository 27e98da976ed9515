use std::time::Duration;

use async_trait::async_trait;
use storage::collaborators::{CollaboratorError, NotificationDispatcher, ScorecardEvent};

use crate::error::ConnectorError;

const SERVICE: &str = "notifications";

/// Fire-and-forget event delivery. Callers treat failures as log-worthy,
/// never as operation failures, so this client keeps a short timeout.
pub struct NotificationClient {
    base_url: String,
    client: reqwest::Client,
}

impl NotificationClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(2))
                .build()
                .unwrap(),
        }
    }
}

#[async_trait]
impl NotificationDispatcher for NotificationClient {
    async fn emit(&self, event: ScorecardEvent) -> Result<(), CollaboratorError> {
        let url = format!("{}/api/events", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&event)
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

        Ok(())
    }
}
