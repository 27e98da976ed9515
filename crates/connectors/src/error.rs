use storage::collaborators::CollaboratorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("HTTP request to {service} service failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} from {service} service")]
    UnexpectedStatus { service: &'static str, status: u16 },
}

impl ConnectorError {
    pub fn request(service: &'static str, source: reqwest::Error) -> Self {
        ConnectorError::Request { service, source }
    }
}

impl From<ConnectorError> for CollaboratorError {
    fn from(error: ConnectorError) -> Self {
        match error {
            ConnectorError::Request { service, source } if source.is_decode() => {
                CollaboratorError::Decode {
                    service,
                    detail: source.to_string(),
                }
            }
            ConnectorError::Request { source, .. } => {
                CollaboratorError::Transport(source.to_string())
            }
            ConnectorError::UnexpectedStatus { service, status } => {
                CollaboratorError::UnexpectedStatus { service, status }
            }
        }
    }
}
