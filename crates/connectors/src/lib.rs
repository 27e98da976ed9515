pub mod error;
pub mod identity;
pub mod notifications;

pub use error::ConnectorError;
pub use identity::IdentityClient;
pub use notifications::NotificationClient;
