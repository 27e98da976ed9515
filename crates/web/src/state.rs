use std::sync::Arc;

use storage::Database;
use storage::collaborators::{IdentityProvider, NotificationDispatcher};

/// Everything a handler needs: the database plus the collaborator clients
/// picked at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub identity: Arc<dyn IdentityProvider>,
    pub notifier: Arc<dyn NotificationDispatcher>,
}
