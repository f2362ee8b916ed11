use std::sync::Arc;

use crate::adapters::credentials::PasswordCredentialHandler;
use crate::core::usecases::CentralAuthenticationService;

/// HTTP server shared state.
///
/// Holds only the orchestrator and the one reference credential handler the
/// demo registration endpoint needs direct access to — no repositories, no
/// raw storage handles. Everything else core needs is already closed over
/// inside `CentralAuthenticationService`.
#[derive(Clone)]
pub struct AppState {
    pub cas: Arc<CentralAuthenticationService>,
    pub password_handler: Arc<PasswordCredentialHandler>,
}

impl AppState {
    pub fn new(cas: Arc<CentralAuthenticationService>, password_handler: Arc<PasswordCredentialHandler>) -> Self {
        Self { cas, password_handler }
    }
}
