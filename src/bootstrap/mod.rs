//! Composition root: reads process environment into a typed config, wires
//! the reference adapters into a `CentralAuthenticationService`, and
//! installs structured logging. Nothing under `core` is aware this module
//! exists — it only ever depends inward.

pub mod config;

pub use config::Config;

use std::sync::Arc;

use chrono::Duration;

use crate::adapters::clock::SystemClock;
use crate::adapters::credentials::PasswordCredentialHandler;
use crate::adapters::memory::InMemorySessionStorage;
use crate::adapters::notifier::NoopRelyingPartyNotifier;
use crate::adapters::response::JsonServiceResponseFactory;
use crate::adapters::services::GlobServicesManager;
use crate::adapters::ticket::RandomTicketIdGenerator;
use crate::core::access::UsagePolicy;
use crate::core::usecases::ports::{Clock, ResponseFactoryRegistry};
use crate::core::usecases::policies::{SlidingExpirationPolicy, TtlExpirationPolicy};
use crate::core::usecases::{AuthenticationManager, CentralAuthenticationService};

/// Wire every reference adapter into a fully assembled authority.
///
/// This is a reference composition, not the only valid one: a deployment
/// with a different `SessionStorage` backend or additional credential
/// handlers builds its own equivalent of this function using the same
/// ports.
pub fn wire_reference_authority(config: &Config) -> (Arc<CentralAuthenticationService>, Arc<PasswordCredentialHandler>) {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let password_handler = Arc::new(PasswordCredentialHandler::new(clock.clone()));

    let authentication_manager = AuthenticationManager::new().with_handler(Box::new(PasswordHandlerAdapter(password_handler.clone())));

    let services_manager = GlobServicesManager::new();
    services_manager.register("*", UsagePolicy::single_use(), true);
    let services_manager: Arc<dyn crate::core::usecases::ports::ServicesManager> = Arc::new(services_manager);

    let mut registry = ResponseFactoryRegistry::new(Box::new(JsonServiceResponseFactory));
    registry.register(Box::new(JsonServiceResponseFactory));

    let service = CentralAuthenticationService::new(
        authentication_manager,
        Arc::new(InMemorySessionStorage::new()),
        services_manager,
        Arc::new(TtlExpirationPolicy::new(Duration::seconds(config.tgt_ttl_seconds as i64))),
        Arc::new(SlidingExpirationPolicy::new(Duration::seconds(config.tgt_sliding_ttl_seconds as i64))),
        Arc::new(RandomTicketIdGenerator),
        clock,
        Arc::new(NoopRelyingPartyNotifier),
        Arc::new(registry),
        Duration::seconds(config.st_ttl_seconds as i64),
    );

    (Arc::new(service), password_handler)
}

/// `PasswordCredentialHandler` carries its own `register` method beyond the
/// `CredentialHandler` trait, so it can't be boxed as `Box<dyn
/// CredentialHandler>` directly without losing the `Arc` the HTTP adapter
/// also needs for registering demo accounts. This thin wrapper forwards the
/// trait methods onto the shared `Arc`, letting both the authentication
/// pipeline and the HTTP layer hold the same handler.
struct PasswordHandlerAdapter(Arc<PasswordCredentialHandler>);

impl crate::core::usecases::ports::CredentialHandler for PasswordHandlerAdapter {
    fn supports(&self, credential_kind: &str) -> bool {
        self.0.supports(credential_kind)
    }

    fn authenticate(
        &self,
        credential: &crate::core::credentials::Credential,
    ) -> Result<crate::core::identity::Authentication, crate::core::error::AuthenticationFailure> {
        self.0.authenticate(credential)
    }
}
