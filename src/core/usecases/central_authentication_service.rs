use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::core::access::Access;
use crate::core::credentials::Credential;
use crate::core::error::{AccessValidationFailure, AuthenticationFailure, CoreError, InvalidatedSession, UnauthorizedService};
use crate::core::identity::Authentication;
use crate::core::session::Session;

use super::authentication_manager::AuthenticationManager;
use super::contracts::{
    GrantAccessResponse, LoginRequest, LoginResponse, LogoutResponse, ServiceAccessRequest,
    TokenServiceAccessRequest, ValidateOutcome,
};
use super::ports::{
    Clock, ExpirationPolicy, RelyingPartyNotifier, ResponseFactoryRegistry, ServicesManager, SessionStorage,
    TicketIdGenerator,
};

/// The single sign-on authority: orchestrates login, logout, access
/// granting, and access validation against the ports above. This is the one
/// component every external adapter (HTTP, a CLI, a test) ultimately talks
/// to — nothing downstream of it reaches into `SessionStorage` directly.
pub struct CentralAuthenticationService {
    authentication_manager: AuthenticationManager,
    session_storage: Arc<dyn SessionStorage>,
    services_manager: Arc<dyn ServicesManager>,
    long_term_policy: Arc<dyn ExpirationPolicy>,
    short_term_policy: Arc<dyn ExpirationPolicy>,
    ticket_ids: Arc<dyn TicketIdGenerator>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn RelyingPartyNotifier>,
    response_factories: Arc<ResponseFactoryRegistry>,
    access_ttl: Duration,
}

impl CentralAuthenticationService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        authentication_manager: AuthenticationManager,
        session_storage: Arc<dyn SessionStorage>,
        services_manager: Arc<dyn ServicesManager>,
        long_term_policy: Arc<dyn ExpirationPolicy>,
        short_term_policy: Arc<dyn ExpirationPolicy>,
        ticket_ids: Arc<dyn TicketIdGenerator>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn RelyingPartyNotifier>,
        response_factories: Arc<ResponseFactoryRegistry>,
        access_ttl: Duration,
    ) -> Self {
        Self {
            authentication_manager,
            session_storage,
            services_manager,
            long_term_policy,
            short_term_policy,
            ticket_ids,
            clock,
            notifier,
            response_factories,
            access_ttl,
        }
    }

    fn expiration_policy_for(&self, session: &Session) -> &dyn ExpirationPolicy {
        if session.is_long_term() {
            self.long_term_policy.as_ref()
        } else {
            self.short_term_policy.as_ref()
        }
    }

    fn invalidate_and_collect_failures(&self, session: &mut Session) -> Vec<String> {
        let mut failed = Vec::new();
        session.invalidate(|resource_identifier| {
            let destroyed = self.notifier.notify(resource_identifier);
            if !destroyed {
                failed.push(resource_identifier.to_string());
            }
            destroyed
        });
        failed
    }

    /// Remove and invalidate `session_id`, then recurse into every
    /// delegated session rooted on one of its accesses, so destroying a
    /// session destroys its whole delegation subtree. A session id that no
    /// longer exists is a no-op: `destroyed` and `failed` are simply left
    /// unchanged, matching `remove_session`'s idempotence.
    fn destroy_session_cascade(&self, session_id: &str, destroyed: &mut Vec<String>, failed: &mut Vec<String>) {
        let Some(mut session) = self.session_storage.remove_session(session_id) else {
            return;
        };
        let access_ids: Vec<String> = session.accesses().map(|access| access.id().to_string()).collect();
        failed.extend(self.invalidate_and_collect_failures(&mut session));
        destroyed.push(session_id.to_string());

        for access_id in access_ids {
            for child_session_id in self.session_storage.child_session_ids(&access_id) {
                self.destroy_session_cascade(&child_session_id, destroyed, failed);
            }
        }
    }

    /// Authenticate every credential in the request and either mint a new
    /// session or re-authenticate onto an existing one
    /// (`forceAuthentication`). The first authenticated credential becomes
    /// the session's primary `Authentication`; any remaining ones are
    /// appended onto it in order.
    pub fn login(&self, request: LoginRequest) -> Result<LoginResponse, CoreError> {
        let mut authentications = self.authentication_manager.authenticate(&request.credentials)?.into_iter();
        let primary = authentications
            .next()
            .expect("AuthenticationManager::authenticate never returns Ok with an empty list");
        let now = self.clock.now();

        match request.existing_session_id {
            Some(session_id) => {
                self.session_storage.mutate_session(&session_id, &mut |session| {
                    session.add_authentication(primary.clone(), now);
                    for additional in authentications.by_ref() {
                        session.add_authentication(additional, now);
                    }
                })?;
                Ok(LoginResponse {
                    session_id,
                    authentication: primary,
                })
            }
            None => {
                let session_id = self.ticket_ids.generate("TGT");
                let session = Session::new(session_id.clone(), primary.clone(), now, request.long_term, None);
                self.session_storage.create_session(session)?;
                if authentications.len() > 0 {
                    self.session_storage.mutate_session(&session_id, &mut |session| {
                        for additional in authentications.by_ref() {
                            session.add_authentication(additional, now);
                        }
                    })?;
                }
                Ok(LoginResponse {
                    session_id,
                    authentication: primary,
                })
            }
        }
    }

    /// Invalidate a single session by id and cascade into every session
    /// delegated from one of its accesses. Idempotent, and tolerant of a
    /// missing session: both produce an empty `LogoutResponse` rather than
    /// an error, per the administrative-logout contract this and
    /// `logout_principal` share.
    pub fn logout_session(&self, session_id: &str) -> LogoutResponse {
        let mut destroyed = Vec::new();
        let mut failed = Vec::new();
        self.destroy_session_cascade(session_id, &mut destroyed, &mut failed);
        LogoutResponse {
            session_ids: destroyed,
            relying_parties_not_destroyed: failed,
        }
    }

    /// Administrative logout: invalidate every live session for a principal
    /// (used when an account is disabled centrally, independent of which
    /// sessions exist), cascading into each one's delegated sessions. Each
    /// session's invalidation is an independent linearization point — there
    /// is no cross-session atomicity guarantee.
    pub fn logout_principal(&self, principal_id: &str) -> LogoutResponse {
        let session_ids = self.session_storage.session_ids_for_principal(principal_id);
        let mut destroyed = Vec::new();
        let mut failed = Vec::new();
        for session_id in &session_ids {
            self.destroy_session_cascade(session_id, &mut destroyed, &mut failed);
        }
        LogoutResponse {
            session_ids: destroyed,
            relying_parties_not_destroyed: failed,
        }
    }

    /// Grant a new access (service ticket) against a live session.
    ///
    /// When `force_authentication` is set, `credentials` must be non-empty
    /// and is authenticated as a whole first. A principal change destroys
    /// the old session (its outstanding accesses are returned via
    /// `remaining_accesses`) and grants against a freshly minted one; a
    /// matching principal simply appends the new `Authentication`(s) onto
    /// the existing session.
    pub fn grant_access(&self, request: ServiceAccessRequest) -> Result<GrantAccessResponse, CoreError> {
        if !self.services_manager.is_authorized(&request.resource_identifier) {
            return Err(UnauthorizedService::new(request.resource_identifier).into());
        }

        let now = self.clock.now();
        let session = self.session_storage.get_session(&request.session_id)?;
        if session.is_invalidated() || self.expiration_policy_for(&session).is_expired(&session, now) {
            return Err(InvalidatedSession::new(request.session_id).into());
        }

        let mut target_session_id = request.session_id.clone();
        let mut authentication_out = None;
        let mut remaining_accesses = Vec::new();

        if request.force_authentication {
            if request.credentials.is_empty() {
                return Err(AuthenticationFailure::rejected("force-authentication", "no credential supplied").into());
            }
            let mut authentications = self.authentication_manager.authenticate(&request.credentials)?.into_iter();
            let primary = authentications
                .next()
                .expect("AuthenticationManager::authenticate never returns Ok with an empty list");

            if primary.principal.id() != session.current_authentication().principal.id() {
                remaining_accesses = session
                    .accesses()
                    .map(|access| access.resource_identifier().to_string())
                    .collect();
                let mut destroyed_ids = Vec::new();
                let mut failed = Vec::new();
                self.destroy_session_cascade(&request.session_id, &mut destroyed_ids, &mut failed);

                let new_session_id = self.ticket_ids.generate("TGT");
                let new_session = Session::new(new_session_id.clone(), primary.clone(), now, session.is_long_term(), None);
                self.session_storage.create_session(new_session)?;
                if authentications.len() > 0 {
                    self.session_storage.mutate_session(&new_session_id, &mut |session| {
                        for additional in authentications.by_ref() {
                            session.add_authentication(additional, now);
                        }
                    })?;
                }
                target_session_id = new_session_id;
            } else {
                self.session_storage.mutate_session(&target_session_id, &mut |session| {
                    session.add_authentication(primary.clone(), now);
                    for additional in authentications.by_ref() {
                        session.add_authentication(additional, now);
                    }
                })?;
            }
            authentication_out = Some(primary);
        }

        let access_id = self.ticket_ids.generate("ST");
        let usage_policy = self.services_manager.usage_policy_for(&request.resource_identifier);
        let requires_storage = self.services_manager.requires_storage(&request.resource_identifier);
        let access = Access::new(
            access_id.clone(),
            request.resource_identifier,
            target_session_id.clone(),
            now,
            self.access_ttl,
            requires_storage,
            usage_policy,
        );

        self.session_storage.mutate_session(&target_session_id, &mut |session| {
            session.grant(access.clone(), now);
        })?;
        if requires_storage {
            self.session_storage.register_access(&target_session_id, &access_id)?;
        }

        Ok(GrantAccessResponse {
            access_id,
            session_id: target_session_id,
            authentication: authentication_out,
            remaining_accesses,
        })
    }

    /// `grantAccess` as consumed by a relying party rather than a
    /// front-end: every failure — including `UnauthorizedService` and a
    /// missing or invalidated session — is rendered through the resolved
    /// `ServiceAccessResponseFactory` instead of propagating as an
    /// exception, since a relying party has no caller-side error handler to
    /// catch it.
    pub fn grant_access_response(&self, request: ServiceAccessRequest) -> String {
        let resource_identifier = request.resource_identifier.clone();
        let factory = self.response_factories.resolve(&resource_identifier);
        match self.grant_access(request) {
            Ok(response) => match self.session_storage.get_session(&response.session_id) {
                Ok(session) => factory.build_success(session.current_authentication(), &resource_identifier),
                Err(error) => factory.build_failure(&error.into(), &resource_identifier),
            },
            Err(error) => factory.build_failure(&error, &resource_identifier),
        }
    }

    /// Validate a presented access (service or proxy ticket), returning the
    /// low-level outcome. Building block for `validate_response`; exposed
    /// directly for callers (tests, a non-proxied front-end) that want the
    /// business-level `Result` rather than a rendered factory response.
    ///
    /// If the access belongs to a delegated session, a secondary check
    /// walks one hop up the delegation chain and records any problem there
    /// as `delegation_failure` — but that check never overrides the primary
    /// outcome below; a perfectly valid access is still reported valid even
    /// if its delegation chain has gone stale in the meantime.
    pub fn validate(&self, access_id: &str) -> Result<ValidateOutcome, CoreError> {
        let session_id = self
            .session_storage
            .owning_session_id(access_id)
            .ok_or(AccessValidationFailure::TokenNotFound)?;

        let now = self.clock.now();
        let snapshot = self.session_storage.get_session(&session_id)?;

        if snapshot.is_invalidated() {
            return Err(AccessValidationFailure::SessionInvalidated.into());
        }

        let delegation_failure = self.delegation_failure(&snapshot, now);

        let mut outcome: Option<Result<ValidateOutcome, CoreError>> = None;
        self.session_storage.mutate_session(&session_id, &mut |session| {
            outcome = Some(match session.access_mut(access_id) {
                None => Err(AccessValidationFailure::TokenNotFound.into()),
                Some(access) => match access.validate(now) {
                    Err(failure) => Err(failure.into()),
                    Ok(()) => {
                        let authentication = session.current_authentication().clone();
                        session.touch(now);
                        Ok(ValidateOutcome {
                            authentication,
                            delegation_failure: delegation_failure.clone(),
                        })
                    }
                },
            });
        })?;
        outcome.expect("the mutate_session callback always assigns an outcome")
    }

    /// `validate` as consumed by a relying party, folding in proxy-granting
    /// delegation in the same call. Non-empty `delegation_credentials` are
    /// authenticated as a whole and, on success, mint a delegated session
    /// parented on this access; a delegation failure is swallowed here — it
    /// must never consume or abort the primary validation that always
    /// follows. The final outcome (success or any business failure) is
    /// rendered through the resolved `ServiceAccessResponseFactory`, never
    /// returned as an exception.
    pub fn validate_response(&self, request: TokenServiceAccessRequest) -> String {
        let factory = self.response_factories.resolve(&request.resource_identifier);

        if !request.delegation_credentials.is_empty() {
            if let Ok(authentications) = self.authentication_manager.authenticate(&request.delegation_credentials) {
                let mut authentications = authentications.into_iter();
                if let Some(primary) = authentications.next() {
                    let _ = self.mint_delegated_session(&request.access_id, primary, authentications.collect());
                }
            }
        }

        match self.validate(&request.access_id) {
            Ok(outcome) => factory.build_success(&outcome.authentication, &request.resource_identifier),
            Err(error) => factory.build_failure(&error, &request.resource_identifier),
        }
    }

    /// Mint the delegated session a proxy-granting access authorizes, after
    /// authenticating the supplied delegation credentials directly (outside
    /// the combined `validate_response` flow — e.g. a dedicated
    /// proxy-granting-ticket endpoint that wants the `Result` rather than a
    /// rendered response).
    pub fn create_delegated_session(&self, access_id: &str, delegation_credentials: &[Credential]) -> Result<LoginResponse, CoreError> {
        let mut authentications = self.authentication_manager.authenticate(delegation_credentials)?.into_iter();
        let primary = authentications
            .next()
            .expect("AuthenticationManager::authenticate never returns Ok with an empty list");
        self.mint_delegated_session(access_id, primary, authentications.collect())
    }

    fn mint_delegated_session(
        &self,
        access_id: &str,
        primary_authentication: Authentication,
        additional_authentications: Vec<Authentication>,
    ) -> Result<LoginResponse, CoreError> {
        let owning_session_id = self
            .session_storage
            .owning_session_id(access_id)
            .ok_or(AccessValidationFailure::TokenNotFound)?;

        let now = self.clock.now();
        let owning_session = self.session_storage.get_session(&owning_session_id)?;
        let owning_invalidated = owning_session.is_invalidated();
        let access = owning_session
            .access(access_id)
            .ok_or(AccessValidationFailure::TokenNotFound)?;
        let new_session_id = self.ticket_ids.generate("TGT");

        let delegated =
            access.create_delegated_session(primary_authentication.clone(), new_session_id.clone(), now, owning_invalidated)?;
        self.session_storage.create_session(delegated)?;
        self.session_storage.register_child_session(access_id, &new_session_id);
        if !additional_authentications.is_empty() {
            self.session_storage.mutate_session(&new_session_id, &mut |session| {
                for additional in additional_authentications.clone() {
                    session.add_authentication(additional, now);
                }
            })?;
        }

        Ok(LoginResponse {
            session_id: new_session_id,
            authentication: primary_authentication,
        })
    }

    fn delegation_failure(&self, session: &Session, now: DateTime<Utc>) -> Option<String> {
        let parent_access_id = session.parent_access_id()?;
        let owning_session_id = self.session_storage.owning_session_id(parent_access_id)?;
        match self.session_storage.get_session(&owning_session_id) {
            Err(_) => Some(format!(
                "delegating access '{}' no longer has an owning session",
                parent_access_id
            )),
            Ok(owner) => {
                if owner.is_invalidated() {
                    Some(format!("delegating session '{}' is invalidated", owning_session_id))
                } else if self.expiration_policy_for(&owner).is_expired(&owner, now) {
                    Some(format!("delegating session '{}' is expired", owning_session_id))
                } else {
                    None
                }
            }
        }
    }

    /// Sweep and destroy every session the configured expiration policies
    /// consider expired. Driven by a background task (`adapters::memory::spawn_sweeper`
    /// against the in-memory reference store), never called from a
    /// request-handling path.
    pub fn sweep_expired(&self) -> usize {
        let now = self.clock.now();
        let long_term = self.long_term_policy.clone();
        let short_term = self.short_term_policy.clone();
        self.session_storage.sweep_expired(now, &move |session, now| {
            if session.is_long_term() {
                long_term.is_expired(session, now)
            } else {
                short_term.is_expired(session, now)
            }
        })
    }
}
