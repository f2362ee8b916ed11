// Core error types for the authentication-authority domain.

/*
Errors are organized by the question they answer:
 - [`AuthenticationFailure`]: could the identity be proven?
 - [`AccessValidationFailure`]: is this access/token still usable?
 - [`UnauthorizedService`]: is this relying service allowed at all?
 - [`NotFoundSession`] / [`InvalidatedSession`]: is the target session usable?
 - [`ConfigurationError`] / [`StorageFailure`]: is the authority's own plumbing sound?

Design Principles:
 - **No transport concepts**: no HTTP status codes or protocol bytes here
 - **No exceptions for business outcomes**: business failures are values
 - **Domain language**: errors express CAS semantics, not library internals
*/
pub mod access_error;
pub mod authentication_error;
pub mod service_error;
pub mod session_error;
pub mod system_error;

pub use access_error::AccessValidationFailure;
pub use authentication_error::AuthenticationFailure;
pub use service_error::UnauthorizedService;
pub use session_error::{InvalidatedSession, NotFoundSession};
pub use system_error::{ConfigurationError, StorageFailure};

#[cfg(test)]
mod tests;

/// Top-level error type spanning every business and system failure the core can produce.
///
/// Business-level variants (`Authentication`, `Access`, `UnauthorizedService`,
/// `NotFoundSession`, `InvalidatedSession`) are routed to a
/// `ServiceAccessResponseFactory` on proxied paths and surfaced as plain
/// values everywhere else; `Configuration` and `Storage` are system failures
/// (crash-only / transient-retry-by-caller, respectively).
#[derive(Debug, Clone)]
pub enum CoreError {
    Authentication(AuthenticationFailure),
    Access(AccessValidationFailure),
    UnauthorizedService(UnauthorizedService),
    NotFoundSession(NotFoundSession),
    InvalidatedSession(InvalidatedSession),
    Configuration(ConfigurationError),
    Storage(StorageFailure),
}

impl CoreError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    pub fn is_access(&self) -> bool {
        matches!(self, Self::Access(_))
    }

    pub fn is_unauthorized_service(&self) -> bool {
        matches!(self, Self::UnauthorizedService(_))
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Storage(_))
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authentication(e) => write!(f, "authentication error: {}", e),
            Self::Access(e) => write!(f, "access error: {}", e),
            Self::UnauthorizedService(e) => write!(f, "{}", e),
            Self::NotFoundSession(e) => write!(f, "{}", e),
            Self::InvalidatedSession(e) => write!(f, "{}", e),
            Self::Configuration(e) => write!(f, "{}", e),
            Self::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<AuthenticationFailure> for CoreError {
    fn from(e: AuthenticationFailure) -> Self {
        Self::Authentication(e)
    }
}

impl From<AccessValidationFailure> for CoreError {
    fn from(e: AccessValidationFailure) -> Self {
        Self::Access(e)
    }
}

impl From<UnauthorizedService> for CoreError {
    fn from(e: UnauthorizedService) -> Self {
        Self::UnauthorizedService(e)
    }
}

impl From<NotFoundSession> for CoreError {
    fn from(e: NotFoundSession) -> Self {
        Self::NotFoundSession(e)
    }
}

impl From<InvalidatedSession> for CoreError {
    fn from(e: InvalidatedSession) -> Self {
        Self::InvalidatedSession(e)
    }
}

impl From<ConfigurationError> for CoreError {
    fn from(e: ConfigurationError) -> Self {
        Self::Configuration(e)
    }
}

impl From<StorageFailure> for CoreError {
    fn from(e: StorageFailure) -> Self {
        Self::Storage(e)
    }
}
