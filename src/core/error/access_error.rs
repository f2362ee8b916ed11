//! Errors describing why an `Access` failed to validate.

/*
These are the business-level outcomes of `Access::validate`. They never
propagate as exceptions to a proxied validate request — the orchestrator
hands them to a `ServiceAccessResponseFactory` instead.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessValidationFailure {
    /// No access exists for the presented token.
    TokenNotFound,
    /// The access exists but was already consumed under a bounded-use policy.
    TokenUsed,
    /// The access exists but its owning session (or the access itself) has expired.
    TokenExpired,
    /// The access's owning session has been invalidated.
    SessionInvalidated,
}

impl AccessValidationFailure {
    pub fn is_token_used(&self) -> bool {
        matches!(self, Self::TokenUsed)
    }

    pub fn is_token_expired(&self) -> bool {
        matches!(self, Self::TokenExpired)
    }
}

impl std::fmt::Display for AccessValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenNotFound => write!(f, "token not found"),
            Self::TokenUsed => write!(f, "token already used"),
            Self::TokenExpired => write!(f, "token expired"),
            Self::SessionInvalidated => write!(f, "owning session invalidated"),
        }
    }
}
