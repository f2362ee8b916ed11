//! Errors describing why an authentication attempt did not succeed.

/*
These errors travel in-band (inside an `AuthenticationResponse`), never as
exceptions — authentication failure is an expected outcome of `login` and
of the `forceAuthentication` branch of `grantAccess`, not a programmer error.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationFailure {
    /// No registered credential handler claimed to support the presented credential.
    NoSupportingHandler { credential_kind: String },
    /// The handler that claimed the credential rejected it.
    Rejected { handler: String, reason: String },
    /// One or more required credentials failed while others succeeded.
    PartiallyFailed {
        failures: std::collections::BTreeMap<String, String>,
    },
}

impl AuthenticationFailure {
    pub fn no_supporting_handler(credential_kind: impl Into<String>) -> Self {
        Self::NoSupportingHandler {
            credential_kind: credential_kind.into(),
        }
    }

    pub fn rejected(handler: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            handler: handler.into(),
            reason: reason.into(),
        }
    }

    pub fn partially_failed(failures: std::collections::BTreeMap<String, String>) -> Self {
        Self::PartiallyFailed { failures }
    }
}

impl std::fmt::Display for AuthenticationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSupportingHandler { credential_kind } => {
                write!(f, "no handler supports credential kind '{}'", credential_kind)
            }
            Self::Rejected { handler, reason } => {
                write!(f, "handler '{}' rejected credential: {}", handler, reason)
            }
            Self::PartiallyFailed { failures } => {
                write!(f, "authentication had {} handler failure(s)", failures.len())
            }
        }
    }
}
