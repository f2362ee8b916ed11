use serde::Serialize;

use crate::core::error::CoreError;
use crate::core::identity::Authentication;
use crate::core::usecases::ports::ServiceAccessResponseFactory;

/// Reference wire shape emitted by `JsonServiceResponseFactory`. This is
/// explicitly a stand-in for a CAS1/CAS2/SAML-conformant encoding — full
/// wire-format conformance is the job of a real `ResponseFactory`
/// implementation, not this crate's core.
#[derive(Debug, Serialize)]
#[serde(tag = "status")]
enum ServiceAccessResponseBody {
    #[serde(rename = "SUCCESS")]
    Success {
        principal: String,
        attributes: std::collections::BTreeMap<String, Vec<String>>,
    },
    #[serde(rename = "FAILURE")]
    Failure { code: &'static str, message: String },
}

/// Maps a `CoreError` onto the stable protocol error codes relying parties
/// switch on, distinct from the free-text `Display` message meant for logs.
fn error_code(error: &CoreError) -> &'static str {
    match error {
        CoreError::Authentication(_) => "INVALID_TICKET_SPEC",
        CoreError::Access(access) => match access {
            crate::core::error::AccessValidationFailure::TokenNotFound => "INVALID_TICKET",
            crate::core::error::AccessValidationFailure::TokenUsed => "INVALID_TICKET",
            crate::core::error::AccessValidationFailure::TokenExpired => "INVALID_TICKET",
            crate::core::error::AccessValidationFailure::SessionInvalidated => "INVALID_TICKET",
        },
        CoreError::UnauthorizedService(_) => "UNAUTHORIZED_SERVICE",
        CoreError::NotFoundSession(_) => "INVALID_TICKET",
        CoreError::InvalidatedSession(_) => "INVALID_TICKET",
        CoreError::Configuration(_) => "INTERNAL_ERROR",
        CoreError::Storage(_) => "INTERNAL_ERROR",
    }
}

/// Reference `ServiceAccessResponseFactory`: renders a small JSON envelope
/// for any resource identifier. Registered as the registry's default
/// factory — see `bootstrap::wire_response_factories`.
pub struct JsonServiceResponseFactory;

impl ServiceAccessResponseFactory for JsonServiceResponseFactory {
    fn supports(&self, _resource_identifier: &str) -> bool {
        true
    }

    fn build_success(&self, authentication: &Authentication, _resource_identifier: &str) -> String {
        let body = ServiceAccessResponseBody::Success {
            principal: authentication.principal.id().to_string(),
            attributes: authentication.principal.attributes().clone(),
        };
        serde_json::to_string(&body).expect("response body always serializes")
    }

    fn build_failure(&self, error: &CoreError, _resource_identifier: &str) -> String {
        let body = ServiceAccessResponseBody::Failure {
            code: error_code(error),
            message: error.to_string(),
        };
        serde_json::to_string(&body).expect("response body always serializes")
    }
}
