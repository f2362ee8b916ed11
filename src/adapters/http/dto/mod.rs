//! HTTP request/response bodies. Transport only — never used in business
//! logic, never carried past the handler that deserializes or builds one.

pub mod grant_access;
pub mod login;
pub mod logout;
pub mod validate;

pub use grant_access::GrantAccessRequestBody;
pub use login::{LoginRequestBody, LoginResponseBody};
pub use logout::{LogoutPrincipalRequestBody, LogoutResponseBody, LogoutSessionRequestBody};
pub use validate::ValidateRequestBody;
