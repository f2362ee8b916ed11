//! Orchestration layer: the single sign-on authority itself, the
//! authentication pipeline it delegates credential verification to, the
//! port contracts every adapter implements, and the reference expiration
//! policies built purely from those ports.

pub mod authentication_manager;
pub mod central_authentication_service;
pub mod contracts;
pub mod policies;
pub mod ports;

pub use authentication_manager::AuthenticationManager;
pub use central_authentication_service::CentralAuthenticationService;
pub use contracts::{
    GrantAccessResponse, LoginRequest, LoginResponse, LogoutResponse, ServiceAccessRequest,
    TokenServiceAccessRequest, ValidateOutcome,
};
