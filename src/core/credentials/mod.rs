//! Core credential vocabulary.
//
// Defines the opaque credential value passed into the authentication
// pipeline. Concrete credential mechanisms (username/password, certificate,
// HTTPS endpoint check) are deliberately NOT here — those are external
// collaborators implemented as `CredentialHandler` adapters.

pub mod credential;

pub use credential::Credential;
