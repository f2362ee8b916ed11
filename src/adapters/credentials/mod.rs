//! Reference `CredentialHandler` implementations.

pub mod password_handler;

pub use password_handler::PasswordCredentialHandler;
