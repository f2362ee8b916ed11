//! HTTP request handlers: deserialize, delegate to the orchestrator,
//! serialize. No business logic lives here.

pub mod grant_access;
pub mod login;
pub mod logout;
pub mod validate;

pub use grant_access::grant_access;
pub use login::login;
pub use logout::{logout_principal, logout_session};
pub use validate::validate;
