// Core identity vocabulary for the authentication-authority domain.

pub mod authentication;
pub mod principal;

pub use authentication::Authentication;
pub use principal::Principal;
