//! HTTP transport adapter — a thin Axum front-end over the orchestrator.
//!
//! - `dto`: request/response bodies
//! - `handlers`: deserialize, delegate to `CentralAuthenticationService`, serialize
//! - `error`: HTTP-layer error projection for the non-proxied routes
//! - `state`: shared application state
//! - `router`: route assembly

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::HttpError;
pub use router::create_router;
pub use state::AppState;
