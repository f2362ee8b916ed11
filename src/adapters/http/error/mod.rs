//! HTTP-layer error projection, isolated from domain error types.

pub mod http_error;

pub use http_error::HttpError;
