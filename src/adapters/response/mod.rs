//! Reference `ServiceAccessResponseFactory` adapter.

pub mod json_response_factory;

pub use json_response_factory::JsonServiceResponseFactory;
