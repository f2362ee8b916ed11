//! Port for rendering a `validate`/`grantAccess` outcome into a wire
//! response, and the registry that selects among per-service factories.

use crate::core::error::CoreError;
use crate::core::identity::Authentication;

/// Contract for a single resource-identifier-scoped response rendering
/// (e.g. a CAS1 plaintext factory vs. a CAS2/SAML XML factory vs. a JSON
/// factory for a modern relying party).
pub trait ServiceAccessResponseFactory: Send + Sync {
    /// Whether this factory renders responses for the given resource.
    fn supports(&self, resource_identifier: &str) -> bool;

    fn build_success(&self, authentication: &Authentication, resource_identifier: &str) -> String;

    fn build_failure(&self, error: &CoreError, resource_identifier: &str) -> String;
}

/// Resolves the first registered factory that claims a resource
/// identifier, falling back to an always-present default.
pub struct ResponseFactoryRegistry {
    factories: Vec<Box<dyn ServiceAccessResponseFactory>>,
    default_factory: Box<dyn ServiceAccessResponseFactory>,
}

impl ResponseFactoryRegistry {
    pub fn new(default_factory: Box<dyn ServiceAccessResponseFactory>) -> Self {
        Self {
            factories: Vec::new(),
            default_factory,
        }
    }

    pub fn register(&mut self, factory: Box<dyn ServiceAccessResponseFactory>) {
        self.factories.push(factory);
    }

    pub fn resolve(&self, resource_identifier: &str) -> &dyn ServiceAccessResponseFactory {
        self.factories
            .iter()
            .find(|factory| factory.supports(resource_identifier))
            .map(|factory| factory.as_ref())
            .unwrap_or(self.default_factory.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Claims(&'static str);

    impl ServiceAccessResponseFactory for Claims {
        fn supports(&self, resource_identifier: &str) -> bool {
            resource_identifier == self.0
        }

        fn build_success(&self, _authentication: &Authentication, _resource_identifier: &str) -> String {
            format!("{}:success", self.0)
        }

        fn build_failure(&self, _error: &CoreError, _resource_identifier: &str) -> String {
            format!("{}:failure", self.0)
        }
    }

    #[test]
    fn resolve_falls_back_to_default_when_nothing_else_matches() {
        let mut registry = ResponseFactoryRegistry::new(Box::new(Claims("default")));
        registry.register(Box::new(Claims("https://special.example")));

        assert!(registry.resolve("https://unrelated.example").supports("default"));
        assert!(registry.resolve("https://special.example").supports("https://special.example"));
    }
}
