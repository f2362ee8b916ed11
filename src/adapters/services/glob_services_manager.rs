use std::sync::RwLock;

use regex::Regex;

use crate::core::access::UsagePolicy;
use crate::core::usecases::ports::ServicesManager;

/// One registered relying service: the `*`-wildcard pattern it matches
/// against, and the access policy granted to it.
struct RegisteredService {
    pattern: Regex,
    usage_policy: UsagePolicy,
    requires_storage: bool,
}

/// Reference `ServicesManager`: matches a resource identifier against a set
/// of registered glob-style (`*` wildcard) URI patterns.
///
/// Unregistered services are simply unauthorized — there is no notion of a
/// default policy for services nobody registered.
pub struct GlobServicesManager {
    services: RwLock<Vec<RegisteredService>>,
}

impl GlobServicesManager {
    pub fn new() -> Self {
        Self {
            services: RwLock::new(Vec::new()),
        }
    }

    /// Register a service matched by a `*`-wildcard glob pattern, e.g.
    /// `https://*.app.example/*`. Later registrations are checked only if
    /// no earlier one matches; first registered, first tried.
    pub fn register(&self, glob_pattern: &str, usage_policy: UsagePolicy, requires_storage: bool) {
        let regex_source = format!("^{}$", regex::escape(glob_pattern).replace(r"\*", ".*"));
        let pattern = Regex::new(&regex_source).expect("glob-derived regex is always valid");
        self.services.write().unwrap().push(RegisteredService {
            pattern,
            usage_policy,
            requires_storage,
        });
    }

    fn matching(&self, resource_identifier: &str) -> Option<(UsagePolicy, bool)> {
        self.services
            .read()
            .unwrap()
            .iter()
            .find(|service| service.pattern.is_match(resource_identifier))
            .map(|service| (service.usage_policy, service.requires_storage))
    }
}

impl Default for GlobServicesManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ServicesManager for GlobServicesManager {
    fn is_authorized(&self, resource_identifier: &str) -> bool {
        self.matching(resource_identifier).is_some()
    }

    fn usage_policy_for(&self, resource_identifier: &str) -> UsagePolicy {
        self.matching(resource_identifier)
            .map(|(policy, _)| policy)
            .unwrap_or_else(UsagePolicy::single_use)
    }

    fn requires_storage(&self, resource_identifier: &str) -> bool {
        self.matching(resource_identifier).map(|(_, storage)| storage).unwrap_or(true)
    }
}
