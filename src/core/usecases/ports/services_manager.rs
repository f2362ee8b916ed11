//! Port for per-service authorization and access policy.

use crate::core::access::UsagePolicy;

/// Contract for deciding whether a relying service may participate in
/// single sign-on at all, and if so, under what access policy.
pub trait ServicesManager: Send + Sync {
    /// Whether this resource identifier is registered and currently enabled.
    fn is_authorized(&self, resource_identifier: &str) -> bool;

    /// The usage policy to apply to accesses minted for this resource.
    /// Only meaningful when `is_authorized` is true.
    fn usage_policy_for(&self, resource_identifier: &str) -> UsagePolicy;

    /// Whether accesses granted to this resource must be persisted in
    /// `SessionStorage` for later validation, or may be validated inline at
    /// grant time and discarded (`requiresStorage` in the data model).
    fn requires_storage(&self, resource_identifier: &str) -> bool;
}
