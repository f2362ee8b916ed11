/// How many times an `Access` may be validated before it is exhausted.
///
/// Replaces what would otherwise be a CAS1/CAS2/SAML `Access` subclass
/// hierarchy with a single tagged variant — `Access::validate` dispatches on
/// this instead of virtual method resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsagePolicy {
    /// Validation never consumes the access; it can be validated any number
    /// of times (e.g. a delegated/proxy-granting access used only to mint
    /// further sessions, never itself "spent").
    SelfValidating,
    /// Validation is allowed exactly `remaining` more times before the
    /// access is marked used. A freshly granted service ticket is
    /// `BoundedUses { remaining: 1 }`.
    BoundedUses { remaining: u32 },
    /// Validation never fails or consumes state, but the access is retained
    /// purely so a subsequent session-invalidation can cascade a
    /// relying-party logout notification to it.
    LogoutOnly,
}

impl UsagePolicy {
    /// The conventional single-use service ticket policy.
    pub fn single_use() -> Self {
        Self::BoundedUses { remaining: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_use_is_bounded_with_one_remaining() {
        assert_eq!(UsagePolicy::single_use(), UsagePolicy::BoundedUses { remaining: 1 });
    }
}
