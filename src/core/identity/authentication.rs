use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::Principal;

/// A single completed authentication event against a principal.
///
/// `Session.authentications` is append-only: a session accumulates one
/// `Authentication` per successful (re-)auth (login, or `forceAuthentication`
/// re-auth against the same principal) rather than replacing the prior one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    pub principal: Principal,
    pub instant: DateTime<Utc>,
    pub attributes: BTreeMap<String, Vec<String>>,
    pub authentication_method: String,
}

impl Authentication {
    pub fn new(principal: Principal, instant: DateTime<Utc>, authentication_method: impl Into<String>) -> Self {
        Self {
            principal,
            instant,
            attributes: BTreeMap::new(),
            authentication_method: authentication_method.into(),
        }
    }

    pub fn with_attributes(mut self, attributes: BTreeMap<String, Vec<String>>) -> Self {
        self.attributes = attributes;
        self
    }
}
