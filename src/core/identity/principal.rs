use std::collections::BTreeMap;
use std::fmt;

/// The authenticated identity produced by a successful credential resolution.
///
/// `Principal.id` is opaque and globally unique per identity source; it is
/// minted once by the `AuthenticationManager` and never mutated afterward —
/// every `Authentication` a session accumulates refers back to the same
/// principal id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    id: String,
    attributes: BTreeMap<String, Vec<String>>,
}

impl Principal {
    /// Construct a principal with no attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Construct a principal carrying the given attribute map.
    pub fn with_attributes(id: impl Into<String>, attributes: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &BTreeMap<String, Vec<String>> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&[String]> {
        self.attributes.get(name).map(|v| v.as_slice())
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.id)
    }
}
