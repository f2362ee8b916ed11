//! Errors representing failures of the authority's own plumbing, not the caller's request.

/*
Neither of these is ever reported in-band to a relying party. A
`ConfigurationError` is a programmer error (crash-only); a
`StorageFailure` is transient and surfaced to the caller for retry — the
core never retries on its own behalf.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    pub context: String,
}

impl ConfigurationError {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "configuration error: {}", self.context)
    }
}

impl std::error::Error for ConfigurationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageFailure {
    pub reason: String,
}

impl StorageFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl std::fmt::Display for StorageFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "storage failure: {}", self.reason)
    }
}

impl std::error::Error for StorageFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(
            ConfigurationError::new("no factory supports request").to_string(),
            "configuration error: no factory supports request"
        );
        assert_eq!(
            StorageFailure::new("backend unavailable").to_string(),
            "storage failure: backend unavailable"
        );
    }
}
