//! Errors describing session lookup/state failures at the orchestrator boundary.

/// The target session does not exist in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundSession {
    pub session_id: String,
}

impl NotFoundSession {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

impl std::fmt::Display for NotFoundSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session '{}' not found", self.session_id)
    }
}

/// The target session exists but is no longer usable (invalidated or expired).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidatedSession {
    pub session_id: String,
}

impl InvalidatedSession {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

impl std::fmt::Display for InvalidatedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session '{}' is invalidated", self.session_id)
    }
}
