//! Port for minting unguessable ticket ids.

/// Contract for generating a session or access id carrying a conventional
/// CAS prefix (`TGT-`, `ST-`, `PT-`, `PGT-`).
pub trait TicketIdGenerator: Send + Sync {
    fn generate(&self, prefix: &str) -> String;
}
