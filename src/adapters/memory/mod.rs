//! In-memory reference `SessionStorage` adapter.

pub mod session_storage;
pub mod sweeper;

pub use session_storage::InMemorySessionStorage;
pub use sweeper::spawn_sweeper;
