//! Randomized `TicketIdGenerator` adapter.

pub mod random_ticket_id;

pub use random_ticket_id::RandomTicketIdGenerator;
