use rand::RngCore;

use crate::core::usecases::ports::TicketIdGenerator;

/// Mints ids of the conventional CAS shape `<prefix>-<40 hex chars>`, using
/// 20 bytes of OS-backed randomness per id — enough that guessing a live
/// ticket id is infeasible without ever needing a stateful counter.
pub struct RandomTicketIdGenerator;

impl TicketIdGenerator for RandomTicketIdGenerator {
    fn generate(&self, prefix: &str) -> String {
        let mut bytes = [0u8; 20];
        rand::rng().fill_bytes(&mut bytes);
        format!("{}-{}", prefix, hex::encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_the_requested_prefix() {
        let generator = RandomTicketIdGenerator;
        let id = generator.generate("TGT");
        assert!(id.starts_with("TGT-"));
        assert_eq!(id.len(), "TGT-".len() + 40);
    }

    #[test]
    fn successive_ids_are_distinct() {
        let generator = RandomTicketIdGenerator;
        assert_ne!(generator.generate("ST"), generator.generate("ST"));
    }
}
