//! Identifier generation
//!
//! Categories and apps receive fresh identifiers during migration. The
//! generator is a capability handed to the migration engine so that
//! production runs use random UUIDs while tests can substitute a
//! deterministic sequence.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of unique string identifiers
///
/// Implementations must never return the same identifier twice from one
/// instance. `&self` receivers let a single generator be shared behind an
/// `Arc` across threads.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    /// Produce the next identifier
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    /// Create new generator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    #[inline]
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `"{prefix}-{n}"` identifiers, starting at 1
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create generator with the given prefix
    #[inline]
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Number of identifiers issued so far
    #[inline]
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn sequential_ids_count_from_one() {
        let ids = SequentialIdGenerator::new("app");
        assert_eq!(ids.next_id(), "app-1");
        assert_eq!(ids.next_id(), "app-2");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn uuid_ids_are_distinct_and_parse() {
        let ids = UuidGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn sequential_ids_unique_across_threads() {
        let ids = Arc::new(SequentialIdGenerator::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 400);
    }
}
