//! Sequential record numbering.
//!
//! Shipments and intake records carry a human-facing sequential number
//! ("SHP00001") assigned at creation time. The generator is an external
//! collaborator from the engine's point of view: it is keyed by entity code
//! and may simply have no sequence registered for a code, in which case it
//! yields `None` and the caller must abort the create with a configuration
//! error rather than leave the number unset.

use std::collections::HashMap;
use std::sync::Mutex;

/// Sequence code for shipment numbers.
pub const SHIPMENT_SEQUENCE: &str = "shipment";
/// Sequence code for intake record numbers.
pub const INTAKE_SEQUENCE: &str = "intake";

/// Monotonic per-entity number generator.
pub trait SequenceGenerator: Send + Sync {
    /// Returns the next number for `code`, or `None` when no sequence is
    /// registered under that code.
    fn next_by_code(&self, code: &str) -> Option<String>;
}

struct Counter {
    prefix: String,
    padding: usize,
    next: u64,
}

/// In-memory sequence generator with per-code prefix and zero padding.
pub struct InMemorySequenceGenerator {
    counters: Mutex<HashMap<String, Counter>>,
}

impl InMemorySequenceGenerator {
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Register a sequence under `code`. Numbers start at 1.
    pub fn register(&self, code: &str, prefix: &str, padding: usize) {
        let mut counters = match self.counters.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        counters.insert(
            code.to_string(),
            Counter {
                prefix: prefix.to_string(),
                padding,
                next: 1,
            },
        );
        tracing::debug!(code, prefix, "registered sequence");
    }
}

impl Default for InMemorySequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for InMemorySequenceGenerator {
    fn next_by_code(&self, code: &str) -> Option<String> {
        let mut counters = match self.counters.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let counter = counters.get_mut(code)?;
        let value = counter.next;
        counter.next += 1;
        Some(format!(
            "{}{:0width$}",
            counter.prefix,
            value,
            width = counter.padding
        ))
    }
}
