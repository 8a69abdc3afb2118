// src/application/ports/util.rs
use uuid::Uuid;

/// Source of fresh entity identifiers. Injected so the domain stays
/// deterministic under test.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}
