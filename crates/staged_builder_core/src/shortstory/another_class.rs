//! Auxiliary record referenced by `SomeClass`.
//!
//! # Invariants
//! - Every `AnotherClass::new()` call yields a fresh identity.
//! - Clones share the identity of their source.

use uuid::Uuid;

/// Opaque record whose only property is its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnotherClass {
    id: Uuid,
}

impl AnotherClass {
    /// Creates a fresh instance with a generated identity.
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    /// Returns the stable identity of this instance.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Default for AnotherClass {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AnotherClass;

    #[test]
    fn fresh_instances_are_distinct() {
        let first = AnotherClass::new();
        let second = AnotherClass::new();

        assert!(!first.id().is_nil());
        assert_ne!(first, second);
    }

    #[test]
    fn copies_keep_identity() {
        let original = AnotherClass::default();
        let copy = original;
        assert_eq!(copy, original);
        assert_eq!(copy.id(), original.id());
    }
}
