//! Location payload referenced by `Person`.

/// Postal location used for shipping and billing.
///
/// Only a free-form label is kept; no formatting rules are enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    label: String,
}

impl Address {
    /// Creates an address from a free-form label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the address label.
    pub fn label(&self) -> &str {
        &self.label
    }
}
