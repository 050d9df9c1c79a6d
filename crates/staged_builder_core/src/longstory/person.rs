//! Immutable person record produced by `PersonBuilder`.
//!
//! # Invariants
//! - Fields are private and exposed read-only; a built `Person` never changes.
//! - `middle_name` and `billing_address` are `None` unless set on the builder.

use super::address::Address;

/// Customer-like record with a large mandatory field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: i64,
    age: i32,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    shipping_address: Address,
    /// May hold the same address as `shipping_address`.
    billing_address: Option<Address>,
}

impl Person {
    // The all-fields constructor stays crate-private; callers go through
    // `PersonBuilder`.
    pub(crate) fn from_parts(
        id: i64,
        age: i32,
        first_name: String,
        middle_name: Option<String>,
        last_name: String,
        shipping_address: Address,
        billing_address: Option<Address>,
    ) -> Self {
        Self {
            id,
            age,
            first_name,
            middle_name,
            last_name,
            shipping_address,
            billing_address,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    pub fn billing_address(&self) -> Option<&Address> {
        self.billing_address.as_ref()
    }

    /// Returns the address invoices should go to.
    ///
    /// Falls back to the shipping address when no billing address was set.
    pub fn effective_billing_address(&self) -> &Address {
        self.billing_address
            .as_ref()
            .unwrap_or(&self.shipping_address)
    }
}
