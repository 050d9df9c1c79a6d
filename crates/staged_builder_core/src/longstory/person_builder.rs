//! Staged builder for `Person`.
//!
//! # Responsibility
//! - Require every mandatory field up front in `PersonBuilder::new`.
//! - Collect optional fields through chained setters.
//! - Produce immutable `Person` values on `build`.
//!
//! # Invariants
//! - `new` parameter order is `id, age, first_name, last_name, shipping_address`.
//! - Setters overwrite earlier values (last write wins).
//! - `build` borrows the builder; it can be called again after more setters.
//!
//! # Example
//!
//! ```
//! use staged_builder_core::longstory::{
//!     age, first_name, id, last_name, shipping_address, Address, PersonBuilder,
//! };
//!
//! let person = PersonBuilder::new(
//!     id(325),
//!     age(16),
//!     first_name("Peter"),
//!     last_name("Newford"),
//!     shipping_address(Address::new("Ship to")),
//! )
//! .middle_name("M")
//! .billing_address(Address::new("Bill to"))
//! .build();
//!
//! assert_eq!(person.middle_name(), Some("M"));
//! ```
//!
//! Leaving out a mandatory field does not compile:
//!
//! ```compile_fail
//! use staged_builder_core::longstory::{age, first_name, id, last_name, PersonBuilder};
//!
//! let person = PersonBuilder::new(id(325), age(16), first_name("Peter"), last_name("Newford"))
//!     .build();
//! ```

use super::address::Address;
use super::person::Person;
use log::debug;

/// Tags the `id` argument of `PersonBuilder::new`.
pub fn id(id: i64) -> i64 {
    id
}

/// Tags the `age` argument of `PersonBuilder::new`.
pub fn age(age: i32) -> i32 {
    age
}

/// Tags the `first_name` argument of `PersonBuilder::new`.
pub fn first_name(first_name: impl Into<String>) -> String {
    first_name.into()
}

/// Tags the `last_name` argument of `PersonBuilder::new`.
///
/// Shares its type with `first_name`, so swapping the two still compiles.
pub fn last_name(last_name: impl Into<String>) -> String {
    last_name.into()
}

/// Tags the `shipping_address` argument of `PersonBuilder::new`.
pub fn shipping_address(shipping_address: Address) -> Address {
    shipping_address
}

/// Builder holding the mandatory `Person` fields plus optional overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBuilder {
    id: i64,
    age: i32,
    first_name: String,
    last_name: String,
    shipping_address: Address,
    middle_name: Option<String>,
    billing_address: Option<Address>,
}

impl PersonBuilder {
    /// Starts a build from the complete mandatory field set.
    pub fn new(
        id: i64,
        age: i32,
        first_name: String,
        last_name: String,
        shipping_address: Address,
    ) -> Self {
        Self {
            id,
            age,
            first_name,
            last_name,
            shipping_address,
            middle_name: None,
            billing_address: None,
        }
    }

    pub fn middle_name(self, middle_name: impl Into<String>) -> Self {
        self.maybe_middle_name(Some(middle_name.into()))
    }

    /// Stores `middle_name` as given; `None` clears an earlier value.
    pub fn maybe_middle_name(mut self, middle_name: Option<String>) -> Self {
        self.middle_name = middle_name;
        self
    }

    pub fn billing_address(self, billing_address: Address) -> Self {
        self.maybe_billing_address(Some(billing_address))
    }

    /// Stores `billing_address` as given; `None` clears an earlier value.
    pub fn maybe_billing_address(mut self, billing_address: Option<Address>) -> Self {
        self.billing_address = billing_address;
        self
    }

    /// Builds a `Person` from the current builder state.
    ///
    /// Each call returns a new, independent value.
    pub fn build(&self) -> Person {
        debug!(
            "event=person_build module=longstory status=ok has_middle_name={} has_billing_address={}",
            self.middle_name.is_some(),
            self.billing_address.is_some()
        );
        Person::from_parts(
            self.id,
            self.age,
            self.first_name.clone(),
            self.middle_name.clone(),
            self.last_name.clone(),
            self.shipping_address.clone(),
            self.billing_address.clone(),
        )
    }
}
