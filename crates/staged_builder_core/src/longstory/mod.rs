//! "Long story" variant: many mandatory fields, few optional ones.
//!
//! # Responsibility
//! - Define the immutable `Person` record and its `Address` payload.
//! - Provide `PersonBuilder` plus one field-tag function per mandatory field.
//!
//! # Invariants
//! - `PersonBuilder::new` lists every mandatory field; nothing else can start a build.
//! - Optional fields stay `None` until a setter stores a value.
//!
//! # See also
//! - crate::shortstory

pub mod address;
pub mod person;
pub mod person_builder;

pub use address::Address;
pub use person::Person;
pub use person_builder::{age, first_name, id, last_name, shipping_address, PersonBuilder};
