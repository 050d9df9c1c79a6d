//! Worked constructions for both builder variants.
//!
//! Used by the smoke CLI and as the reference call-site shape for callers.

use crate::longstory::{
    age, first_name, id, last_name, shipping_address, Address, Person, PersonBuilder,
};
use crate::shortstory::{
    mandatory_field_one, mandatory_field_two, AnotherClass, SomeClass, SomeClassBuilder,
};

/// Builds the long-story sample person with every optional field set.
pub fn long_story_example() -> Person {
    PersonBuilder::new(
        id(325),
        age(16),
        first_name("Peter"),
        last_name("Newford"),
        shipping_address(Address::new("Ship to")),
    )
    .middle_name("M")
    .billing_address(Address::new("Bill to"))
    .build()
}

/// Builds the short-story sample record with every optional field set.
pub fn short_story_example() -> SomeClass {
    SomeClassBuilder::new(
        mandatory_field_one("Mandatory Value"),
        mandatory_field_two(AnotherClass::new()),
    )
    .optional_field_one(42)
    .optional_field_two("Optional Value")
    .build()
}
