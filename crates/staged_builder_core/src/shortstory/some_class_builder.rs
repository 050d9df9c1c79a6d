//! Staged builder for `SomeClass`.
//!
//! # Invariants
//! - `new` parameter order is `mandatory_field_one, mandatory_field_two`.
//! - Optional setters overwrite earlier values and may be called in any order.
//! - `build` borrows the builder and can be repeated.
//!
//! # Example
//!
//! ```
//! use staged_builder_core::shortstory::{
//!     mandatory_field_one, mandatory_field_two, AnotherClass, SomeClassBuilder,
//! };
//!
//! let value = SomeClassBuilder::new(
//!     mandatory_field_one("Mandatory Value"),
//!     mandatory_field_two(AnotherClass::new()),
//! )
//! .optional_field_one(42)
//! .optional_field_two("Optional Value")
//! .build();
//!
//! assert_eq!(value.optional_field_one(), Some(42));
//! ```
//!
//! ```compile_fail
//! use staged_builder_core::shortstory::{mandatory_field_one, SomeClassBuilder};
//!
//! let value = SomeClassBuilder::new(mandatory_field_one("Mandatory Value")).build();
//! ```

use super::another_class::AnotherClass;
use super::some_class::SomeClass;
use log::debug;

/// Tags the first argument of `SomeClassBuilder::new`.
pub fn mandatory_field_one(value: impl Into<String>) -> String {
    value.into()
}

/// Tags the second argument of `SomeClassBuilder::new`.
pub fn mandatory_field_two(value: AnotherClass) -> AnotherClass {
    value
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SomeClassBuilder {
    mandatory_field_one: String,
    mandatory_field_two: AnotherClass,
    optional_field_one: Option<i64>,
    optional_field_two: Option<String>,
}

impl SomeClassBuilder {
    pub fn new(mandatory_field_one: String, mandatory_field_two: AnotherClass) -> Self {
        Self {
            mandatory_field_one,
            mandatory_field_two,
            optional_field_one: None,
            optional_field_two: None,
        }
    }

    pub fn optional_field_one(self, value: i64) -> Self {
        self.maybe_optional_field_one(Some(value))
    }

    pub fn maybe_optional_field_one(mut self, value: Option<i64>) -> Self {
        self.optional_field_one = value;
        self
    }

    pub fn optional_field_two(self, value: impl Into<String>) -> Self {
        self.maybe_optional_field_two(Some(value.into()))
    }

    pub fn maybe_optional_field_two(mut self, value: Option<String>) -> Self {
        self.optional_field_two = value;
        self
    }

    pub fn build(&self) -> SomeClass {
        debug!(
            "event=some_class_build module=shortstory status=ok has_optional_one={} has_optional_two={}",
            self.optional_field_one.is_some(),
            self.optional_field_two.is_some()
        );
        SomeClass::from_parts(
            self.mandatory_field_one.clone(),
            self.mandatory_field_two,
            self.optional_field_one,
            self.optional_field_two.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{mandatory_field_one, mandatory_field_two, AnotherClass, SomeClassBuilder};

    #[test]
    fn tags_return_their_argument() {
        let record = AnotherClass::new();
        assert_eq!(mandatory_field_one("Mandatory Value"), "Mandatory Value");
        assert_eq!(mandatory_field_two(record), record);
    }

    #[test]
    fn maybe_setters_store_option_verbatim() {
        let value = SomeClassBuilder::new(
            mandatory_field_one("one"),
            mandatory_field_two(AnotherClass::new()),
        )
        .optional_field_one(1)
        .maybe_optional_field_one(None)
        .maybe_optional_field_two(Some("two".to_string()))
        .build();

        assert_eq!(value.optional_field_one(), None);
        assert_eq!(value.optional_field_two(), Some("two"));
    }
}
