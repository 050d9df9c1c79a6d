//! Immutable record produced by `SomeClassBuilder`.

use super::another_class::AnotherClass;

/// Record with two mandatory and two optional fields.
///
/// Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SomeClass {
    mandatory_field_one: String,
    mandatory_field_two: AnotherClass,
    optional_field_one: Option<i64>,
    optional_field_two: Option<String>,
}

impl SomeClass {
    pub(crate) fn from_parts(
        mandatory_field_one: String,
        mandatory_field_two: AnotherClass,
        optional_field_one: Option<i64>,
        optional_field_two: Option<String>,
    ) -> Self {
        Self {
            mandatory_field_one,
            mandatory_field_two,
            optional_field_one,
            optional_field_two,
        }
    }

    pub fn mandatory_field_one(&self) -> &str {
        &self.mandatory_field_one
    }

    pub fn mandatory_field_two(&self) -> &AnotherClass {
        &self.mandatory_field_two
    }

    pub fn optional_field_one(&self) -> Option<i64> {
        self.optional_field_one
    }

    pub fn optional_field_two(&self) -> Option<&str> {
        self.optional_field_two.as_deref()
    }
}
