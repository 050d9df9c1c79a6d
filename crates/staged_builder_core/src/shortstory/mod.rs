//! "Short story" variant: few mandatory fields, several optional ones.
//!
//! # Responsibility
//! - Define the immutable `SomeClass` record and its `AnotherClass` payload.
//! - Provide `SomeClassBuilder` plus tag functions for the mandatory fields.
//!
//! # See also
//! - crate::longstory

pub mod another_class;
pub mod some_class;
pub mod some_class_builder;

pub use another_class::AnotherClass;
pub use some_class::SomeClass;
pub use some_class_builder::{mandatory_field_one, mandatory_field_two, SomeClassBuilder};
