//! Staged builders for immutable value objects.
//!
//! Mandatory fields go through a positional `new` call labelled by field-tag
//! functions; optional fields are chained afterwards; `build` yields the value.

pub mod demo;
pub mod logging;
pub mod longstory;
pub mod shortstory;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use longstory::{Address, Person, PersonBuilder};
pub use shortstory::{AnotherClass, SomeClass, SomeClassBuilder};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
