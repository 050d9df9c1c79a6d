//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `staged_builder_core` linkage by running both demo builds.
//! - Keep output deterministic apart from the generated record identity.
//!
//! # Configuration
//! - `STAGED_BUILDER_LOG_DIR`: absolute directory for rolling log files.
//!   File logging stays off when unset.
//! - `STAGED_BUILDER_LOG_LEVEL`: overrides the build-mode default level.
//!   A value that is not valid Unicode is reported, not ignored.

use staged_builder_core::demo::{long_story_example, short_story_example};
use staged_builder_core::{core_version, init_logging, LoggingConfig};
use std::env::VarError;
use std::ffi::OsString;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "STAGED_BUILDER_LOG_DIR";
const LOG_LEVEL_ENV: &str = "STAGED_BUILDER_LOG_LEVEL";

fn main() -> ExitCode {
    let config = logging_config(
        std::env::var_os(LOG_DIR_ENV),
        std::env::var(LOG_LEVEL_ENV),
    );
    let started = match config {
        Ok(Some(config)) => init_logging(&config).map_err(|err| err.to_string()),
        Ok(None) => Ok(()),
        Err(err) => Err(err),
    };
    if let Err(err) = started {
        eprintln!("staged_builder logging disabled: {err}");
        return ExitCode::FAILURE;
    }

    println!("staged_builder_core version={}", core_version());
    println!("long_story={:?}", long_story_example());
    println!("short_story={:?}", short_story_example());
    log::info!("event=cli_demo module=cli status=ok");
    ExitCode::SUCCESS
}

/// Assembles the logging config from raw environment lookups.
///
/// Returns `Ok(None)` when no log directory is set.
fn logging_config(
    log_dir: Option<OsString>,
    level: Result<String, VarError>,
) -> Result<Option<LoggingConfig>, String> {
    let Some(log_dir) = log_dir else {
        return Ok(None);
    };
    let config = LoggingConfig::new(log_dir);
    match level {
        Ok(level) => Ok(Some(config.level(level))),
        Err(VarError::NotPresent) => Ok(Some(config)),
        Err(err @ VarError::NotUnicode(_)) => Err(format!("{LOG_LEVEL_ENV}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::{logging_config, LOG_LEVEL_ENV};
    use staged_builder_core::{default_log_level, LoggingConfig};
    use std::env::VarError;
    use std::ffi::OsString;

    #[test]
    fn missing_log_dir_disables_logging() {
        let config = logging_config(None, Ok("info".to_string())).expect("no error");
        assert_eq!(config, None);
    }

    #[test]
    fn unset_level_falls_back_to_default() {
        let config = logging_config(Some(OsString::from("/tmp/staged")), Err(VarError::NotPresent))
            .expect("unset level is fine")
            .expect("log dir is set");
        assert_eq!(config, LoggingConfig::new("/tmp/staged"));
        assert_eq!(config.effective_level(), default_log_level());
    }

    #[test]
    fn explicit_level_is_applied() {
        let config = logging_config(Some(OsString::from("/tmp/staged")), Ok("warn".to_string()))
            .expect("valid level")
            .expect("log dir is set");
        assert_eq!(config.effective_level(), "warn");
    }

    #[test]
    fn non_unicode_level_is_reported() {
        let err = logging_config(
            Some(OsString::from("/tmp/staged")),
            Err(VarError::NotUnicode(OsString::from("bad"))),
        )
        .expect_err("non-unicode level must not be ignored");
        assert!(err.starts_with(LOG_LEVEL_ENV));
    }
}
