use staged_builder_core::demo::long_story_example;
use staged_builder_core::{init_logging, logging_status, LoggingConfig, LoggingError};

// Logger state is process-global, so every init assertion lives in one test.
#[test]
fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().expect("temp log dir");
    let other_dir = tempfile::tempdir().expect("second temp log dir");

    assert!(logging_status().is_none());

    let config = LoggingConfig::new(log_dir.path()).level("info");
    init_logging(&config).expect("first init should succeed");
    init_logging(&config).expect("same config should be idempotent");
    init_logging(&LoggingConfig::new(log_dir.path()).level(" INFO "))
        .expect("equivalent level spelling should be idempotent");

    let level_error = init_logging(&config.clone().level("debug"))
        .expect_err("level conflict should fail");
    assert!(matches!(
        level_error,
        LoggingError::AlreadyInitialized { setting: "level", .. }
    ));
    assert!(level_error.to_string().contains("refusing to switch"));

    let dir_error = init_logging(&LoggingConfig::new(other_dir.path()).level("info"))
        .expect_err("directory conflict should fail");
    assert!(matches!(
        dir_error,
        LoggingError::AlreadyInitialized { setting: "log_dir", .. }
    ));

    let invalid_level = init_logging(&LoggingConfig::new(log_dir.path()).level("loud"))
        .expect_err("unknown level should fail before touching state");
    assert!(matches!(invalid_level, LoggingError::UnsupportedLevel(_)));

    let (active_level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, log_dir.path());

    // Builders log through the active backend without affecting their output.
    assert_eq!(long_story_example().id(), 325);
}
