//! Logging Tests

use tracing::Level;
use wireup_infrastructure::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};
use wireup_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").ok(), Some(Level::TRACE));
    assert_eq!(parse_log_level("debug").ok(), Some(Level::DEBUG));
    assert_eq!(parse_log_level("info").ok(), Some(Level::INFO));
    assert_eq!(parse_log_level("warn").ok(), Some(Level::WARN));
    assert_eq!(parse_log_level("warning").ok(), Some(Level::WARN));
    assert_eq!(parse_log_level("ERROR").ok(), Some(Level::ERROR));

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert_eq!(config.max_files, LOG_MAX_FILES);
}

#[test]
fn test_init_rejects_unknown_level() {
    let config = LoggingConfig {
        level: "verbose".to_string(),
        ..LoggingConfig::default()
    };
    let err = init_logging(&config).err().expect("unknown level fails");
    assert!(err.to_string().contains("Invalid log level"));
}

// Only this test installs the global subscriber.
#[test]
fn test_init_with_file_output_installs_once() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(temp_dir.path().join("resolver.log")),
        max_files: 2,
    };

    init_logging(&config).expect("first initialization succeeds");

    let created = std::fs::read_dir(temp_dir.path())
        .expect("log directory is readable")
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("resolver"));
    assert!(created, "rolling appender should create its file eagerly");

    assert!(
        init_logging(&config).is_err(),
        "a second global subscriber must be rejected"
    );
}
