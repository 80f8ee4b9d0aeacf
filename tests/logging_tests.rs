use aethon::config::LoggingConfig;
use aethon::logging::{LogContext, StructuredLogger, get_logger, init_logging};

#[test]
fn init_and_log_through_context() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        file: tmp_dir.path().to_string_lossy().to_string(),
        ..LoggingConfig::default()
    };
    init_logging(&config).unwrap();

    let logger = get_logger("setup");
    logger.info("integration setup started");
    logger.debug("details requested");

    let context = LogContext::new("setup")
        .with_entry_id("entry_1".to_string())
        .with_site_id("123".to_string())
        .with_field("attempt", "1".to_string());
    let contextual = StructuredLogger::new(context);
    contextual.warn("site not yet active");
    contextual.error("validation failed");
}

#[test]
fn init_logging_is_idempotent() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        file: tmp_dir.path().to_string_lossy().to_string(),
        ..LoggingConfig::default()
    };
    init_logging(&config).unwrap();
    init_logging(&config).unwrap();
}
