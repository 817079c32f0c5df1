//! Configuration validation rules.

use super::schema::Config;

/// Validate configuration and return aggregated validation errors.
pub fn validate_config(config: &Config) -> crate::Result<()> {
    let mut errors = Vec::new();

    if config.chat.max_message_length == 0 {
        errors.push("chat.max_message_length must be > 0".to_string());
    }
    if config.chat.max_messages_history == 0 {
        errors.push("chat.max_messages_history must be > 0".to_string());
    }

    if config.storage.data_dir.trim().is_empty() {
        errors.push("storage.data_dir must not be empty".to_string());
    }

    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        other => errors.push(format!(
            "logging.level must be one of trace/debug/info/warn/error, got '{}'",
            other
        )),
    }
    match config.logging.format.as_str() {
        "text" | "json" => {}
        other => errors.push(format!(
            "logging.format must be 'text' or 'json', got '{}'",
            other
        )),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Validation(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_defaults() {
        let config = Config::default();
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_message_length() {
        let mut config = Config::default();
        config.chat.max_message_length = 0;

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("chat.max_message_length"));
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }
}
