//! Integration tests for configuration validation

#![allow(clippy::expect_used, clippy::unwrap_used)]

use craftwire::config::{
    CodecConfig, CodecLimits, FrameConfig, LoggingConfig, MAX_PACKET_SIZE, MAX_STRING_LENGTH,
};
use craftwire::error::ErrorKind;
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = CodecConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
    assert_eq!(config.codec.max_string_length, MAX_STRING_LENGTH);
    assert_eq!(config.frame.max_frame_size, MAX_PACKET_SIZE);
}

#[test]
fn test_zero_string_length() {
    let config = CodecConfig::default_with_overrides(|c| c.codec.max_string_length = 0);
    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Max string length must be greater than 0")));
}

#[test]
fn test_string_length_above_protocol_maximum() {
    let limits = CodecLimits {
        max_string_length: MAX_STRING_LENGTH + 1,
        ..CodecLimits::default()
    };
    let errors = limits.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Max string length too large"));
}

#[test]
fn test_byte_array_length_must_fit_varint() {
    let limits = CodecLimits {
        max_byte_array_length: i32::MAX as usize + 1,
        ..CodecLimits::default()
    };
    assert!(limits
        .validate()
        .iter()
        .any(|e| e.contains("must fit a VarInt")));
}

#[test]
fn test_frame_size_bounds() {
    assert!(!FrameConfig { max_frame_size: 0 }.validate().is_empty());
    assert!(!FrameConfig {
        max_frame_size: MAX_PACKET_SIZE + 1
    }
    .validate()
    .is_empty());
    assert!(FrameConfig {
        max_frame_size: 1024
    }
    .validate()
    .is_empty());
}

#[test]
fn test_empty_app_name() {
    let logging = LoggingConfig {
        app_name: String::new(),
        ..LoggingConfig::default()
    };
    assert!(logging
        .validate()
        .iter()
        .any(|e| e.contains("Application name cannot be empty")));
}

#[test]
fn test_errors_accumulate_across_sections() {
    let config = CodecConfig::default_with_overrides(|c| {
        c.codec.max_string_length = 0;
        c.frame.max_frame_size = 0;
        c.logging.app_name = String::new();
    });
    assert_eq!(config.validate().len(), 3);

    let err = config.validate_strict().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("Configuration validation failed"));
}

#[test]
fn test_from_toml() {
    let config = CodecConfig::from_toml(
        r#"
        [codec]
        max_string_length = 256
        max_byte_array_length = 4096

        [frame]
        max_frame_size = 8192

        [logging]
        app_name = "proxy"
        log_level = "debug"
        json_format = true
        "#,
    )
    .expect("valid TOML");

    assert_eq!(config.codec.max_string_length, 256);
    assert_eq!(config.codec.max_byte_array_length, 4096);
    assert_eq!(config.frame.max_frame_size, 8192);
    assert_eq!(config.logging.app_name, "proxy");
    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert!(config.logging.json_format);
    config.validate_strict().expect("valid config");
}

#[test]
fn test_missing_sections_use_defaults() {
    let config = CodecConfig::from_toml("[frame]\nmax_frame_size = 100\n").unwrap();
    assert_eq!(config.frame.max_frame_size, 100);
    assert_eq!(config.codec, CodecLimits::default());
    assert_eq!(config.logging.app_name, "craftwire");
}

#[test]
fn test_bad_toml_is_config_error() {
    let err = CodecConfig::from_toml("[logging]\nlog_level = \"loud\"\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let err = CodecConfig::from_toml("not toml at all ===").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_save_and_load_file() {
    let path = std::env::temp_dir().join(format!("craftwire-config-{}.toml", std::process::id()));
    let config = CodecConfig::default_with_overrides(|c| c.codec.max_string_length = 16);

    config.save_to_file(&path).expect("write config");
    let loaded = CodecConfig::from_file(&path).expect("read config");
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.codec.max_string_length, 16);
    assert_eq!(loaded.frame, config.frame);
}

#[test]
fn test_missing_file_is_config_error() {
    let err = CodecConfig::from_file("/nonexistent/craftwire.toml").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_example_config_parses() {
    let example = CodecConfig::example_config();
    let parsed = CodecConfig::from_toml(&example).expect("example config should parse");
    assert!(parsed.validate().is_empty());
}

#[test]
fn test_from_env_overrides_and_rejects_garbage() {
    std::env::set_var("CRAFTWIRE_MAX_FRAME_SIZE", "4096");
    std::env::set_var("CRAFTWIRE_LOG_LEVEL", "trace");
    let config = CodecConfig::from_env().unwrap();
    assert_eq!(config.frame.max_frame_size, 4096);
    assert_eq!(config.logging.log_level, Level::TRACE);

    std::env::set_var("CRAFTWIRE_MAX_STRING_LENGTH", "lots");
    let err = CodecConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("CRAFTWIRE_MAX_STRING_LENGTH"));

    std::env::remove_var("CRAFTWIRE_MAX_FRAME_SIZE");
    std::env::remove_var("CRAFTWIRE_LOG_LEVEL");
    std::env::remove_var("CRAFTWIRE_MAX_STRING_LENGTH");
}
