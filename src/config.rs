//! # Configuration Management
//!
//! Centralized configuration for the codec layer.
//!
//! This module provides the limits the protocol itself enforces on strings and
//! byte arrays, the frame size cap used by the frame codec, and the logging
//! setup. Limits are copied into every [`ConnectionContext`] so that codecs
//! never reach back into global state.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides via `from_env()`
//!
//! [`ConnectionContext`]: crate::core::context::ConnectionContext

use crate::error::{ProtocolError, Result};
use crate::versions::LATEST_PROTOCOL_VERSION;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Protocol version assumed when none has been negotiated yet
pub const DEFAULT_PROTOCOL_VERSION: i32 = LATEST_PROTOCOL_VERSION;

/// Longest string the protocol accepts, in UTF-16 code units
pub const MAX_STRING_LENGTH: usize = 32767;

/// Largest packet the protocol can frame (fits in a 3-byte VarInt)
pub const MAX_PACKET_SIZE: usize = 2_097_151;

/// Largest payload of an UnsignedShort-prefixed byte array
pub const MAX_SHORT_ARRAY_LENGTH: usize = u16::MAX as usize;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Length limits applied by the codecs
    #[serde(default)]
    pub codec: CodecLimits,

    /// Frame codec settings
    #[serde(default)]
    pub frame: FrameConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    ///
    /// Unparsable values are reported rather than silently ignored.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(val) = env_usize("CRAFTWIRE_MAX_STRING_LENGTH")? {
            config.codec.max_string_length = val;
        }

        if let Some(val) = env_usize("CRAFTWIRE_MAX_BYTE_ARRAY_LENGTH")? {
            config.codec.max_byte_array_length = val;
        }

        if let Some(val) = env_usize("CRAFTWIRE_MAX_FRAME_SIZE")? {
            config.frame.max_frame_size = val;
        }

        if let Ok(level) = std::env::var("CRAFTWIRE_LOG_LEVEL") {
            config.logging.log_level = level.parse::<Level>().map_err(|_| {
                ProtocolError::ConfigError(format!("Invalid CRAFTWIRE_LOG_LEVEL: {level}"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.codec.validate());
        errors.extend(self.frame.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

fn env_usize(name: &str) -> Result<Option<usize>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ProtocolError::ConfigError(format!("Invalid {name}: {raw}"))),
        Err(_) => Ok(None),
    }
}

/// Length limits enforced by the String and byte-array codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodecLimits {
    /// Maximum String length in UTF-16 code units
    pub max_string_length: usize,

    /// Maximum VarInt-prefixed byte array length in bytes
    pub max_byte_array_length: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_string_length: MAX_STRING_LENGTH,
            max_byte_array_length: MAX_PACKET_SIZE,
        }
    }
}

impl CodecLimits {
    /// Validate codec limits
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_string_length == 0 {
            errors.push("Max string length must be greater than 0".to_string());
        } else if self.max_string_length > MAX_STRING_LENGTH {
            errors.push(format!(
                "Max string length too large: {} (protocol maximum: {MAX_STRING_LENGTH})",
                self.max_string_length
            ));
        }

        if self.max_byte_array_length == 0 {
            errors.push("Max byte array length must be greater than 0".to_string());
        } else if self.max_byte_array_length > i32::MAX as usize {
            errors.push(format!(
                "Max byte array length too large: {} (must fit a VarInt)",
                self.max_byte_array_length
            ));
        }

        errors
    }
}

/// Frame codec configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FrameConfig {
    /// Largest frame body accepted or produced, in bytes
    pub max_frame_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_frame_size: MAX_PACKET_SIZE,
        }
    }
}

impl FrameConfig {
    /// Validate frame configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_frame_size == 0 {
            errors.push("Max frame size cannot be 0".to_string());
        } else if self.max_frame_size > MAX_PACKET_SIZE {
            errors.push(format!(
                "Max frame size too large: {} bytes (protocol maximum: {MAX_PACKET_SIZE})",
                self.max_frame_size
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level used when `RUST_LOG` is not set
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("craftwire"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
