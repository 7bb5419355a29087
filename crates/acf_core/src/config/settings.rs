//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Missing sections and keys fall back to their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::correlation::{create_from_enum, CorrelationStrategy};
use crate::logging::LogLevel;
use crate::models::CorrelationMethod;

/// Errors that can occur while reading or writing settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Estimator selection.
    #[serde(default)]
    pub correlation: CorrelationSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render settings as pretty TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Which estimator to run and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSettings {
    /// Correlation algorithm.
    #[serde(default)]
    pub method: CorrelationMethod,

    /// Zero pad before the spectral estimate. Ignored by other methods.
    #[serde(default = "default_true")]
    pub zero_padding: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CorrelationSettings {
    fn default() -> Self {
        Self {
            method: CorrelationMethod::default(),
            zero_padding: true,
        }
    }
}

impl CorrelationSettings {
    /// Build the configured strategy.
    pub fn build_method(&self) -> Box<dyn CorrelationStrategy> {
        create_from_enum(self.method, self.zero_padding)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Fallback level when `RUST_LOG` is unset.
    #[serde(default)]
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.correlation.zero_padding);
        assert_eq!(settings.correlation.method, CorrelationMethod::ZeroPaddedFft);
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn parses_partial_sections() {
        let settings = Settings::from_toml_str(
            "[correlation]\nmethod = \"FFT Library\"\n\n[logging]\nlevel = \"Debug\"\n",
        )
        .unwrap();

        assert_eq!(settings.correlation.method, CorrelationMethod::FftLibrary);
        assert!(settings.correlation.zero_padding);
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }

    #[test]
    fn rendered_toml_parses_back() {
        let mut settings = Settings::default();
        settings.correlation.method = CorrelationMethod::Direct;
        settings.correlation.zero_padding = false;

        let text = settings.to_toml_string().unwrap();
        assert!(text.contains("[correlation]"));
        assert!(text.contains("zero_padding = false"));
        assert_eq!(Settings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn rejects_unknown_method() {
        let err = Settings::from_toml_str("[correlation]\nmethod = \"Wavelet\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn build_method_respects_padding() {
        let settings = Settings::from_toml_str("[correlation]\nzero_padding = false\n").unwrap();
        let method = settings.correlation.build_method();
        assert_eq!(method.name(), "Circular FFT");

        let direct = CorrelationSettings {
            method: CorrelationMethod::Direct,
            zero_padding: false,
        };
        assert_eq!(direct.build_method().name(), "Direct");
    }
}
