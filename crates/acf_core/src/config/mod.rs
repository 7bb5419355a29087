//! Configuration for ACF Core.
//!
//! This module provides:
//! - TOML-based settings with logical sections
//! - Defaults for every missing section or key
//! - A builder from settings to a ready-to-use strategy
//!
//! Reading and writing files is left to the caller.
//!
//! # Example
//!
//! ```
//! use acf_core::config::Settings;
//!
//! let settings = Settings::from_toml_str(
//!     "[correlation]\nmethod = \"Direct\"\n",
//! ).unwrap();
//!
//! let method = settings.correlation.build_method();
//! assert_eq!(method.name(), "Direct");
//! ```

mod settings;

pub use settings::{ConfigError, ConfigResult, CorrelationSettings, LoggingSettings, Settings};
