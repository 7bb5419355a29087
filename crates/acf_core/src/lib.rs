//! ACF Core - autocorrelation estimators for uniformly sampled signals.
//!
//! This crate contains the numeric core with zero UI dependencies.
//! Three interchangeable strategies compute the one-sided autocorrelation
//! of a real signal: a direct sliding-window sum, an FFT-backed library
//! correlation, and a Wiener-Khinchin estimate with optional zero padding.
//!
//! # Example
//!
//! ```
//! use acf_core::correlation::{correlation_fft, correlation_manual};
//!
//! let time: Vec<f64> = (0..8).map(|i| i as f64 * 0.5).collect();
//! let data = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
//!
//! let direct = correlation_manual(&time, &data).unwrap();
//! let spectral = correlation_fft(&time, &data, true).unwrap();
//!
//! assert_eq!(direct.len(), 4);
//! assert!((direct.correl[1] + 1.0).abs() < 1e-12);
//! assert!((spectral.correl[1] - direct.correl[1]).abs() < 1e-9);
//! ```

pub mod config;
pub mod correlation;
pub mod logging;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
