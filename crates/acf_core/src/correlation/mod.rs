//! Autocorrelation of uniformly sampled real signals.
//!
//! # Architecture
//!
//! Three stateless estimators share one numeric contract:
//!
//! 1. **Direct** (`methods::Direct`): O(m²) sliding dot product. This is
//!    the reference every other method is compared against.
//!
//! 2. **FFT library** (`methods::FftLibrary`): centered FFT cross-correlation
//!    from [`fft::correlate`], divided by the overlap count.
//!
//! 3. **Zero-padded FFT** (`methods::ZeroPaddedFft`): inverse transform of the
//!    power spectrum, zero padded to remove circular wraparound. Without
//!    padding it yields the biased circular estimate instead.
//!
//! Every lag `i` of a padded estimate is `sum(data[t] * data[t + i]) / (m - i)`.
//! Output lengths are fixed by [`output_length`].
//!
//! # Usage
//!
//! ```
//! use acf_core::correlation::{all_methods, CorrelationStrategy};
//!
//! let time: Vec<f64> = (0..9).map(|i| i as f64 * 0.1).collect();
//! let data: Vec<f64> = time.iter().map(|t| (6.0 * t).sin()).collect();
//!
//! for method in all_methods() {
//!     let result = method.correlate(&time, &data).unwrap();
//!     assert_eq!(result.len(), method.output_len(data.len()));
//! }
//! ```
//!
//! Time axes are assumed uniform; only the caller can guarantee that.

pub mod fft;
mod length;
pub mod methods;
pub mod types;

pub use length::{output_length, MethodKind};
pub use methods::{
    all_methods, available_methods, create_from_enum, create_method, CorrelationStrategy,
    Direct, FftLibrary, ZeroPaddedFft,
};
pub use types::{validate_signal, AcfError, AcfResult, CorrelationResult, MultiChannelResult};

/// Direct sliding-window autocorrelation.
///
/// Shorthand for `Direct::new().correlate(time, data)`.
pub fn correlation_manual(time: &[f64], data: &[f64]) -> AcfResult<CorrelationResult> {
    Direct::new().correlate(time, data)
}

/// FFT-library autocorrelation, one extra lag for odd-length input.
pub fn correlation_scipy(time: &[f64], data: &[f64]) -> AcfResult<CorrelationResult> {
    FftLibrary::new().correlate(time, data)
}

/// Power-spectrum autocorrelation.
///
/// Pass `zero_padding = true` for the estimate that agrees with the other
/// two methods; `false` gives the circular estimate normalized by `m`.
pub fn correlation_fft(
    time: &[f64],
    data: &[f64],
    zero_padding: bool,
) -> AcfResult<CorrelationResult> {
    ZeroPaddedFft::with_padding(zero_padding).correlate(time, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_match_strategies() {
        let time: Vec<f64> = (0..11).map(|i| i as f64).collect();
        let data: Vec<f64> = (0..11).map(|i| ((i * 3) % 5) as f64 - 2.0).collect();

        assert_eq!(
            correlation_manual(&time, &data).unwrap(),
            Direct::new().correlate(&time, &data).unwrap()
        );
        assert_eq!(
            correlation_scipy(&time, &data).unwrap(),
            FftLibrary::new().correlate(&time, &data).unwrap()
        );
        assert_eq!(
            correlation_fft(&time, &data, false).unwrap(),
            ZeroPaddedFft::without_padding().correlate(&time, &data).unwrap()
        );
    }

    #[test]
    fn shorthands_report_errors() {
        assert_eq!(
            correlation_fft(&[0.0], &[1.0], true).unwrap_err(),
            AcfError::InsufficientData(1)
        );
        assert!(correlation_scipy(&[0.0, 1.0], &[1.0]).is_err());
    }
}
