//! FFT-library autocorrelation.
//!
//! Delegates the lag sums to the centered "same" mode cross-correlation
//! primitive and re-normalizes by the overlap count, so the result matches
//! the direct estimator up to FFT rounding.

use crate::correlation::fft::{correlate, CorrelateMode};
use crate::correlation::length::{output_length, overlap_taper, MethodKind};
use crate::correlation::types::{validate_signal, AcfResult, CorrelationResult};

use super::CorrelationStrategy;

/// Library-backed correlator.
///
/// The centered output of `correlate(data, data, Same)` holds the zero lag
/// at index `m / 2`. Everything from there on is the non-negative lags in
/// increasing order: `m / 2` of them for even `m`, `m / 2 + 1` for odd.
pub struct FftLibrary;

impl FftLibrary {
    /// Create a new FFT-library correlator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for FftLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrelationStrategy for FftLibrary {
    fn name(&self) -> &str {
        "FFT Library"
    }

    fn description(&self) -> &str {
        "Centered FFT cross-correlation divided by overlap count"
    }

    fn kind(&self) -> MethodKind {
        MethodKind::FftLibrary
    }

    fn correlate(&self, time: &[f64], data: &[f64]) -> AcfResult<CorrelationResult> {
        let m = validate_signal(time.len(), data.len())?;
        let n = output_length(m, MethodKind::FftLibrary);

        let centered = correlate(data, data, CorrelateMode::Same);
        let correl: Vec<f64> = centered[m / 2..]
            .iter()
            .zip(overlap_taper(m, n))
            .map(|(sum, pairs)| sum / pairs)
            .collect();

        tracing::trace!("FFT library autocorrelation: {} samples -> {} lags", m, n);

        Ok(CorrelationResult::new(time[..n].to_vec(), correl))
    }
}
