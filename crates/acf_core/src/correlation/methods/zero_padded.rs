//! Spectral (Wiener-Khinchin) autocorrelation with optional zero padding.
//!
//! The FFT treats its input as one period of a cyclic signal, so the
//! inverse transform of `|FFT(x)|²` is the circular autocorrelation.
//! Inserting `m` zeros between the end and the start of the signal leaves
//! nothing to wrap onto, and the first `m` outputs become the linear lag
//! sums.

use crate::correlation::fft::{circular_autocorrelation, pad_middle, recenter};
use crate::correlation::length::{output_length, overlap_taper, MethodKind};
use crate::correlation::types::{validate_signal, AcfResult, CorrelationResult};

use super::CorrelationStrategy;

/// Power-spectrum correlator.
///
/// With padding (the default) lags are divided by their overlap count and
/// agree with [`Direct`](super::Direct). Without padding every lag is
/// divided by `m`, giving the biased circular estimate. That variant does
/// not agree with the other methods, especially near the largest lag.
pub struct ZeroPaddedFft {
    /// Whether to pad with `m` zeros before transforming.
    zero_padding: bool,
}

impl ZeroPaddedFft {
    /// Create a padded spectral correlator.
    pub fn new() -> Self {
        Self { zero_padding: true }
    }

    /// Create a circular (unpadded) spectral correlator.
    pub fn without_padding() -> Self {
        Self {
            zero_padding: false,
        }
    }

    /// Create with an explicit padding flag.
    pub fn with_padding(zero_padding: bool) -> Self {
        Self { zero_padding }
    }

    /// Whether zero padding is applied.
    pub fn zero_padding(&self) -> bool {
        self.zero_padding
    }
}

impl Default for ZeroPaddedFft {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrelationStrategy for ZeroPaddedFft {
    fn name(&self) -> &str {
        if self.zero_padding {
            "Zero-Padded FFT"
        } else {
            "Circular FFT"
        }
    }

    fn description(&self) -> &str {
        if self.zero_padding {
            "Inverse FFT of the power spectrum with aliasing removed by zero padding"
        } else {
            "Inverse FFT of the power spectrum, biased circular estimate"
        }
    }

    fn kind(&self) -> MethodKind {
        MethodKind::ZeroPaddedFft
    }

    fn correlate(&self, time: &[f64], data: &[f64]) -> AcfResult<CorrelationResult> {
        let m = validate_signal(time.len(), data.len())?;
        let n = output_length(m, MethodKind::ZeroPaddedFft);

        // Sample 0 sits at m/2 after recentring, so the zero block goes
        // exactly between the last and the first sample.
        let centered = recenter(data);
        let lag_sums = if self.zero_padding {
            circular_autocorrelation(&pad_middle(&centered, m / 2, m))
        } else {
            circular_autocorrelation(&centered)
        };

        let correl: Vec<f64> = if self.zero_padding {
            lag_sums
                .iter()
                .zip(overlap_taper(m, n))
                .map(|(sum, pairs)| sum / pairs)
                .collect()
        } else {
            lag_sums.iter().take(n).map(|sum| sum / m as f64).collect()
        };

        tracing::trace!(
            "Spectral autocorrelation (padding={}): {} samples -> {} lags",
            self.zero_padding,
            m,
            n
        );

        Ok(CorrelationResult::new(time[..n].to_vec(), correl))
    }
}
