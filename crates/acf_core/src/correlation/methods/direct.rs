//! Direct sliding-window autocorrelation.
//!
//! O(m²) reference estimator. Every other method is checked against it.

use crate::correlation::length::{output_length, MethodKind};
use crate::correlation::types::{validate_signal, AcfResult, CorrelationResult};

use super::CorrelationStrategy;

/// Direct correlator.
///
/// For lag `i` sums `data[t] * data[t + i]` over the `m - i` overlapping
/// pairs and divides by that count. Lag 0 is therefore the mean square.
pub struct Direct;

impl Direct {
    /// Create a new direct correlator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Direct {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrelationStrategy for Direct {
    fn name(&self) -> &str {
        "Direct"
    }

    fn description(&self) -> &str {
        "Sliding dot product averaged over overlapping pairs"
    }

    fn kind(&self) -> MethodKind {
        MethodKind::Direct
    }

    fn correlate(&self, time: &[f64], data: &[f64]) -> AcfResult<CorrelationResult> {
        let m = validate_signal(time.len(), data.len())?;
        let n = output_length(m, MethodKind::Direct);

        let correl = lag_means(data, n);

        tracing::trace!("Direct autocorrelation: {} samples -> {} lags", m, n);

        Ok(CorrelationResult::new(time[..n].to_vec(), correl))
    }
}

/// Mean lagged product for lags `0..n`.
fn lag_means(data: &[f64], n: usize) -> Vec<f64> {
    let m = data.len();

    (0..n)
        .map(|lag| {
            let sum: f64 = data[lag..]
                .iter()
                .zip(data)
                .map(|(later, earlier)| later * earlier)
                .sum();
            sum / (m - lag) as f64
        })
        .collect()
}
