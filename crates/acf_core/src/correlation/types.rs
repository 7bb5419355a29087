//! Core types for autocorrelation estimates.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// One-sided autocorrelation of a single channel.
///
/// `time[i]` is the input time sample at lag index `i`, so `time[i] - time[0]`
/// is the lag `i * dt` for a uniform axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Prefix of the input time axis, one entry per lag.
    pub time: Vec<f64>,
    /// Normalized autocorrelation at lags `0, dt, 2dt, ...`.
    pub correl: Vec<f64>,
}

impl CorrelationResult {
    /// Pair a truncated time axis with its correlation values.
    pub fn new(time: Vec<f64>, correl: Vec<f64>) -> Self {
        debug_assert_eq!(time.len(), correl.len());
        Self { time, correl }
    }

    /// Number of lags in the estimate.
    pub fn len(&self) -> usize {
        self.correl.len()
    }

    /// Check if the estimate holds no lags.
    pub fn is_empty(&self) -> bool {
        self.correl.is_empty()
    }

    /// Zero-lag value (the mean square of the signal).
    pub fn zero_lag(&self) -> Option<f64> {
        self.correl.first().copied()
    }

    /// Split into `(time, correl)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.correl)
    }
}

/// Column-wise autocorrelation of a multi-channel signal.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiChannelResult {
    /// Prefix of the input time axis, one entry per lag.
    pub time: Vec<f64>,
    /// Shape `(lags, channels)`; column `c` is the estimate for channel `c`.
    pub correl: Array2<f64>,
}

impl MultiChannelResult {
    /// Number of lags in the estimate.
    pub fn len(&self) -> usize {
        self.correl.nrows()
    }

    /// Check if the estimate holds no lags.
    pub fn is_empty(&self) -> bool {
        self.correl.nrows() == 0
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.correl.ncols()
    }

    /// Extract a single channel as a [`CorrelationResult`].
    pub fn channel(&self, index: usize) -> Option<CorrelationResult> {
        if index >= self.channels() {
            return None;
        }
        Some(CorrelationResult::new(
            self.time.clone(),
            self.correl.column(index).to_vec(),
        ))
    }
}

/// Error types for correlation operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AcfError {
    /// Time axis and signal have different lengths.
    #[error("Invalid input: time axis has {time_len} samples but data has {data_len}")]
    InvalidInput { time_len: usize, data_len: usize },

    /// Fewer than two samples were supplied.
    #[error("Insufficient data: need at least 2 samples, got {0}")]
    InsufficientData(usize),

    /// A multi-channel signal with no columns.
    #[error("Invalid input: multi-channel signal has no channels")]
    NoChannels,
}

/// Type alias for correlation results.
pub type AcfResult<T> = Result<T, AcfError>;

/// Check the shape contract shared by every strategy.
///
/// Returns the signal length `m` on success.
pub fn validate_signal(time_len: usize, data_len: usize) -> AcfResult<usize> {
    if time_len != data_len {
        return Err(AcfError::InvalidInput {
            time_len,
            data_len,
        });
    }
    if data_len < 2 {
        return Err(AcfError::InsufficientData(data_len));
    }
    Ok(data_len)
}
