//! Autocorrelation strategies.
//!
//! This module defines the `CorrelationStrategy` trait and its three
//! implementations. Each strategy is stateless and can be shared across
//! threads; they differ only in how the lag sums are computed.

mod direct;
mod fft_library;
mod zero_padded;

pub use direct::Direct;
pub use fft_library::FftLibrary;
pub use zero_padded::ZeroPaddedFft;

use ndarray::{aview1, Array2, ArrayView2, Axis};

use crate::correlation::length::{output_length, MethodKind};
use crate::correlation::types::{
    validate_signal, AcfError, AcfResult, CorrelationResult, MultiChannelResult,
};
use crate::models::CorrelationMethod;

/// Trait for autocorrelation estimators.
///
/// Implementations take a time axis and a signal of equal length `m >= 2`
/// and return the one-sided autocorrelation at lags `0, dt, 2dt, ...`
/// together with the matching prefix of the time axis.
pub trait CorrelationStrategy: Send + Sync {
    /// Name of this method.
    fn name(&self) -> &str;

    /// Short description of the method.
    fn description(&self) -> &str;

    /// Which length contract this method follows.
    fn kind(&self) -> MethodKind;

    /// Autocorrelate a single channel.
    ///
    /// Fails with `InvalidInput` if the lengths differ and with
    /// `InsufficientData` if fewer than two samples are given.
    fn correlate(&self, time: &[f64], data: &[f64]) -> AcfResult<CorrelationResult>;

    /// Number of lags returned for a signal of `m` samples.
    fn output_len(&self, m: usize) -> usize {
        output_length(m, self.kind())
    }

    /// Autocorrelate every column of `data` independently.
    ///
    /// Rows are samples and columns are channels sharing `time`.
    fn correlate_channels(
        &self,
        time: &[f64],
        data: ArrayView2<'_, f64>,
    ) -> AcfResult<MultiChannelResult> {
        let m = validate_signal(time.len(), data.nrows())?;
        if data.ncols() == 0 {
            return Err(AcfError::NoChannels);
        }

        let n = self.output_len(m);
        let mut correl = Array2::<f64>::zeros((n, data.ncols()));

        for (channel, column) in data.axis_iter(Axis(1)).enumerate() {
            let samples = column.to_vec();
            let result = self.correlate(time, &samples)?;
            correl.column_mut(channel).assign(&aview1(&result.correl));
        }

        Ok(MultiChannelResult {
            time: time[..n].to_vec(),
            correl,
        })
    }
}

/// Factory for creating strategies by name.
pub fn create_method(name: &str) -> Option<Box<dyn CorrelationStrategy>> {
    match name.to_lowercase().as_str() {
        "direct" | "manual" => Some(Box::new(Direct::new())),
        "fft-library" | "library" | "scipy" => Some(Box::new(FftLibrary::new())),
        "fft" | "zero-padded" | "zero-padded-fft" => Some(Box::new(ZeroPaddedFft::new())),
        "circular" | "circular-fft" => Some(Box::new(ZeroPaddedFft::without_padding())),
        _ => None,
    }
}

/// Create a strategy from the configuration enum.
///
/// `zero_padding` only affects [`CorrelationMethod::ZeroPaddedFft`].
pub fn create_from_enum(
    method: CorrelationMethod,
    zero_padding: bool,
) -> Box<dyn CorrelationStrategy> {
    match method {
        CorrelationMethod::Direct => Box::new(Direct::new()),
        CorrelationMethod::FftLibrary => Box::new(FftLibrary::new()),
        CorrelationMethod::ZeroPaddedFft => Box::new(ZeroPaddedFft::with_padding(zero_padding)),
    }
}

/// All mutually consistent strategies (spectral method padded).
pub fn all_methods() -> Vec<Box<dyn CorrelationStrategy>> {
    vec![
        Box::new(Direct::new()),
        Box::new(FftLibrary::new()),
        Box::new(ZeroPaddedFft::new()),
    ]
}

/// Get a list of available method names.
pub fn available_methods() -> Vec<&'static str> {
    vec!["direct", "fft-library", "zero-padded-fft", "circular-fft"]
}
