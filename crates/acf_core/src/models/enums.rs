//! Core enums used throughout the crate.

use serde::{Deserialize, Serialize};

/// Autocorrelation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CorrelationMethod {
    /// Direct sliding-window sum.
    #[serde(rename = "Direct")]
    Direct,
    /// Centered FFT cross-correlation with overlap taper.
    #[serde(rename = "FFT Library")]
    FftLibrary,
    /// Inverse FFT of the power spectrum.
    #[default]
    #[serde(rename = "Zero-Padded FFT")]
    ZeroPaddedFft,
}

impl CorrelationMethod {
    /// Get the display name for this method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::FftLibrary => "FFT Library",
            Self::ZeroPaddedFft => "Zero-Padded FFT",
        }
    }

    /// Get all available methods as a list.
    pub fn all() -> &'static [CorrelationMethod] {
        &[Self::Direct, Self::FftLibrary, Self::ZeroPaddedFft]
    }

    /// Create from index, falling back to the default.
    pub fn from_index(index: usize) -> Self {
        Self::all().get(index).copied().unwrap_or_default()
    }

    /// Get index of this method.
    pub fn to_index(&self) -> usize {
        Self::all().iter().position(|m| m == self).unwrap_or(0)
    }
}

impl std::fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
