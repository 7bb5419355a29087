//! Output length contract for each estimator.
//!
//! A symmetric correlation of `m` samples has `m` non-negative lags, but
//! the estimators only report the better-supported lower half. How many
//! lags that is depends on how each method splits its working array.

use serde::{Deserialize, Serialize};

/// Which family of estimator produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    /// O(m²) sliding dot product.
    Direct,
    /// Centered "same" mode FFT correlation, then tapered.
    FftLibrary,
    /// Inverse transform of the power spectrum.
    ZeroPaddedFft,
}

/// Number of lags returned for a signal of `m` samples.
///
/// The library method keeps the centre sample of its centered output, which
/// adds one lag when `m` is odd. The other two always return `m / 2`.
pub fn output_length(m: usize, kind: MethodKind) -> usize {
    match kind {
        MethodKind::Direct | MethodKind::ZeroPaddedFft => m / 2,
        MethodKind::FftLibrary => m / 2 + m % 2,
    }
}

/// Overlap-count taper `m, m-1, ..., m-n+1`.
///
/// Dividing the raw lag sums by this gives the per-pair average used by
/// every padded estimator.
pub(crate) fn overlap_taper(m: usize, n: usize) -> impl Iterator<Item = f64> {
    (0..n).map(move |i| (m - i) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_and_padded_return_half_length() {
        for m in 2..40 {
            assert_eq!(output_length(m, MethodKind::Direct), m / 2);
            assert_eq!(output_length(m, MethodKind::ZeroPaddedFft), m / 2);
        }
    }

    #[test]
    fn library_adds_centre_lag_for_odd_lengths() {
        assert_eq!(output_length(8, MethodKind::FftLibrary), 4);
        assert_eq!(output_length(9, MethodKind::FftLibrary), 5);
        assert_eq!(output_length(2, MethodKind::FftLibrary), 1);
        assert_eq!(output_length(3, MethodKind::FftLibrary), 2);
    }

    #[test]
    fn no_method_exceeds_half_plus_one() {
        let kinds = [
            MethodKind::Direct,
            MethodKind::FftLibrary,
            MethodKind::ZeroPaddedFft,
        ];
        for m in 2..64 {
            for kind in kinds {
                assert!(output_length(m, kind) <= m / 2 + 1);
            }
        }
    }

    #[test]
    fn taper_counts_down_from_m() {
        let taper: Vec<f64> = overlap_taper(9, 5).collect();
        assert_eq!(taper, vec![9.0, 8.0, 7.0, 6.0, 5.0]);
    }
}
