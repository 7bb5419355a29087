//! FFT primitives shared by the spectral estimators.
//!
//! Thin wrappers over `rustfft` that operate on real input and hand back
//! real output. The inverse transform is scaled by `1 / len` so that a
//! forward/inverse pair is the identity.

use rustfft::{num_complex::Complex, FftPlanner};

/// Output window of [`correlate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelateMode {
    /// Every lag where the inputs overlap, `a.len() + b.len() - 1` values.
    Full,
    /// The centre `a.len()` values of the full output.
    Same,
}

/// Cross-correlate two real sequences using FFT convolution.
///
/// Index `k` of the full output holds `sum_t a[t + lag] * b[t]` with
/// `lag = k - (b.len() - 1)`, so for an autocorrelation the zero lag sits
/// at `a.len() - 1`. In `Same` mode the window starts at
/// `(full_len - a.len()) / 2`.
///
/// Returns an empty vector if either input is empty.
pub fn correlate(a: &[f64], b: &[f64], mode: CorrelateMode) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let full_len = a.len() + b.len() - 1;
    let fft_len = full_len.next_power_of_two();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(fft_len);
    let ifft = planner.plan_fft_inverse(fft_len);

    let mut a_fft = to_complex_padded(a.iter().copied(), fft_len);
    // Correlation is convolution with the time-reversed second input
    let mut b_fft = to_complex_padded(b.iter().rev().copied(), fft_len);

    fft.process(&mut a_fft);
    fft.process(&mut b_fft);

    let mut product: Vec<Complex<f64>> = a_fft
        .iter()
        .zip(b_fft.iter())
        .map(|(x, y)| x * y)
        .collect();

    ifft.process(&mut product);

    let scale = 1.0 / fft_len as f64;
    let full = product.iter().take(full_len).map(|c| c.re * scale);

    match mode {
        CorrelateMode::Full => full.collect(),
        CorrelateMode::Same => {
            let start = (full_len - a.len()) / 2;
            full.skip(start).take(a.len()).collect()
        }
    }
}

/// Cyclically shift so that sample 0 lands at index `len / 2`.
pub fn recenter(data: &[f64]) -> Vec<f64> {
    let m = data.len();
    let mut shifted = vec![0.0; m];
    for (i, &value) in data.iter().enumerate() {
        shifted[(i + m / 2) % m] = value;
    }
    shifted
}

/// Insert `zeros` zeros at index `split`.
pub fn pad_middle(data: &[f64], split: usize, zeros: usize) -> Vec<f64> {
    let split = split.min(data.len());
    let mut padded = Vec::with_capacity(data.len() + zeros);
    padded.extend_from_slice(&data[..split]);
    padded.resize(split + zeros, 0.0);
    padded.extend_from_slice(&data[split..]);
    padded
}

/// Circular autocorrelation by Wiener-Khinchin: `Re(IFFT(|FFT(x)|²))`.
///
/// Index `k` holds `sum_t x[t] * x[(t + k) % len]`. No power-of-two padding
/// is applied since that would change the period of the circular sum.
pub fn circular_autocorrelation(signal: &[f64]) -> Vec<f64> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut spectrum = to_complex_padded(signal.iter().copied(), n);
    fft.process(&mut spectrum);

    let mut power: Vec<Complex<f64>> = spectrum
        .iter()
        .map(|c| Complex::new(c.norm_sqr(), 0.0))
        .collect();

    ifft.process(&mut power);

    let scale = 1.0 / n as f64;
    power.iter().map(|c| c.re * scale).collect()
}

fn to_complex_padded(values: impl Iterator<Item = f64>, len: usize) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> = values.map(|x| Complex::new(x, 0.0)).collect();
    buffer.resize(len, Complex::new(0.0, 0.0));
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len(), "length mismatch");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < tol, "index {}: got {}, expected {}", i, a, e);
        }
    }

    #[test]
    fn correlate_full_matches_hand_computed() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.0, 1.0, 0.5];
        let full = correlate(&a, &b, CorrelateMode::Full);
        assert_close(&full, &[0.5, 2.0, 3.5, 3.0, 0.0], 1e-12);
    }

    #[test]
    fn correlate_same_takes_centre_window() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.0, 1.0, 0.5];
        let same = correlate(&a, &b, CorrelateMode::Same);
        assert_close(&same, &[2.0, 3.5, 3.0], 1e-12);
    }

    #[test]
    fn autocorrelate_full_is_symmetric_with_peak_at_centre() {
        let x = [0.3, -1.2, 2.0, 0.7, -0.4, 1.1];
        let full = correlate(&x, &x, CorrelateMode::Full);
        assert_eq!(full.len(), 2 * x.len() - 1);

        let centre = x.len() - 1;
        let energy: f64 = x.iter().map(|v| v * v).sum();
        assert!((full[centre] - energy).abs() < 1e-10);
        for k in 0..full.len() {
            assert!((full[k] - full[full.len() - 1 - k]).abs() < 1e-10);
        }
    }

    #[test]
    fn correlate_handles_empty_input() {
        assert!(correlate(&[], &[1.0], CorrelateMode::Full).is_empty());
        assert!(correlate(&[1.0], &[], CorrelateMode::Same).is_empty());
    }

    #[test]
    fn recenter_moves_first_sample_to_middle() {
        assert_eq!(recenter(&[0.0, 1.0, 2.0, 3.0]), vec![2.0, 3.0, 0.0, 1.0]);
        assert_eq!(
            recenter(&[0.0, 1.0, 2.0, 3.0, 4.0]),
            vec![3.0, 4.0, 0.0, 1.0, 2.0]
        );
    }

    #[test]
    fn pad_middle_inserts_zero_block() {
        let padded = pad_middle(&[1.0, 2.0, 3.0], 1, 3);
        assert_eq!(padded, vec![1.0, 0.0, 0.0, 0.0, 2.0, 3.0]);
    }

    #[test]
    fn circular_autocorrelation_wraps_around() {
        let x = [1.0, 2.0, 3.0];
        let r = circular_autocorrelation(&x);
        // k=0: 1+4+9, k=1: 1*2 + 2*3 + 3*1, k=2: 1*3 + 2*1 + 3*2
        assert_close(&r, &[14.0, 11.0, 11.0], 1e-10);
    }

    #[test]
    fn circular_autocorrelation_of_padded_signal_is_linear() {
        let x = [0.5, -1.0, 2.0, 1.5];
        let mut padded = x.to_vec();
        padded.resize(2 * x.len(), 0.0);
        let r = circular_autocorrelation(&padded);

        for lag in 0..x.len() {
            let expected: f64 = (0..x.len() - lag).map(|t| x[t] * x[t + lag]).sum();
            assert!(
                (r[lag] - expected).abs() < 1e-10,
                "lag {}: got {}, expected {}",
                lag,
                r[lag],
                expected
            );
        }
    }
}
