use num_complex::Complex32 as C32;
use crate::core::{Block, WorkReport};
use super::window::{kaiser, kaiser_beta, kaiser_order};

/// Normalized transition width at each band edge of the quadrature filter.
const TRANSITION_WIDTH: f32 = 0.1;

/// Kaiser-windowed Hilbert FIR producing the analytic signal of a real input.
///
/// Taps are `2/(π n)` at odd offsets `n` from the center and zero elsewhere.
/// The length is `2h + 1` with `h` odd, so the outermost taps are non-zero and
/// the group delay is exactly `h` samples. Output is `x[n-h] + j·H{x}[n]`.
///
/// A modulator/demodulator pair runs one section each. Their cascade is the
/// sideband response of [`QuadratureFilter::sideband_response`], a symmetric
/// FIR of length `N = 4h + 1` with delay `(N - 1)/2 = 2h`.
#[derive(Debug, Clone)]
pub struct QuadratureFilter {
    taps: Vec<f32>,
    delay: Vec<f32>,
    idx: usize,
    d: usize,
}

impl QuadratureFilter {

    /// Design for the given stopband attenuation (dB).
    ///
    /// The Kaiser order sizes the end-to-end sideband response; each section
    /// carries a quarter of it.
    pub fn design(stopband_db: f32) -> Self {
        let order = kaiser_order(TRANSITION_WIDTH, stopband_db);
        Self::with_delay((order + 2) / 4, stopband_db)
    }

    /// Build a section with group delay `d` (rounded up to odd, at least 1).
    pub fn with_delay(d: usize, stopband_db: f32) -> Self {
        let d = d.max(1) | 1;
        let ntaps = 2 * d + 1;
        let w = kaiser(ntaps, kaiser_beta(stopband_db));
        let taps = (0..ntaps)
            .map(|k| {
                let n = k as isize - d as isize;
                if n % 2 == 0 {
                    0.0
                } else {
                    2.0 / (core::f32::consts::PI * n as f32) * w[k]
                }
            })
            .collect();
        Self { taps, delay: vec![0.0; ntaps], idx: 0, d }
    }

    /// Group delay of this section in samples.
    #[inline]
    pub fn delay(&self) -> usize { self.d }

    /// Length of the end-to-end sideband response (modulator and demodulator section).
    pub fn response_len(&self) -> usize { 4 * self.d + 1 }

    /// Impulse response of a modulator section followed by the phasing
    /// detector built from the same section: `½(δ[k - 2h] - (h * h)[k])`.
    pub fn sideband_response(&self) -> Vec<f32> {
        let n = self.taps.len();
        let mut c = vec![0.0f32; 2 * n - 1];
        for (i, &a) in self.taps.iter().enumerate() {
            if a == 0.0 { continue; }
            for (j, &b) in self.taps.iter().enumerate() {
                c[i + j] -= 0.5 * a * b;
            }
        }
        c[2 * self.d] += 0.5;
        c
    }

    /// Number of taps.
    #[inline]
    pub fn len(&self) -> usize { self.taps.len() }

    pub fn taps(&self) -> &[f32] { &self.taps }

    pub fn reset(&mut self) {
        self.delay.fill(0.0);
        self.idx = 0;
    }

    /// Push one real sample, return the delayed input and its quadrature component.
    #[inline]
    pub fn process_sample(&mut self, x: f32) -> C32 {
        let len = self.delay.len();
        self.delay[self.idx] = x;
        // odd taps only: even offsets from the center are zero
        let mut acc = 0.0f32;
        let mut t_idx = 0;
        while t_idx < len {
            if self.taps[t_idx] != 0.0 {
                let d_idx = (self.idx + len - t_idx) % len;
                acc += self.delay[d_idx] * self.taps[t_idx];
            }
            t_idx += 1;
        }
        let re = self.delay[(self.idx + len - self.d) % len];
        self.idx = (self.idx + 1) % len;
        C32::new(re, acc)
    }

}

impl Block for QuadratureFilter {
    type In = f32;
    type Out = C32;

    fn process(&mut self, input: &[Self::In], output: &mut [Self::Out]) -> WorkReport {
        let n = input.len().min(output.len());
        for i in 0..n {
            output[i] = self.process_sample(input[i]);
        }
        WorkReport { in_read: n, out_written: n }
    }
}
