use num_complex::Complex32 as C32;
use crate::core::{Block, WorkReport};

/// Root-mean-square of a real slice.
#[inline]
pub fn rms(x: &[f32]) -> f32 {
    if x.is_empty() { return 0.0; }
    let s: f32 = x.iter().map(|v| v*v).sum();
    (s / (x.len() as f32)).sqrt()
}

/// RMS of `z[i] - x[i - delay]` over `i >= skip.max(delay)`.
pub fn rms_error(x: &[f32], z: &[f32], delay: usize, skip: usize) -> f32 {
    let start = skip.max(delay);
    let n = x.len().min(z.len());
    if start >= n { return 0.0; }
    let s: f32 = (start..n).map(|i| { let e = z[i] - x[i - delay]; e * e }).sum();
    (s / (n - start) as f32).sqrt()
}

/// Real tone `amp·sin(2π f k)` at normalized frequency `f` (cycles/sample).
pub fn tone(f: f32, n: usize, amp: f32) -> Vec<f32> {
    (0..n)
        .map(|k| amp * (core::f32::consts::TAU * f * (k as f32)).sin())
        .collect()
}

/// Normalized single-bin DFT power of a complex signal at signed frequency `f`.
/// Negative `f` probes the lower half of the spectrum.
pub fn bin_power(x: &[C32], f: f32) -> f32 {
    let n = x.len().max(1) as f32;
    let w = -core::f32::consts::TAU * f;
    let mut acc = C32::new(0.0, 0.0);
    for (k, &s) in x.iter().enumerate() {
        let (sin, cos) = (w * k as f32).sin_cos();
        acc += s * C32::new(cos, sin);
    }
    acc.norm_sqr() / (n * n)
}

/// Run a `Block` and collect output into a Vec of the same length as input.
#[inline]
pub fn run_block_vec<B: Block>(blk: &mut B, input: &[B::In]) -> (Vec<B::Out>, WorkReport) {
    let mut out = vec![B::Out::default(); input.len()];
    let wr = blk.process(input, &mut out);
    (out, wr)
}
