use num_complex::Complex32 as C32;
use crate::core::{Block, WorkReport};

/// DSB envelope detector for a transmitted carrier: `(|y| - 1) / m`.
/// Insensitive to carrier phase and frequency; no delay.
#[derive(Debug, Clone)]
pub struct EnvelopeDetector {
    inv_m: f32,
}

impl EnvelopeDetector {
    pub fn new(modulation_index: f32) -> Self {
        Self { inv_m: modulation_index.recip() }
    }

    #[inline]
    pub fn detect(&mut self, y: C32) -> f32 {
        (y.norm() - 1.0) * self.inv_m
    }
}

impl Block for EnvelopeDetector {
    type In = C32;
    type Out = f32;

    fn process(&mut self, input: &[Self::In], output: &mut [Self::Out]) -> WorkReport {
        let n = input.len().min(output.len());
        for i in 0..n {
            output[i] = self.detect(input[i]);
        }
        WorkReport::one_to_one(n)
    }
}
